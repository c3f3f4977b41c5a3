//! Load/Store Unit Tests.
//!
//! Sub-word access is big-endian: the byte at the lowest address is the most
//! significant. The unaligned pairs `lwl`/`lwr` and `swl`/`swr` must together move a
//! full word at any alignment.

use mipsim_core::core::pipeline::latches::MemWbEntry;
use mipsim_core::core::pipeline::signals::{ControlSignals, MemOp};
use mipsim_core::core::units::lsu::{Lsu, unaligned};
use mipsim_core::soc::{Memory, SparseMemory};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

const BASE: u32 = 0x1000;

fn memory() -> SparseMemory {
    let mut mem = SparseMemory::new();
    mem.write_word(u64::from(BASE), 0x1122_3344);
    mem.write_word(u64::from(BASE + 4), 0x5566_7788);
    mem.write_word(u64::from(BASE + 8), 0x8899_aabb);
    mem
}

fn access(mem: &mut SparseMemory, mem_op: MemOp, mar: u32, src3: u32, subreg: u32) -> u32 {
    let mut entry = MemWbEntry {
        mar,
        src3,
        subreg,
        ctrl: ControlSignals {
            mem_control: true,
            mem_op,
            ..ControlSignals::default()
        },
        ..MemWbEntry::default()
    };
    Lsu::access(mem, &mut entry);
    entry.result_lo
}

// ─── Aligned and sub-word loads ──────────────────────────────────────────────

#[rstest]
#[case(MemOp::Lb, BASE, 0x11)]
#[case(MemOp::Lb, BASE + 8, 0xffff_ff88)]
#[case(MemOp::Lbu, BASE + 8, 0x88)]
#[case(MemOp::Lbu, BASE + 3, 0x44)]
#[case(MemOp::Lh, BASE + 2, 0x3344)]
#[case(MemOp::Lh, BASE + 8, 0xffff_8899)]
#[case(MemOp::Lhu, BASE + 8, 0x8899)]
#[case(MemOp::Lw, BASE + 4, 0x5566_7788)]
#[case(MemOp::Lwc1, BASE, 0x1122_3344)]
fn loads_extend_correctly(#[case] op: MemOp, #[case] addr: u32, #[case] expected: u32) {
    let mut mem = memory();
    assert_eq!(access(&mut mem, op, addr, 0, 0), expected);
}

#[test]
fn word_access_ignores_low_address_bits() {
    let mut mem = memory();
    assert_eq!(access(&mut mem, MemOp::Lw, BASE + 3, 0, 0), 0x1122_3344);
}

// ─── Stores ──────────────────────────────────────────────────────────────────

#[rstest]
#[case(MemOp::Sb, BASE + 1, 0xffff_ffaa, 0x11aa_3344)]
#[case(MemOp::Sh, BASE + 2, 0xffff_bbcc, 0x1122_bbcc)]
#[case(MemOp::Sw, BASE, 0xdead_beef, 0xdead_beef)]
#[case(MemOp::Swc1, BASE, 0x3f80_0000, 0x3f80_0000)]
fn stores_touch_only_their_bytes(
    #[case] op: MemOp,
    #[case] addr: u32,
    #[case] data: u32,
    #[case] word: u32,
) {
    let mut mem = memory();
    let _ = access(&mut mem, op, addr, data, 0);
    assert_eq!(mem.read_word(u64::from(BASE)), word);
    assert_eq!(mem.read_word(u64::from(BASE + 4)), 0x5566_7788);
}

#[test]
fn no_memory_op_leaves_entry_alone() {
    let mut mem = memory();
    let mut entry = MemWbEntry {
        result_lo: 77,
        mar: BASE,
        ..MemWbEntry::default()
    };
    Lsu::access(&mut mem, &mut entry);
    assert_eq!(entry.result_lo, 77);
}

// ─── Unaligned pairs ─────────────────────────────────────────────────────────

#[test]
fn lwl_then_lwr_assembles_an_unaligned_word() {
    let mut mem = memory();
    let left = access(&mut mem, MemOp::Lwl, BASE + 1, 0, 0);
    let word = access(&mut mem, MemOp::Lwr, BASE + 4, 0, left);
    assert_eq!(word, 0x2233_4455);
}

#[rstest]
#[case(0, 0x1122_3344)]
#[case(1, 0x2233_4455)]
#[case(2, 0x3344_5566)]
#[case(3, 0x4455_6677)]
fn unaligned_load_in_either_order(#[case] offset: u32, #[case] expected: u32) {
    let addr = BASE + offset;

    let mut mem = memory();
    let left = access(&mut mem, MemOp::Lwl, addr, 0, 0xdead_beef);
    assert_eq!(access(&mut mem, MemOp::Lwr, addr + 3, 0, left), expected);

    let right = access(&mut mem, MemOp::Lwr, addr + 3, 0, 0xdead_beef);
    assert_eq!(access(&mut mem, MemOp::Lwl, addr, 0, right), expected);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(3)]
fn unaligned_store_pair_writes_exactly_four_bytes(#[case] offset: u32) {
    let addr = BASE + offset;
    let mut mem = memory();
    let _ = access(&mut mem, MemOp::Swl, addr, 0xa1b2_c3d4, 0);
    let _ = access(&mut mem, MemOp::Swr, addr + 3, 0xa1b2_c3d4, 0);

    let original = memory();
    for i in 0..12 {
        let a = u64::from(BASE + i);
        let expected = if (offset..offset + 4).contains(&i) {
            0xa1b2_c3d4u32.to_be_bytes()[(i - offset) as usize]
        } else {
            original.read_byte(a)
        };
        assert_eq!(mem.read_byte(a), expected, "byte {i} at offset {offset}");
    }
}

#[test]
fn merge_helpers_at_aligned_addresses() {
    assert_eq!(unaligned::merge_lwl(0xaabb_ccdd, 0, 0x1122_3344), 0xaabb_ccdd);
    assert_eq!(unaligned::merge_lwr(0xaabb_ccdd, 3, 0x1122_3344), 0xaabb_ccdd);
    assert_eq!(unaligned::merge_lwr(0xaabb_ccdd, 0, 0x1122_3344), 0x1122_33aa);
    assert_eq!(unaligned::merge_swl(0xaabb_ccdd, 3, 0x1122_3344), 0xaabb_cc11);
    assert_eq!(unaligned::merge_swr(0xaabb_ccdd, 0, 0x1122_3344), 0x44bb_ccdd);
}

proptest! {
    #[test]
    fn store_then_load_round_trips(offset in 0u32..64, value in any::<u32>()) {
        let mut mem = SparseMemory::new();
        let addr = BASE + offset;

        let _ = access(&mut mem, MemOp::Sb, addr, value, 0);
        prop_assert_eq!(access(&mut mem, MemOp::Lbu, addr, 0, 0), value & 0xff);

        let half = addr & !1;
        let _ = access(&mut mem, MemOp::Sh, half, value, 0);
        prop_assert_eq!(access(&mut mem, MemOp::Lhu, half, 0, 0), value & 0xffff);

        let word = addr & !3;
        let _ = access(&mut mem, MemOp::Sw, word, value, 0);
        prop_assert_eq!(access(&mut mem, MemOp::Lw, word, 0, 0), value);
    }

    #[test]
    fn unaligned_pair_round_trips(offset in 0u32..8, value in any::<u32>(), junk in any::<u32>()) {
        let mut mem = SparseMemory::new();
        let addr = BASE + offset;
        let _ = access(&mut mem, MemOp::Swl, addr, value, 0);
        let _ = access(&mut mem, MemOp::Swr, addr + 3, value, 0);

        let left = access(&mut mem, MemOp::Lwl, addr, 0, junk);
        prop_assert_eq!(access(&mut mem, MemOp::Lwr, addr + 3, 0, left), value);
    }
}
