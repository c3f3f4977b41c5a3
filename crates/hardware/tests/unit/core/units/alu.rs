//! ALU Tests.
//!
//! Fixed vectors for every operation class, and property checks of the
//! partial-product multipliers against host 64-bit arithmetic.

use mipsim_core::core::pipeline::signals::ExecOp;
use mipsim_core::core::units::alu::{Alu, AluInputs, arithmetic};
use proptest::prelude::*;
use rstest::rstest;

fn exec(op: ExecOp, a: u32, b: u32) -> u32 {
    Alu::execute(
        op,
        AluInputs {
            a,
            b,
            ..AluInputs::default()
        },
    )
    .lo
}

// ─── Add / Sub ───────────────────────────────────────────────────────────────

#[rstest]
#[case(ExecOp::Add, 1, 2, 3)]
#[case(ExecOp::Add, u32::MAX, 1, 0)]
#[case(ExecOp::Add, 0x7fff_ffff, 1, 0x8000_0000)]
#[case(ExecOp::Sub, 5, 7, (-2i32) as u32)]
#[case(ExecOp::Sub, 0x8000_0000, 1, 0x7fff_ffff)]
fn add_sub_wrap_without_trapping(#[case] op: ExecOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(exec(op, a, b), expected);
}

// ─── Logic ───────────────────────────────────────────────────────────────────

#[rstest]
#[case(ExecOp::And, 0xff00_ff00, 0x0ff0_0ff0, 0x0f00_0f00)]
#[case(ExecOp::Or, 0xff00_0000, 0x0000_00ff, 0xff00_00ff)]
#[case(ExecOp::Xor, 0xffff_0000, 0xff00_ff00, 0x00ff_ff00)]
#[case(ExecOp::Nor, 0xffff_0000, 0x0000_00ff, 0x0000_ff00)]
#[case(ExecOp::Slt, (-1i32) as u32, 1, 1)]
#[case(ExecOp::Slt, 1, (-1i32) as u32, 0)]
#[case(ExecOp::Sltu, (-1i32) as u32, 1, 0)]
#[case(ExecOp::Sltu, 1, (-1i32) as u32, 1)]
#[case(ExecOp::Lui, 0, 0x1234, 0x1234_0000)]
fn logic(#[case] op: ExecOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(exec(op, a, b), expected);
}

// ─── Shifts ──────────────────────────────────────────────────────────────────

#[rstest]
#[case(ExecOp::Sll, 0, 0x0000_0001, 31, 0x8000_0000)]
#[case(ExecOp::Srl, 0, 0x8000_0000, 31, 1)]
#[case(ExecOp::Sra, 0, 0x8000_0000, 31, u32::MAX)]
#[case(ExecOp::Sra, 0, 0x4000_0000, 30, 1)]
#[case(ExecOp::Sllv, 33, 1, 0, 2)]
#[case(ExecOp::Srlv, 4, 0xf000_0000, 0, 0x0f00_0000)]
#[case(ExecOp::Srav, 4, 0xf000_0000, 0, 0xff00_0000)]
fn shifts(#[case] op: ExecOp, #[case] a: u32, #[case] b: u32, #[case] shamt: u32, #[case] expected: u32) {
    let r = Alu::execute(
        op,
        AluInputs {
            a,
            b,
            shamt,
            ..AluInputs::default()
        },
    );
    assert_eq!(r.lo, expected);
}

// ─── Multiply / Divide ───────────────────────────────────────────────────────

#[test]
fn mult_minus_one_squared() {
    assert_eq!(arithmetic::mult(u32::MAX, u32::MAX), (0, 1));
}

#[test]
fn multu_max_squared() {
    assert_eq!(
        arithmetic::multu(u32::MAX, u32::MAX),
        (0xffff_fffe, 0x0000_0001)
    );
}

#[test]
fn mult_mixed_signs() {
    let (hi, lo) = arithmetic::mult((-2i32) as u32, 3);
    assert_eq!(((u64::from(hi) << 32) | u64::from(lo)) as i64, -6);
}

#[test]
fn mult_min_times_min() {
    let product = (i64::from(i32::MIN) * i64::from(i32::MIN)) as u64;
    assert_eq!(
        arithmetic::mult(0x8000_0000, 0x8000_0000),
        ((product >> 32) as u32, product as u32)
    );
}

#[rstest]
#[case(7, 2, 1, 3)]
#[case((-7i32) as u32, 2, (-1i32) as u32, (-3i32) as u32)]
#[case(7, (-2i32) as u32, 1, (-3i32) as u32)]
#[case(0x8000_0000, u32::MAX, 0, 0x8000_0000)]
fn div_truncates_toward_zero(#[case] a: u32, #[case] b: u32, #[case] hi: u32, #[case] lo: u32) {
    assert_eq!(arithmetic::div(a, b), (hi, lo));
}

#[test]
fn divu_is_unsigned() {
    assert_eq!(arithmetic::divu(u32::MAX, 2), (1, 0x7fff_ffff));
}

#[rstest]
#[case(ExecOp::Div)]
#[case(ExecOp::Divu)]
fn division_by_zero_saturates(#[case] op: ExecOp) {
    let r = Alu::execute(
        op,
        AluInputs {
            a: 1234,
            b: 0,
            ..AluInputs::default()
        },
    );
    assert_eq!((r.hi, r.lo), (0x7fff_ffff, 0x7fff_ffff));
}

// ─── HI/LO and coprocessor moves ─────────────────────────────────────────────

#[test]
fn hi_lo_moves() {
    let inputs = AluInputs {
        a: 9,
        hi: 0x11,
        lo: 0x22,
        ..AluInputs::default()
    };
    assert_eq!(Alu::execute(ExecOp::Mfhi, inputs).lo, 0x11);
    assert_eq!(Alu::execute(ExecOp::Mflo, inputs).lo, 0x22);
    assert_eq!(Alu::execute(ExecOp::Mthi, inputs).hi, 9);
    assert_eq!(Alu::execute(ExecOp::Mtlo, inputs).lo, 9);
    assert_eq!(Alu::execute(ExecOp::Mtc1, inputs).lo, 9);
    assert_eq!(Alu::execute(ExecOp::Mfc1, inputs).lo, 9);
}

#[test]
fn control_flow_produces_no_result() {
    let inputs = AluInputs {
        a: 1,
        b: 2,
        ..AluInputs::default()
    };
    for op in [ExecOp::Beq, ExecOp::Jump, ExecOp::JumpReg, ExecOp::MemAddr, ExecOp::Nop] {
        let r = Alu::execute(op, inputs);
        assert_eq!((r.hi, r.lo), (0, 0), "{op:?}");
    }
}

proptest! {
    #[test]
    fn multu_matches_host(a in any::<u32>(), b in any::<u32>()) {
        let product = u64::from(a) * u64::from(b);
        prop_assert_eq!(arithmetic::multu(a, b), ((product >> 32) as u32, product as u32));
    }

    #[test]
    fn mult_matches_host(a in any::<i32>(), b in any::<i32>()) {
        let product = (i64::from(a) * i64::from(b)) as u64;
        prop_assert_eq!(
            arithmetic::mult(a as u32, b as u32),
            ((product >> 32) as u32, product as u32)
        );
    }

    #[test]
    fn divu_matches_host(a in any::<u32>(), b in 1u32..) {
        prop_assert_eq!(arithmetic::divu(a, b), (a % b, a / b));
    }
}
