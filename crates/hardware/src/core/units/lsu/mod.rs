//! Load/Store Unit (LSU).
//!
//! This module performs the Memory-stage access of a load or store against the attached
//! [`Memory`]. It includes:
//! - [`unaligned`]: The `lwl`/`lwr`/`swl`/`swr` merge logic.
//!
//! Byte and halfword loads sign- or zero-extend into the full register; word accesses ignore
//! the low two address bits.

/// Unaligned word merge helpers.
pub mod unaligned;

use crate::core::pipeline::latches::MemWbEntry;
use crate::core::pipeline::signals::MemOp;
use crate::soc::Memory;

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Performs the memory access of `entry`.
    ///
    /// Loads write the loaded (and for `lwl`/`lwr`, merged) value into `entry.result_lo`;
    /// stores write `entry.src3` to memory. Entries without a memory operation are left
    /// unchanged.
    ///
    /// # Arguments
    ///
    /// * `mem` - The memory port.
    /// * `entry` - The instruction in the Memory stage.
    pub fn access(mem: &mut dyn Memory, entry: &mut MemWbEntry) {
        let mar = entry.mar;
        let addr = u64::from(mar);
        let data = entry.src3;

        match entry.ctrl.mem_op {
            MemOp::None => {}
            MemOp::Lb => entry.result_lo = i32::from(mem.read_byte(addr) as i8) as u32,
            MemOp::Lbu => entry.result_lo = u32::from(mem.read_byte(addr)),
            MemOp::Lh => entry.result_lo = i32::from(mem.read_half(addr) as i16) as u32,
            MemOp::Lhu => entry.result_lo = u32::from(mem.read_half(addr)),
            MemOp::Lw | MemOp::Lwc1 => entry.result_lo = mem.read_word(addr),
            MemOp::Lwl => {
                entry.result_lo = unaligned::merge_lwl(mem.read_word(addr), mar, entry.subreg);
            }
            MemOp::Lwr => {
                entry.result_lo = unaligned::merge_lwr(mem.read_word(addr), mar, entry.subreg);
            }
            MemOp::Sb => mem.write_byte(addr, data as u8),
            MemOp::Sh => mem.write_half(addr, data as u16),
            MemOp::Sw | MemOp::Swc1 => mem.write_word(addr, data),
            MemOp::Swl => {
                let word = mem.read_word(addr);
                mem.write_word(addr, unaligned::merge_swl(word, mar, data));
            }
            MemOp::Swr => {
                let word = mem.read_word(addr);
                mem.write_word(addr, unaligned::merge_swr(word, mar, data));
            }
        }
    }
}
