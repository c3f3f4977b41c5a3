//! ALU shift operations.
//!
//! The value shifted is always `rt` (`b`). Fixed shifts use the shift amount
//! field, variable shifts use the low 5 bits of `rs` (`a`).

use crate::core::pipeline::signals::ExecOp;

/// Mask for the variable shift amount.
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op`    - The shift variant.
/// * `a`     - `rs`, the variable shift amount.
/// * `b`     - `rt`, the value to shift.
/// * `shamt` - The shift amount field.
///
/// # Returns
///
/// The shifted value. Returns `0` for non-shift opcodes.
pub const fn execute(op: ExecOp, a: u32, b: u32, shamt: u32) -> u32 {
    let var = a & SHAMT_MASK;
    let fixed = shamt & SHAMT_MASK;
    match op {
        ExecOp::Sll => b << fixed,
        ExecOp::Srl => b >> fixed,
        ExecOp::Sra => ((b as i32) >> fixed) as u32,
        ExecOp::Sllv => b << var,
        ExecOp::Srlv => b >> var,
        ExecOp::Srav => ((b as i32) >> var) as u32,
        _ => 0,
    }
}
