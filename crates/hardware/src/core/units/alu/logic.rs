//! ALU logical and comparison operations.
//!
//! Implements bitwise AND, OR, XOR, NOR, signed/unsigned set-less-than, and
//! load-upper-immediate.

use crate::core::pipeline::signals::ExecOp;

/// Bit position of the upper halfword set by `lui`.
const LUI_SHIFT: u32 = 16;

/// Executes a logical or comparison operation.
///
/// # Arguments
///
/// * `op` - The operation to perform (must be a logic/comparison variant).
/// * `a`  - First operand.
/// * `b`  - Second operand; the raw immediate for `lui`.
///
/// # Returns
///
/// The result. Set-less-than yields `1` or `0`. Returns `0` for other opcodes.
pub const fn execute(op: ExecOp, a: u32, b: u32) -> u32 {
    match op {
        ExecOp::And => a & b,
        ExecOp::Or => a | b,
        ExecOp::Xor => a ^ b,
        ExecOp::Nor => !(a | b),
        ExecOp::Slt => ((a as i32) < (b as i32)) as u32,
        ExecOp::Sltu => (a < b) as u32,
        ExecOp::Lui => b << LUI_SHIFT,
        _ => 0,
    }
}
