//! Branch Resolution Unit (BRU).
//!
//! Branches and jumps are resolved in Execute. There is no prediction: the instruction
//! after a branch (the delay slot) is always fetched and always executes, and a taken
//! branch redirects the program counter in the same cycle it is resolved.
//!
//! Target arithmetic:
//! - Branches: `pc + 4 + (sext(imm16) << 2)`.
//! - Jumps: `((pc + 4) & 0xf000_0000) | (target26 << 2)`.
//! - Register jumps: the value of `rs`.

use crate::common::constants::{INSTRUCTION_SIZE, JUMP_REGION_MASK};
use crate::core::pipeline::signals::ExecOp;

/// Distance from a linking instruction to its return address (skips the delay slot).
pub const LINK_OFFSET: u32 = 2 * INSTRUCTION_SIZE;

/// Computes the target of a PC-relative branch.
///
/// # Arguments
///
/// * `pc` - Address of the branch instruction.
/// * `offset` - Sign-extended 16-bit word offset.
pub const fn branch_target(pc: u32, offset: i32) -> u32 {
    pc.wrapping_add(INSTRUCTION_SIZE)
        .wrapping_add((offset << 2) as u32)
}

/// Computes the target of a `j`/`jal` instruction.
///
/// # Arguments
///
/// * `pc` - Address of the jump instruction.
/// * `target` - 26-bit word target field.
pub const fn jump_target(pc: u32, target: u32) -> u32 {
    (pc.wrapping_add(INSTRUCTION_SIZE) & JUMP_REGION_MASK) | (target << 2)
}

/// Returns the address a linking branch or jump writes to its destination register.
pub const fn link_address(pc: u32) -> u32 {
    pc.wrapping_add(LINK_OFFSET)
}

/// Evaluates the branch condition of a control-flow operation.
///
/// # Arguments
///
/// * `op` - The control-flow operation.
/// * `a` - Value of `rs`.
/// * `b` - Value of `rt`.
///
/// # Returns
///
/// `true` if the branch is taken. Jumps are always taken; other operations never are.
pub const fn is_taken(op: ExecOp, a: u32, b: u32) -> bool {
    let sa = a as i32;
    match op {
        ExecOp::Beq => a == b,
        ExecOp::Bne => a != b,
        ExecOp::Blez => sa <= 0,
        ExecOp::Bgtz => sa > 0,
        ExecOp::Bltz => sa < 0,
        ExecOp::Bgez => sa >= 0,
        ExecOp::Jump | ExecOp::JumpReg => true,
        _ => false,
    }
}
