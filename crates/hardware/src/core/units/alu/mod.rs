//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage.
//! It handles 32-bit arithmetic, logical operations and shifts, the
//! HI/LO producing multiply/divide operations, and the register moves
//! between the general, HI/LO and floating-point banks.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mult, Multu, Div, Divu
//! - [`logic`]:      And, Or, Xor, Nor, Slt, Sltu, Lui
//! - [`shifts`]:     Sll, Srl, Sra and their variable forms

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift operations.
pub mod shifts;

use crate::core::pipeline::signals::ExecOp;

/// Result of an ALU operation.
///
/// `lo` carries the general-register result (and LO for multiply/divide),
/// `hi` carries the value written to HI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluResult {
    /// Low result word.
    pub lo: u32,
    /// High result word.
    pub hi: u32,
}

impl AluResult {
    const fn lo(lo: u32) -> Self {
        Self { lo, hi: 0 }
    }
}

/// Operands of an ALU operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluInputs {
    /// First operand (`rs`, or the floating-point source for `mfc1`).
    pub a: u32,
    /// Second operand (`rt`, or the extended immediate).
    pub b: u32,
    /// Shift amount field.
    pub shamt: u32,
    /// Current HI.
    pub hi: u32,
    /// Current LO.
    pub lo: u32,
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// Control-flow and memory operations produce no ALU result here; the
    /// Execute stage resolves them through the branch unit and the address
    /// computation.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform.
    /// * `inputs` - Operand values.
    ///
    /// # Returns
    ///
    /// The low and high result words.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::{Alu, AluInputs};
    /// use mipsim_core::core::pipeline::signals::ExecOp;
    ///
    /// let sum = Alu::execute(ExecOp::Add, AluInputs { a: 42, b: 8, ..Default::default() });
    /// assert_eq!(sum.lo, 50);
    ///
    /// let prod = Alu::execute(ExecOp::Mult, AluInputs { a: u32::MAX, b: u32::MAX, ..Default::default() });
    /// assert_eq!((prod.hi, prod.lo), (0, 1));
    /// ```
    pub fn execute(op: ExecOp, inputs: AluInputs) -> AluResult {
        let AluInputs { a, b, shamt, hi, lo } = inputs;
        match op {
            ExecOp::Add | ExecOp::Sub => AluResult::lo(arithmetic::add_sub(op, a, b)),
            ExecOp::Mult => {
                let (hi, lo) = arithmetic::mult(a, b);
                AluResult { lo, hi }
            }
            ExecOp::Multu => {
                let (hi, lo) = arithmetic::multu(a, b);
                AluResult { lo, hi }
            }
            ExecOp::Div => {
                let (hi, lo) = arithmetic::div(a, b);
                AluResult { lo, hi }
            }
            ExecOp::Divu => {
                let (hi, lo) = arithmetic::divu(a, b);
                AluResult { lo, hi }
            }
            ExecOp::And
            | ExecOp::Or
            | ExecOp::Xor
            | ExecOp::Nor
            | ExecOp::Slt
            | ExecOp::Sltu
            | ExecOp::Lui => AluResult::lo(logic::execute(op, a, b)),
            ExecOp::Sll
            | ExecOp::Srl
            | ExecOp::Sra
            | ExecOp::Sllv
            | ExecOp::Srlv
            | ExecOp::Srav => AluResult::lo(shifts::execute(op, a, b, shamt)),
            ExecOp::Mfhi => AluResult::lo(hi),
            ExecOp::Mflo => AluResult::lo(lo),
            ExecOp::Mthi => AluResult { lo: 0, hi: a },
            ExecOp::Mtlo | ExecOp::Mtc1 | ExecOp::Mfc1 => AluResult::lo(a),
            ExecOp::Beq
            | ExecOp::Bne
            | ExecOp::Blez
            | ExecOp::Bgtz
            | ExecOp::Bltz
            | ExecOp::Bgez
            | ExecOp::Jump
            | ExecOp::JumpReg
            | ExecOp::MemAddr
            | ExecOp::Nop => AluResult::default(),
        }
    }
}
