//! Pipeline control signals and operation types.
//!
//! This module defines the signals that control instruction execution. It performs:
//! 1. **Operation Selection:** The closed set of Execute operations, one per instruction
//!    semantics, dispatched by a single `match` in the ALU and branch units.
//! 2. **Memory Control:** The closed set of Memory-stage operations with their access widths.
//! 3. **Write Control:** Which register bank (GPR, FPR, HI, LO) an instruction commits to.

/// Execute-stage operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecOp {
    /// Addition (`add`, `addu`, `addi`, `addiu`); no overflow trap.
    #[default]
    Add,
    /// Subtraction (`sub`, `subu`); no overflow trap.
    Sub,
    /// Bitwise and (`and`, `andi`).
    And,
    /// Bitwise or (`or`, `ori`).
    Or,
    /// Bitwise xor (`xor`, `xori`).
    Xor,
    /// Bitwise nor.
    Nor,
    /// Set on less than, signed (`slt`, `slti`).
    Slt,
    /// Set on less than, unsigned (`sltu`, `sltiu`).
    Sltu,
    /// Load upper immediate.
    Lui,
    /// Shift left logical by the shift amount field.
    Sll,
    /// Shift right logical by the shift amount field.
    Srl,
    /// Shift right arithmetic by the shift amount field.
    Sra,
    /// Shift left logical by the low 5 bits of `rs`.
    Sllv,
    /// Shift right logical by the low 5 bits of `rs`.
    Srlv,
    /// Shift right arithmetic by the low 5 bits of `rs`.
    Srav,
    /// Signed 32x32 multiply into HI/LO.
    Mult,
    /// Unsigned 32x32 multiply into HI/LO.
    Multu,
    /// Signed division into HI (remainder) and LO (quotient).
    Div,
    /// Unsigned division into HI (remainder) and LO (quotient).
    Divu,
    /// Move from HI.
    Mfhi,
    /// Move from LO.
    Mflo,
    /// Move to HI.
    Mthi,
    /// Move to LO.
    Mtlo,
    /// Branch on equal.
    Beq,
    /// Branch on not equal.
    Bne,
    /// Branch on less than or equal to zero.
    Blez,
    /// Branch on greater than zero.
    Bgtz,
    /// Branch on less than zero; links when the instruction writes `ra`.
    Bltz,
    /// Branch on greater than or equal to zero; links when the instruction writes `ra`.
    Bgez,
    /// Jump (`j`, `jal`).
    Jump,
    /// Jump to register (`jr`, `jalr`).
    JumpReg,
    /// Effective address computation for loads and stores.
    MemAddr,
    /// Move a general register into a floating-point register.
    Mtc1,
    /// Move a floating-point register into a general register.
    Mfc1,
    /// No operation (`break`, syscalls, and illegal instructions).
    Nop,
}

impl ExecOp {
    /// Returns true for the conditional branches counted by the statistics.
    pub const fn is_conditional_branch(self) -> bool {
        matches!(
            self,
            Self::Beq | Self::Bne | Self::Blez | Self::Bgtz | Self::Bltz | Self::Bgez
        )
    }
}

/// Memory-stage operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemOp {
    /// No memory access.
    #[default]
    None,
    /// Load byte, sign-extended.
    Lb,
    /// Load byte, zero-extended.
    Lbu,
    /// Load halfword, sign-extended.
    Lh,
    /// Load halfword, zero-extended.
    Lhu,
    /// Load word.
    Lw,
    /// Load word left (high-order bytes of an unaligned word).
    Lwl,
    /// Load word right (low-order bytes of an unaligned word).
    Lwr,
    /// Load word into a floating-point register.
    Lwc1,
    /// Store byte.
    Sb,
    /// Store halfword.
    Sh,
    /// Store word.
    Sw,
    /// Store word left.
    Swl,
    /// Store word right.
    Swr,
    /// Store word from a floating-point register.
    Swc1,
}

impl MemOp {
    /// Returns true if the operation reads memory into a register.
    pub const fn is_load(self) -> bool {
        matches!(
            self,
            Self::Lb | Self::Lbu | Self::Lh | Self::Lhu | Self::Lw | Self::Lwl | Self::Lwr | Self::Lwc1
        )
    }

    /// Returns true if the operation writes memory.
    pub const fn is_store(self) -> bool {
        matches!(
            self,
            Self::Sb | Self::Sh | Self::Sw | Self::Swl | Self::Swr | Self::Swc1
        )
    }
}

/// Control signals generated during instruction decode.
///
/// The write enables are mutually exclusive between banks: an instruction writes
/// a general register, a floating-point register, or HI and/or LO.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Write the general register `dst`.
    pub reg_write: bool,
    /// Write the floating-point register `dst`.
    pub fp_reg_write: bool,
    /// Write HI.
    pub hi_write: bool,
    /// Write LO.
    pub lo_write: bool,
    /// The instruction accesses memory in the Memory stage.
    pub mem_control: bool,
    /// The first Execute operand is read from the floating-point bank (`mfc1`).
    pub src1_fp: bool,
    /// Store data is read from the floating-point bank (`swc1`).
    pub store_fp: bool,
    /// The instruction is a branch or jump with a delay slot.
    pub is_branch: bool,
    /// The instruction is a system call.
    pub is_syscall: bool,
    /// The instruction could not be decoded.
    pub is_illegal: bool,
    /// Execute-stage operation.
    pub op: ExecOp,
    /// Memory-stage operation.
    pub mem_op: MemOp,
}
