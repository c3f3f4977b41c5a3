//! MIPS opcode and function code constants.
//!
//! Primary opcodes select the instruction class; `SPECIAL`, `REGIMM` and `COP1`
//! are further decoded by the funct, rt and fmt fields respectively.

// Primary opcodes (bits 26-31).

/// Register-register operations, decoded by `funct`.
pub const OP_SPECIAL: u32 = 0x00;
/// Branches comparing against zero, decoded by `rt`.
pub const OP_REGIMM: u32 = 0x01;
/// Jump.
pub const OP_J: u32 = 0x02;
/// Jump and link.
pub const OP_JAL: u32 = 0x03;
/// Branch on equal.
pub const OP_BEQ: u32 = 0x04;
/// Branch on not equal.
pub const OP_BNE: u32 = 0x05;
/// Branch on less than or equal to zero.
pub const OP_BLEZ: u32 = 0x06;
/// Branch on greater than zero.
pub const OP_BGTZ: u32 = 0x07;
/// Add immediate.
pub const OP_ADDI: u32 = 0x08;
/// Add immediate unsigned (no overflow trap).
pub const OP_ADDIU: u32 = 0x09;
/// Set on less than immediate.
pub const OP_SLTI: u32 = 0x0a;
/// Set on less than immediate unsigned.
pub const OP_SLTIU: u32 = 0x0b;
/// And immediate.
pub const OP_ANDI: u32 = 0x0c;
/// Or immediate.
pub const OP_ORI: u32 = 0x0d;
/// Xor immediate.
pub const OP_XORI: u32 = 0x0e;
/// Load upper immediate.
pub const OP_LUI: u32 = 0x0f;
/// Coprocessor 1 operations, decoded by `fmt`.
pub const OP_COP1: u32 = 0x11;
/// Load byte.
pub const OP_LB: u32 = 0x20;
/// Load halfword.
pub const OP_LH: u32 = 0x21;
/// Load word left.
pub const OP_LWL: u32 = 0x22;
/// Load word.
pub const OP_LW: u32 = 0x23;
/// Load byte unsigned.
pub const OP_LBU: u32 = 0x24;
/// Load halfword unsigned.
pub const OP_LHU: u32 = 0x25;
/// Load word right.
pub const OP_LWR: u32 = 0x26;
/// Store byte.
pub const OP_SB: u32 = 0x28;
/// Store halfword.
pub const OP_SH: u32 = 0x29;
/// Store word left.
pub const OP_SWL: u32 = 0x2a;
/// Store word.
pub const OP_SW: u32 = 0x2b;
/// Store word right.
pub const OP_SWR: u32 = 0x2e;
/// Load word to coprocessor 1.
pub const OP_LWC1: u32 = 0x31;
/// Store word from coprocessor 1.
pub const OP_SWC1: u32 = 0x39;

// SPECIAL function codes (bits 0-5).

/// Shift left logical.
pub const FUNCT_SLL: u32 = 0x00;
/// Shift right logical.
pub const FUNCT_SRL: u32 = 0x02;
/// Shift right arithmetic.
pub const FUNCT_SRA: u32 = 0x03;
/// Shift left logical variable.
pub const FUNCT_SLLV: u32 = 0x04;
/// Shift right logical variable.
pub const FUNCT_SRLV: u32 = 0x06;
/// Shift right arithmetic variable.
pub const FUNCT_SRAV: u32 = 0x07;
/// Jump register.
pub const FUNCT_JR: u32 = 0x08;
/// Jump and link register.
pub const FUNCT_JALR: u32 = 0x09;
/// System call.
pub const FUNCT_SYSCALL: u32 = 0x0c;
/// Breakpoint.
pub const FUNCT_BREAK: u32 = 0x0d;
/// Move from HI.
pub const FUNCT_MFHI: u32 = 0x10;
/// Move to HI.
pub const FUNCT_MTHI: u32 = 0x11;
/// Move from LO.
pub const FUNCT_MFLO: u32 = 0x12;
/// Move to LO.
pub const FUNCT_MTLO: u32 = 0x13;
/// Multiply.
pub const FUNCT_MULT: u32 = 0x18;
/// Multiply unsigned.
pub const FUNCT_MULTU: u32 = 0x19;
/// Divide.
pub const FUNCT_DIV: u32 = 0x1a;
/// Divide unsigned.
pub const FUNCT_DIVU: u32 = 0x1b;
/// Add.
pub const FUNCT_ADD: u32 = 0x20;
/// Add unsigned.
pub const FUNCT_ADDU: u32 = 0x21;
/// Subtract.
pub const FUNCT_SUB: u32 = 0x22;
/// Subtract unsigned.
pub const FUNCT_SUBU: u32 = 0x23;
/// Bitwise and.
pub const FUNCT_AND: u32 = 0x24;
/// Bitwise or.
pub const FUNCT_OR: u32 = 0x25;
/// Bitwise xor.
pub const FUNCT_XOR: u32 = 0x26;
/// Bitwise nor.
pub const FUNCT_NOR: u32 = 0x27;
/// Set on less than.
pub const FUNCT_SLT: u32 = 0x2a;
/// Set on less than unsigned.
pub const FUNCT_SLTU: u32 = 0x2b;

// REGIMM conditions (rt field).

/// Branch on less than zero.
pub const RT_BLTZ: usize = 0x00;
/// Branch on greater than or equal to zero.
pub const RT_BGEZ: usize = 0x01;
/// Branch on less than zero and link.
pub const RT_BLTZAL: usize = 0x10;
/// Branch on greater than or equal to zero and link.
pub const RT_BGEZAL: usize = 0x11;

// COP1 formats (rs field).

/// Move word from coprocessor 1.
pub const FMT_MFC1: u32 = 0x00;
/// Move word to coprocessor 1.
pub const FMT_MTC1: u32 = 0x04;
