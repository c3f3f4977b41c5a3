//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for decoding MIPS instruction fields
//! from 32-bit instruction encodings. The three formats share field positions:
//!
//! ```text
//! R: | op:6 | rs:5 | rt:5 | rd:5 | sa:5 | funct:6 |
//! I: | op:6 | rs:5 | rt:5 |        imm:16          |
//! J: | op:6 |            target:26                  |
//! ```

/// Bit position of the primary opcode field.
pub const OPCODE_SHIFT: u32 = 26;
/// Bit position of the `rs` field.
pub const RS_SHIFT: u32 = 21;
/// Bit position of the `rt` field.
pub const RT_SHIFT: u32 = 16;
/// Bit position of the `rd` field.
pub const RD_SHIFT: u32 = 11;
/// Bit position of the shift amount field.
pub const SA_SHIFT: u32 = 6;
/// Bit mask for a 5-bit register field.
pub const REG_MASK: u32 = 0x1f;
/// Bit mask for the 6-bit opcode and funct fields.
pub const OP_MASK: u32 = 0x3f;
/// Bit mask for the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xffff;
/// Bit mask for the 26-bit jump target field.
pub const TARGET_MASK: u32 = 0x03ff_ffff;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the primary opcode (bits 26-31).
    fn opcode(&self) -> u32;

    /// Extracts the `rs` register field (bits 21-25).
    ///
    /// For coprocessor 1 instructions this field holds the format selector.
    fn rs(&self) -> usize;

    /// Extracts the `rt` register field (bits 16-20).
    ///
    /// For `REGIMM` instructions this field selects the branch condition.
    fn rt(&self) -> usize;

    /// Extracts the `rd` register field (bits 11-15).
    fn rd(&self) -> usize;

    /// Extracts the shift amount (bits 6-10).
    fn sa(&self) -> u32;

    /// Extracts the function code of `SPECIAL` instructions (bits 0-5).
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate (bits 0-15), zero-extended.
    fn imm(&self) -> u32;

    /// Extracts the 16-bit immediate (bits 0-15), sign-extended.
    fn simm(&self) -> i32;

    /// Extracts the 26-bit jump target (bits 0-25).
    fn target(&self) -> u32;

    /// Extracts the coprocessor format field (same bits as `rs`).
    fn fmt(&self) -> u32;

    /// Extracts the coprocessor `fs` register (same bits as `rd`).
    fn fs(&self) -> usize;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OP_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn sa(&self) -> u32 {
        (self >> SA_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & OP_MASK
    }

    #[inline(always)]
    fn imm(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline(always)]
    fn simm(&self) -> i32 {
        i32::from((self & IMM_MASK) as u16 as i16)
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }

    #[inline(always)]
    fn fmt(&self) -> u32 {
        (self >> RS_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn fs(&self) -> usize {
        self.rd()
    }
}
