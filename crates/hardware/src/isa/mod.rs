//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains opcode tables, instruction field extraction, ABI register names,
//! and the disassembler for the modeled MIPS I subset: integer arithmetic,
//! logic and shifts, multiply/divide with HI/LO, branches and jumps with a
//! delay slot, byte/half/word and unaligned loads and stores, and the
//! coprocessor 1 word moves.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Primary opcode, function code, and format constants.
pub mod opcodes;
