//! Global Simulator Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Register Constants:** Register counts and the HI/LO slots in the busy-counter space.
//! 2. **Instruction Constants:** Instruction width and the canonical no-op encoding.
//! 3. **Timing Constants:** Result latencies claimed by Decode for the hazard counters.
//! 4. **Memory Constants:** Doubleword container size and page geometry of sparse memory.

/// Number of architectural general-purpose registers.
pub const GPR_COUNT: usize = 32;

/// Number of floating-point register pairs (32 single registers, two per pair).
pub const FPR_PAIRS: usize = 16;

/// Register slot of HI in the extended general register space.
pub const HI_REG: usize = 32;

/// Register slot of LO in the extended general register space.
pub const LO_REG: usize = 33;

/// Number of slots in the extended general register space (GPRs plus HI/LO).
pub const GPR_SLOTS: usize = 34;

/// Size of an instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Encoding of `sll r0, r0, 0`, the canonical pipeline bubble.
pub const NOP: u32 = 0;

/// Cycles before an ALU result is visible to a dependent instruction.
pub const ALU_RESULT_LATENCY: u32 = 2;

/// Cycles before a loaded value is visible to a dependent instruction.
pub const LOAD_RESULT_LATENCY: u32 = 3;

/// Busy cycles a source read at Execute tolerates.
pub const EXECUTE_SOURCE_SLACK: u32 = 1;

/// Busy cycles a source read at Memory (store data, merge operand) tolerates.
pub const MEMORY_SOURCE_SLACK: u32 = 2;

/// Size of the aligned memory container in bytes.
pub const DWORD_SIZE: u64 = 8;

/// Mask that aligns an address down to its doubleword container.
pub const DWORD_ALIGN_MASK: u64 = !(DWORD_SIZE - 1);

/// Page size of the sparse backing store in bytes (4 KiB).
pub const PAGE_SIZE: u64 = 4096;

/// Number of bits to shift to convert between bytes and pages.
pub const PAGE_SHIFT: u64 = 12;

/// Mask for extracting the page offset from an address.
pub const PAGE_OFFSET_MASK: u64 = PAGE_SIZE - 1;

/// Mask applied to `pc + 4` before splicing a jump target.
pub const JUMP_REGION_MASK: u32 = 0xf000_0000;

/// Value written to HI and LO by a division with a zero divisor.
pub const DIV_BY_ZERO_RESULT: u32 = 0x7fff_ffff;
