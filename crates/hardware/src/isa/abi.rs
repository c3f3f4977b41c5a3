//! MIPS o32 Application Binary Interface (ABI) register name constants.
//!
//! Defines the register indices used by the system call convention
//! and by boot-time stack setup.

/// Register r0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register r2 (`v0`): system call number in, result out.
pub const REG_V0: usize = 2;
/// Register r3 (`v1`): second result register.
pub const REG_V1: usize = 3;
/// Register r4 (`a0`): first argument.
pub const REG_A0: usize = 4;
/// Register r5 (`a1`): second argument.
pub const REG_A1: usize = 5;
/// Register r6 (`a2`): third argument.
pub const REG_A2: usize = 6;
/// Register r7 (`a3`): fourth argument; system call error flag on return.
pub const REG_A3: usize = 7;
/// Register r29 (`sp`): stack pointer.
pub const REG_SP: usize = 29;
/// Register r31 (`ra`): return address written by the linking jumps and branches.
pub const REG_RA: usize = 31;

/// Conventional names of the 32 general-purpose registers.
pub const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7",
    "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp", "fp", "ra",
];
