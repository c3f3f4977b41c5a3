//! MIPS architectural state components.
//!
//! This module contains the register files of the simulated machine.
//! It includes the following modules:
//! 1. **FPRs:** Paired coprocessor 1 registers addressed by lane.
//! 2. **GPRs:** Integer registers plus the HI/LO pair.

/// Floating-Point Register file implementation.
pub mod fpr;

/// General-Purpose Register file implementation.
pub mod gpr;
