//! Unified Register File.
//!
//! This module provides the `RegisterFile` struct, which acts as a unified interface for
//! accessing both General Purpose Registers (GPRs) and Floating-Point Registers (FPRs).
//! The pipeline holds two of them: the architectural file committed by Writeback and the
//! shadow file updated eagerly by Execute and Memory.

use std::fmt::Write;

use crate::common::constants::FPR_PAIRS;
use crate::core::arch::fpr::Fpr;
use crate::core::arch::gpr::Gpr;

/// Unified register file containing both general-purpose and floating-point registers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
    fpr: Fpr,
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a value from the extended general register space.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31), or `HI_REG` / `LO_REG`. Register `r0` always returns 0.
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register.
    pub fn read(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    /// Writes a value to the extended general register space.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31), or `HI_REG` / `LO_REG`. Writes to `r0` are ignored.
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        self.gpr.write(idx, val);
    }

    /// Returns the HI register.
    pub const fn hi(&self) -> u32 {
        self.gpr.hi()
    }

    /// Returns the LO register.
    pub const fn lo(&self) -> u32 {
        self.gpr.lo()
    }

    /// Reads single floating-point register `reg` (0-31) as raw bits.
    pub fn read_f(&self, reg: usize) -> u32 {
        self.fpr.read(reg)
    }

    /// Writes single floating-point register `reg` (0-31) with raw bits.
    pub fn write_f(&mut self, reg: usize, val: u32) {
        self.fpr.write(reg, val);
    }

    /// Reads floating-point pair `pair` (0-15) as a double.
    pub fn read_double(&self, pair: usize) -> f64 {
        self.fpr.read_double(pair)
    }

    /// Formats the register state for diagnostics: integer registers and HI/LO, then
    /// each floating-point pair as raw bits and as a double.
    pub fn dump(&self) -> String {
        let mut out = self.gpr.dump();
        for pair in 0..FPR_PAIRS {
            let (even, odd) = (2 * pair, 2 * pair + 1);
            let _ = writeln!(
                out,
                "f{even:<2}:f{odd:<2} {:#010x} {:#010x} ({})",
                self.read_f(even),
                self.read_f(odd),
                self.read_double(pair)
            );
        }
        out
    }
}
