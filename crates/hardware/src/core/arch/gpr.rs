//! MIPS General-Purpose Register File.
//!
//! This module implements the integer register file together with the HI/LO pair. It performs:
//! 1. **Storage:** Maintains 32 integer registers (`r0`-`r31`) plus HI and LO.
//! 2. **Invariant Enforcement:** Ensures that register `r0` is hardwired to zero.
//! 3. **Extended Indexing:** Exposes HI/LO as slots 32/33 so hazard bookkeeping can treat
//!    them like ordinary registers.

use crate::common::constants::{GPR_COUNT, HI_REG, LO_REG};

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers and the HI/LO multiply/divide result registers.
/// Register `r0` is hardwired to zero and cannot be modified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; GPR_COUNT],
    hi: u32,
    lo: u32,
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register from the extended register space.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31), or `HI_REG` / `LO_REG`.
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register. Register `r0` always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        match idx {
            0 => 0,
            HI_REG => self.hi,
            LO_REG => self.lo,
            _ => self.regs[idx],
        }
    }

    /// Writes a register in the extended register space.
    ///
    /// Writes to `r0` are discarded.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31), or `HI_REG` / `LO_REG`.
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        match idx {
            0 => {}
            HI_REG => self.hi = val,
            LO_REG => self.lo = val,
            _ => self.regs[idx] = val,
        }
    }

    /// Returns the HI register.
    pub const fn hi(&self) -> u32 {
        self.hi
    }

    /// Returns the LO register.
    pub const fn lo(&self) -> u32 {
        self.lo
    }

    /// Formats the register contents four per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for i in (0..GPR_COUNT).step_by(4) {
            out.push_str(&format!(
                "r{:<2}={:#010x} r{:<2}={:#010x} r{:<2}={:#010x} r{:<2}={:#010x}\n",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1],
                i + 2,
                self.regs[i + 2],
                i + 3,
                self.regs[i + 3]
            ));
        }
        out.push_str(&format!("hi ={:#010x} lo ={:#010x}\n", self.hi, self.lo));
        out
    }
}
