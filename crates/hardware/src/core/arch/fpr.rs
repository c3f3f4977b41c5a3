//! MIPS Floating-Point Register File.
//!
//! This module implements the coprocessor 1 register file. It performs the following:
//! 1. **Storage:** Maintains 16 register pairs, each a 64-bit container of two 32-bit lanes.
//! 2. **Lane Selection:** Maps single register numbers `f0`-`f31` onto a pair and a lane.
//! 3. **Type Conversion:** Views a pair as one IEEE 754 double.
//!
//! The even register of a pair holds the low-order word of the double and the odd register
//! holds the high-order word, independent of the host byte order.

use crate::common::constants::FPR_PAIRS;

/// Index of the low-order word within a pair.
const LOW_LANE: usize = 0;

/// Index of the high-order word within a pair.
const HIGH_LANE: usize = 1;

/// Returns the pair holding single register `reg`.
#[inline]
pub const fn pair_of(reg: usize) -> usize {
    reg >> 1
}

/// Returns the lane within its pair that holds single register `reg`.
#[inline]
pub const fn lane_of(reg: usize) -> usize {
    if reg & 1 == 0 { LOW_LANE } else { HIGH_LANE }
}

/// Floating-Point Register file.
///
/// Registers are raw bit containers: the simulator only moves bits between the
/// register files and memory and never performs floating-point arithmetic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fpr {
    pairs: [[u32; 2]; FPR_PAIRS],
}

impl Fpr {
    /// Creates a new floating-point register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads single register `reg` (0-31) as raw bits.
    pub fn read(&self, reg: usize) -> u32 {
        self.pairs[pair_of(reg)][lane_of(reg)]
    }

    /// Writes single register `reg` (0-31) with raw bits.
    pub fn write(&mut self, reg: usize, val: u32) {
        self.pairs[pair_of(reg)][lane_of(reg)] = val;
    }

    /// Reads pair `pair` (0-15) as a double.
    pub fn read_double(&self, pair: usize) -> f64 {
        let [low, high] = self.pairs[pair];
        f64::from_bits((u64::from(high) << 32) | u64::from(low))
    }

    /// Writes pair `pair` (0-15) from a double.
    pub fn write_double(&mut self, pair: usize, val: f64) {
        let bits = val.to_bits();
        self.pairs[pair] = [bits as u32, (bits >> 32) as u32];
    }
}
