//! Data Hazard Detection.
//!
//! The pipeline has no bypass network. Instead, Decode keeps a per-register busy counter
//! holding the number of cycles until the most recent in-flight write to that register
//! becomes visible in the shadow register file. This module provides:
//! 1. **Busy Counters:** Per-register countdowns for the extended GPR space (with HI/LO) and
//!    for each floating-point pair.
//! 2. **Hazard Detection:** The interlock check Decode runs before accepting an instruction.

use crate::common::constants::{FPR_PAIRS, GPR_SLOTS, HI_REG, LO_REG};
use crate::core::arch::fpr::pair_of;
use crate::core::pipeline::latches::IdExEntry;

/// Per-register "cycles until available" counters.
///
/// Counters carry no data; they only gate Decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusyCounters {
    gpr: [u32; GPR_SLOTS],
    fpr: [u32; FPR_PAIRS],
}

// `[u32; 34]` has no `Default` impl.
impl Default for BusyCounters {
    fn default() -> Self {
        Self {
            gpr: [0; GPR_SLOTS],
            fpr: [0; FPR_PAIRS],
        }
    }
}

impl BusyCounters {
    /// Creates a set of counters with every register available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances every counter by one cycle.
    pub fn tick(&mut self) {
        for c in self.gpr.iter_mut().chain(self.fpr.iter_mut()) {
            *c = c.saturating_sub(1);
        }
    }

    /// Returns the counter of a general register slot (0-31, `HI_REG`, `LO_REG`).
    pub fn gpr(&self, idx: usize) -> u32 {
        self.gpr[idx]
    }

    /// Returns the counter of the pair holding floating-point register `reg`.
    pub fn fpr(&self, reg: usize) -> u32 {
        self.fpr[pair_of(reg)]
    }

    /// Marks a general register slot busy for `cycles`. Register `r0` is never busy.
    pub fn claim_gpr(&mut self, idx: usize, cycles: u32) {
        if idx != 0 {
            self.gpr[idx] = cycles;
        }
    }

    /// Marks the pair holding floating-point register `reg` busy for `cycles`.
    pub fn claim_fpr(&mut self, reg: usize, cycles: u32) {
        self.fpr[pair_of(reg)] = cycles;
    }

    /// Claims every register a decoded instruction will write.
    ///
    /// # Arguments
    ///
    /// * `entry` - The instruction leaving Decode.
    pub fn claim_destinations(&mut self, entry: &IdExEntry) {
        let ctrl = &entry.ctrl;
        let cycles = entry.latency.dst;
        if ctrl.reg_write {
            self.claim_gpr(entry.dst, cycles);
        }
        if ctrl.fp_reg_write {
            self.claim_fpr(entry.dst, cycles);
        }
        if ctrl.hi_write {
            self.claim_gpr(HI_REG, cycles);
        }
        if ctrl.lo_write {
            self.claim_gpr(LO_REG, cycles);
        }
    }
}

/// Checks if Decode must interlock because a source of `entry` is still busy.
///
/// A source is busy when its counter exceeds the slack the instruction tolerates for
/// it: sources read in Execute tolerate one remaining cycle, sources read in Memory
/// tolerate two.
///
/// # Arguments
///
/// * `entry` - The freshly decoded instruction.
/// * `busy` - The busy counters after this cycle's tick.
///
/// # Returns
///
/// `true` if the instruction must be held in Decode this cycle.
///
/// # Examples
///
/// ```text
/// lw   t0, 0(a0)      <- claims t0 for 3 cycles
/// addu t1, t0, t0     <- sees t0 at 2 > 1: interlock for one cycle
/// ```
pub fn need_stall_busy_source(entry: &IdExEntry, busy: &BusyCounters) -> bool {
    let lat = &entry.latency;
    (entry.sreg1 != 0 && busy.gpr(entry.sreg1) > lat.src1)
        || (entry.sreg2 != 0 && busy.gpr(entry.sreg2) > lat.src2)
        || entry.freg.is_some_and(|f| busy.fpr(f) > lat.fp)
}
