//! Main Execution Loop.
//!
//! This module implements the clock of the pipeline. Every cycle runs in two phases:
//! 1. **Phase 0 (sample):** Fetch, Decode, Execute, Memory and Writeback sample their
//!    input latches, in that order.
//! 2. **Phase 1 (commit):** Writeback, Memory, Execute, Decode and Fetch commit their output
//!    latches, in that order, so every stage reads last cycle's latch before it is replaced.
//!
//! Same-cycle couplings go through the PC: a taken branch in Execute and an interlock or
//! syscall rewind in Decode both update it before Fetch commits.

use super::{Cpu, Termination};
use crate::core::pipeline::stages::{decode, execute, fetch, memory, writeback};
use crate::sim::syscall::SyscallHandler;

impl Cpu {
    /// Advances the pipeline by one clock cycle.
    ///
    /// Does nothing once the simulation has terminated.
    ///
    /// # Arguments
    ///
    /// * `syscalls` - Emulation layer invoked when a syscall reaches Writeback.
    ///
    /// # Returns
    ///
    /// `Some` in the cycle the simulation terminates, `None` otherwise.
    pub fn tick(&mut self, syscalls: &mut dyn SyscallHandler) -> Option<Termination> {
        if self.terminated.is_some() {
            return None;
        }

        self.stats.cycles += 1;

        let f = fetch::sample(self);
        let d = decode::sample(self);
        let e = execute::sample(self);
        let m = memory::sample(self);
        let w = writeback::sample(self);

        if let Some(t) = writeback::commit(self, w, syscalls) {
            self.terminated = Some(t);
            return Some(t);
        }
        memory::commit(self, m);
        execute::commit(self, e);
        decode::commit(self, d);
        fetch::commit(self, f);

        None
    }
}
