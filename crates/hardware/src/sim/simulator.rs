//! Simulator: owns the CPU and the syscall layer side-by-side.
//!
//! The syscall handler lives next to the `Cpu` rather than inside it so that Writeback
//! can lend the handler the CPU's registers and memory without splitting borrows.

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::{Cpu, PipelineState, Termination};
use crate::sim::loader::{self, BootInfo};
use crate::sim::syscall::SyscallHandler;
use crate::soc::{Memory, SparseMemory};
use crate::stats::SimStats;

/// Top-level simulator: pipeline state plus the emulated operating system.
pub struct Simulator {
    /// CPU pipeline and architectural state.
    pub cpu: Cpu,
    syscalls: Box<dyn SyscallHandler>,
    max_cycles: Option<u64>,
}

impl Simulator {
    /// Creates a simulator around already-populated memory.
    ///
    /// # Arguments
    ///
    /// * `mem` - Memory holding the program.
    /// * `syscalls` - Syscall emulation layer.
    /// * `config` - Simulator configuration.
    pub fn new(mem: Box<dyn Memory>, syscalls: Box<dyn SyscallHandler>, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(mem, config),
            syscalls,
            max_cycles: config.general.max_cycles,
        }
    }

    /// Loads `image` into fresh sparse memory and boots at its entry point.
    ///
    /// # Errors
    ///
    /// Returns the loader's error if the image cannot be placed in memory.
    pub fn from_image(
        image: &[u8],
        syscalls: Box<dyn SyscallHandler>,
        config: &Config,
    ) -> Result<Self, SimError> {
        let mut mem = SparseMemory::new();
        let BootInfo { entry, .. } = loader::load_image(&mut mem, image, config)?;
        let mut sim = Self::new(Box::new(mem), syscalls, config);
        sim.cpu.boot(entry);
        Ok(sim)
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Returns
    ///
    /// `Some` in the cycle the simulation terminates.
    pub fn tick(&mut self) -> Option<Termination> {
        self.cpu.tick(self.syscalls.as_mut())
    }

    /// Runs until the program terminates.
    ///
    /// # Errors
    ///
    /// Returns `SimError::CycleLimitExceeded` if `general.max_cycles` elapse first.
    pub fn run(&mut self) -> Result<Termination, SimError> {
        if let Some(t) = self.cpu.terminated {
            return Ok(t);
        }
        loop {
            if let Some(t) = self.tick() {
                tracing::info!(cycles = self.cpu.stats.cycles, "{t}");
                return Ok(t);
            }
            if let Some(limit) = self.max_cycles
                && self.cpu.stats.cycles >= limit
            {
                return Err(SimError::CycleLimitExceeded(limit));
            }
        }
    }

    /// Current pipeline state.
    pub fn state(&self) -> PipelineState {
        self.cpu.state()
    }

    /// Performance counters.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }
}
