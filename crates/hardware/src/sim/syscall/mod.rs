//! System Call Emulation Interface.
//!
//! When a `syscall` instruction reaches Writeback, the pipeline hands control to a
//! [`SyscallHandler`]. The handler sees the architectural state through a
//! [`SyscallContext`] and may read or modify registers and memory before the pipeline
//! resumes. This module provides:
//! 1. **Handler Trait:** The seam between the pipeline and the emulation layer.
//! 2. **Context:** Register and memory access scoped to one syscall, with the emulated
//!    memory traffic counted in the statistics.
//! 3. **Host Emulation:** [`HostSyscalls`], a small IRIX-numbered syscall set backed by
//!    host streams.

/// Host-backed syscall emulation.
pub mod host;

pub use host::HostSyscalls;

use crate::common::RegisterFile;
use crate::common::constants::{DWORD_ALIGN_MASK, GPR_SLOTS};
use crate::soc::Memory;
use crate::stats::SimStats;

/// What the pipeline does after a syscall has been emulated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyscallOutcome {
    /// Resume fetching after the syscall.
    Continue,
    /// Terminate the simulation with the given exit status.
    Exit(i32),
}

/// Emulates the operating system underneath the simulated program.
pub trait SyscallHandler {
    /// Services the syscall described by the current architectural state.
    fn emulate(&mut self, ctx: &mut SyscallContext<'_>) -> SyscallOutcome;
}

/// Architectural state visible to a syscall handler.
///
/// Register accesses go to the architectural register file; the pipeline copies it into
/// the shadow file once the handler returns. Memory accesses are counted as syscall
/// loads and stores.
pub struct SyscallContext<'a> {
    pc: u32,
    cycles: u64,
    regs: &'a mut RegisterFile,
    mem: &'a mut dyn Memory,
    stats: &'a mut SimStats,
}

impl<'a> SyscallContext<'a> {
    /// Creates a context for the syscall at `pc`.
    pub fn new(
        pc: u32,
        cycles: u64,
        regs: &'a mut RegisterFile,
        mem: &'a mut dyn Memory,
        stats: &'a mut SimStats,
    ) -> Self {
        Self {
            pc,
            cycles,
            regs,
            mem,
            stats,
        }
    }

    /// Address of the `syscall` instruction.
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Simulated time: cycles elapsed so far.
    pub const fn time(&self) -> u64 {
        self.cycles
    }

    /// Reads a general register (or `HI_REG`/`LO_REG`).
    ///
    /// Indices past `LO_REG` read as 0.
    pub fn get_reg(&self, idx: usize) -> u32 {
        if idx < GPR_SLOTS { self.regs.read(idx) } else { 0 }
    }

    /// Writes a general register (or `HI_REG`/`LO_REG`).
    ///
    /// Writes to `r0` and to indices past `LO_REG` are ignored.
    pub fn set_reg(&mut self, idx: usize, val: u32) {
        if idx < GPR_SLOTS {
            self.regs.write(idx, val);
        } else {
            tracing::warn!(idx, "syscall handler wrote a nonexistent register");
        }
    }

    /// Reads the aligned word containing `addr`.
    pub fn get_word(&mut self, addr: u32) -> u32 {
        self.stats.syscall_loads += 1;
        self.mem.read_word(u64::from(addr))
    }

    /// Writes the aligned word containing `addr`.
    pub fn set_word(&mut self, addr: u32, val: u32) {
        self.stats.syscall_stores += 1;
        self.mem.write_word(u64::from(addr), val);
    }

    /// Reads the aligned doubleword containing `addr`.
    pub fn get_dword(&mut self, addr: u32) -> u64 {
        self.stats.syscall_loads += 1;
        self.mem.read_dword(u64::from(addr) & DWORD_ALIGN_MASK)
    }

    /// Writes the aligned doubleword containing `addr`.
    pub fn set_dword(&mut self, addr: u32, val: u64) {
        self.stats.syscall_stores += 1;
        self.mem.write_dword(u64::from(addr) & DWORD_ALIGN_MASK, val);
    }
}
