//! Simulation driver, program loading, and syscall emulation.
//!
//! Provides the top-level [`Simulator`], the loader that places ELF or raw images in
//! memory, and the syscall layer invoked by Writeback.

/// Binary loader (ELF and raw images).
pub mod loader;

/// Top-level simulator driving the CPU clock.
pub mod simulator;

/// Syscall handler interface and host-backed emulation.
pub mod syscall;

pub use self::simulator::Simulator;
