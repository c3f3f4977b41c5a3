//! Core processor implementation.
//!
//! This module contains the pipelined CPU: the architectural register files, the
//! five-stage pipeline with its latches and hazard logic, the execution units, and
//! the `Cpu` aggregate that owns all of it.

/// Architectural state (general and floating-point register files).
pub mod arch;

/// CPU aggregate and per-cycle driver.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, signals).
pub mod pipeline;

/// Execution units (ALU, branch resolution, LSU).
pub mod units;

pub use self::cpu::{Cpu, PipelineState, Termination};
