//! Execution units and functional components.
//!
//! This module contains the units the Execute and Memory stages dispatch to:
//! the integer ALU, the branch resolution unit, and the load/store unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit: conditions and targets.
pub mod bru;

/// Load/Store Unit for memory access operations.
pub mod lsu;
