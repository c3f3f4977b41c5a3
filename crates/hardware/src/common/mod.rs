//! Common utilities and types used throughout the MIPS pipeline simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Register counts, latencies, and memory geometry.
//! 2. **Error Handling:** Host-level errors reported to the embedder.
//! 3. **Register Management:** A unified interface for GPR, HI/LO and FPR access.

/// Common constants used throughout the simulator.
pub mod constants;

/// Host-level error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::SimError;
pub use reg::RegisterFile;
