//! System-on-chip components attached to the pipeline.
//!
//! The simulated machine has a single memory port shared by instruction fetch, the Memory
//! stage and the syscall layer. This module provides:
//! 1. **Traits:** The [`Memory`] interface with big-endian sub-word helpers.
//! 2. **Memory:** Doubleword lane helpers and the default sparse backing store.

/// Backing store implementations and byte-lane helpers.
pub mod memory;

/// The memory interface consumed by the pipeline.
pub mod traits;

pub use self::memory::SparseMemory;
pub use self::traits::Memory;
