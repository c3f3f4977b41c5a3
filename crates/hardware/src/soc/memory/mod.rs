//! Simulated main memory.
//!
//! This module implements the backing store the pipeline fetches from and loads/stores to.
//! It provides:
//! 1. **Lanes:** Big-endian extraction and insertion of bytes, halfwords and words within a
//!    64-bit doubleword container.
//! 2. **Sparse Memory:** A paged, zero-filled implementation of the [`Memory`](crate::soc::Memory)
//!    trait covering the full 32-bit address space.

/// Byte-lane helpers for big-endian sub-word access within a doubleword.
pub mod lanes;

/// Paged sparse memory.
pub mod sparse;

pub use self::sparse::SparseMemory;
