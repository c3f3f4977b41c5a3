//! Host-level error definitions.
//!
//! This module defines the errors the simulator reports to its embedder. It provides:
//! 1. **Boot Errors:** Unreadable files, malformed or foreign executables, images that do not fit.
//! 2. **Configuration Errors:** JSON that does not describe a valid configuration.
//! 3. **Run Errors:** A program that outlives the configured cycle budget.
//!
//! Program-visible outcomes (exit syscalls, illegal instructions) are not errors; they are
//! reported through [`Termination`](crate::core::Termination).

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring, booting, or driving the simulator.
#[derive(Debug, Error)]
pub enum SimError {
    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the file being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The boot image looked like an ELF file but could not be parsed.
    #[error("malformed ELF image: {0}")]
    Elf(#[from] object::Error),

    /// The boot image is well formed but cannot run on this machine.
    #[error("unsupported boot image: {0}")]
    UnsupportedImage(String),

    /// The boot image does not fit in the 32-bit address space at the requested base.
    #[error("image of {len} bytes at {base:#x} exceeds the 32-bit address space")]
    ImageOutOfRange {
        /// Requested load address.
        base: u64,
        /// Image length in bytes.
        len: usize,
    },

    /// The configuration text is not valid.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The program did not terminate within the configured number of cycles.
    #[error("no termination after {0} cycles")]
    CycleLimitExceeded(u64),
}
