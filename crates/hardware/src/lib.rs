//! MIPS pipeline simulator library.
//!
//! This crate implements a cycle-level simulator of a 5-stage, in-order, single-issue
//! MIPS pipeline with the following:
//! 1. **Core:** Fetch, decode, execute, memory and writeback stages clocked in two phases,
//!    with busy-counter load-use interlocks and a single branch delay slot.
//! 2. **State:** Architectural and shadow register files (GPRs, HI/LO, paired FPRs).
//! 3. **ISA:** Decoding of the integer subset plus `mfc1`/`mtc1`/`lwc1`/`swc1`, and a
//!    disassembler for traces and diagnostics.
//! 4. **Memory:** A big-endian memory trait and a sparse paged backing store.
//! 5. **Simulation:** Loader, syscall emulation, configuration, and statistics collection.
//!
//! # Examples
//!
//! ```
//! use mipsim_core::sim::syscall::HostSyscalls;
//! use mipsim_core::{Config, Simulator, Termination};
//!
//! // li v0, 1001 ; li a0, 7 ; syscall
//! let words: [u32; 3] = [0x2402_03e9, 0x2404_0007, 0x0000_000c];
//! let image: Vec<u8> = words.iter().flat_map(|w| w.to_be_bytes()).collect();
//!
//! let config = Config::default();
//! let mut sim = Simulator::from_image(&image, Box::new(HostSyscalls::new()), &config).unwrap();
//! assert_eq!(sim.run().unwrap(), Termination::Exited { code: 7 });
//! ```

/// Common types and constants (registers, errors, latencies).
pub mod common;
/// Simulator configuration (defaults, enums, hierarchical config structures).
pub mod config;
/// CPU core (pipeline, register files, execution units).
pub mod core;
/// Instruction set (field extraction, opcodes, ABI names, disassembly).
pub mod isa;
/// Simulator driver, loader, and syscall emulation.
pub mod sim;
/// Memory trait and backing store.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds the pipeline latches, register files, memory and stats.
pub use crate::core::{Cpu, PipelineState, Termination};
/// Top-level simulator; construct with `Simulator::new` or `Simulator::from_image`.
pub use crate::sim::Simulator;
/// Host-level error type.
pub use crate::common::SimError;
/// Performance counters.
pub use crate::stats::SimStats;
