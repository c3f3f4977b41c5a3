//! Configuration system for the MIPS pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize the simulator.
//! It provides:
//! 1. **Defaults:** Baseline boot addresses and memory layout.
//! 2. **Structures:** Hierarchical config for general, memory, and pipeline settings.
//! 3. **Enums:** The busy-counter policy applied while Decode is stalled.
//!
//! Configuration is supplied as JSON (`Config::from_json`, `Config::from_file`), or use
//! `Config::default()` to run without a file. Every field is optional.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Conventional start of the text segment for bare binaries.
    pub const BOOT_PC: u32 = 0x0040_0000;

    /// Address raw (non-ELF) images are copied to.
    pub const LOAD_BASE: u32 = 0x0040_0000;
}

/// How busy counters advance while Decode is stalled on a syscall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusyCounterPolicy {
    /// Counters tick every cycle, whether or not Decode accepted an instruction.
    #[default]
    AlwaysTick,
    /// Counters hold their values in cycles where Decode is stalled.
    PauseWhileStalled,
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use mipsim_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.general.boot_pc, 0x0040_0000);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use mipsim_core::config::{BusyCounterPolicy, Config};
///
/// let json = r#"{
///     "general": { "boot_pc": 4194560, "max_cycles": 100000 },
///     "pipeline": { "busy_counter_policy": "pause_while_stalled" }
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.boot_pc, 0x0040_0100);
/// assert_eq!(config.general.max_cycles, Some(100_000));
/// assert_eq!(config.memory.load_base, 0x0040_0000);
/// assert_eq!(config.pipeline.busy_counter_policy, BusyCounterPolicy::PauseWhileStalled);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory layout.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Pipeline behavior.
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Config` if the text is not a valid configuration.
    pub fn from_json(text: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Io` if the file cannot be read and `SimError::Config` if it does not
    /// parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace` event for every instruction leaving Decode and every commit.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC for raw images. ELF images use their entry point unless the embedder
    /// overrides it.
    #[serde(default = "GeneralConfig::default_boot_pc")]
    pub boot_pc: u32,

    /// Stop with `SimError::CycleLimitExceeded` after this many cycles.
    #[serde(default)]
    pub max_cycles: Option<u64>,

    /// Initial stack pointer (`sp`), left at zero if not set.
    #[serde(default)]
    pub initial_sp: Option<u32>,
}

impl GeneralConfig {
    fn default_boot_pc() -> u32 {
        defaults::BOOT_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            boot_pc: defaults::BOOT_PC,
            max_cycles: None,
            initial_sp: None,
        }
    }
}

/// Memory layout configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Address raw images are loaded at.
    #[serde(default = "MemoryConfig::default_load_base")]
    pub load_base: u32,
}

impl MemoryConfig {
    fn default_load_base() -> u32 {
        defaults::LOAD_BASE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            load_base: defaults::LOAD_BASE,
        }
    }
}

/// Pipeline configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineConfig {
    /// Busy-counter behavior in stalled Decode cycles.
    #[serde(default)]
    pub busy_counter_policy: BusyCounterPolicy,
}
