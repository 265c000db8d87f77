//! Configuration system for the APEX simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline machine constants (code base address, data memory size).
//! 2. **Structures:** Config sections for general run options and data memory.
//! 3. **Parsing:** JSON deserialization; every field and section may be omitted.
//!
//! Configuration is supplied as JSON through the CLI's `--config` option, or use
//! `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the simulator.
///
/// These values define the baseline machine when not explicitly overridden in a
/// JSON configuration file.
mod defaults {
    use crate::common::constants;

    /// Address of the first instruction; the PC starts here.
    pub const ENTRY_PC: i32 = constants::CODE_BASE_ADDRESS;

    /// Number of words of data memory.
    pub const DATA_MEMORY_SIZE: usize = constants::DATA_MEMORY_SIZE;
}

/// Root configuration structure for the simulator.
///
/// # Examples
///
/// ```
/// use apex_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "trace_instructions": true,
///         "entry_pc": 4000,
///         "max_cycles": 500
///     },
///     "memory": {
///         "data_memory_size": 1024
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, Some(500));
/// assert_eq!(config.memory.data_memory_size, 1024);
///
/// let config = Config::from_json("{}").unwrap();
/// assert_eq!(config.general.entry_pc, 4000);
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Data memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON document; missing sections and fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Enable per-stage instruction tracing (emitted at `trace` level)
    #[serde(default)]
    pub trace_instructions: bool,

    /// Address the program is loaded at and the PC starts from
    #[serde(default = "GeneralConfig::default_entry_pc")]
    pub entry_pc: i32,

    /// Upper bound on cycles for run-until-halt drivers; `None` runs unbounded
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

impl GeneralConfig {
    /// Returns the default entry address.
    const fn default_entry_pc() -> i32 {
        defaults::ENTRY_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            entry_pc: defaults::ENTRY_PC,
            max_cycles: None,
        }
    }
}

/// Data memory configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Data memory size in words
    #[serde(default = "MemoryConfig::default_data_memory_size")]
    pub data_memory_size: usize,
}

impl MemoryConfig {
    /// Returns the default data memory size in words.
    const fn default_data_memory_size() -> usize {
        defaults::DATA_MEMORY_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_memory_size: defaults::DATA_MEMORY_SIZE,
        }
    }
}
