//! APEX pipeline simulator library.
//!
//! This crate implements a cycle-accurate simulator of the APEX five-stage in-order
//! pipeline with the following:
//! 1. **Core:** Fetch, Decode/RF, Execute, Memory and Writeback stages advanced in reverse
//!    order each tick, a forwarding table, load-use stalls, and branch flush/redirect.
//! 2. **ISA:** The fixed 25-opcode APEX instruction set and its listing syntax.
//! 3. **Simulation:** Listing loader, run-loop driver, state formatting, configuration and
//!    statistics collection.

/// Common types and constants (word type, registers, errors, access types).
pub mod common;
/// Simulator configuration (defaults and JSON-deserializable sections).
pub mod config;
/// CPU core (pipeline, arch state, execution units).
pub mod core;
/// Instruction set (opcodes, instruction record, code memory, rendering).
pub mod isa;
/// Listing loader, run-loop driver and state formatting.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse it from JSON.
pub use crate::config::Config;
/// Main CPU type; holds architectural state, latches and stats.
pub use crate::core::Cpu;
/// Result of one pipeline tick.
pub use crate::core::pipeline::TickOutcome;
/// Top-level driver; construct with `Simulator::new` or `Simulator::from_file`.
pub use crate::sim::Simulator;
