//! Simulation drivers and program loading.
//!
//! Provides the listing loader, the `Simulator` run-loop driver and the text
//! formatting used to present stage contents and architectural state.

/// Listing parser and file loader.
pub mod loader;

/// Register, memory, flag and stage formatting.
pub mod report;

/// Run-loop driver over the pipeline engine.
pub mod simulator;

pub use self::simulator::Simulator;
