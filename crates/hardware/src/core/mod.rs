//! Core processor implementation.
//!
//! This module contains the APEX CPU: its architectural state, the five-stage
//! pipeline with its hazard unit, and the functional units the Execute stage uses.

/// Architectural storage (register file, condition flags).
pub mod arch;

/// CPU state aggregate, data memory access and state queries.
pub mod cpu;

/// Instruction pipeline implementation (engine, stages, latches, hazards, signals).
pub mod pipeline;

/// Execution units (ALU, branch resolution).
pub mod units;

pub use self::cpu::Cpu;
