//! Execution units.
//!
//! This module contains the functional units the Execute stage drives: the
//! integer ALU and the branch resolution unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit: condition evaluation and target computation.
pub mod bru;
