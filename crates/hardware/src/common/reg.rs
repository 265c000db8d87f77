//! Architectural Register File.
//!
//! This module provides the `RegisterFile` struct, the interface the pipeline and the
//! drivers use to reach the general-purpose registers. It provides:
//! 1. **Storage:** Wraps the 16-entry APEX GPR array.
//! 2. **Abstraction:** A single set of methods for reading and writing register values.
//! 3. **Snapshots:** A read-only view of every register for the report formatters.

use crate::common::Word;
use crate::core::arch::gpr::Gpr;

/// Architectural register file.
///
/// Only the Writeback stage writes through this interface during a run; Decode reads
/// it when no forwarded value is pending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    ///
    /// # Returns
    ///
    /// A new `RegisterFile` instance.
    pub const fn new() -> Self {
        Self { gpr: Gpr::new() }
    }

    /// Reads a value from a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    ///
    /// # Returns
    ///
    /// The value stored in the specified register.
    pub const fn read(&self, idx: usize) -> Word {
        self.gpr.read(idx)
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    /// * `val` - The value to write.
    pub const fn write(&mut self, idx: usize, val: Word) {
        self.gpr.write(idx, val);
    }

    /// Returns a snapshot view of every register, lowest index first.
    pub const fn values(&self) -> &[Word] {
        self.gpr.as_slice()
    }

}
