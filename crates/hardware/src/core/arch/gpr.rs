//! APEX General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file of the APEX architecture.
//! It performs the following:
//! 1. **Storage:** Maintains 16 signed 32-bit registers (`R0`-`R15`).
//! 2. **Uniform Access:** Every register, `R0` included, is an ordinary read/write register.

use crate::common::constants::REG_FILE_SIZE;
use crate::common::Word;

/// General-Purpose Register file.
///
/// Contains the 16 architectural integer registers. Indices are validated when a
/// program is installed, so accesses here index the array directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [Word; REG_FILE_SIZE],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    ///
    /// # Returns
    ///
    /// A new `Gpr` instance with all registers set to 0.
    pub const fn new() -> Self {
        Self {
            regs: [0; REG_FILE_SIZE],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    ///
    /// # Returns
    ///
    /// The value stored in the specified register.
    pub const fn read(&self, idx: usize) -> Word {
        self.regs[idx]
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    /// * `val` - The value to write.
    pub const fn write(&mut self, idx: usize, val: Word) {
        self.regs[idx] = val;
    }

    /// Returns the whole register array, lowest index first.
    pub const fn as_slice(&self) -> &[Word] {
        &self.regs
    }

}
