//! Data Memory Access.
//!
//! This module provides the interface between the CPU and its flat data memory.
//! It performs the following:
//! 1. **Bounds Checking:** Every address is a word index that must lie inside data memory.
//! 2. **Load/Store:** Word reads and writes on behalf of the Memory stage.
//! 3. **Queries:** Side-effect-free reads for drivers.

use super::Cpu;
use crate::common::{AccessType, SimError, Word};

/// Diagnostic pc used for accesses that do not come from an instruction.
const NO_PC: Word = -1;

impl Cpu {
    /// Translates a data address to a memory index.
    ///
    /// # Arguments
    ///
    /// * `address` - Effective address (word index).
    /// * `access` - Kind of access, for diagnostics.
    /// * `pc` - Address of the accessing instruction, for diagnostics.
    fn data_index(&self, address: Word, access: AccessType, pc: Word) -> Result<usize, SimError> {
        usize::try_from(address)
            .ok()
            .filter(|&i| i < self.data_memory.len())
            .ok_or(SimError::MemoryOutOfRange {
                access,
                address,
                pc,
            })
    }

    /// Reads one word for a load instruction.
    pub fn load_word(&self, address: Word, pc: Word) -> Result<Word, SimError> {
        let index = self.data_index(address, AccessType::Read, pc)?;
        Ok(self.data_memory[index])
    }

    /// Writes one word for a store instruction.
    pub fn store_word(&mut self, address: Word, value: Word, pc: Word) -> Result<(), SimError> {
        let index = self.data_index(address, AccessType::Write, pc)?;
        self.data_memory[index] = value;
        Ok(())
    }

    /// Reads a data memory word without touching any other state.
    ///
    /// # Returns
    ///
    /// The word, or `SimError::MemoryOutOfRange` for an address outside data memory.
    pub fn read_memory(&self, address: Word) -> Result<Word, SimError> {
        self.load_word(address, NO_PC)
    }

    /// Non-zero data memory words as `(address, value)` pairs in address order.
    pub fn nonzero_memory(&self) -> impl Iterator<Item = (usize, Word)> + '_ {
        self.data_memory
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, v)| v != 0)
    }
}
