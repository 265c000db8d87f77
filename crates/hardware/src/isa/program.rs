//! Code Memory.
//!
//! This module implements the immutable instruction store the Fetch stage reads from.
//! It provides:
//! 1. **Linear Addressing:** Instruction `i` lives at `base + 4 * i`.
//! 2. **Fetch Lookup:** Address-to-instruction translation that rejects unaligned or
//!    out-of-range addresses.
//! 3. **Validation:** A one-time check that every register field names a real register.

use crate::common::constants::{CODE_BASE_ADDRESS, INSTRUCTION_SIZE, REG_FILE_SIZE};
use crate::common::{SimError, Word};
use crate::isa::instruction::Instruction;

/// An ordered, immutable sequence of decoded instructions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    base: Word,
    instructions: Vec<Instruction>,
}

impl Program {
    /// Creates a program placed at the default code base address (4000).
    pub const fn new(instructions: Vec<Instruction>) -> Self {
        Self::with_base(CODE_BASE_ADDRESS, instructions)
    }

    /// Creates a program whose first instruction lives at `base`.
    pub const fn with_base(base: Word, instructions: Vec<Instruction>) -> Self {
        Self { base, instructions }
    }

    /// Address of the first instruction.
    pub const fn base(&self) -> Word {
        self.base
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` if the program holds no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// All instructions in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Address of the instruction at `index`.
    pub fn address_of(&self, index: usize) -> Word {
        let offset = Word::try_from(index).unwrap_or(Word::MAX);
        self.base
            .wrapping_add(offset.wrapping_mul(INSTRUCTION_SIZE))
    }

    /// Looks up the instruction at a fetch address.
    ///
    /// # Arguments
    ///
    /// * `pc` - Fetch address.
    ///
    /// # Returns
    ///
    /// The instruction, or `None` if `pc` is unaligned or outside code memory.
    pub fn fetch(&self, pc: Word) -> Option<&Instruction> {
        let offset = pc.checked_sub(self.base)?;
        if offset < 0 || offset % INSTRUCTION_SIZE != 0 {
            return None;
        }
        let index = usize::try_from(offset / INSTRUCTION_SIZE).ok()?;
        self.instructions.get(index)
    }

    /// Checks the invariants the pipeline relies on.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the program is non-empty and every register field it uses is below
    /// the register-file size; otherwise the first violation found.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.instructions.is_empty() {
            return Err(SimError::EmptyProgram);
        }
        for (index, insn) in self.instructions.iter().enumerate() {
            if let Some(bad) = insn.registers().find(|&r| r >= REG_FILE_SIZE) {
                return Err(SimError::InvalidRegister {
                    pc: self.address_of(index),
                    index: bad,
                    size: REG_FILE_SIZE,
                });
            }
        }
        Ok(())
    }
}
