//! Decoded instruction record.
//!
//! The loader produces one `Instruction` per listing line; the pipeline copies it
//! into stage latches and never mutates the program's copy.

use crate::common::Word;
use crate::isa::opcode::{Opcode, OperandField};

/// A decoded APEX instruction.
///
/// Register fields an opcode does not use are zero and ignored by every stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Instruction {
    /// Operation.
    pub opcode: Opcode,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Literal operand.
    pub imm: Word,
}

impl Instruction {
    /// Creates an instruction from all five fields.
    pub const fn new(opcode: Opcode, rd: usize, rs1: usize, rs2: usize, imm: Word) -> Self {
        Self {
            opcode,
            rd,
            rs1,
            rs2,
            imm,
        }
    }

    /// Creates an instruction with every operand field zeroed (`HALT`, `NOP`).
    pub const fn bare(opcode: Opcode) -> Self {
        Self::new(opcode, 0, 0, 0, 0)
    }

    /// Register indices named by the opcode's operand fields, in listing order.
    pub fn registers(&self) -> impl Iterator<Item = usize> + '_ {
        self.opcode.operands().iter().filter_map(|field| match field {
            OperandField::Rd => Some(self.rd),
            OperandField::Rs1 => Some(self.rs1),
            OperandField::Rs2 => Some(self.rs2),
            OperandField::Imm => None,
        })
    }
}
