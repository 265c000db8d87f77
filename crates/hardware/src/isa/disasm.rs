//! Instruction rendering.
//!
//! Renders an instruction in the same comma-separated syntax the loader accepts,
//! e.g. `ADD,R3,R1,R2`, `MOVC,R1,#5`, `BZ,#8`, `HALT`. Loading the rendered text
//! yields the same instruction.

use std::fmt;

use crate::isa::instruction::Instruction;
use crate::isa::opcode::OperandField;

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.opcode.mnemonic())?;
        for field in self.opcode.operands() {
            match field {
                OperandField::Rd => write!(f, ",R{}", self.rd)?,
                OperandField::Rs1 => write!(f, ",R{}", self.rs1)?,
                OperandField::Rs2 => write!(f, ",R{}", self.rs2)?,
                OperandField::Imm => write!(f, ",#{}", self.imm)?,
            }
        }
        Ok(())
    }
}
