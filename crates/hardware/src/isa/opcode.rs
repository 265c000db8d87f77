//! APEX Opcodes.
//!
//! Defines the closed opcode set of the APEX ISA. It provides:
//! 1. **Opcode Enum:** One variant per mnemonic; every stage matches on it exhaustively.
//! 2. **Mnemonics:** Case-insensitive parsing and canonical upper-case printing.
//! 3. **Operand Layouts:** The ordered operand fields each opcode takes in a listing.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One operand slot of an instruction in listing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandField {
    /// Destination register (`Rn`).
    Rd,
    /// First source register (`Rn`).
    Rs1,
    /// Second source register (`Rn`).
    Rs2,
    /// Literal (`#n`).
    Imm,
}

use OperandField::{Imm, Rd, Rs1, Rs2};

/// The APEX opcode set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `rd = rs1 + rs2`
    Add,
    /// `rd = rs1 - rs2`
    Sub,
    /// `rd = rs1 * rs2`
    Mul,
    /// `rd = rs1 & rs2`
    And,
    /// `rd = rs1 | rs2`
    Or,
    /// `rd = rs1 ^ rs2`
    Xor,
    /// `rd = rs1 + imm`
    Addl,
    /// `rd = rs1 - imm`
    Subl,
    /// `rd = imm`
    Movc,
    /// `rd = mem[rs1 + imm]`
    Load,
    /// `rd = mem[rs1 + imm]; rs1 += 4`
    Loadp,
    /// `mem[rs2 + imm] = rs1`
    Store,
    /// `mem[rs2 + imm] = rs1; rs2 += 4`
    Storep,
    /// Sets flags from `rs1 - rs2`.
    Cmp,
    /// Sets flags from `rs1 - imm`.
    Cml,
    /// Branch if zero.
    Bz,
    /// Branch if not zero.
    Bnz,
    /// Branch if positive.
    Bp,
    /// Branch if not positive.
    Bnp,
    /// Branch if negative.
    Bn,
    /// Branch if not negative.
    Bnn,
    /// `pc = rs1 + imm`
    Jump,
    /// `rd = pc + 4; pc = rs1 + imm`
    Jalr,
    /// Stops fetching; ends the run when it retires.
    Halt,
    /// No operation.
    #[default]
    Nop,
}

impl Opcode {
    /// Every opcode, in listing-manual order.
    pub const ALL: [Self; 25] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Addl,
        Self::Subl,
        Self::Movc,
        Self::Load,
        Self::Loadp,
        Self::Store,
        Self::Storep,
        Self::Cmp,
        Self::Cml,
        Self::Bz,
        Self::Bnz,
        Self::Bp,
        Self::Bnp,
        Self::Bn,
        Self::Bnn,
        Self::Jump,
        Self::Jalr,
        Self::Halt,
        Self::Nop,
    ];

    /// Canonical upper-case mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Addl => "ADDL",
            Self::Subl => "SUBL",
            Self::Movc => "MOVC",
            Self::Load => "LOAD",
            Self::Loadp => "LOADP",
            Self::Store => "STORE",
            Self::Storep => "STOREP",
            Self::Cmp => "CMP",
            Self::Cml => "CML",
            Self::Bz => "BZ",
            Self::Bnz => "BNZ",
            Self::Bp => "BP",
            Self::Bnp => "BNP",
            Self::Bn => "BN",
            Self::Bnn => "BNN",
            Self::Jump => "JUMP",
            Self::Jalr => "JALR",
            Self::Halt => "HALT",
            Self::Nop => "NOP",
        }
    }

    /// Operand fields in the order they appear in a listing line.
    ///
    /// # Examples
    ///
    /// ```
    /// use apex_core::isa::{Opcode, OperandField};
    ///
    /// assert_eq!(
    ///     Opcode::Store.operands(),
    ///     &[OperandField::Rs1, OperandField::Rs2, OperandField::Imm]
    /// );
    /// ```
    pub const fn operands(self) -> &'static [OperandField] {
        match self {
            Self::Add | Self::Sub | Self::Mul | Self::And | Self::Or | Self::Xor => &[Rd, Rs1, Rs2],
            Self::Addl | Self::Subl | Self::Load | Self::Loadp | Self::Jalr => &[Rd, Rs1, Imm],
            Self::Movc => &[Rd, Imm],
            Self::Store | Self::Storep => &[Rs1, Rs2, Imm],
            Self::Cmp => &[Rs1, Rs2],
            Self::Cml | Self::Jump => &[Rs1, Imm],
            Self::Bz | Self::Bnz | Self::Bp | Self::Bnp | Self::Bn | Self::Bnn => &[Imm],
            Self::Halt | Self::Nop => &[],
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Error returned when a mnemonic is not part of the opcode set.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown opcode '{0}'")]
pub struct UnknownOpcode(pub String);

impl FromStr for Opcode {
    type Err = UnknownOpcode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownOpcode(wanted.to_string()))
    }
}
