//! Program Loader.
//!
//! This module turns a textual APEX listing into code memory. It performs:
//! 1. **File loading:** Reads the listing from disk, reporting the path on failure.
//! 2. **Parsing:** One instruction per line, e.g. `ADD,R3,R1,R2`, `MOVC,R1,#5`, `BZ,#-8`.
//!    Mnemonics are case-insensitive, tokens may be separated by commas and/or
//!    whitespace, and text after `;` is a comment.
//! 3. **Operand checking:** Exact operand counts per opcode, register indices within the
//!    register file, and 32-bit literals.

use std::fs;
use std::path::Path;

use crate::common::constants::REG_FILE_SIZE;
use crate::common::{LoadError, Word};
use crate::isa::{Instruction, Opcode, OperandField, Program};

/// Comment delimiter in listings.
const COMMENT: char = ';';

/// Reads and parses a listing file.
///
/// # Arguments
///
/// * `path` - Path to the listing.
/// * `base` - Address of the first instruction.
///
/// # Returns
///
/// The parsed program, or the first I/O or syntax error.
pub fn load_program(path: impl AsRef<Path>, base: Word) -> Result<Program, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_program(&text, base)
}

/// Parses listing text into a program.
///
/// # Arguments
///
/// * `text` - Listing contents.
/// * `base` - Address of the first instruction.
///
/// # Examples
///
/// ```
/// use apex_core::isa::Opcode;
/// use apex_core::sim::loader::parse_program;
///
/// let program = parse_program("MOVC,R1,#5\nhalt ; done\n", 4000).unwrap();
/// assert_eq!(program.len(), 2);
/// assert_eq!(program.fetch(4004).unwrap().opcode, Opcode::Halt);
/// ```
pub fn parse_program(text: &str, base: Word) -> Result<Program, LoadError> {
    let mut instructions = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        if let Some(insn) = parse_line(raw, idx + 1)? {
            instructions.push(insn);
        }
    }
    Ok(Program::with_base(base, instructions))
}

/// Parses one listing line; blank and comment-only lines yield `None`.
pub fn parse_line(raw: &str, line: usize) -> Result<Option<Instruction>, LoadError> {
    let code = raw.split(COMMENT).next().unwrap_or_default();
    let mut tokens = code
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());

    let Some(mnemonic) = tokens.next() else {
        return Ok(None);
    };
    let opcode: Opcode = mnemonic.parse().map_err(|_| LoadError::UnknownOpcode {
        line,
        mnemonic: mnemonic.to_string(),
    })?;

    let operands: Vec<&str> = tokens.collect();
    let fields = opcode.operands();
    if operands.len() != fields.len() {
        return Err(LoadError::OperandCount {
            line,
            opcode: opcode.mnemonic(),
            expected: fields.len(),
            found: operands.len(),
        });
    }

    let mut insn = Instruction::bare(opcode);
    for (field, token) in fields.iter().zip(operands) {
        match field {
            OperandField::Rd => insn.rd = parse_register(token, line)?,
            OperandField::Rs1 => insn.rs1 = parse_register(token, line)?,
            OperandField::Rs2 => insn.rs2 = parse_register(token, line)?,
            OperandField::Imm => insn.imm = parse_literal(token, line)?,
        }
    }
    Ok(Some(insn))
}

fn parse_register(token: &str, line: usize) -> Result<usize, LoadError> {
    token
        .strip_prefix(['R', 'r'])
        .and_then(|n| n.parse::<usize>().ok())
        .filter(|&n| n < REG_FILE_SIZE)
        .ok_or_else(|| LoadError::BadOperand {
            line,
            token: token.to_string(),
            expected: "a register R0-R15",
        })
}

fn parse_literal(token: &str, line: usize) -> Result<Word, LoadError> {
    token
        .strip_prefix('#')
        .and_then(|n| n.parse::<Word>().ok())
        .ok_or_else(|| LoadError::BadOperand {
            line,
            token: token.to_string(),
            expected: "a literal #n",
        })
}
