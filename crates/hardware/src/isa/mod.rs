//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the fixed APEX opcode set, the decoded instruction record, code memory,
//! and the textual rendering used by traces and displays.
//!
//! # Modules
//!
//! * `opcode`: The closed opcode enum and its operand layouts.
//! * `instruction`: The decoded `{opcode, rd, rs1, rs2, imm}` record.
//! * `program`: Immutable code memory indexed by fetch address.
//! * `disasm`: Listing-syntax rendering of instructions.

/// Instruction rendering for traces and stage displays.
pub mod disasm;

/// Decoded instruction record.
pub mod instruction;

/// Opcode set and operand layouts.
pub mod opcode;

/// Code memory.
pub mod program;

pub use self::instruction::Instruction;
pub use self::opcode::{Opcode, OperandField};
pub use self::program::Program;
