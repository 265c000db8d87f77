//! Simulation and Program Loading Errors.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Fatal Simulation Errors:** Invariant violations that abort a run (bad register
//!    indices, out-of-range data addresses, a program counter that left code memory).
//! 2. **Loading Errors:** Failures while reading or parsing a textual program listing.
//! 3. **Error Handling:** Integration with standard Rust error traits through `thiserror`.
//!
//! There is no recoverable error inside the pipeline. Hazards are resolved by stalling
//! and forwarding; anything reported here ends the run.

use std::path::PathBuf;

use thiserror::Error;

use super::data::AccessType;

/// Fatal errors raised while initializing or ticking the simulator.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program contains no instructions.
    #[error("program contains no instructions")]
    EmptyProgram,

    /// An instruction names a register outside the architectural register file.
    ///
    /// Detected once when the program is installed, so the pipeline stages can index
    /// the register file directly.
    #[error("instruction at pc {pc} names register R{index} (register file has {size} entries)")]
    InvalidRegister {
        /// Address of the offending instruction.
        pc: i32,
        /// Register index found in the instruction.
        index: usize,
        /// Number of architectural registers.
        size: usize,
    },

    /// A register query from a driver named a non-existent register.
    #[error("register R{index} does not exist")]
    RegisterOutOfRange {
        /// Requested register index.
        index: usize,
    },

    /// A load, store or memory query addressed a word outside data memory.
    #[error("data memory {access} out of range: address {address} (pc {pc})")]
    MemoryOutOfRange {
        /// Kind of access that failed.
        access: AccessType,
        /// Effective address of the access.
        address: i32,
        /// Address of the instruction that performed it, or -1 for driver queries.
        pc: i32,
    },

    /// The program counter left code memory with nothing left in flight to redirect it.
    #[error("program counter {pc} is outside code memory and the pipeline is empty")]
    PcOutOfRange {
        /// Program counter that could not be fetched.
        pc: i32,
    },

    /// The program could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Errors raised while reading or parsing a program listing.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The listing file could not be read.
    #[error("could not read program '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A line starts with a mnemonic outside the opcode set.
    #[error("line {line}: unknown opcode '{mnemonic}'")]
    UnknownOpcode {
        /// 1-based line number in the listing.
        line: usize,
        /// The unrecognised mnemonic.
        mnemonic: String,
    },

    /// A line ended before all operands of its opcode were given.
    #[error("line {line}: {opcode} expects {expected} operand(s), found {found}")]
    OperandCount {
        /// 1-based line number in the listing.
        line: usize,
        /// Mnemonic of the instruction on that line.
        opcode: &'static str,
        /// Number of operands the opcode takes.
        expected: usize,
        /// Number of operands present.
        found: usize,
    },

    /// An operand token is not of the expected form.
    #[error("line {line}: bad operand '{token}', expected {expected}")]
    BadOperand {
        /// 1-based line number in the listing.
        line: usize,
        /// The offending token.
        token: String,
        /// Description of the expected form.
        expected: &'static str,
    },
}
