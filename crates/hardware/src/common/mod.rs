//! Common utilities and types used throughout the APEX pipeline simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Architectural sizes (register count, data memory, code layout).
//! 2. **Memory Access:** Definitions for categorizing data memory operations (Read/Write).
//! 3. **Error Handling:** Fatal simulation errors and program loading errors.
//! 4. **Register Management:** A unified interface for architectural register access.

/// Architectural constants (register count, memory size, code layout).
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types for simulation and program loading.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{CODE_BASE_ADDRESS, DATA_MEMORY_SIZE, INSTRUCTION_SIZE, REG_FILE_SIZE};
pub use data::AccessType;
pub use error::{LoadError, SimError};
pub use reg::RegisterFile;

/// Machine word: register values, memory words, immediates and addresses.
///
/// All arithmetic on words wraps on overflow.
pub type Word = i32;
