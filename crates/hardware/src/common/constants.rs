//! Global Architectural Constants.
//!
//! This module defines the fixed sizes and layout rules of the simulated machine. It includes:
//! 1. **Register Constants:** Size of the architectural register file.
//! 2. **Memory Constants:** Default size of the flat data memory.
//! 3. **Code Layout Constants:** Entry address and stride of code memory.

/// Number of architectural integer registers (`R0`-`R15`).
pub const REG_FILE_SIZE: usize = 16;

/// Default number of words in data memory.
pub const DATA_MEMORY_SIZE: usize = 4096;

/// Address of the first instruction in code memory.
pub const CODE_BASE_ADDRESS: i32 = 4000;

/// Width of one instruction in bytes; the fetch stride.
pub const INSTRUCTION_SIZE: i32 = 4;

/// Amount added to the base register by post-increment loads and stores.
pub const POST_INCREMENT: i32 = 4;

/// Offset between a JALR and the return address it links.
pub const LINK_OFFSET: i32 = INSTRUCTION_SIZE;

/// Number of registers printed per row in register dumps.
pub const REGS_PER_ROW: usize = REG_FILE_SIZE / 2;
