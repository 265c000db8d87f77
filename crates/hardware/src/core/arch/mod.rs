//! APEX architectural state components.
//!
//! This module contains the programmer-visible storage of the APEX processor.
//! It includes the following modules:
//! 1. **GPRs:** The 16-entry general-purpose register file.
//! 2. **Flags:** The zero, positive and negative condition flags.

/// Condition flag register (zero, positive, negative).
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;

pub use self::flags::ConditionFlags;
pub use self::gpr::Gpr;
