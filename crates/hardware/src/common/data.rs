//! Memory Access Types.
//!
//! This module defines the classification of data memory operations. It is used by the
//! Memory stage and by diagnostics that report which kind of access went out of range.

use std::fmt;

/// Type of data memory access being performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Load (LOAD, LOADP) or a driver-side query of a memory word.
    Read,
    /// Store (STORE, STOREP).
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}
