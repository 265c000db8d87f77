//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for keeping dependent instructions correct without
//! a second register file. It provides:
//! 1. **Forwarding Table:** One `(valid, value)` pair per register holding the newest
//!    not-yet-committed value.
//! 2. **Pending Loads:** Registers whose producing load has computed its address but
//!    not yet read memory; a reader of one of them must stall.
//! 3. **Operand Resolution:** Decode-stage operand reads that prefer a valid forwarded
//!    value over the register file.
//! 4. **Writeback Re-validation:** After a commit, an entry stays valid only while a
//!    newer in-flight producer of the same register remains in Memory or Execute.

use tracing::debug;

use crate::common::constants::REG_FILE_SIZE;
use crate::common::{RegisterFile, Word};
use crate::core::pipeline::latches::StageLatch;

/// One forwarding-table slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct ForwardEntry {
    /// A not-yet-committed producer has published `value`.
    valid: bool,
    /// The newest published value.
    value: Word,
}

/// Per-register table of in-flight results.
///
/// Writes are last-wins; since stages publish in reverse pipeline order within a tick,
/// the youngest producer's value is the one left in the table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForwardingTable {
    entries: [ForwardEntry; REG_FILE_SIZE],
}

impl ForwardingTable {
    /// Creates a table with every entry invalid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes `value` as the newest in-flight value of `reg`.
    pub const fn publish(&mut self, reg: usize, value: Word) {
        self.entries[reg] = ForwardEntry { valid: true, value };
    }

    /// The forwarded value of `reg`, if one is valid.
    pub const fn lookup(&self, reg: usize) -> Option<Word> {
        let entry = self.entries[reg];
        if entry.valid { Some(entry.value) } else { None }
    }

    /// Sets the validity bit of `reg`, keeping its last value.
    pub const fn set_valid(&mut self, reg: usize, valid: bool) {
        self.entries[reg].valid = valid;
    }
}

/// Registers targeted by a load whose value is not yet forward-able.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingLoads {
    pending: [bool; REG_FILE_SIZE],
}

impl PendingLoads {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `reg` as awaiting a load.
    pub const fn mark(&mut self, reg: usize) {
        self.pending[reg] = true;
    }

    /// Clears the mark on `reg`.
    pub const fn clear(&mut self, reg: usize) {
        self.pending[reg] = false;
    }

    /// Whether `reg` awaits a load.
    pub const fn is_pending(&self, reg: usize) -> bool {
        self.pending[reg]
    }

    /// Whether any register awaits a load.
    pub fn any(&self) -> bool {
        self.pending.iter().any(|&p| p)
    }
}

/// Reads one source operand for Decode.
///
/// # Arguments
///
/// * `regs` - Architectural register file.
/// * `fwd`  - Forwarding table.
/// * `reg`  - Source register index.
///
/// # Returns
///
/// The forwarded value if the table holds a valid entry for `reg`, otherwise the
/// register-file value.
pub const fn read_operand(regs: &RegisterFile, fwd: &ForwardingTable, reg: usize) -> Word {
    match fwd.lookup(reg) {
        Some(value) => value,
        None => regs.read(reg),
    }
}

/// Re-derives the validity of `reg` after Writeback committed it.
///
/// # Arguments
///
/// * `fwd`     - Forwarding table.
/// * `reg`     - Register just written to the register file.
/// * `memory`  - Memory-stage latch as it stood at the start of the tick.
/// * `execute` - Execute-stage latch as it stood at the start of the tick.
///
/// The entry stays valid when a newer instruction in Memory or Execute will also write
/// `reg`; otherwise the register file is authoritative and the entry is invalidated.
pub fn revalidate(fwd: &mut ForwardingTable, reg: usize, memory: &StageLatch, execute: &StageLatch) {
    let superseded = memory.targets(reg) || execute.targets(reg);
    if superseded {
        debug!(reg, "forwarding entry kept: newer producer in flight");
    }
    fwd.set_valid(reg, superseded);
}
