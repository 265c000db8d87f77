//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage in-order pipeline.
//! It includes the following components:
//! 1. **Engine:** The per-tick driver that advances all stages in reverse order.
//! 2. **Hazards:** The forwarding table, the pending-load set and operand resolution.
//! 3. **Latches:** The per-stage instruction record and the per-cycle trace.
//! 4. **Signals:** Control signals derived from the opcode.
//! 5. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.

/// Per-tick pipeline driver.
pub mod engine;

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches and the cycle trace.
pub mod latches;

/// Control signals derived from the opcode.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

pub use self::engine::{TickOutcome, tick};
