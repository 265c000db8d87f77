//! Pipeline engine.
//!
//! This module advances the processor by one clock edge. It performs:
//! 1. **Reverse-Order Traversal:** Writeback, Memory, Execute, Decode, Fetch, so that each
//!    stage consumes the latch contents of the previous tick before they are overwritten.
//! 2. **Termination:** Reports `Halted` once HALT retires; later ticks are no-ops.
//! 3. **Deadlock Detection:** Fails when the PC has left code memory and nothing in flight
//!    can redirect it.

use tracing::trace;

use crate::common::SimError;
use crate::core::Cpu;
use crate::core::pipeline::latches::CycleTrace;
use crate::core::pipeline::stages::{
    FetchOutcome, decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};

/// Result of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The run continues.
    Continuing,
    /// HALT has retired.
    Halted,
}

/// Advances the CPU by exactly one clock cycle.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Returns
///
/// `Halted` if HALT retired during this tick (or earlier), `Continuing` otherwise.
/// Fails with `MemoryOutOfRange` on a bad data access and with `PcOutOfRange` when the
/// PC is outside code memory while the pipeline behind Fetch is empty.
pub fn tick(cpu: &mut Cpu) -> Result<TickOutcome, SimError> {
    if cpu.halted {
        return Ok(TickOutcome::Halted);
    }

    cpu.stats.cycles += 1;
    cpu.last_cycle = CycleTrace {
        cycle: cpu.stats.cycles,
        ..CycleTrace::default()
    };
    if cpu.trace {
        trace!(cycle = cpu.stats.cycles, "clock");
    }

    let halted = wb_stage(cpu);
    mem_stage(cpu)?;
    execute_stage(cpu);
    decode_stage(cpu);
    let fetched = fetch_stage(cpu);
    cpu.last_cycle.stalled = cpu.stall;

    if halted {
        cpu.halted = true;
        return Ok(TickOutcome::Halted);
    }
    if fetched == FetchOutcome::OutOfRange && cpu.pipeline_empty() {
        return Err(SimError::PcOutOfRange { pc: cpu.pc });
    }
    Ok(TickOutcome::Continuing)
}
