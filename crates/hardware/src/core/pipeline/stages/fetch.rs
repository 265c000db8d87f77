//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline.
//! It reads the instruction at the current Program Counter (PC) from code memory,
//! hands it to Decode unless a load-use stall is active, and stops fetching once
//! HALT has been fetched.

use tracing::{trace, warn};

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::Cpu;
use crate::core::pipeline::latches::StageLatch;

/// What the Fetch stage did during one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// An instruction was captured (and handed on unless stalled).
    Fetched,
    /// Fetching is disabled because HALT was already fetched.
    Disabled,
    /// The tick after a taken control transfer; nothing fetched.
    Bubble,
    /// The PC lies outside code memory; nothing fetched.
    OutOfRange,
}

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - Consumes the one-shot resume flag set by a taken transfer and fetches nothing
/// - Idles without advancing the PC when the PC is outside code memory
/// - Otherwise captures the instruction; if not stalled, advances the PC by 4 and
///   copies the latch into Decode
/// - Disables further fetching once HALT has been handed to Decode
pub fn fetch_stage(cpu: &mut Cpu) -> FetchOutcome {
    if !cpu.fetch.has_insn {
        return FetchOutcome::Disabled;
    }

    if cpu.fetch_from_next_cycle {
        cpu.fetch_from_next_cycle = false;
        cpu.stats.fetch_bubbles += 1;
        if cpu.trace {
            trace!(stage = "IF", pc = cpu.pc, "bubble after redirect");
        }
        return FetchOutcome::Bubble;
    }

    let Some(&insn) = cpu.program.fetch(cpu.pc) else {
        warn!(pc = cpu.pc, "fetch address outside code memory, idling");
        return FetchOutcome::OutOfRange;
    };

    cpu.fetch = StageLatch::fetched(cpu.pc, insn);
    cpu.last_cycle.fetch = Some(cpu.fetch);
    if cpu.trace {
        trace!(stage = "IF", pc = cpu.pc, insn = %insn);
    }

    if !cpu.stall {
        cpu.pc = cpu.pc.wrapping_add(INSTRUCTION_SIZE);
        cpu.decode = cpu.fetch;
        if cpu.fetch.ctrl().halt {
            cpu.fetch.has_insn = false;
        }
    }
    FetchOutcome::Fetched
}
