//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the pipeline. Loads read one word at
//! the address computed in Execute and make their result forward-able, which is the
//! only point at which a load-use stall resolves. Stores write `rs1` at the computed
//! address. Every other instruction passes through unchanged.

use tracing::{debug, trace};

use crate::common::SimError;
use crate::core::Cpu;

/// Executes the memory access stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Returns
///
/// `Err(SimError::MemoryOutOfRange)` if the effective address lies outside data memory.
pub fn mem_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    if !cpu.memory.has_insn {
        return Ok(());
    }

    let mut latch = cpu.memory;
    let ctrl = latch.ctrl();

    if ctrl.mem_read {
        latch.result = cpu.load_word(latch.memory_address, latch.pc)?;
        let rd = latch.insn.rd;
        // LOADP with rd == base: the increment is written last, so it stays forwarded.
        if latch.base_register() != Some(rd) {
            cpu.forwarding.publish(rd, latch.result);
        }
        cpu.pending_loads.clear(rd);
        if cpu.stall {
            debug!(pc = latch.pc, reg = rd, "load complete, releasing stall");
        }
        cpu.stall = false;
    } else if ctrl.mem_write {
        cpu.store_word(latch.memory_address, latch.rs1_value, latch.pc)?;
    }

    if cpu.trace {
        trace!(
            stage = "MEM",
            pc = latch.pc,
            insn = %latch.insn,
            address = latch.memory_address,
            result = latch.result
        );
    }

    cpu.last_cycle.memory = Some(latch);
    cpu.writeback = latch;
    cpu.memory.clear();
    Ok(())
}
