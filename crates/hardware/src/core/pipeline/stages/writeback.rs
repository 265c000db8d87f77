//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline.
//! It commits results to the register file, writes the incremented base register
//! of post-increment forms, re-derives the forwarding-table validity of every
//! register it wrote, and retires the instruction.

use tracing::{info, trace};

use crate::core::Cpu;
use crate::core::pipeline::hazards::revalidate;

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Returns
///
/// `true` if the retired instruction was HALT.
///
/// # Behavior
///
/// - Writes `rd` for every result-producing opcode, then the post-increment base
/// - Keeps a forwarding entry valid only while a newer producer of the same register
///   sits in the Memory or Execute latch
/// - Counts the retirement and classifies it for statistics
pub fn wb_stage(cpu: &mut Cpu) -> bool {
    if !cpu.writeback.has_insn {
        return false;
    }

    let latch = cpu.writeback;
    let ctrl = latch.ctrl();

    if ctrl.reg_write {
        let rd = latch.insn.rd;
        cpu.regs.write(rd, latch.result);
        revalidate(&mut cpu.forwarding, rd, &cpu.memory, &cpu.execute);
    }
    if let Some((base, value)) = latch.incremented_base() {
        cpu.regs.write(base, value);
        revalidate(&mut cpu.forwarding, base, &cpu.memory, &cpu.execute);
    }

    cpu.stats.record_retirement(ctrl.class);
    if cpu.trace {
        trace!(stage = "WB", pc = latch.pc, insn = %latch.insn, result = latch.result);
    }

    cpu.last_cycle.writeback = Some(latch);
    cpu.writeback.clear();

    if ctrl.halt {
        info!(
            pc = latch.pc,
            cycles = cpu.stats.cycles,
            retired = cpu.stats.instructions_retired,
            "HALT retired"
        );
    }
    ctrl.halt
}
