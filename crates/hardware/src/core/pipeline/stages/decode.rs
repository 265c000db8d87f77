//! Instruction Decode / Register Read (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It reads the source
//! operands the opcode needs, preferring a valid forwarding-table entry over the
//! register file, and raises the stall flag when a source is still awaiting a load.
//! A stalled instruction stays in the Decode latch and re-reads its operands on the
//! next tick.

use tracing::{debug, trace};

use crate::core::Cpu;
use crate::core::pipeline::hazards::read_operand;

/// Executes the instruction decode stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - Reads `rs1` and/or `rs2` according to the opcode's control signals
/// - Sets `cpu.stall` if a source register is marked pending-load
/// - Moves the latch into Execute when no stall is active
pub fn decode_stage(cpu: &mut Cpu) {
    if !cpu.decode.has_insn {
        return;
    }

    let ctrl = cpu.decode.ctrl();
    let (rs1, rs2) = (cpu.decode.insn.rs1, cpu.decode.insn.rs2);

    if ctrl.reads_rs1 {
        cpu.decode.rs1_value = read_operand(&cpu.regs, &cpu.forwarding, rs1);
        if cpu.pending_loads.is_pending(rs1) {
            cpu.stall = true;
        }
    }
    if ctrl.reads_rs2 {
        cpu.decode.rs2_value = read_operand(&cpu.regs, &cpu.forwarding, rs2);
        if cpu.pending_loads.is_pending(rs2) {
            cpu.stall = true;
        }
    }

    cpu.last_cycle.decode = Some(cpu.decode);
    if cpu.trace {
        trace!(
            stage = "ID",
            pc = cpu.decode.pc,
            insn = %cpu.decode.insn,
            rs1_value = cpu.decode.rs1_value,
            rs2_value = cpu.decode.rs2_value
        );
    }

    if cpu.stall {
        cpu.stats.stalls_data += 1;
        debug!(pc = cpu.decode.pc, "load-use stall");
        return;
    }

    cpu.execute = cpu.decode;
    cpu.decode.clear();
}
