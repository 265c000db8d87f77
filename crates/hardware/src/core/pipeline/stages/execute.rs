//! Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. It performs:
//! 1. **ALU Operations:** Arithmetic, logic, MOVC and compares, with condition flag updates.
//! 2. **Address Generation:** Effective addresses for loads and stores; loads mark their
//!    destination as pending.
//! 3. **Control Transfer:** Branch condition evaluation and JUMP/JALR targets; a taken
//!    transfer redirects the PC and flushes Decode.
//! 4. **Early Forwarding:** Publishes results known at this stage, including the
//!    incremented base of post-increment loads and stores.

use tracing::{debug, trace};

use crate::common::Word;
use crate::common::constants::LINK_OFFSET;
use crate::core::Cpu;
use crate::core::pipeline::signals::{FlagUpdate, OpASrc, OpBSrc};
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;

/// Executes the execute stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - Computes the result and overwrites the condition flags per the opcode
/// - Computes `rs1 + imm` for loads and `rs2 + imm` for stores
/// - On a taken transfer: sets the PC, sets the one-shot fetch bubble, flushes Decode and
///   re-enables Fetch
/// - Publishes forwarding entries, then moves the latch into Memory
pub fn execute_stage(cpu: &mut Cpu) {
    if !cpu.execute.has_insn {
        return;
    }

    let mut latch = cpu.execute;
    let ctrl = latch.ctrl();
    let imm = latch.insn.imm;

    if let Some(op) = ctrl.alu_op {
        let a = match ctrl.a_src {
            OpASrc::Reg1 => latch.rs1_value,
            OpASrc::Zero => 0,
        };
        let b = match ctrl.b_src {
            OpBSrc::Imm => imm,
            OpBSrc::Reg2 => latch.rs2_value,
        };
        latch.result = Alu::execute(op, a, b);
        match ctrl.flags {
            FlagUpdate::All => cpu.flags.set_from_result(latch.result),
            FlagUpdate::ZeroOnly => cpu.flags.set_zero_from(latch.result),
            FlagUpdate::None => {}
        }
    }

    if ctrl.mem_read {
        latch.memory_address = latch.rs1_value.wrapping_add(imm);
        cpu.pending_loads.mark(latch.insn.rd);
    } else if ctrl.mem_write {
        latch.memory_address = latch.rs2_value.wrapping_add(imm);
    }

    let target: Option<Word> = if let Some(cond) = ctrl.branch {
        Bru::resolve(cond, cpu.flags, latch.pc, imm)
    } else if ctrl.jump {
        Some(Bru::indirect_target(latch.rs1_value, imm))
    } else {
        None
    };
    if ctrl.link {
        latch.result = latch.pc.wrapping_add(LINK_OFFSET);
    }

    if ctrl.forward_at_execute {
        cpu.forwarding.publish(latch.insn.rd, latch.result);
    }
    if let Some((base, value)) = latch.incremented_base() {
        cpu.forwarding.publish(base, value);
    }

    if cpu.trace {
        trace!(
            stage = "EX",
            pc = latch.pc,
            insn = %latch.insn,
            result = latch.result,
            address = latch.memory_address
        );
    }

    if let Some(target) = target {
        redirect(cpu, target);
    }

    cpu.last_cycle.execute = Some(latch);
    cpu.memory = latch;
    cpu.execute.clear();
}

/// Redirects fetch to `target` and flushes the Decode latch.
fn redirect(cpu: &mut Cpu, target: Word) {
    if cpu.decode.has_insn {
        cpu.stats.flushed += 1;
    }
    debug!(
        target,
        flushed = cpu.decode.has_insn,
        "taken control transfer, flushing decode"
    );
    cpu.pc = target;
    cpu.fetch_from_next_cycle = true;
    cpu.decode.clear();
    cpu.fetch.has_insn = true;
    cpu.stats.redirects += 1;
    cpu.last_cycle.redirect = Some(target);
}
