//! State and stage formatting.
//!
//! Text renderings of the simulator state for the drivers. Each function returns a
//! `String` so callers decide where it goes; nothing here reads or mutates state
//! beyond the references it is given.

use crate::common::RegisterFile;
use crate::common::constants::REGS_PER_ROW;
use crate::core::Cpu;
use crate::core::arch::flags::ConditionFlags;
use crate::core::pipeline::latches::{CycleTrace, StageLatch};

/// One stage line: `Execute        : pc(4008) ADD,R3,R1,R2`.
pub fn format_stage(name: &str, latch: &StageLatch) -> String {
    format!("{name:<15}: pc({}) {}", latch.pc, latch.insn)
}

/// The cycle header followed by every stage that processed an instruction, Fetch first.
pub fn format_cycle(trace: &CycleTrace) -> String {
    let rule = "--------------------------------------------";
    let mut lines = vec![
        rule.to_string(),
        format!("Clock Cycle #: {}", trace.cycle),
        rule.to_string(),
    ];
    lines.extend(
        trace
            .stages()
            .into_iter()
            .filter_map(|(name, latch)| latch.map(|latch| format_stage(name, latch))),
    );
    terminated(&lines)
}

/// The register file as two rows of eight `R{i}[{v}]` cells.
pub fn format_registers(regs: &RegisterFile) -> String {
    let mut lines = vec![
        "----------".to_string(),
        "Registers:".to_string(),
        "----------".to_string(),
    ];
    for (row, values) in regs.values().chunks(REGS_PER_ROW).enumerate() {
        let cells: Vec<String> = values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("R{}[{v}]", row * REGS_PER_ROW + i))
            .collect();
        lines.push(cells.join(" "));
    }
    terminated(&lines)
}

/// Every non-zero data memory word, or a note that memory is all zeros.
pub fn format_memory(cpu: &Cpu) -> String {
    let mut lines = vec![
        "--------------".to_string(),
        "Memory Values:".to_string(),
        "--------------".to_string(),
    ];
    let header = lines.len();
    lines.extend(
        cpu.nonzero_memory()
            .map(|(address, value)| format!("MEM[{address}] = {value}")),
    );
    if lines.len() == header {
        lines.push("All the memory values are zeros".to_string());
    }
    terminated(&lines)
}

/// The three flags as `0`/`1`, positive first.
pub fn format_flags(flags: ConditionFlags) -> String {
    format!(
        "-------\nFlags:\n-------\nP = {}\nZ = {}\nN = {}\n",
        u8::from(flags.positive),
        u8::from(flags.zero),
        u8::from(flags.negative)
    )
}

/// Registers, memory and flags, as printed after every cycle.
pub fn format_state(cpu: &Cpu) -> String {
    let mut out = format_registers(&cpu.regs);
    out.push_str(&format_memory(cpu));
    out.push_str(&format_flags(cpu.flags));
    out
}

/// Final line printed once HALT retires.
pub fn completion_line(cpu: &Cpu) -> String {
    format!(
        "Simulation Complete, cycles = {} instructions = {}",
        cpu.cycles(),
        cpu.instructions_retired()
    )
}

/// Joins `lines` with a newline after each one.
fn terminated(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
