//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the APEX simulator. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Instruction mix:** Retirements by class (ALU, compare, load, store, control, other).
//! 3. **Hazards:** Load-use stall cycles, taken redirects, flushed instructions and fetch bubbles.

use std::time::Instant;

use crate::core::pipeline::signals::InstClass;

/// Simulation statistics structure tracking all performance metrics.
///
/// `cycles` and `instructions_retired` double as the architectural cycle and
/// retirement counters exposed by the CPU.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed, including the one in which HALT retired.
    pub cycles: u64,
    /// Number of instructions retired in Writeback.
    pub instructions_retired: u64,

    /// ALU instructions retired (arithmetic, logic, MOVC).
    pub inst_alu: u64,
    /// CMP/CML instructions retired.
    pub inst_compare: u64,
    /// Load instructions retired.
    pub inst_load: u64,
    /// Store instructions retired.
    pub inst_store: u64,
    /// Branch and jump instructions retired.
    pub inst_control: u64,
    /// HALT and NOP instructions retired.
    pub inst_other: u64,

    /// Cycles in which Decode was held by a load-use hazard.
    pub stalls_data: u64,
    /// Taken control transfers resolved in Execute.
    pub redirects: u64,
    /// Instructions discarded from Decode by a redirect.
    pub flushed: u64,
    /// Fetch cycles skipped right after a redirect.
    pub fetch_bubbles: u64,
}

impl Default for SimStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_compare: 0,
            inst_load: 0,
            inst_store: 0,
            inst_control: 0,
            inst_other: 0,
            stalls_data: 0,
            redirects: 0,
            flushed: 0,
            fetch_bubbles: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"hazards"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "hazards"];

impl SimStats {
    /// Counts one retirement of the given class.
    pub const fn record_retirement(&mut self, class: InstClass) {
        self.instructions_retired += 1;
        match class {
            InstClass::Alu => self.inst_alu += 1,
            InstClass::Compare => self.inst_compare += 1,
            InstClass::Load => self.inst_load += 1,
            InstClass::Store => self.inst_store += 1,
            InstClass::Control => self.inst_control += 1,
            InstClass::Other => self.inst_other += 1,
        }
    }

    /// Renders only the requested statistics sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]; unknown names are
    /// ignored. Pass an empty slice to render all sections.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to render, or empty for all.
    pub fn render_sections(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let cyc = self.cycles.max(1) as f64;
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64, of: f64| (n as f64 / of) * 100.0;
        let mut lines = Vec::new();

        lines.push("\n==========================================================".to_string());
        lines.push("APEX PIPELINE SIMULATION STATISTICS".to_string());
        lines.push("==========================================================".to_string());
        if want("summary") {
            let seconds = self.start_time.elapsed().as_secs_f64();
            lines.push(format!("host_seconds             {seconds:.4} s"));
            lines.push(format!("sim_cycles               {}", self.cycles));
            lines.push(format!("sim_insts                {}", self.instructions_retired));
            lines.push(format!("sim_ipc                  {:.4}", self.instructions_retired as f64 / cyc));
            lines.push(format!("sim_cpi                  {:.4}", self.cycles as f64 / instr));
            lines.push("----------------------------------------------------------".to_string());
        }
        if want("instruction_mix") {
            lines.push("INSTRUCTION MIX".to_string());
            for (name, count) in [
                ("op.alu", self.inst_alu),
                ("op.compare", self.inst_compare),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.control", self.inst_control),
                ("op.other", self.inst_other),
            ] {
                lines.push(format!("  {name:<22} {count} ({:.2}%)", pct(count, instr)));
            }
            lines.push("----------------------------------------------------------".to_string());
        }
        if want("hazards") {
            lines.push("HAZARDS".to_string());
            lines.push(format!(
                "  stalls.load_use        {} ({:.2}%)",
                self.stalls_data,
                pct(self.stalls_data, cyc)
            ));
            lines.push(format!("  control.redirects      {}", self.redirects));
            lines.push(format!("  control.flushed        {}", self.flushed));
            lines.push(format!("  control.fetch_bubbles  {}", self.fetch_bubbles));
        }
        lines.push("==========================================================".to_string());
        lines.join("\n")
    }

    /// Prints only the requested statistics sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        println!("{}", self.render_sections(sections));
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
