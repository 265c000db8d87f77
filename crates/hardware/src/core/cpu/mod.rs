//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains registers, condition flags, program counter and data memory.
//! 2. **Pipeline Control:** Holds the five stage latches, the forwarding table, the pending-load
//!    set and the stall/redirect scalars the stages share.
//! 3. **Observability:** Read-only queries and state dumps for drivers and tests.

/// Data memory access and load/store operations.
pub mod memory;

use crate::common::{RegisterFile, SimError, Word};
use crate::config::Config;
use crate::core::arch::flags::ConditionFlags;
use crate::core::pipeline::hazards::{ForwardingTable, PendingLoads};
use crate::core::pipeline::latches::{CycleTrace, StageLatch};
use crate::isa::Program;
use crate::sim::report;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
///
/// There is one mutable aggregate; every pipeline stage receives it by exclusive
/// reference during its slice of a tick. Fields are public so stages, drivers and
/// test harnesses can inspect them; during a run only the stages mutate them.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Next fetch address.
    pub pc: Word,
    /// Zero, positive and negative flags.
    pub flags: ConditionFlags,
    /// Flat word-addressed data memory.
    pub data_memory: Vec<Word>,
    /// Code memory.
    pub program: Program,

    /// Fetch latch; `has_insn` doubles as the fetch-enable bit.
    pub fetch: StageLatch,
    /// Decode/RF latch.
    pub decode: StageLatch,
    /// Execute latch.
    pub execute: StageLatch,
    /// Memory latch.
    pub memory: StageLatch,
    /// Writeback latch.
    pub writeback: StageLatch,

    /// Newest in-flight value per register.
    pub forwarding: ForwardingTable,
    /// Registers awaiting a load.
    pub pending_loads: PendingLoads,
    /// One-shot: skip fetching for one tick after a taken transfer.
    pub fetch_from_next_cycle: bool,
    /// Fetch and Decode are frozen by a load-use hazard.
    pub stall: bool,
    /// HALT has retired.
    pub halted: bool,

    /// Enable per-stage tracing.
    pub trace: bool,
    /// Performance statistics; also holds the cycle and retirement counters.
    pub stats: SimStats,
    /// What each stage processed during the most recent tick.
    pub last_cycle: CycleTrace,
}

impl Cpu {
    /// Creates a new CPU with the program installed and all state reset.
    ///
    /// # Arguments
    ///
    /// * `program` - Code memory; the PC starts at its base address.
    /// * `config` - The simulator configuration parameters.
    ///
    /// # Returns
    ///
    /// The initialized CPU, or an error if the program is empty or names a register
    /// outside the register file.
    pub fn new(program: Program, config: &Config) -> Result<Self, SimError> {
        program.validate()?;

        Ok(Self {
            regs: RegisterFile::new(),
            pc: program.base(),
            flags: ConditionFlags::default(),
            data_memory: vec![0; config.memory.data_memory_size],
            program,
            fetch: StageLatch {
                has_insn: true,
                ..StageLatch::default()
            },
            decode: StageLatch::default(),
            execute: StageLatch::default(),
            memory: StageLatch::default(),
            writeback: StageLatch::default(),
            forwarding: ForwardingTable::new(),
            pending_loads: PendingLoads::new(),
            fetch_from_next_cycle: false,
            stall: false,
            halted: false,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
            last_cycle: CycleTrace::default(),
        })
    }

    /// Reads an architectural register.
    ///
    /// # Returns
    ///
    /// The register value, or `SimError::RegisterOutOfRange` for a bad index.
    pub fn read_register(&self, index: usize) -> Result<Word, SimError> {
        self.regs
            .values()
            .get(index)
            .copied()
            .ok_or(SimError::RegisterOutOfRange { index })
    }

    /// Current condition flags.
    pub const fn flags(&self) -> ConditionFlags {
        self.flags
    }

    /// Ticks executed so far, including the one in which HALT retired.
    pub const fn cycles(&self) -> u64 {
        self.stats.cycles
    }

    /// Instructions retired in Writeback so far.
    pub const fn instructions_retired(&self) -> u64 {
        self.stats.instructions_retired
    }

    /// Whether no instruction is in flight past Fetch.
    pub const fn pipeline_empty(&self) -> bool {
        !self.decode.has_insn
            && !self.execute.has_insn
            && !self.memory.has_insn
            && !self.writeback.has_insn
    }

    /// Dumps the current CPU state (PC, flags and registers) to stdout.
    pub fn dump_state(&self) {
        println!("PC = {}", self.pc);
        println!(
            "P = {} Z = {} N = {}",
            u8::from(self.flags.positive),
            u8::from(self.flags.zero),
            u8::from(self.flags.negative)
        );
        print!("{}", report::format_registers(&self.regs));
    }
}
