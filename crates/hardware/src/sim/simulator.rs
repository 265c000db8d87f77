//! Simulator: owns the CPU and drives the pipeline engine.
//!
//! Every run mode (single step, run N cycles, run until halt) is a loop over
//! [`Simulator::tick`]; no state changes happen outside it.

use std::path::Path;

use crate::common::{SimError, Word};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::flags::ConditionFlags;
use crate::core::pipeline::latches::CycleTrace;
use crate::core::pipeline::{TickOutcome, tick};
use crate::isa::Program;
use crate::sim::loader;

/// Top-level simulator: CPU state plus run limits.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural and pipeline state.
    pub cpu: Cpu,
    max_cycles: Option<u64>,
}

impl Simulator {
    /// Creates a simulator for an already decoded program.
    pub fn new(program: Program, config: &Config) -> Result<Self, SimError> {
        Ok(Self {
            cpu: Cpu::new(program, config)?,
            max_cycles: config.general.max_cycles,
        })
    }

    /// Loads a listing file at the configured entry address and creates a simulator for it.
    pub fn from_file(path: impl AsRef<Path>, config: &Config) -> Result<Self, SimError> {
        let program = loader::load_program(path, config.general.entry_pc)?;
        Self::new(program, config)
    }

    /// Advances the simulator by one clock cycle.
    pub fn tick(&mut self) -> Result<TickOutcome, SimError> {
        tick(&mut self.cpu)
    }

    /// Runs at most `cycles` ticks, stopping early if HALT retires.
    ///
    /// # Returns
    ///
    /// `Halted` if the program finished within the budget.
    pub fn run_cycles(&mut self, cycles: u64) -> Result<TickOutcome, SimError> {
        self.run_cycles_with(cycles, |_| {})
    }

    /// Like [`Self::run_cycles`], calling `on_cycle` after every tick.
    pub fn run_cycles_with(
        &mut self,
        cycles: u64,
        mut on_cycle: impl FnMut(&Cpu),
    ) -> Result<TickOutcome, SimError> {
        for _ in 0..cycles {
            let outcome = self.tick()?;
            on_cycle(&self.cpu);
            if outcome == TickOutcome::Halted {
                return Ok(outcome);
            }
        }
        Ok(self.outcome())
    }

    /// Runs until HALT retires or the configured `max_cycles` is reached.
    pub fn run_until_halt(&mut self) -> Result<TickOutcome, SimError> {
        self.run_until_halt_with(|_| {})
    }

    /// Like [`Self::run_until_halt`], calling `on_cycle` after every tick.
    pub fn run_until_halt_with(
        &mut self,
        mut on_cycle: impl FnMut(&Cpu),
    ) -> Result<TickOutcome, SimError> {
        match self.max_cycles {
            Some(limit) => {
                let remaining = limit.saturating_sub(self.cpu.cycles());
                self.run_cycles_with(remaining, on_cycle)
            }
            None => loop {
                let outcome = self.tick()?;
                on_cycle(&self.cpu);
                if outcome == TickOutcome::Halted {
                    return Ok(outcome);
                }
            },
        }
    }

    /// Whether HALT has retired.
    pub const fn is_halted(&self) -> bool {
        self.cpu.halted
    }

    const fn outcome(&self) -> TickOutcome {
        if self.cpu.halted {
            TickOutcome::Halted
        } else {
            TickOutcome::Continuing
        }
    }

    /// Reads an architectural register.
    pub fn read_register(&self, index: usize) -> Result<Word, SimError> {
        self.cpu.read_register(index)
    }

    /// Reads a data memory word.
    pub fn read_memory(&self, address: Word) -> Result<Word, SimError> {
        self.cpu.read_memory(address)
    }

    /// Current condition flags.
    pub const fn flags(&self) -> ConditionFlags {
        self.cpu.flags()
    }

    /// Ticks executed so far.
    pub const fn cycles(&self) -> u64 {
        self.cpu.cycles()
    }

    /// Instructions retired so far.
    pub const fn instructions_retired(&self) -> u64 {
        self.cpu.instructions_retired()
    }

    /// What each stage processed during the most recent tick.
    pub const fn last_cycle(&self) -> &CycleTrace {
        &self.cpu.last_cycle
    }
}
