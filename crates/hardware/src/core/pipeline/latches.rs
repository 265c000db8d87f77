//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the record carried between the five stages:
//! Fetch → Decode/RF → Execute → Memory → Writeback.
//!
//! 1. **Stage Latch:** One `StageLatch` per stage, copied wholesale from the stage behind it.
//! 2. **Register Targets:** Which registers an in-flight instruction will write at Writeback.
//! 3. **Cycle Trace:** A copy of what each stage processed during the last tick.

use crate::common::Word;
use crate::common::constants::POST_INCREMENT;
use crate::core::pipeline::signals::{BaseReg, ControlSignals};
use crate::isa::Instruction;

/// The per-stage in-flight instruction record.
///
/// `has_insn == false` marks a bubble. For the Fetch latch it instead means
/// "fetching is enabled"; it is cleared once HALT has been fetched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StageLatch {
    /// The latch holds a live instruction.
    pub has_insn: bool,
    /// Address the instruction was fetched from.
    pub pc: Word,
    /// Static instruction fields (opcode, rd, rs1, rs2, imm).
    pub insn: Instruction,
    /// Value of `rs1` read in Decode.
    pub rs1_value: Word,
    /// Value of `rs2` read in Decode.
    pub rs2_value: Word,
    /// Value computed in Execute or loaded in Memory.
    pub result: Word,
    /// Effective data address computed in Execute.
    pub memory_address: Word,
}

impl StageLatch {
    /// A latch holding a freshly fetched instruction.
    pub const fn fetched(pc: Word, insn: Instruction) -> Self {
        Self {
            has_insn: true,
            pc,
            insn,
            rs1_value: 0,
            rs2_value: 0,
            result: 0,
            memory_address: 0,
        }
    }

    /// Control signals of the held instruction.
    pub const fn ctrl(&self) -> ControlSignals {
        ControlSignals::for_opcode(self.insn.opcode)
    }

    /// Turns the latch into a bubble.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Index of the post-increment base register, if the instruction has one.
    pub const fn base_register(&self) -> Option<usize> {
        match self.ctrl().post_increment {
            Some(BaseReg::Rs1) => Some(self.insn.rs1),
            Some(BaseReg::Rs2) => Some(self.insn.rs2),
            None => None,
        }
    }

    /// The post-increment base register and its incremented value.
    pub const fn incremented_base(&self) -> Option<(usize, Word)> {
        match self.ctrl().post_increment {
            Some(BaseReg::Rs1) => Some((self.insn.rs1, self.rs1_value.wrapping_add(POST_INCREMENT))),
            Some(BaseReg::Rs2) => Some((self.insn.rs2, self.rs2_value.wrapping_add(POST_INCREMENT))),
            None => None,
        }
    }

    /// Whether this in-flight instruction will write `reg` at Writeback.
    ///
    /// Covers both `rd` writers and the base register of post-increment forms.
    pub fn targets(&self, reg: usize) -> bool {
        if !self.has_insn {
            return false;
        }
        (self.ctrl().reg_write && self.insn.rd == reg) || self.base_register() == Some(reg)
    }
}

/// Human-readable stage names, in pipeline order.
pub const STAGE_NAMES: [&str; 5] = ["Fetch", "Decode/RF", "Execute", "Memory", "Writeback"];

/// What each stage processed during one tick.
///
/// A stage that idled (bubble, resume-suppression, halted fetch) records `None`.
/// A stalled Decode still records the instruction it re-read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleTrace {
    /// 1-based cycle number of the tick.
    pub cycle: u64,
    /// Instruction captured by Fetch.
    pub fetch: Option<StageLatch>,
    /// Instruction examined by Decode.
    pub decode: Option<StageLatch>,
    /// Instruction executed.
    pub execute: Option<StageLatch>,
    /// Instruction that accessed (or passed through) Memory.
    pub memory: Option<StageLatch>,
    /// Instruction retired.
    pub writeback: Option<StageLatch>,
    /// Fetch and Decode were frozen by a load-use stall at the end of the tick.
    pub stalled: bool,
    /// Target of a taken control transfer resolved this tick.
    pub redirect: Option<Word>,
}

impl CycleTrace {
    /// Stage records paired with their names, Fetch first.
    pub const fn stages(&self) -> [(&'static str, Option<&StageLatch>); 5] {
        [
            (STAGE_NAMES[0], self.fetch.as_ref()),
            (STAGE_NAMES[1], self.decode.as_ref()),
            (STAGE_NAMES[2], self.execute.as_ref()),
            (STAGE_NAMES[3], self.memory.as_ref()),
            (STAGE_NAMES[4], self.writeback.as_ref()),
        ]
    }
}
