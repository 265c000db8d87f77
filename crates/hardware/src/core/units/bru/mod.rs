//! Branch Resolution Unit (BRU).
//!
//! This module resolves control transfers in the Execute stage. It provides:
//! 1. **Condition Evaluation:** Tests a conditional branch against the condition flags.
//! 2. **Target Computation:** PC-relative targets for branches, register-indirect
//!    targets for JUMP and JALR.
//!
//! There is no prediction: every transfer is resolved in Execute and a taken one
//! flushes the Decode latch.

use crate::common::Word;
use crate::core::arch::flags::ConditionFlags;

/// Condition tested by a conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCondition {
    /// BZ: zero flag set.
    Zero,
    /// BNZ: zero flag clear.
    NotZero,
    /// BP: positive flag set.
    Positive,
    /// BNP: positive flag clear.
    NotPositive,
    /// BN: negative flag set.
    Negative,
    /// BNN: negative flag clear.
    NotNegative,
}

impl BranchCondition {
    /// Evaluates the condition against the current flags.
    pub const fn holds(self, flags: ConditionFlags) -> bool {
        match self {
            Self::Zero => flags.zero,
            Self::NotZero => !flags.zero,
            Self::Positive => flags.positive,
            Self::NotPositive => !flags.positive,
            Self::Negative => flags.negative,
            Self::NotNegative => !flags.negative,
        }
    }
}

/// Branch Resolution Unit.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Target of a PC-relative conditional branch.
    pub const fn relative_target(pc: Word, imm: Word) -> Word {
        pc.wrapping_add(imm)
    }

    /// Target of a register-indirect JUMP or JALR.
    pub const fn indirect_target(base: Word, imm: Word) -> Word {
        base.wrapping_add(imm)
    }

    /// Resolves a conditional branch.
    ///
    /// # Arguments
    ///
    /// * `cond`  - Condition encoded by the opcode.
    /// * `flags` - Condition flags as seen by the Execute stage this cycle.
    /// * `pc`    - Address of the branch.
    /// * `imm`   - Signed byte offset.
    ///
    /// # Returns
    ///
    /// `Some(target)` if the branch is taken, `None` if it falls through.
    pub const fn resolve(cond: BranchCondition, flags: ConditionFlags, pc: Word, imm: Word) -> Option<Word> {
        if cond.holds(flags) {
            Some(Self::relative_target(pc, imm))
        } else {
            None
        }
    }
}
