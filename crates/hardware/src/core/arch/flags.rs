//! Condition flags.
//!
//! The three flags are overwritten as a group by every result-producing Execute
//! operation. MOVC is the single exception and only touches `zero`.

use crate::common::Word;

/// The APEX condition flag register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConditionFlags {
    /// Last result was zero.
    pub zero: bool,
    /// Last result was strictly positive.
    pub positive: bool,
    /// Last result was strictly negative.
    pub negative: bool,
}

impl ConditionFlags {
    /// Derives all three flags from a result value.
    ///
    /// # Arguments
    ///
    /// * `value` - The result produced by the Execute stage.
    ///
    /// # Returns
    ///
    /// Flags with exactly one of `zero`, `positive`, `negative` set.
    pub const fn from_result(value: Word) -> Self {
        Self {
            zero: value == 0,
            positive: value > 0,
            negative: value < 0,
        }
    }

    /// Overwrites all three flags from `value`.
    pub const fn set_from_result(&mut self, value: Word) {
        *self = Self::from_result(value);
    }

    /// Updates only the zero flag, leaving positive and negative untouched.
    pub const fn set_zero_from(&mut self, value: Word) {
        self.zero = value == 0;
    }
}
