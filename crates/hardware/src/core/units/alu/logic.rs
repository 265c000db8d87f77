//! ALU bitwise logical operations.

use crate::common::Word;
use crate::core::pipeline::signals::AluOp;

/// Executes a bitwise logical operation.
///
/// Returns `0` for non-logical operations.
pub const fn execute(op: AluOp, a: Word, b: Word) -> Word {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Add | AluOp::Sub | AluOp::Mul => 0,
    }
}
