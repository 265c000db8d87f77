//! ALU arithmetic operations.
//!
//! Addition, subtraction and multiplication on 32-bit words. Overflow wraps
//! (two's complement), matching a 32-bit hardware datapath.

use crate::common::Word;
use crate::core::pipeline::signals::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The wrapped result. Returns `0` for non-arithmetic operations.
pub const fn execute(op: AluOp, a: Word, b: Word) -> Word {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Mul => a.wrapping_mul(b),
        AluOp::And | AluOp::Or | AluOp::Xor => 0,
    }
}
