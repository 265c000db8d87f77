//! Pipeline control signals.
//!
//! This module derives every per-opcode decision the stages make from one exhaustive
//! match. It performs:
//! 1. **Operand Selection:** Which source registers Decode reads and which values feed the ALU.
//! 2. **Result Policy:** Whether the result is published at Execute and written at Writeback.
//! 3. **Flag Policy:** Which condition flags the Execute stage overwrites.
//! 4. **Memory and Control:** Load/store direction, post-increment base, branch conditions.

use crate::core::units::bru::BranchCondition;
use crate::isa::Opcode;

/// Integer ALU operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    #[default]
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Wrapping multiplication.
    Mul,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
}

/// Source for ALU operand A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpASrc {
    /// Use `rs1` register value.
    #[default]
    Reg1,
    /// Use zero.
    Zero,
}

/// Source for ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Use the immediate.
    #[default]
    Imm,
    /// Use `rs2` register value.
    Reg2,
}

/// Which condition flags an instruction overwrites in Execute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlagUpdate {
    /// Flags untouched.
    #[default]
    None,
    /// Only the zero flag (MOVC).
    ZeroOnly,
    /// Zero, positive and negative as a group.
    All,
}

/// Base register of a post-increment load or store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseReg {
    /// `rs1` (LOADP).
    Rs1,
    /// `rs2` (STOREP).
    Rs2,
}

/// Coarse instruction class used for statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InstClass {
    /// Register-register and register-immediate arithmetic, MOVC.
    Alu,
    /// CMP, CML.
    Compare,
    /// LOAD, LOADP.
    Load,
    /// STORE, STOREP.
    Store,
    /// Branches, JUMP, JALR.
    Control,
    /// HALT, NOP.
    #[default]
    Other,
}

/// Control signals for pipeline stage execution.
///
/// Derived from the opcode alone; the stages never match on opcodes for anything
/// these signals already describe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Decode reads `rs1`.
    pub reads_rs1: bool,
    /// Decode reads `rs2`.
    pub reads_rs2: bool,
    /// ALU operation, if the instruction computes in Execute.
    pub alu_op: Option<AluOp>,
    /// ALU operand A source.
    pub a_src: OpASrc,
    /// ALU operand B source.
    pub b_src: OpBSrc,
    /// Flags written by Execute.
    pub flags: FlagUpdate,
    /// `rd` is written at Writeback.
    pub reg_write: bool,
    /// The result is known at Execute and published to the forwarding table there.
    pub forward_at_execute: bool,
    /// Instruction reads data memory.
    pub mem_read: bool,
    /// Instruction writes data memory.
    pub mem_write: bool,
    /// Post-increment base register, if any.
    pub post_increment: Option<BaseReg>,
    /// Condition of a conditional branch.
    pub branch: Option<BranchCondition>,
    /// Unconditional register-indirect transfer (JUMP, JALR).
    pub jump: bool,
    /// JALR: the result is the return address.
    pub link: bool,
    /// HALT.
    pub halt: bool,
    /// Statistics class.
    pub class: InstClass,
}

impl ControlSignals {
    /// Derives the control signals for `op`.
    ///
    /// # Arguments
    ///
    /// * `op` - Opcode of the instruction.
    ///
    /// # Returns
    ///
    /// The full signal set. Adding an opcode fails to compile until it is handled here.
    pub const fn for_opcode(op: Opcode) -> Self {
        const NONE: ControlSignals = ControlSignals {
            reads_rs1: false,
            reads_rs2: false,
            alu_op: None,
            a_src: OpASrc::Reg1,
            b_src: OpBSrc::Imm,
            flags: FlagUpdate::None,
            reg_write: false,
            forward_at_execute: false,
            mem_read: false,
            mem_write: false,
            post_increment: None,
            branch: None,
            jump: false,
            link: false,
            halt: false,
            class: InstClass::Other,
        };
        const RR_ALU: ControlSignals = ControlSignals {
            reads_rs1: true,
            reads_rs2: true,
            b_src: OpBSrc::Reg2,
            flags: FlagUpdate::All,
            reg_write: true,
            forward_at_execute: true,
            class: InstClass::Alu,
            ..NONE
        };
        const RI_ALU: ControlSignals = ControlSignals {
            reads_rs1: true,
            flags: FlagUpdate::All,
            reg_write: true,
            forward_at_execute: true,
            class: InstClass::Alu,
            ..NONE
        };
        const BRANCH: ControlSignals = ControlSignals {
            class: InstClass::Control,
            ..NONE
        };

        match op {
            Opcode::Add => Self {
                alu_op: Some(AluOp::Add),
                ..RR_ALU
            },
            Opcode::Sub => Self {
                alu_op: Some(AluOp::Sub),
                ..RR_ALU
            },
            Opcode::Mul => Self {
                alu_op: Some(AluOp::Mul),
                ..RR_ALU
            },
            Opcode::And => Self {
                alu_op: Some(AluOp::And),
                ..RR_ALU
            },
            Opcode::Or => Self {
                alu_op: Some(AluOp::Or),
                ..RR_ALU
            },
            Opcode::Xor => Self {
                alu_op: Some(AluOp::Xor),
                ..RR_ALU
            },
            Opcode::Addl => Self {
                alu_op: Some(AluOp::Add),
                ..RI_ALU
            },
            Opcode::Subl => Self {
                alu_op: Some(AluOp::Sub),
                ..RI_ALU
            },
            Opcode::Movc => Self {
                reads_rs1: false,
                alu_op: Some(AluOp::Add),
                a_src: OpASrc::Zero,
                flags: FlagUpdate::ZeroOnly,
                ..RI_ALU
            },
            Opcode::Cmp => Self {
                reads_rs1: true,
                reads_rs2: true,
                alu_op: Some(AluOp::Sub),
                b_src: OpBSrc::Reg2,
                flags: FlagUpdate::All,
                class: InstClass::Compare,
                ..NONE
            },
            Opcode::Cml => Self {
                reads_rs1: true,
                alu_op: Some(AluOp::Sub),
                flags: FlagUpdate::All,
                class: InstClass::Compare,
                ..NONE
            },
            Opcode::Load => Self {
                reads_rs1: true,
                reg_write: true,
                mem_read: true,
                class: InstClass::Load,
                ..NONE
            },
            Opcode::Loadp => Self {
                reads_rs1: true,
                reg_write: true,
                mem_read: true,
                post_increment: Some(BaseReg::Rs1),
                class: InstClass::Load,
                ..NONE
            },
            Opcode::Store => Self {
                reads_rs1: true,
                reads_rs2: true,
                mem_write: true,
                class: InstClass::Store,
                ..NONE
            },
            Opcode::Storep => Self {
                reads_rs1: true,
                reads_rs2: true,
                mem_write: true,
                post_increment: Some(BaseReg::Rs2),
                class: InstClass::Store,
                ..NONE
            },
            Opcode::Bz => Self {
                branch: Some(BranchCondition::Zero),
                ..BRANCH
            },
            Opcode::Bnz => Self {
                branch: Some(BranchCondition::NotZero),
                ..BRANCH
            },
            Opcode::Bp => Self {
                branch: Some(BranchCondition::Positive),
                ..BRANCH
            },
            Opcode::Bnp => Self {
                branch: Some(BranchCondition::NotPositive),
                ..BRANCH
            },
            Opcode::Bn => Self {
                branch: Some(BranchCondition::Negative),
                ..BRANCH
            },
            Opcode::Bnn => Self {
                branch: Some(BranchCondition::NotNegative),
                ..BRANCH
            },
            Opcode::Jump => Self {
                reads_rs1: true,
                jump: true,
                ..BRANCH
            },
            Opcode::Jalr => Self {
                reads_rs1: true,
                jump: true,
                link: true,
                reg_write: true,
                forward_at_execute: true,
                ..BRANCH
            },
            Opcode::Halt => Self { halt: true, ..NONE },
            Opcode::Nop => NONE,
        }
    }
}
