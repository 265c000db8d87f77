use apex_core::isa::{Instruction, Opcode, OperandField};
use apex_core::sim::loader::parse_line;

use crate::common::builder::instruction::InstructionBuilder;

#[test]
fn rendering_loads_back_as_the_same_instruction() {
    for op in Opcode::ALL {
        // Only fields the opcode names survive a round trip; the rest stay zero.
        let mut expected = Instruction::bare(op);
        for field in op.operands() {
            match field {
                OperandField::Rd => expected.rd = 3,
                OperandField::Rs1 => expected.rs1 = 1,
                OperandField::Rs2 => expected.rs2 = 2,
                OperandField::Imm => expected.imm = -12,
            }
        }
        let text = expected.to_string();
        let parsed = parse_line(&text, 1).expect("rendered text parses");
        assert_eq!(parsed, Some(expected), "{text}");
    }
}

#[test]
fn listing_syntax() {
    let insn = InstructionBuilder::new().loadp(4, 7, 16).build();
    assert_eq!(insn.to_string(), "LOADP,R4,R7,#16");
    let insn = InstructionBuilder::new().branch(Opcode::Bnz, -8).build();
    assert_eq!(insn.to_string(), "BNZ,#-8");
}
