use apex_core::isa::{Opcode, OperandField};
use rstest::rstest;

#[rstest]
#[case("ADD", Opcode::Add)]
#[case("add", Opcode::Add)]
#[case("Movc", Opcode::Movc)]
#[case("LOADP", Opcode::Loadp)]
#[case("storep", Opcode::Storep)]
#[case("BNN", Opcode::Bnn)]
#[case("jalr", Opcode::Jalr)]
#[case("HALT", Opcode::Halt)]
#[case("NOP", Opcode::Nop)]
fn mnemonics_parse_case_insensitively(#[case] text: &str, #[case] expected: Opcode) {
    assert_eq!(text.parse::<Opcode>().expect("known mnemonic"), expected);
}

#[rstest]
#[case("")]
#[case("ADDX")]
#[case("MOV")]
#[case("LDR")]
fn unknown_mnemonics_are_rejected(#[case] text: &str) {
    assert!(text.parse::<Opcode>().is_err());
}

#[test]
fn every_mnemonic_round_trips() {
    for op in Opcode::ALL {
        assert_eq!(op.mnemonic().parse::<Opcode>().expect("own mnemonic"), op);
        assert_eq!(op.to_string(), op.mnemonic());
    }
}

#[rstest]
#[case(Opcode::Add, 3)]
#[case(Opcode::Addl, 3)]
#[case(Opcode::Movc, 2)]
#[case(Opcode::Store, 3)]
#[case(Opcode::Cmp, 2)]
#[case(Opcode::Cml, 2)]
#[case(Opcode::Jump, 2)]
#[case(Opcode::Bz, 1)]
#[case(Opcode::Halt, 0)]
fn operand_counts(#[case] op: Opcode, #[case] count: usize) {
    assert_eq!(op.operands().len(), count);
}

#[test]
fn store_forms_name_data_register_first() {
    assert_eq!(
        Opcode::Storep.operands(),
        &[OperandField::Rs1, OperandField::Rs2, OperandField::Imm]
    );
    assert_eq!(Opcode::Movc.operands(), &[OperandField::Rd, OperandField::Imm]);
}
