//! CPU Initialization Tests.
//!
//! Verifies the reset state of a freshly installed program and the checks
//! performed when a program is installed.

use apex_core::common::SimError;
use apex_core::config::Config;
use apex_core::core::Cpu;
use apex_core::isa::{Instruction, Opcode, Program};

use crate::common::builder::instruction::{add, halt, movc};

#[test]
fn reset_state() {
    let cpu = Cpu::new(Program::new(vec![movc(1, 5), halt()]), &Config::default())
        .expect("valid program");

    assert_eq!(cpu.pc, 4000);
    assert!(cpu.regs.values().iter().all(|&v| v == 0));
    assert!(cpu.data_memory.iter().all(|&v| v == 0));
    assert_eq!(cpu.flags(), Default::default());
    assert!(cpu.fetch.has_insn, "fetching is enabled at reset");
    assert!(cpu.pipeline_empty());
    assert!(!cpu.stall && !cpu.halted && !cpu.fetch_from_next_cycle);
    assert_eq!(cpu.cycles(), 0);
    assert_eq!(cpu.instructions_retired(), 0);
    assert!(!cpu.pending_loads.any());
    for reg in 0..16 {
        assert_eq!(cpu.forwarding.lookup(reg), None);
    }
}

#[test]
fn empty_program_is_rejected() {
    let err = Cpu::new(Program::new(Vec::new()), &Config::default()).unwrap_err();
    assert!(matches!(err, SimError::EmptyProgram));
}

#[test]
fn out_of_range_register_is_rejected_at_install() {
    let program = Program::new(vec![movc(1, 1), add(3, 1, 16), halt()]);
    let err = Cpu::new(program, &Config::default()).unwrap_err();
    assert!(
        matches!(err, SimError::InvalidRegister { pc: 4004, index: 16, size: 16 }),
        "got {err:?}"
    );
}

#[test]
fn unused_register_fields_are_not_checked() {
    // HALT ignores its register fields entirely.
    let program = Program::new(vec![Instruction::new(Opcode::Halt, 99, 99, 99, 0)]);
    assert!(Cpu::new(program, &Config::default()).is_ok());
}

#[test]
fn register_query_out_of_range() {
    let cpu = Cpu::new(Program::new(vec![halt()]), &Config::default()).expect("valid");
    assert_eq!(cpu.read_register(15).expect("in range"), 0);
    assert!(matches!(
        cpu.read_register(16),
        Err(SimError::RegisterOutOfRange { index: 16 })
    ));
}
