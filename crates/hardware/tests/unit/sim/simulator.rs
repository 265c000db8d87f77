//! Simulator Driver Tests.
//!
//! Run modes (single tick, bounded run, run to halt) and driver-side queries.

use std::io::Write;

use apex_core::TickOutcome;
use apex_core::common::SimError;
use apex_core::config::Config;
use apex_core::isa::{Instruction, Program};
use apex_core::sim::Simulator;
use tempfile::NamedTempFile;

use crate::common::builder::instruction::{add, halt, loadp, movc, store};

fn simulator(program: Vec<Instruction>) -> Simulator {
    Simulator::new(Program::new(program), &Config::default()).expect("valid program")
}

#[test]
fn bounded_run_stops_at_budget() {
    let mut sim = simulator(vec![movc(1, 5), movc(2, 7), add(3, 1, 2), halt()]);

    assert_eq!(sim.run_cycles(5).expect("runs"), TickOutcome::Continuing);
    assert_eq!(sim.cycles(), 5);
    assert!(!sim.is_halted());

    assert_eq!(sim.run_cycles(100).expect("runs"), TickOutcome::Halted);
    assert_eq!(sim.cycles(), 8, "stops as soon as HALT retires");
}

#[test]
fn queries_leave_state_untouched() {
    let mut sim = simulator(vec![movc(1, 5), movc(2, 42), store(1, 2, 0), add(3, 1, 2), halt()]);
    assert_eq!(sim.run_cycles(6).expect("runs"), TickOutcome::Continuing);

    let pc = sim.cpu.pc;
    let latches = [
        sim.cpu.fetch,
        sim.cpu.decode,
        sim.cpu.execute,
        sim.cpu.memory,
        sim.cpu.writeback,
    ];
    let read = |sim: &Simulator| {
        (
            sim.read_register(1).expect("R1"),
            sim.read_register(2).expect("R2"),
            sim.read_memory(42).expect("MEM[42]"),
            sim.flags(),
            sim.cycles(),
            sim.instructions_retired(),
            sim.last_cycle().clone(),
        )
    };

    let first = read(&sim);
    let second = read(&sim);

    assert_eq!(first, second);
    assert_eq!((first.0, first.1, first.2), (5, 42, 5));
    assert_eq!(first.4, 6);
    assert_eq!(sim.cpu.pc, pc);
    assert_eq!(
        [
            sim.cpu.fetch,
            sim.cpu.decode,
            sim.cpu.execute,
            sim.cpu.memory,
            sim.cpu.writeback,
        ],
        latches
    );
}

#[test]
fn callback_sees_every_cycle() {
    let mut sim = simulator(vec![movc(1, 5), halt()]);
    let mut seen = Vec::new();

    let outcome = sim
        .run_until_halt_with(|cpu| seen.push(cpu.last_cycle.cycle))
        .expect("runs");

    assert_eq!(outcome, TickOutcome::Halted);
    assert_eq!(seen, (1..=6).collect::<Vec<_>>());
}

#[test]
fn queries_after_run() {
    let mut sim = simulator(vec![
        movc(1, 9),
        movc(2, 40),
        store(1, 2, 2),
        loadp(3, 2, 2),
        halt(),
    ]);

    let _ = sim.run_until_halt().expect("runs");

    assert_eq!(sim.read_memory(42).expect("in range"), 9);
    assert_eq!(sim.read_register(3).expect("in range"), 9);
    assert_eq!(sim.read_register(2).expect("in range"), 44);
    assert_eq!(sim.instructions_retired(), 5);
    assert!(!sim.flags().zero);
}

#[test]
fn out_of_range_queries_fail() {
    let sim = simulator(vec![halt()]);
    assert!(matches!(sim.read_register(16), Err(SimError::RegisterOutOfRange { .. })));
    assert!(matches!(sim.read_memory(4096), Err(SimError::MemoryOutOfRange { .. })));
}

#[test]
fn tick_reports_halt_once_and_stays_halted() {
    let mut sim = simulator(vec![halt()]);
    let mut outcomes = Vec::new();
    for _ in 0..6 {
        outcomes.push(sim.tick().expect("ticks"));
    }
    assert_eq!(&outcomes[..4], &[TickOutcome::Continuing; 4]);
    assert_eq!(&outcomes[4..], &[TickOutcome::Halted; 2]);
    assert_eq!(sim.cycles(), 5);
}

#[test]
fn from_file_uses_entry_pc() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "MOVC,R1,#3\nMOVC,R2,#4\nMUL,R3,R1,R2\nHALT").expect("write");
    let config = Config::from_json(r#"{ "general": { "entry_pc": 1000 } }"#).expect("parses");

    let mut sim = Simulator::from_file(file.path(), &config).expect("loads");

    assert_eq!(sim.cpu.pc, 1000);
    let _ = sim.run_until_halt().expect("runs");
    assert_eq!(sim.read_register(3).expect("in range"), 12);
}

#[test]
fn from_file_propagates_load_errors() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "BOGUS").expect("write");

    let err = Simulator::from_file(file.path(), &Config::default()).unwrap_err();

    assert!(matches!(err, SimError::Load(_)));
}
