//! Load-Use Hazard Tests.
//!
//! A load's value becomes forward-able in Memory, one stage later than an ALU
//! result. An instruction reading the load's destination in Decode while the load
//! is in Execute must stall exactly one cycle.

use apex_core::isa::Opcode;

use crate::common::builder::instruction::{add, halt, load, loadp, movc, store};
use crate::common::harness::TestContext;

// ══════════════════════════════════════════════════════════
// 1. Basic load-use detection
// ══════════════════════════════════════════════════════════

#[test]
fn dependent_add_stalls_one_cycle() {
    let mut tc = TestContext::new(&[load(1, 0, 0), add(2, 1, 1), halt()]).set_mem(0, 42);

    let cycles = tc.run_to_halt(50);

    assert_eq!(tc.get_reg(2), 84, "ADD must see the loaded value");
    assert_eq!(cycles, 8, "3 instructions + 4 fill + 1 stall");
    assert_eq!(tc.cpu().stats.stalls_data, 1);
}

#[test]
fn stall_is_raised_while_load_is_in_execute() {
    let mut tc = TestContext::new(&[load(1, 0, 0), add(2, 1, 1), halt()]).set_mem(0, 42);
    tc.run(2);

    let trace = tc.step_trace();
    assert!(trace.stalled, "cycle 3: ADD in Decode, LOAD in Execute");
    assert!(tc.cpu().pending_loads.is_pending(1));
    assert_eq!(tc.cpu().decode.insn, add(2, 1, 1), "ADD stays in Decode");
    assert!(!tc.cpu().execute.has_insn, "no instruction advanced into Execute");
    assert_eq!(tc.cpu().pc, 4008, "PC is held during the stall");
    assert_eq!(tc.cpu().fetch.insn.opcode, Opcode::Halt);

    let trace = tc.step_trace();
    assert!(!trace.stalled, "stall released once the load reads memory");
    assert!(!tc.cpu().pending_loads.any());
    assert_eq!(tc.cpu().execute.rs1_value, 42);
    assert_eq!(tc.cpu().execute.rs2_value, 42);
}

#[test]
fn independent_consumer_does_not_stall() {
    let mut tc = TestContext::new(&[load(1, 0, 0), add(3, 2, 2), halt()])
        .set_mem(0, 42)
        .set_reg(2, 4);

    let cycles = tc.run_to_halt(50);

    assert_eq!(cycles, 7);
    assert_eq!(tc.cpu().stats.stalls_data, 0);
    assert_eq!(tc.get_reg(1), 42);
    assert_eq!(tc.get_reg(3), 8);
}

#[test]
fn one_instruction_gap_needs_no_stall() {
    let mut tc = TestContext::new(&[load(1, 0, 0), movc(5, 1), add(2, 1, 1), halt()])
        .set_mem(0, 42);

    let cycles = tc.run_to_halt(50);

    assert_eq!(cycles, 8);
    assert_eq!(tc.cpu().stats.stalls_data, 0);
    assert_eq!(tc.get_reg(2), 84);
}

// ══════════════════════════════════════════════════════════
// 2. Stores and chained loads
// ══════════════════════════════════════════════════════════

#[test]
fn store_data_from_load_stalls() {
    let mut tc = TestContext::new(&[load(1, 0, 0), store(1, 0, 1), halt()]).set_mem(0, 42);

    let _ = tc.run_to_halt(50);

    assert_eq!(tc.mem(1), 42);
    assert_eq!(tc.cpu().stats.stalls_data, 1);
}

#[test]
fn store_address_from_load_stalls() {
    let mut tc = TestContext::new(&[movc(1, 5), load(2, 0, 0), store(1, 2, 0), halt()])
        .set_mem(0, 10);

    let _ = tc.run_to_halt(50);

    assert_eq!(tc.mem(10), 5);
    assert_eq!(tc.cpu().stats.stalls_data, 1);
}

#[test]
fn chained_load_address() {
    let mut tc = TestContext::new(&[load(1, 0, 0), load(2, 1, 0), halt()])
        .set_mem(0, 5)
        .set_mem(5, 77);

    let cycles = tc.run_to_halt(50);

    assert_eq!(tc.get_reg(2), 77);
    assert_eq!(cycles, 8);
}

// ══════════════════════════════════════════════════════════
// 3. Post-increment loads
// ══════════════════════════════════════════════════════════

#[test]
fn loadp_base_is_forwarded_without_stall() {
    let mut tc = TestContext::new(&[movc(2, 100), loadp(1, 2, 0), add(3, 2, 2), halt()])
        .set_mem(100, 7);

    let cycles = tc.run_to_halt(50);

    assert_eq!(tc.get_reg(3), 208, "incremented base is known in Execute");
    assert_eq!(cycles, 8);
    assert_eq!(tc.cpu().stats.stalls_data, 0);
}

#[test]
fn loadp_destination_stalls() {
    let mut tc = TestContext::new(&[movc(2, 100), loadp(1, 2, 0), add(3, 1, 2), halt()])
        .set_mem(100, 7);

    let cycles = tc.run_to_halt(50);

    assert_eq!(tc.get_reg(1), 7);
    assert_eq!(tc.get_reg(2), 104);
    assert_eq!(tc.get_reg(3), 111);
    assert_eq!(cycles, 9);
}

#[test]
fn loadp_into_its_own_base_keeps_increment() {
    let mut tc = TestContext::new(&[movc(2, 100), loadp(2, 2, 0), add(3, 2, 2), halt()])
        .set_mem(100, 7);

    let _ = tc.run_to_halt(50);

    assert_eq!(tc.get_reg(2), 104, "base write lands after the loaded value");
    assert_eq!(tc.get_reg(3), 208);
}
