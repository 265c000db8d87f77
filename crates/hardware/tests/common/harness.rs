use apex_core::common::{SimError, Word};
use apex_core::config::Config;
use apex_core::core::Cpu;
use apex_core::core::pipeline::latches::CycleTrace;
use apex_core::isa::{Instruction, Program};
use apex_core::sim::Simulator;
use apex_core::sim::loader::parse_program;
use apex_core::TickOutcome;

pub struct TestContext {
    pub sim: Simulator,
}

impl TestContext {
    pub fn new(program: &[Instruction]) -> Self {
        Self::with_config(program, &Config::default())
    }

    pub fn with_config(program: &[Instruction], config: &Config) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let program = Program::with_base(config.general.entry_pc, program.to_vec());
        let sim = Simulator::new(program, config).expect("program should install");
        Self { sim }
    }

    pub fn from_listing(text: &str) -> Self {
        let program = parse_program(text, 4000).expect("listing should parse");
        Self::new(program.instructions())
    }

    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    pub fn set_reg(mut self, reg: usize, val: Word) -> Self {
        self.sim.cpu.regs.write(reg, val);
        self
    }

    pub fn set_mem(mut self, addr: usize, val: Word) -> Self {
        self.sim.cpu.data_memory[addr] = val;
        self
    }

    pub fn get_reg(&self, reg: usize) -> Word {
        self.sim.read_register(reg).expect("register in range")
    }

    pub fn mem(&self, addr: Word) -> Word {
        self.sim.read_memory(addr).expect("address in range")
    }

    pub fn step(&mut self) -> TickOutcome {
        self.sim.tick().expect("tick should succeed")
    }

    pub fn try_step(&mut self) -> Result<TickOutcome, SimError> {
        self.sim.tick()
    }

    /// Ticks `cycles` times regardless of halting.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            let _ = self.step();
        }
    }

    /// Runs to HALT, failing the test if it takes more than `limit` cycles.
    pub fn run_to_halt(&mut self, limit: u64) -> u64 {
        let outcome = self.sim.run_cycles(limit).expect("run should succeed");
        assert_eq!(
            outcome,
            TickOutcome::Halted,
            "program did not halt within {limit} cycles"
        );
        self.sim.cycles()
    }

    /// Ticks once and returns what each stage processed.
    pub fn step_trace(&mut self) -> CycleTrace {
        let _ = self.step();
        self.sim.last_cycle().clone()
    }

    pub fn cycles(&self) -> u64 {
        self.sim.cycles()
    }

    pub fn retired(&self) -> u64 {
        self.sim.instructions_retired()
    }
}
