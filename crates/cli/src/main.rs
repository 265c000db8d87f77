//! APEX pipeline simulator CLI.
//!
//! This binary provides the run modes of the simulator. It performs:
//! 1. **Simulate:** Run a listing for at most N cycles, printing every cycle.
//! 2. **Display:** Run a listing until HALT retires, printing every cycle.
//! 3. **Show memory:** Run a listing until HALT retires and print one data memory word.
//! 4. **Step:** Advance one cycle per Enter key; `q` quits.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use apex_core::common::Word;
use apex_core::config::Config;
use apex_core::core::Cpu;
use apex_core::sim::report;
use apex_core::{Simulator, TickOutcome};

#[derive(Parser, Debug)]
#[command(
    name = "apex",
    author,
    version,
    about = "Cycle-accurate APEX five-stage pipeline simulator",
    long_about = "Run an APEX instruction listing on the five-stage pipeline.\n\nExamples:\n  apex simulate prog.asm 50\n  apex display prog.asm\n  apex show-mem prog.asm 100\n  apex --config apex.json step prog.asm"
)]
struct Cli {
    /// JSON configuration file; built-in defaults when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit per-stage trace events (sets the default log filter to `trace`).
    #[arg(long, global = true)]
    trace: bool,

    /// Print the statistics report after the run.
    #[arg(long, global = true)]
    stats: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run at most CYCLES cycles, printing stage contents and state every cycle.
    Simulate {
        /// Program listing.
        file: PathBuf,
        /// Cycle budget.
        cycles: u64,
    },
    /// Run until HALT retires, printing stage contents and state every cycle.
    Display {
        /// Program listing.
        file: PathBuf,
    },
    /// Run until HALT retires, then print one data memory word.
    ShowMem {
        /// Program listing.
        file: PathBuf,
        /// Data memory address.
        address: Word,
    },
    /// Advance one cycle per Enter key; `q` quits.
    Step {
        /// Program listing.
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.trace);

    let mut config = load_config(cli.config.as_ref());
    config.general.trace_instructions |= cli.trace;

    let file = match &cli.command {
        Commands::Simulate { file, .. }
        | Commands::Display { file }
        | Commands::ShowMem { file, .. }
        | Commands::Step { file } => file,
    };
    let mut sim = Simulator::from_file(file, &config).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    });
    info!(
        program = %file.display(),
        instructions = sim.cpu.program.len(),
        "program loaded"
    );

    let result = match cli.command {
        Commands::Simulate { cycles, .. } => sim.run_cycles_with(cycles, print_cycle),
        Commands::Display { .. } => sim.run_until_halt_with(print_cycle),
        Commands::ShowMem { address, .. } => cmd_show_mem(&mut sim, address),
        Commands::Step { .. } => cmd_step(&mut sim),
    };

    match result {
        Ok(TickOutcome::Halted) => println!("{}", report::completion_line(&sim.cpu)),
        Ok(TickOutcome::Continuing) => println!(
            "Simulation Stopped, cycles = {} instructions = {}",
            sim.cycles(),
            sim.instructions_retired()
        ),
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            sim.cpu.dump_state();
            process::exit(1);
        }
    }

    if cli.stats {
        sim.cpu.stats.print();
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the default filter.
fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Reads the JSON configuration, or returns the defaults when no path is given.
fn load_config(path: Option<&PathBuf>) -> Config {
    let Some(path) = path else {
        debug!("no config file given, using defaults");
        return Config::default();
    };
    debug!(path = %path.display(), "reading config");
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not read config '{}': {e}", path.display());
        process::exit(1);
    });
    Config::from_json(&text).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Invalid config '{}': {e}", path.display());
        process::exit(1);
    })
}

fn print_cycle(cpu: &Cpu) {
    print!("{}", report::format_cycle(&cpu.last_cycle));
    print!("{}", report::format_state(cpu));
}

fn cmd_show_mem(
    sim: &mut Simulator,
    address: Word,
) -> Result<TickOutcome, apex_core::common::SimError> {
    let outcome = sim.run_until_halt()?;
    let value = sim.read_memory(address)?;
    println!("\nValue at Memory Location is MEM[{address}] = {value}");
    Ok(outcome)
}

fn cmd_step(sim: &mut Simulator) -> Result<TickOutcome, apex_core::common::SimError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        let outcome = sim.tick()?;
        print_cycle(&sim.cpu);
        if outcome == TickOutcome::Halted {
            return Ok(outcome);
        }
        print!("Press Enter to advance CPU Clock or <q> to quit: ");
        let _ = io::stdout().flush();
        match lines.next() {
            Some(Ok(line)) if !line.trim().eq_ignore_ascii_case("q") => {}
            _ => return Ok(TickOutcome::Continuing),
        }
    }
}
