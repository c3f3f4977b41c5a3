//! MIPS pipeline simulator CLI.
//!
//! This binary loads a program image and runs it on the pipeline. It performs:
//! 1. **Configuration:** Reads an optional JSON config and applies command-line overrides.
//! 2. **Boot:** Loads an ELF executable at its segment addresses, or a raw image at the
//!    configured load base.
//! 3. **Run:** Clocks the pipeline until the program exits, faults, or exceeds its cycle budget,
//!    then reports statistics.
//!
//! The process exits with the program's exit status, 2 after an illegal instruction, and 1 on
//! a host error.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mipsim_core::config::Config;
use mipsim_core::sim::loader;
use mipsim_core::sim::syscall::HostSyscalls;
use mipsim_core::{SimError, Simulator, Termination};

/// Exit status after an illegal instruction.
const EXIT_ILLEGAL: u8 = 2;
/// Exit status after a host error.
const EXIT_HOST_ERROR: u8 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "Cycle-level 5-stage MIPS pipeline simulator",
    long_about = "Run a big-endian MIPS32 program on a 5-stage in-order pipeline and report \
                  cycle statistics.\n\nExamples:\n  mipsim run bench/qsort\n  \
                  mipsim run --boot-pc 0x400000 prog.bin --stats-json\n  \
                  RUST_LOG=mipsim_core=debug mipsim run prog --config sim.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program image until it exits.
    Run(RunArgs),
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// ELF executable or raw big-endian binary.
    image: PathBuf,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial PC, overriding the ELF entry point and the configured boot PC.
    #[arg(long, value_parser = parse_addr)]
    boot_pc: Option<u32>,

    /// Give up after this many cycles.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Trace every fetch, decode, interlock and commit.
    #[arg(long)]
    trace: bool,

    /// Print statistics as JSON instead of the text report.
    #[arg(long)]
    stats_json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            init_tracing(args.trace);
            cmd_run(&args).unwrap_or_else(|e| {
                tracing::error!("{e}");
                ExitCode::from(EXIT_HOST_ERROR)
            })
        }
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` wins over `--trace`.
fn init_tracing(trace: bool) {
    let default = if trace { "mipsim_core=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Parses a hexadecimal (`0x`-prefixed) or decimal address.
fn parse_addr(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid address '{s}': {e}"))
}

/// Boots and runs the image, returning the process exit status.
fn cmd_run(args: &RunArgs) -> Result<ExitCode, SimError> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if args.max_cycles.is_some() {
        config.general.max_cycles = args.max_cycles;
    }
    config.general.trace_instructions |= args.trace;

    let image = loader::read_image(&args.image)?;
    let mut sim = Simulator::from_image(&image, Box::new(HostSyscalls::new()), &config)?;
    if let Some(pc) = args.boot_pc {
        sim.cpu.boot(pc);
    }
    tracing::info!(
        image = %args.image.display(),
        pc = format_args!("{:#010x}", sim.cpu.pc),
        "booting"
    );

    let outcome = sim.run();
    report_stats(&sim, args.stats_json);

    Ok(match outcome? {
        Termination::Exited { code } => ExitCode::from(code as u8),
        Termination::IllegalInstruction { .. } => ExitCode::from(EXIT_ILLEGAL),
    })
}

fn report_stats(sim: &Simulator, json: bool) {
    let stats = sim.stats();
    if json {
        match serde_json::to_string_pretty(stats) {
            Ok(text) => println!("{text}"),
            Err(e) => tracing::error!("failed to serialize statistics: {e}"),
        }
    } else {
        stats.print();
    }
}
