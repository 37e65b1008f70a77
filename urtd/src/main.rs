//! # URT runner (urtd)
//!
//! Loads a textual `.urt` program and executes it on the structured
//! unwinding interpreter.
//!
//! ## Usage
//!
//! ```bash
//! urtd <program.urt> [--fuel <amount>] [--locals <n>] [--max-call-depth <n>]
//!      [--stats] [--disasm] [--input <n>]...
//! ```
//!
//! The process exits with the code the program passed to `exit`. A fault,
//! including an exception no catch block handled, prints the error and exits
//! with code 1.
//!
//! The `--stats` option reports execution counters on stderr after the run:
//! - Number of instructions executed and fuel consumed
//! - Calls, returns, exceptions thrown and catches taken
//! - Defer bodies entered and peak call and block depth

#![warn(missing_docs)]

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use urt_runtime::{EngineConfig, ExecutionOutcome};
use urtd::{Daemon, UrtdConfig, load_program};

/// URT runner CLI arguments
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the `.urt` program to execute
    program: PathBuf,

    /// Optional fuel limit for bounded execution
    /// One unit is consumed per executed instruction
    #[arg(short, long, help = "Limit execution to the specified amount of fuel")]
    fuel: Option<u64>,

    /// Local slots allocated for every frame
    #[arg(long, default_value_t = urt_runtime::config::DEFAULT_LOCALS_PER_FRAME)]
    locals: usize,

    /// Maximum number of frames, root frame included
    #[arg(long, default_value_t = urt_runtime::config::DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Show execution statistics after running
    #[arg(short, long, help = "Show execution statistics")]
    stats: bool,

    /// Print the program listing and exit without running it
    #[arg(long)]
    disasm: bool,

    /// Numbers fed to `getnumber` instead of reading stdin
    #[arg(short, long, allow_negative_numbers = true)]
    input: Vec<i64>,
}

impl Args {
    fn config(&self) -> UrtdConfig {
        let engine = EngineConfig::default()
            .with_fuel(self.fuel)
            .with_locals_per_frame(self.locals)
            .with_max_call_depth(self.max_call_depth);
        let config = UrtdConfig::default().with_engine(engine);
        if self.input.is_empty() {
            config
        } else {
            config.with_input(self.input.clone())
        }
    }
}

fn main() -> Result<()> {
    initialize_tracing();

    let args = Args::parse();
    let program = load_program(&args.program)?;

    if args.disasm {
        print!("{program}");
        return Ok(());
    }

    let daemon = Daemon::new(args.config());
    info!(config = ?daemon.config(), "starting run");
    let report = daemon.run(&program);

    if args.stats {
        eprintln!("{}", report.stats);
    }

    let exit_code = report.exit_code();
    let outcome = report.outcome.map_err(|error| {
        error!(%error, "run faulted");
        error
    });
    let ExecutionOutcome::Exited(code) =
        outcome.with_context(|| format!("Execution of {} failed", args.program.display()))?;

    println!("VM exited with code {code}");
    io::stdout().flush().context("Failed to flush stdout")?;
    process::exit(exit_code);
}

/// Initialize the tracing system for logging
///
/// `RUST_LOG` selects the filter (default `warn`) and `RUST_LOG_FORMAT`
/// selects the formatter. Logs go to stderr so program output stays clean.
fn initialize_tracing() {
    let format = env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true);

    match format.as_str() {
        "json" => subscriber.json().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.pretty().init(),
    }
}
