// URT - urtd
// Module: Runner library
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Runner support for the `urtd` binary.
//!
//! Loads a `.urt` program from disk, verifies its labels, and executes it on
//! a [`urt_runtime::Engine`] bound to either the process's standard streams
//! or a scripted list of numeric inputs.
//!
//! ```no_run
//! use std::path::Path;
//! use urtd::{load_program, Daemon, UrtdConfig};
//!
//! let program = load_program(Path::new("demos/unwind_demo.urt")).unwrap();
//! let daemon = Daemon::new(UrtdConfig::default().with_input(vec![7, 8]));
//! let report = daemon.run(&program);
//! println!("{}", report.stats);
//! ```

#![forbid(unsafe_code)]

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Cursor};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};
use urt_format::{Program, parse_program};
use urt_host::{HostIo, StdioHost};
use urt_runtime::{Engine, EngineConfig, ExecutionOutcome, ExecutionStats};

/// Process exit code used when a run ends in a fault
pub const FAULT_EXIT_CODE: i32 = 1;

/// Runner configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrtdConfig {
    /// Limits handed to every engine
    pub engine: EngineConfig,
    /// Numbers fed to `getnumber` instead of stdin
    pub input:  Option<Vec<i64>>,
}

impl UrtdConfig {
    /// Replace the engine limits
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Script the numeric input
    pub fn with_input(mut self, input: Vec<i64>) -> Self {
        self.input = Some(input);
        self
    }
}

/// Result of one program run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// How the run ended
    pub outcome: urt_error::Result<ExecutionOutcome>,
    /// Counters collected by the engine
    pub stats:   ExecutionStats,
}

impl RunReport {
    /// Exit code the process should terminate with
    pub fn exit_code(&self) -> i32 {
        match self.outcome {
            Ok(ExecutionOutcome::Exited(code)) => code as i32,
            Err(_) => FAULT_EXIT_CODE,
        }
    }
}

/// Read, parse and verify a program file
pub fn load_program(path: &Path) -> Result<Program> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read program file: {}", path.display()))?;
    let program = parse_program(&source)
        .with_context(|| format!("Failed to parse program: {}", path.display()))?;
    program
        .verify()
        .map_err(|(offset, error)| anyhow!("{error} (at instruction {offset:04})"))
        .with_context(|| format!("Failed to verify program: {}", path.display()))?;
    info!(
        path = %path.display(),
        instructions = program.len(),
        "program loaded"
    );
    Ok(program)
}

/// Executes verified programs with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Daemon {
    config: UrtdConfig,
}

impl Daemon {
    /// Create a runner
    pub fn new(config: UrtdConfig) -> Self {
        Self { config }
    }

    /// The runner's configuration
    pub fn config(&self) -> &UrtdConfig {
        &self.config
    }

    /// Run a program against an arbitrary host and hand the host back
    pub fn execute<H: HostIo>(&self, program: &Program, host: H) -> (RunReport, H) {
        let mut engine = Engine::new(program, host, self.config.engine);
        let outcome = engine.run();
        let stats = engine.stats();
        debug!(?outcome, instructions = stats.instructions, "run finished");
        (RunReport { outcome, stats }, engine.into_host())
    }

    /// Run a program with output on stdout and input from the script or stdin
    pub fn run(&self, program: &Program) -> RunReport {
        match &self.config.input {
            Some(input) => {
                let host = StdioHost::new(Cursor::new(scripted_lines(input)), io::stdout());
                self.execute(program, host).0
            },
            None => self.execute(program, StdioHost::stdio()).0,
        }
    }
}

fn scripted_lines(input: &[i64]) -> Vec<u8> {
    let mut lines = String::new();
    for number in input {
        let _ = writeln!(lines, "{number}");
    }
    lines.into_bytes()
}

#[cfg(test)]
mod tests {
    use urt_host::BufferedHost;

    use super::*;

    #[test]
    fn test_config_builders() {
        let config = UrtdConfig::default()
            .with_engine(EngineConfig::default().with_fuel(Some(5)))
            .with_input(vec![1, 2]);
        assert_eq!(config.engine.fuel, Some(5));
        assert_eq!(config.input, Some(vec![1, 2]));
    }

    #[test]
    fn test_scripted_lines() {
        assert_eq!(scripted_lines(&[7, -8]), b"7\n-8\n".to_vec());
        assert!(scripted_lines(&[]).is_empty());
    }

    #[test]
    fn test_execute_reports_exit_code() {
        let program = parse_program("load 9\nexit\n").unwrap();
        let (report, _) = Daemon::default().execute(&program, BufferedHost::new());
        assert_eq!(report.exit_code(), 9);
        assert_eq!(report.stats.instructions, 2);
    }

    #[test]
    fn test_fault_maps_to_fault_exit_code() {
        let program = parse_program("throw\n").unwrap();
        let (report, _) = Daemon::default().execute(&program, BufferedHost::new());
        assert_eq!(report.exit_code(), FAULT_EXIT_CODE);
        assert!(report.outcome.unwrap_err().is_unhandled_exception());
    }
}
