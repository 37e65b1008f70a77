// URT - urt-runtime
// Module: Structured Unwinding Runtime
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![forbid(unsafe_code)]

//! Structured unwinding runtime for URT
//!
//! This crate holds the interpreter's machine state and the algorithms that
//! mutate it:
//!
//! - [`OperandStack`]: values flowing between instructions
//! - [`stackless::CallStack`]: arena of [`stackless::StacklessFrame`]s
//!   addressed by validated [`stackless::FrameRef`]s
//! - [`stackless::BlockStack`]: active catch and defer regions across frames
//! - [`stackless::UnwindEngine`]: the catch/defer/return state machine
//! - [`stackless::Engine`]: the fetch-decode-execute loop
//!
//! ```
//! use urt_format::parse_program;
//! use urt_host::BufferedHost;
//! use urt_runtime::{Engine, EngineConfig, ExecutionOutcome};
//!
//! let program = parse_program(".main\n load 7\n exit\n").unwrap();
//! let mut engine = Engine::new(&program, BufferedHost::new(), EngineConfig::default());
//! assert_eq!(engine.run().unwrap(), ExecutionOutcome::Exited(7));
//! ```

pub mod config;
pub mod prelude;
pub mod stack;
pub mod stackless;
pub mod stats;

pub use config::EngineConfig;
pub use stack::OperandStack;
pub use stackless::{Engine, ExecutionOutcome, UnwindEngine, UnwindState};
pub use stats::ExecutionStats;
pub use urt_error::{Error, Result};
