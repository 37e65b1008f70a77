// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Host I/O for the URT interpreter.
//!
//! The interpreter's `print` and `getnumber` instructions are the only points
//! where a program talks to the outside world. They go through the
//! [`HostIo`] trait so the engine can run against the terminal
//! ([`StdioHost`]) or against scripted input with captured output
//! ([`BufferedHost`]).
//!
//! ```
//! use urt_host::{BufferedHost, HostIo};
//! use urt_foundation::Value;
//!
//! let mut host = BufferedHost::with_input([7]);
//! assert_eq!(host.read_number().unwrap(), 7);
//! host.print(&Value::Number(42)).unwrap();
//! assert_eq!(host.output(), &["=> 42".to_string()]);
//! ```

pub mod host;
pub mod prelude;

pub use host::{BufferedHost, HostIo, StdioHost, INPUT_PROMPT};
