// URT - urt-error
// Module: URT Error Handling
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! URT Error handling library
//!
//! This library provides the error handling system for the URT interpreter.
//! Every crate in the workspace reports faults as [`Error`] values.
//!
//! # Error Categories
//!
//! ## Core Errors (1000-1999)
//! - Operand stack underflow and overflow
//! - Instruction pointer out of bounds
//! - Invalid frame references
//! - Fuel and call depth limits
//!
//! ## Runtime Errors (2000-2999)
//! - Invalid local slots
//! - Integer overflow
//!
//! ## Unwinding Errors (6000-6999)
//! - Empty block or call stack
//! - Unhandled exceptions
//! - Block kind and ownership violations
//!
//! ## Parse Errors (7000-7999)
//! - Unresolved and duplicate labels
//! - Malformed instructions
//!
//! ## I/O Errors (8000-8999)
//! - Host I/O failures and invalid numeric input
//!
//! # Usage
//!
//! ```
//! use urt_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Unwind,
//!     codes::UNHANDLED_EXCEPTION,
//!     "no catch block for throw",
//! );
//! assert!(error.is_unhandled_exception());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Error codes for urt
pub mod codes;
/// Error and error handling types
pub mod errors;

pub mod helpers;
pub mod prelude;

// Re-export key types
pub use errors::{Error, ErrorCategory};
pub use helpers::*;

/// A specialized `Result` type for URT operations.
pub type Result<T> = core::result::Result<T, Error>;
