// URT - urt-error
// Module: URT Error Prelude
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for urt-error
//!
//! Re-exports the error type, its categories, the code table and the helper
//! constructors so that dependent crates need a single glob import.

pub use core::fmt::{self, Debug, Display};

// Re-export helper functions for creating errors
pub use crate::helpers::*;
// Re-export error types from this crate
pub use crate::{codes, Error, ErrorCategory, Result};
