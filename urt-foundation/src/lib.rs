// URT - urt-foundation
// Module: Core value types
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Foundation types for the URT interpreter.
//!
//! The only runtime data the interpreter moves around is [`Value`]: operands
//! on the operand stack, immediates in `load` instructions and the contents of
//! each frame's local slots.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod values;

pub use urt_error::{Error, Result};
pub use values::{Value, ValueType};
