// URT - urt-format
// Module: Program Store and Assembly Format
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![forbid(unsafe_code)]

//! Program store and textual assembly format for URT
//!
//! A [`Program`] is a read-only, linear sequence of decoded instructions plus
//! a table of named positions. Programs are built with [`ProgramBuilder`] or
//! parsed from the `.urt` assembly text with [`parse_program`], and render
//! back to re-parseable text through their `Display` implementation.

pub mod program;
pub mod text;

pub use program::{Program, ProgramBuilder};
pub use text::{parse_program, ParseError};
pub use urt_error::{Error, Result};
