// URT - urt-error
// Module: URT Error Helpers
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error helper functions for common unwinding and loader faults.

use crate::{codes, Error, ErrorCategory};

/// Create an unexpected block kind error
#[must_use]
pub const fn unexpected_block_kind_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Unwind, codes::UNEXPECTED_BLOCK_KIND, message)
}

/// Create a block owner mismatch error
#[must_use]
pub const fn block_owner_mismatch_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Unwind, codes::BLOCK_OWNER_MISMATCH, message)
}

/// Create a defer body escape error
#[must_use]
pub const fn defer_body_escape_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Unwind, codes::DEFER_BODY_ESCAPE, message)
}

/// Create a return from root frame error
#[must_use]
pub const fn return_from_root_frame_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Unwind, codes::RETURN_FROM_ROOT_FRAME, message)
}

/// Create a duplicate label error
#[must_use]
pub const fn duplicate_label_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Parse, codes::DUPLICATE_LABEL, message)
}

/// Create an input exhausted error
#[must_use]
pub const fn input_exhausted_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Io, codes::INPUT_EXHAUSTED, message)
}

/// Create an invalid exit code error
#[must_use]
pub const fn invalid_exit_code_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Type, codes::INVALID_EXIT_CODE, message)
}
