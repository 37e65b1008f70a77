// URT - urt-error
// Module: URT Error Types
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unified error handling system for URT
//!
//! Every fault raised by the loader, the instruction set, the host
//! collaborators and the unwinding engine is expressed as one `Copy` value
//! carrying a category, a numeric code and a static message.

use core::fmt;

use crate::codes;

/// `Error` categories for URT operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Core interpreter errors (stacks, instruction pointer, fuel)
    Core         = 1,
    /// Type errors
    Type         = 6,
    /// Runtime errors (general)
    Runtime      = 7,
    /// Parse errors
    Parse        = 10,
    /// Capacity errors
    Capacity     = 12,
    /// I/O errors
    Io           = 20,
    /// Structured unwinding errors (blocks, frames, exceptions)
    Unwind       = 31,
}

/// URT `Error` type
///
/// This is the main error type for the interpreter.
/// It provides categorized errors with error codes and static messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Exception thrown with no catch block on the block stack
    pub const UNHANDLED_EXCEPTION: Self = Self::new(
        ErrorCategory::Unwind,
        codes::UNHANDLED_EXCEPTION,
        "Unhandled exception",
    );
    /// Program executed `abort`
    pub const ABORTED: Self = Self::new(ErrorCategory::Unwind, codes::ABORTED, "Internal error");
    /// Block stack empty error
    pub const BLOCK_STACK_EMPTY: Self = Self::new(
        ErrorCategory::Unwind,
        codes::BLOCK_STACK_EMPTY,
        "Block stack empty",
    );
    /// Call stack empty error
    pub const CALL_STACK_EMPTY: Self = Self::new(
        ErrorCategory::Unwind,
        codes::CALL_STACK_EMPTY,
        "Call stack empty",
    );
    /// Operand stack underflow error
    pub const STACK_UNDERFLOW: Self = Self::new(
        ErrorCategory::Core,
        codes::STACK_UNDERFLOW,
        "Operand stack underflow",
    );
    /// Operand stack overflow error
    pub const STACK_OVERFLOW: Self = Self::new(
        ErrorCategory::Core,
        codes::STACK_OVERFLOW,
        "Operand stack overflow",
    );
    /// Call depth limit reached
    pub const CALL_STACK_EXHAUSTED: Self = Self::new(
        ErrorCategory::Capacity,
        codes::CALL_STACK_EXHAUSTED,
        "Call stack exhausted",
    );
    /// Fuel limit reached
    pub const FUEL_EXHAUSTED: Self = Self::new(
        ErrorCategory::Capacity,
        codes::FUEL_EXHAUSTED,
        "Fuel exhausted",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Check if this is a core error
    #[must_use]
    pub fn is_core_error(&self) -> bool {
        self.category == ErrorCategory::Core
    }

    /// Check if this is a runtime error
    #[must_use]
    pub fn is_runtime_error(&self) -> bool {
        self.category == ErrorCategory::Runtime
    }

    /// Check if this is a type error
    #[must_use]
    pub fn is_type_error(&self) -> bool {
        self.category == ErrorCategory::Type
    }

    /// Check if this is an unwinding error
    #[must_use]
    pub fn is_unwind_error(&self) -> bool {
        self.category == ErrorCategory::Unwind
    }

    /// Check if this is a parse error
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        self.category == ErrorCategory::Parse
    }

    /// Check if this is an I/O error
    #[must_use]
    pub fn is_io_error(&self) -> bool {
        self.category == ErrorCategory::Io
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }

    /// Check if this error reports an exception that no catch block handled
    #[must_use]
    pub fn is_unhandled_exception(&self) -> bool {
        self.code == codes::UNHANDLED_EXCEPTION
    }

    /// Create a runtime error
    #[must_use]
    pub const fn runtime_error(message: &'static str) -> Self {
        Self::new(ErrorCategory::Runtime, codes::EXECUTION_ERROR, message)
    }

    /// Create a runtime type mismatch error
    #[must_use]
    pub const fn runtime_type_mismatch(message: &'static str) -> Self {
        Self::new(ErrorCategory::Type, codes::TYPE_MISMATCH, message)
    }

    /// Create a runtime integer overflow error
    #[must_use]
    pub const fn runtime_integer_overflow(message: &'static str) -> Self {
        Self::new(ErrorCategory::Runtime, codes::INTEGER_OVERFLOW, message)
    }

    /// Create an invalid local index error
    #[must_use]
    pub const fn runtime_invalid_local(message: &'static str) -> Self {
        Self::new(ErrorCategory::Runtime, codes::INVALID_LOCAL_INDEX, message)
    }

    /// Create an instruction pointer out of bounds error
    #[must_use]
    pub const fn instruction_out_of_bounds(message: &'static str) -> Self {
        Self::new(
            ErrorCategory::Core,
            codes::EXECUTION_INSTRUCTION_INDEX_OUT_OF_BOUNDS,
            message,
        )
    }

    /// Create an invalid frame reference error
    #[must_use]
    pub const fn invalid_frame(message: &'static str) -> Self {
        Self::new(ErrorCategory::Core, codes::EXECUTION_INVALID_FRAME, message)
    }

    /// Create a parse error with a specific code
    #[must_use]
    pub const fn parse_error(code: u16, message: &'static str) -> Self {
        Self::new(ErrorCategory::Parse, code, message)
    }

    /// Create an unresolved label error
    #[must_use]
    pub const fn unresolved_label(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parse, codes::UNRESOLVED_LABEL, message)
    }

    /// Create a host I/O error
    #[must_use]
    pub const fn io_error(message: &'static str) -> Self {
        Self::new(ErrorCategory::Io, codes::HOST_IO_ERROR, message)
    }

    /// Create an invalid numeric input error
    #[must_use]
    pub const fn invalid_number_input(message: &'static str) -> Self {
        Self::new(ErrorCategory::Io, codes::INVALID_NUMBER_INPUT, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_category_and_code() {
        let error = Error::UNHANDLED_EXCEPTION;
        let rendered = format!("{error}");
        assert!(rendered.starts_with("[Unwind][E1772]"));
        assert!(rendered.ends_with("Unhandled exception"));
    }

    #[test]
    fn test_category_predicates() {
        assert!(Error::UNHANDLED_EXCEPTION.is_unwind_error());
        assert!(Error::UNHANDLED_EXCEPTION.is_unhandled_exception());
        assert!(Error::STACK_UNDERFLOW.is_core_error());
        assert!(Error::FUEL_EXHAUSTED.is_capacity_error());
        assert!(Error::unresolved_label("missing").is_parse_error());
        assert!(!Error::ABORTED.is_unhandled_exception());
    }
}
