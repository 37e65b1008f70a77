// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used)]
//! Integration tests for the urt-error crate.

#[cfg(test)]
mod tests {
    use urt_error::{codes, helpers, Error, ErrorCategory, Result};

    #[test]
    fn test_error_creation() {
        let error = Error::new(ErrorCategory::Unwind, codes::BLOCK_STACK_EMPTY, "Test error");
        assert!(error.is_unwind_error());
        assert_eq!(error.code, codes::BLOCK_STACK_EMPTY);
        assert_eq!(error.message, "Test error");
    }

    #[test]
    fn test_result_with_error() {
        let result: Result<i32> = Err(Error::runtime_error("Runtime error"));
        assert!(result.is_err());

        let error = result.err().unwrap();
        assert!(error.is_runtime_error());
    }

    #[test]
    fn test_helpers_pick_unwind_category() {
        let errors = [
            helpers::unexpected_block_kind_error("kind"),
            helpers::block_owner_mismatch_error("owner"),
            helpers::defer_body_escape_error("escape"),
            helpers::return_from_root_frame_error("root"),
        ];
        for error in errors {
            assert_eq!(error.category, ErrorCategory::Unwind);
        }
    }

    #[test]
    fn test_boxed_std_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(Error::UNHANDLED_EXCEPTION);
        assert!(boxed.to_string().contains("Unhandled exception"));
    }
}
