// URT - urt-error
// Module: URT Error Codes
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for URT

// Core error codes (1000-1999)
/// Stack underflow error
pub const STACK_UNDERFLOW: u16 = 1000;
/// Stack overflow error
pub const STACK_OVERFLOW: u16 = 1001;
/// General execution error
pub const EXECUTION_ERROR: u16 = 1005;
/// Type mismatch error
pub const TYPE_MISMATCH: u16 = 1009;
/// Out of bounds error
pub const OUT_OF_BOUNDS_ERROR: u16 = 1012;
/// Execution instruction index out of bounds error
pub const EXECUTION_INSTRUCTION_INDEX_OUT_OF_BOUNDS: u16 = 1013;
/// Execution invalid frame error
pub const EXECUTION_INVALID_FRAME: u16 = 1014;
/// Fuel limit exceeded
pub const FUEL_EXHAUSTED: u16 = 1017;
/// Call stack exhausted
pub const CALL_STACK_EXHAUSTED: u16 = 1018;

// Runtime error codes (2000-2999)
/// Invalid local slot index
pub const INVALID_LOCAL_INDEX: u16 = 2000;
/// Integer overflow in arithmetic
pub const INTEGER_OVERFLOW: u16 = 2001;
/// Invalid exit code operand
pub const INVALID_EXIT_CODE: u16 = 2002;

// Unwinding error codes (6000-6999)
/// Block stack empty where a block is required
pub const BLOCK_STACK_EMPTY: u16 = 6000;
/// Call stack empty where a frame is required
pub const CALL_STACK_EMPTY: u16 = 6001;
/// Exception thrown with no catch block anywhere on the block stack
pub const UNHANDLED_EXCEPTION: u16 = 6002;
/// Block kind not valid for the requested transition
pub const UNEXPECTED_BLOCK_KIND: u16 = 6003;
/// Unwind step requested while no unwind is in progress
pub const MISSING_UNWIND_REASON: u16 = 6004;
/// Block discarded on behalf of a frame that does not own it
pub const BLOCK_OWNER_MISMATCH: u16 = 6005;
/// Defer body left by something other than `defercontinue`
pub const DEFER_BODY_ESCAPE: u16 = 6006;
/// Return executed in the root frame
pub const RETURN_FROM_ROOT_FRAME: u16 = 6007;
/// Program executed `abort`
pub const ABORTED: u16 = 6008;

// Parse error codes (7000-7999)
/// Label referenced but never defined
pub const UNRESOLVED_LABEL: u16 = 7000;
/// Label defined more than once
pub const DUPLICATE_LABEL: u16 = 7001;
/// Unknown instruction mnemonic
pub const UNKNOWN_MNEMONIC: u16 = 7002;
/// Instruction is missing an operand
pub const MISSING_OPERAND: u16 = 7003;
/// Instruction has too many operands
pub const UNEXPECTED_OPERAND: u16 = 7004;
/// Operand could not be decoded
pub const INVALID_OPERAND: u16 = 7005;
/// String literal without closing quote
pub const UNTERMINATED_STRING: u16 = 7006;
/// Label definition without a name
pub const EMPTY_LABEL: u16 = 7007;

// I/O error codes (8000-8999)
/// Host I/O failure
pub const HOST_IO_ERROR: u16 = 8000;
/// Input line is not a number
pub const INVALID_NUMBER_INPUT: u16 = 8001;
/// Host input exhausted
pub const INPUT_EXHAUSTED: u16 = 8002;
