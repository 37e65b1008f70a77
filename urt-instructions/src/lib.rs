// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Instruction implementations for the URT unwinding interpreter.
//!
//! Each instruction family is a small enum implementing [`PureInstruction`]
//! against a context trait. The instructions never touch engine state
//! directly, so the same definitions run inside the real engine and against
//! the mock contexts used in the tests.
//!
//! ```
//! use urt_instructions::{ArithmeticOp, ExecutionContext, PureExecutionContext, PureInstruction, Value};
//!
//! let mut context = ExecutionContext::new();
//! context.push_value(Value::Number(7)).unwrap();
//! context.push_value(Value::Number(14)).unwrap();
//! ArithmeticOp::Add.execute(&mut context).unwrap();
//! assert_eq!(context.stack(), &[Value::Number(21)]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod arithmetic_ops;
pub mod comparison_ops;
pub mod control_ops;
pub mod execution;
pub mod host_ops;
pub mod instruction;
pub mod instruction_traits;
pub mod label;
pub mod opcode;
pub mod prelude;
pub mod stack_ops;
pub mod variable_ops;

pub use arithmetic_ops::ArithmeticOp;
pub use comparison_ops::ComparisonOp;
pub use control_ops::{BlockKind, ControlContext, ControlOp};
pub use execution::{ExecutionContext, PureExecutionContext};
pub use host_ops::{HostContext, HostOp};
pub use instruction::{Instruction, InstructionContext};
pub use instruction_traits::PureInstruction;
pub use label::Label;
pub use opcode::Opcode;
pub use stack_ops::StackOp;
pub use urt_error::{Error, Result};
pub use urt_foundation::Value;
pub use variable_ops::{VariableContext, VariableOp};
