//! Variable operations.
//!
//! This module provides pure implementations for local slot access. Locals
//! live in the current frame's fixed-size slot array.

use crate::prelude::*;

/// Represents a pure variable operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableOp {
    /// Push a copy of a local slot (`loadlocal`)
    LocalGet(u32),
    /// Pop a value into a local slot (`writelocal`)
    LocalSet(u32),
}

/// Execution context for variable operations
pub trait VariableContext: PureExecutionContext {
    /// Get a local variable value by index
    fn get_local(&self, index: u32) -> Result<Value>;

    /// Set a local variable value by index
    fn set_local(&mut self, index: u32, value: Value) -> Result<()>;
}

impl<T: VariableContext> PureInstruction<T, Error> for VariableOp {
    fn execute(&self, context: &mut T) -> Result<()> {
        match self {
            Self::LocalGet(index) => {
                let value = context.get_local(*index)?;
                context.push_value(value)
            }
            Self::LocalSet(index) => {
                let value = context.pop_value()?;
                context.set_local(*index, value)
            }
        }
    }
}
