//! Pure execution context for instructions.
//!
//! Every instruction family works against the operand stack; the traits of
//! the individual families extend [`PureExecutionContext`] with whatever extra
//! state they touch (locals, control flow, host I/O).

use crate::prelude::*;

/// A trait defining the minimal execution context for pure instructions.
pub trait PureExecutionContext {
    /// Pushes a value onto the operand stack.
    fn push_value(&mut self, value: Value) -> Result<()>;

    /// Pops a value from the operand stack.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The popped value
    /// * `Err(Error)` - If the stack is empty
    fn pop_value(&mut self) -> Result<Value>;

    /// Pushes a copy of the top value.
    fn dup_value(&mut self) -> Result<()> {
        let value = self.pop_value()?;
        self.push_value(value.clone())?;
        self.push_value(value)
    }
}

/// A general-purpose operand-only context, used by tests
#[derive(Debug, Default)]
pub struct ExecutionContext {
    stack: Vec<Value>,
}

impl ExecutionContext {
    /// Creates a new ExecutionContext
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Returns the current stack
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }
}

impl PureExecutionContext for ExecutionContext {
    fn push_value(&mut self, value: Value) -> Result<()> {
        self.stack.push(value);
        Ok(())
    }

    fn pop_value(&mut self) -> Result<Value> {
        self.stack.pop().ok_or(Error::STACK_UNDERFLOW)
    }
}
