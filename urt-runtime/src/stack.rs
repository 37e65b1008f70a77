//! Operand stack.

use crate::prelude::*;

/// Bounded last-in-first-out value stack used between instructions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperandStack {
    values:   Vec<Value>,
    capacity: usize,
}

impl OperandStack {
    /// Create an empty stack holding at most `capacity` values
    pub fn new(capacity: usize) -> Self {
        Self {
            values: Vec::new(),
            capacity,
        }
    }

    /// Push a value
    pub fn push(&mut self, value: Value) -> Result<()> {
        if self.values.len() >= self.capacity {
            return Err(Error::STACK_OVERFLOW);
        }
        self.values.push(value);
        Ok(())
    }

    /// Pop the top value
    pub fn pop(&mut self) -> Result<Value> {
        self.values.pop().ok_or(Error::STACK_UNDERFLOW)
    }

    /// Borrow the top value
    pub fn peek(&self) -> Result<&Value> {
        self.values.last().ok_or(Error::STACK_UNDERFLOW)
    }

    /// Push a copy of the top value
    pub fn dup(&mut self) -> Result<()> {
        let top = self.peek()?.clone();
        self.push(top)
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the stack is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values from bottom to top
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }
}
