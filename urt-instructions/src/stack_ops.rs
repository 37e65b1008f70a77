//! Operand stack operations.
//!
//! `load` pushes an inline immediate and `dup` duplicates the top of the
//! operand stack.

use crate::prelude::*;

/// Represents a pure operand stack operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackOp {
    /// Push an immediate value
    Load(Value),
    /// Duplicate the top value
    Dup,
}

impl<T: PureExecutionContext> PureInstruction<T, Error> for StackOp {
    fn execute(&self, context: &mut T) -> Result<()> {
        match self {
            Self::Load(value) => context.push_value(value.clone()),
            Self::Dup => context.dup_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::ExecutionContext;

    #[test]
    fn test_load_and_dup() {
        let mut context = ExecutionContext::new();
        StackOp::Load(Value::Number(7)).execute(&mut context).unwrap();
        StackOp::Dup.execute(&mut context).unwrap();
        assert_eq!(context.stack(), &[Value::Number(7), Value::Number(7)]);
    }

    #[test]
    fn test_dup_on_empty_stack_fails() {
        let mut context = ExecutionContext::new();
        let err = StackOp::Dup.execute(&mut context).unwrap_err();
        assert_eq!(err.code, codes::STACK_UNDERFLOW);
    }
}
