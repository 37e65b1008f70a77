// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Comparison operations.
//!
//! `cmp` compares the two topmost operands for structural equality and
//! pushes the boolean result, which is usually consumed by `jmpif`.

use crate::prelude::*;

/// Represents a pure comparison operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// Pop rhs, pop lhs, push `lhs == rhs`
    Eq,
}

impl<T: PureExecutionContext> PureInstruction<T, Error> for ComparisonOp {
    fn execute(&self, context: &mut T) -> Result<()> {
        match self {
            Self::Eq => {
                let rhs = context.pop_value()?;
                let lhs = context.pop_value()?;
                context.push_value(Value::Bool(lhs == rhs))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::ExecutionContext;

    #[test]
    fn test_cmp_not_equal_pushes_false() {
        let mut context = ExecutionContext::new();
        context.push_value(Value::Number(7)).unwrap();
        context.push_value(Value::Number(14)).unwrap();
        ComparisonOp::Eq.execute(&mut context).unwrap();
        assert_eq!(context.stack(), &[Value::Bool(false)]);
    }

    #[test]
    fn test_cmp_equal_pushes_true() {
        let mut context = ExecutionContext::new();
        context.push_value(Value::string("a")).unwrap();
        context.push_value(Value::string("a")).unwrap();
        ComparisonOp::Eq.execute(&mut context).unwrap();
        assert_eq!(context.stack(), &[Value::Bool(true)]);
    }

    #[test]
    fn test_cmp_different_types_is_false() {
        let mut context = ExecutionContext::new();
        context.push_value(Value::Number(1)).unwrap();
        context.push_value(Value::Bool(true)).unwrap();
        ComparisonOp::Eq.execute(&mut context).unwrap();
        assert_eq!(context.stack(), &[Value::Bool(false)]);
    }
}
