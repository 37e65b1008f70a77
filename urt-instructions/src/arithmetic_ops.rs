//! Arithmetic operations.

use crate::prelude::*;

/// Represents a pure arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    /// Pop rhs, pop lhs, push lhs + rhs
    Add,
}

fn add(lhs: Value, rhs: Value) -> Result<Value> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => a
            .checked_add(b)
            .map(Value::Number)
            .ok_or(Error::runtime_integer_overflow("Integer overflow in add")),
        (Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(&a);
            joined.push_str(&b);
            Ok(Value::string(joined))
        }
        _ => Err(Error::runtime_type_mismatch("Operands of add must both be numbers or strings")),
    }
}

impl<T: PureExecutionContext> PureInstruction<T, Error> for ArithmeticOp {
    fn execute(&self, context: &mut T) -> Result<()> {
        match self {
            Self::Add => {
                let rhs = context.pop_value()?;
                let lhs = context.pop_value()?;
                context.push_value(add(lhs, rhs)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::ExecutionContext;

    fn run_add(lhs: Value, rhs: Value) -> Result<Vec<Value>> {
        let mut context = ExecutionContext::new();
        context.push_value(lhs)?;
        context.push_value(rhs)?;
        ArithmeticOp::Add.execute(&mut context)?;
        Ok(context.stack().to_vec())
    }

    #[test]
    fn test_add_numbers() {
        assert_eq!(run_add(Value::Number(7), Value::Number(14)).unwrap(), vec![Value::Number(21)]);
    }

    #[test]
    fn test_add_strings_concatenates() {
        let stack = run_add(Value::string("ab"), Value::string("cd")).unwrap();
        assert_eq!(stack, vec![Value::string("abcd")]);
    }

    #[test]
    fn test_add_overflow_is_error() {
        let err = run_add(Value::Number(i64::MAX), Value::Number(1)).unwrap_err();
        assert_eq!(err.code, codes::INTEGER_OVERFLOW);
    }

    #[test]
    fn test_add_mixed_types_is_error() {
        let err = run_add(Value::Number(1), Value::string("x")).unwrap_err();
        assert!(err.is_type_error());
    }

    #[test]
    fn test_add_underflow() {
        let mut context = ExecutionContext::new();
        context.push_value(Value::Number(1)).unwrap();
        let err = ArithmeticOp::Add.execute(&mut context).unwrap_err();
        assert_eq!(err.code, codes::STACK_UNDERFLOW);
    }
}
