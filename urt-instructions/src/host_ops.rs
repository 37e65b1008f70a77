//! Host interaction operations.
//!
//! `print` and `getnumber` talk to the host's I/O collaborator, `exit` ends
//! the run gracefully and `abort` ends it with a fault.

use crate::prelude::*;

/// Represents a host interaction operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOp {
    /// Pop a value and print it
    Print,
    /// Read a number from the host and push it
    GetNumber,
    /// Pop a number and terminate with it as exit code
    Exit,
    /// Terminate with a fatal fault
    Abort,
}

/// Execution context for host operations
pub trait HostContext: PureExecutionContext {
    /// Hand a value to the host's output
    fn print(&mut self, value: &Value) -> Result<()>;

    /// Read one number from the host's input
    fn read_number(&mut self) -> Result<i64>;

    /// Request graceful termination
    fn exit(&mut self, code: i64) -> Result<()>;

    /// Request abnormal termination
    fn abort(&mut self) -> Result<()>;
}

impl<T: HostContext> PureInstruction<T, Error> for HostOp {
    fn execute(&self, context: &mut T) -> Result<()> {
        match self {
            Self::Print => {
                let value = context.pop_value()?;
                context.print(&value)
            }
            Self::GetNumber => {
                let number = context.read_number()?;
                context.push_value(Value::Number(number))
            }
            Self::Exit => {
                let code = context
                    .pop_value()?
                    .as_number()
                    .ok_or(urt_error::invalid_exit_code_error("Exit code must be a number"))?;
                context.exit(code)
            }
            Self::Abort => context.abort(),
        }
    }
}
