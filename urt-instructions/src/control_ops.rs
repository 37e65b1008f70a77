//! Control flow operations.
//!
//! This module provides pure implementations for the control-transfer
//! instructions: plain jumps, protected-region setup and exit, exception
//! throw, and function call and return. Everything except the two jumps is
//! delegated to the unwinding engine behind [`ControlContext`], which owns the
//! call stack, the block stack and the unwind state.

use crate::prelude::*;

/// Kind of a protected region on the block stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Transfers control once to its handler when an exception reaches it
    Catch,
    /// Runs its handler exactly once whenever control leaves the region
    Defer,
}

impl Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catch => f.write_str("catch"),
            Self::Defer => f.write_str("defer"),
        }
    }
}

/// Represents a pure control flow operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlOp {
    /// Unconditional jump to a label
    Jump(Label),
    /// Pop a value and jump to the label if it is truthy
    JumpIf(Label),
    /// Open a catch region
    SetupCatch {
        /// Label of the handler body
        handler: Label,
        /// Label reached when the region is exited without an exception
        resume:  Label,
    },
    /// Open a defer region
    SetupDefer {
        /// Label of the cleanup body
        handler: Label,
        /// Label reached after the cleanup body when no unwind is pending
        resume:  Label,
    },
    /// Leave the innermost protected region normally
    Unwind,
    /// Finish a defer body
    DeferContinue,
    /// Raise an exception
    Throw,
    /// Call the function at a label
    Call(Label),
    /// Return from the current function
    Return,
}

impl ControlOp {
    /// Label operands referenced by this operation, in encoding order
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        let (first, second) = match self {
            Self::Jump(target) | Self::JumpIf(target) | Self::Call(target) => (Some(target), None),
            Self::SetupCatch { handler, resume } | Self::SetupDefer { handler, resume } => {
                (Some(handler), Some(resume))
            }
            Self::Unwind | Self::DeferContinue | Self::Throw | Self::Return => (None, None),
        };
        first.into_iter().chain(second)
    }
}

/// Execution context for control flow operations
pub trait ControlContext: PureExecutionContext {
    /// Continue execution at a label
    fn jump(&mut self, target: &Label) -> Result<()>;

    /// Push a new protected region owned by the current frame
    fn setup_block(&mut self, kind: BlockKind, handler: &Label, resume: &Label) -> Result<()>;

    /// Leave the innermost protected region without an exception
    fn scope_exit(&mut self) -> Result<()>;

    /// Complete the defer body on top of the block stack
    fn defer_continue(&mut self) -> Result<()>;

    /// Start an exception unwind
    fn throw_exception(&mut self) -> Result<()>;

    /// Call a function by label
    fn call_function(&mut self, target: &Label) -> Result<()>;

    /// Return from the current function
    fn return_function(&mut self) -> Result<()>;
}

impl<T: ControlContext> PureInstruction<T, Error> for ControlOp {
    fn execute(&self, context: &mut T) -> Result<()> {
        match self {
            Self::Jump(target) => context.jump(target),
            Self::JumpIf(target) => {
                if context.pop_value()?.is_truthy() {
                    context.jump(target)
                } else {
                    Ok(())
                }
            }
            Self::SetupCatch { handler, resume } => {
                context.setup_block(BlockKind::Catch, handler, resume)
            }
            Self::SetupDefer { handler, resume } => {
                context.setup_block(BlockKind::Defer, handler, resume)
            }
            Self::Unwind => context.scope_exit(),
            Self::DeferContinue => context.defer_continue(),
            Self::Throw => context.throw_exception(),
            Self::Call(target) => context.call_function(target),
            Self::Return => context.return_function(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Jump(String),
        Setup(BlockKind, String, String),
        ScopeExit,
        DeferContinue,
        Throw,
        Call(String),
        Return,
    }

    // Mock control context that records every delegated transfer
    struct MockControlContext {
        stack:  Vec<Value>,
        events: Vec<Event>,
    }

    impl MockControlContext {
        fn new() -> Self {
            Self {
                stack:  Vec::new(),
                events: Vec::new(),
            }
        }
    }

    impl PureExecutionContext for MockControlContext {
        fn push_value(&mut self, value: Value) -> Result<()> {
            self.stack.push(value);
            Ok(())
        }

        fn pop_value(&mut self) -> Result<Value> {
            self.stack.pop().ok_or(Error::STACK_UNDERFLOW)
        }
    }

    impl ControlContext for MockControlContext {
        fn jump(&mut self, target: &Label) -> Result<()> {
            self.events.push(Event::Jump(target.name().to_string()));
            Ok(())
        }

        fn setup_block(&mut self, kind: BlockKind, handler: &Label, resume: &Label) -> Result<()> {
            self.events.push(Event::Setup(
                kind,
                handler.name().to_string(),
                resume.name().to_string(),
            ));
            Ok(())
        }

        fn scope_exit(&mut self) -> Result<()> {
            self.events.push(Event::ScopeExit);
            Ok(())
        }

        fn defer_continue(&mut self) -> Result<()> {
            self.events.push(Event::DeferContinue);
            Ok(())
        }

        fn throw_exception(&mut self) -> Result<()> {
            self.events.push(Event::Throw);
            Ok(())
        }

        fn call_function(&mut self, target: &Label) -> Result<()> {
            self.events.push(Event::Call(target.name().to_string()));
            Ok(())
        }

        fn return_function(&mut self) -> Result<()> {
            self.events.push(Event::Return);
            Ok(())
        }
    }

    #[test]
    fn test_jump_if_only_jumps_on_truthy() {
        let mut context = MockControlContext::new();
        context.push_value(Value::Bool(false)).unwrap();
        ControlOp::JumpIf(Label::from("skip")).execute(&mut context).unwrap();
        assert!(context.events.is_empty());

        context.push_value(Value::Number(3)).unwrap();
        ControlOp::JumpIf(Label::from("skip")).execute(&mut context).unwrap();
        assert_eq!(context.events, vec![Event::Jump("skip".to_string())]);
        assert!(context.stack.is_empty());
    }

    #[test]
    fn test_jump_if_underflow() {
        let mut context = MockControlContext::new();
        let err = ControlOp::JumpIf(Label::from("x")).execute(&mut context).unwrap_err();
        assert_eq!(err.code, codes::STACK_UNDERFLOW);
    }

    #[test]
    fn test_setup_ops_delegate_kind_and_labels() {
        let mut context = MockControlContext::new();
        ControlOp::SetupCatch {
            handler: Label::from("h1"),
            resume:  Label::from("r1"),
        }
        .execute(&mut context)
        .unwrap();
        ControlOp::SetupDefer {
            handler: Label::from("h2"),
            resume:  Label::from("r2"),
        }
        .execute(&mut context)
        .unwrap();

        assert_eq!(
            context.events,
            vec![
                Event::Setup(BlockKind::Catch, "h1".to_string(), "r1".to_string()),
                Event::Setup(BlockKind::Defer, "h2".to_string(), "r2".to_string()),
            ]
        );
    }

    #[test]
    fn test_transfer_ops_delegate() {
        let mut context = MockControlContext::new();
        for op in [
            ControlOp::Unwind,
            ControlOp::DeferContinue,
            ControlOp::Throw,
            ControlOp::Call(Label::from("add")),
            ControlOp::Return,
        ] {
            op.execute(&mut context).unwrap();
        }

        assert_eq!(
            context.events,
            vec![
                Event::ScopeExit,
                Event::DeferContinue,
                Event::Throw,
                Event::Call("add".to_string()),
                Event::Return,
            ]
        );
    }

    #[test]
    fn test_labels_in_encoding_order() {
        let op = ControlOp::SetupDefer {
            handler: Label::from("cleanup"),
            resume:  Label::from("after"),
        };
        let names: Vec<&str> = op.labels().map(Label::name).collect();
        assert_eq!(names, vec!["cleanup", "after"]);
        assert_eq!(ControlOp::Return.labels().count(), 0);
    }
}
