//! The complete instruction set.
//!
//! [`Instruction`] groups the per-family operations and dispatches each one
//! against an [`InstructionContext`], the union of every family's context.

use crate::{
    arithmetic_ops::ArithmeticOp,
    comparison_ops::ComparisonOp,
    control_ops::{ControlContext, ControlOp},
    host_ops::{HostContext, HostOp},
    opcode::Opcode,
    prelude::*,
    stack_ops::StackOp,
    variable_ops::{VariableContext, VariableOp},
};

/// Context able to execute any [`Instruction`]
pub trait InstructionContext: VariableContext + ControlContext + HostContext {}

impl<T: VariableContext + ControlContext + HostContext> InstructionContext for T {}

/// One decoded instruction with its inline operands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Operand stack operation
    Stack(StackOp),
    /// Arithmetic operation
    Arithmetic(ArithmeticOp),
    /// Comparison operation
    Comparison(ComparisonOp),
    /// Local slot operation
    Variable(VariableOp),
    /// Control transfer
    Control(ControlOp),
    /// Host interaction
    Host(HostOp),
}

impl Instruction {
    /// Opcode of this instruction
    pub fn opcode(&self) -> Opcode {
        match self {
            Self::Stack(StackOp::Load(_)) => Opcode::Load,
            Self::Stack(StackOp::Dup) => Opcode::Dup,
            Self::Arithmetic(ArithmeticOp::Add) => Opcode::Add,
            Self::Comparison(ComparisonOp::Eq) => Opcode::Cmp,
            Self::Variable(VariableOp::LocalGet(_)) => Opcode::LoadLocal,
            Self::Variable(VariableOp::LocalSet(_)) => Opcode::WriteLocal,
            Self::Control(op) => match op {
                ControlOp::Jump(_) => Opcode::Jmp,
                ControlOp::JumpIf(_) => Opcode::JmpIf,
                ControlOp::SetupCatch { .. } => Opcode::SetupCatch,
                ControlOp::SetupDefer { .. } => Opcode::SetupDefer,
                ControlOp::Unwind => Opcode::Unwind,
                ControlOp::DeferContinue => Opcode::DeferContinue,
                ControlOp::Throw => Opcode::Throw,
                ControlOp::Call(_) => Opcode::Call,
                ControlOp::Return => Opcode::Ret,
            },
            Self::Host(op) => match op {
                HostOp::Print => Opcode::Print,
                HostOp::GetNumber => Opcode::GetNumber,
                HostOp::Exit => Opcode::Exit,
                HostOp::Abort => Opcode::Abort,
            },
        }
    }

    /// Assembly mnemonic
    pub fn mnemonic(&self) -> &'static str {
        self.opcode().mnemonic()
    }

    /// Label operands of this instruction
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        match self {
            Self::Control(op) => Some(op.labels()),
            _ => None,
        }
        .into_iter()
        .flatten()
    }

    /// Build an instruction from an opcode with no operands
    pub fn nullary(opcode: Opcode) -> Option<Self> {
        let instruction = match opcode {
            Opcode::Add => Self::Arithmetic(ArithmeticOp::Add),
            Opcode::Print => Self::Host(HostOp::Print),
            Opcode::Cmp => Self::Comparison(ComparisonOp::Eq),
            Opcode::Unwind => Self::Control(ControlOp::Unwind),
            Opcode::DeferContinue => Self::Control(ControlOp::DeferContinue),
            Opcode::Throw => Self::Control(ControlOp::Throw),
            Opcode::Ret => Self::Control(ControlOp::Return),
            Opcode::GetNumber => Self::Host(HostOp::GetNumber),
            Opcode::Exit => Self::Host(HostOp::Exit),
            Opcode::Abort => Self::Host(HostOp::Abort),
            Opcode::Dup => Self::Stack(StackOp::Dup),
            _ => return None,
        };
        Some(instruction)
    }
}

impl<T: InstructionContext> PureInstruction<T, Error> for Instruction {
    fn execute(&self, context: &mut T) -> Result<()> {
        match self {
            Self::Stack(op) => op.execute(context),
            Self::Arithmetic(op) => op.execute(context),
            Self::Comparison(op) => op.execute(context),
            Self::Variable(op) => op.execute(context),
            Self::Control(op) => op.execute(context),
            Self::Host(op) => op.execute(context),
        }
    }
}

fn write_literal(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Str(s) => {
            f.write_str("\"")?;
            for c in s.chars() {
                match c {
                    '"' => f.write_str("\\\"")?,
                    '\\' => f.write_str("\\\\")?,
                    '\n' => f.write_str("\\n")?,
                    '\t' => f.write_str("\\t")?,
                    c => write!(f, "{c}")?,
                }
            }
            f.write_str("\"")
        }
        other => write!(f, "{other}"),
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())?;
        match self {
            Self::Stack(StackOp::Load(value)) => {
                f.write_str(" ")?;
                write_literal(f, value)
            }
            Self::Variable(VariableOp::LocalGet(slot) | VariableOp::LocalSet(slot)) => {
                write!(f, " {slot}")
            }
            _ => {
                for label in self.labels() {
                    write!(f, " {label}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<StackOp> for Instruction {
    fn from(op: StackOp) -> Self {
        Self::Stack(op)
    }
}

impl From<ArithmeticOp> for Instruction {
    fn from(op: ArithmeticOp) -> Self {
        Self::Arithmetic(op)
    }
}

impl From<ComparisonOp> for Instruction {
    fn from(op: ComparisonOp) -> Self {
        Self::Comparison(op)
    }
}

impl From<VariableOp> for Instruction {
    fn from(op: VariableOp) -> Self {
        Self::Variable(op)
    }
}

impl From<ControlOp> for Instruction {
    fn from(op: ControlOp) -> Self {
        Self::Control(op)
    }
}

impl From<HostOp> for Instruction {
    fn from(op: HostOp) -> Self {
        Self::Host(op)
    }
}
