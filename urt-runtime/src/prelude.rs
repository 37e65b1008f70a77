//! Prelude module for urt-runtime

pub use core::fmt;

pub use urt_error::{codes, Error, ErrorCategory, Result};
pub use urt_foundation::{Value, ValueType};
pub use urt_instructions::{BlockKind, Instruction, Label, PureInstruction};

pub use crate::config::EngineConfig;
pub use crate::stack::OperandStack;
pub use crate::stats::ExecutionStats;
