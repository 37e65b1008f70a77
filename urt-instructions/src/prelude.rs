//! Prelude module for urt-instructions
//!
//! Re-exports the types every instruction module needs so that each module
//! starts from the same `use crate::prelude::*;`.

pub use core::fmt::{self, Debug, Display};
pub use std::sync::Arc;

// Re-export from urt-error
pub use urt_error::{codes, Error, ErrorCategory, Result};
// Re-export from urt-foundation
pub use urt_foundation::{Value, ValueType};

pub use crate::execution::PureExecutionContext;
pub use crate::instruction_traits::PureInstruction;
pub use crate::label::Label;
