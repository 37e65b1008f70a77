// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Runtime values.

use core::fmt;
use std::sync::Arc;

use urt_error::{Error, Result};

/// Type tag of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Signed 64-bit integer
    Number,
    /// Boolean
    Bool,
    /// Immutable string
    Str,
    /// Sentinel for uninitialised slots
    Null,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Str => "str",
            Self::Null => "null",
        };
        f.write_str(name)
    }
}

/// A value on the operand stack or in a local slot.
///
/// Strings are reference counted so `dup` and `loadlocal` stay cheap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// Signed 64-bit integer
    Number(i64),
    /// Boolean, produced by `cmp`
    Bool(bool),
    /// String literal
    Str(Arc<str>),
    /// Sentinel stored in fresh callee locals
    #[default]
    Null,
}

impl Value {
    /// Create a string value
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::Str(Arc::from(s.as_ref()))
    }

    /// Type tag of this value
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Number(_) => ValueType::Number,
            Self::Bool(_) => ValueType::Bool,
            Self::Str(_) => ValueType::Str,
            Self::Null => ValueType::Null,
        }
    }

    /// Truthiness as seen by `jmpif`
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0,
            Self::Bool(b) => *b,
            Self::Str(s) => !s.is_empty(),
            Self::Null => false,
        }
    }

    /// Number payload, if this is a number
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Number payload or a type mismatch error
    pub fn expect_number(&self) -> Result<i64> {
        self.as_number()
            .ok_or(Error::runtime_type_mismatch("Expected number operand"))
    }

    /// String payload, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::string(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => f.write_str(s),
            Self::Null => f.write_str("null"),
        }
    }
}
