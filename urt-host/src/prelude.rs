//! Prelude module for urt-host

pub use urt_error::{codes, Error, Result};
pub use urt_foundation::Value;

pub use crate::host::{BufferedHost, HostIo, StdioHost};
