//! Execution statistics.

use crate::prelude::*;

/// Counters collected over one engine run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionStats {
    /// Instructions executed to completion
    pub instructions:      u64,
    /// `call` instructions executed
    pub calls:             u64,
    /// Frames popped by returns
    pub returns:           u64,
    /// `throw` instructions executed
    pub exceptions_thrown: u64,
    /// Exceptions transferred to a catch handler
    pub catches_taken:     u64,
    /// Defer bodies entered
    pub defers_entered:    u64,
    /// Deepest call stack observed, root frame included
    pub peak_call_depth:   usize,
    /// Deepest block stack observed
    pub peak_block_depth:  usize,
    /// Fuel units consumed
    pub fuel_consumed:     u64,
}

impl fmt::Display for ExecutionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "instructions:      {}", self.instructions)?;
        writeln!(f, "calls:             {}", self.calls)?;
        writeln!(f, "returns:           {}", self.returns)?;
        writeln!(f, "exceptions thrown: {}", self.exceptions_thrown)?;
        writeln!(f, "catches taken:     {}", self.catches_taken)?;
        writeln!(f, "defers entered:    {}", self.defers_entered)?;
        writeln!(f, "peak call depth:   {}", self.peak_call_depth)?;
        writeln!(f, "peak block depth:  {}", self.peak_block_depth)?;
        write!(f, "fuel consumed:     {}", self.fuel_consumed)
    }
}
