//! Engine configuration.

/// Default number of local slots per frame
pub const DEFAULT_LOCALS_PER_FRAME: usize = 4;
/// Default call depth limit
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;
/// Default operand stack capacity
pub const DEFAULT_MAX_OPERAND_STACK: usize = 65536;

/// Limits and budgets for one engine run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Local slots allocated for every frame
    pub locals_per_frame:  usize,
    /// Maximum number of frames, root included
    pub max_call_depth:    usize,
    /// Maximum number of values on the operand stack
    pub max_operand_stack: usize,
    /// Instruction budget, one unit per executed instruction
    pub fuel:              Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            locals_per_frame:  DEFAULT_LOCALS_PER_FRAME,
            max_call_depth:    DEFAULT_MAX_CALL_DEPTH,
            max_operand_stack: DEFAULT_MAX_OPERAND_STACK,
            fuel:              None,
        }
    }
}

impl EngineConfig {
    /// Set the number of local slots per frame
    pub fn with_locals_per_frame(mut self, locals: usize) -> Self {
        self.locals_per_frame = locals;
        self
    }

    /// Set the call depth limit
    pub fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Set the operand stack capacity
    pub fn with_max_operand_stack(mut self, capacity: usize) -> Self {
        self.max_operand_stack = capacity;
        self
    }

    /// Set or clear the instruction budget
    pub fn with_fuel(mut self, fuel: Option<u64>) -> Self {
        self.fuel = fuel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.locals_per_frame, 4);
        assert_eq!(config.max_call_depth, 1024);
        assert_eq!(config.max_operand_stack, 65536);
        assert_eq!(config.fuel, None);
    }

    #[test]
    fn test_builder_setters() {
        let config = EngineConfig::default()
            .with_locals_per_frame(8)
            .with_max_call_depth(3)
            .with_max_operand_stack(16)
            .with_fuel(Some(100));
        assert_eq!(config, EngineConfig {
            locals_per_frame:  8,
            max_call_depth:    3,
            max_operand_stack: 16,
            fuel:              Some(100),
        });
    }
}
