//! Traits for instruction implementation.
//!
//! This module provides the trait that defines the interface for pure
//! instruction implementations. It establishes the boundary between what an
//! instruction does and how a particular engine stores its state.

/// Trait for pure instruction execution.
///
/// The context type is generic, allowing different execution engines (and
/// test mocks) to provide their own context.
pub trait PureInstruction<T, E> {
    /// Executes the instruction with the given context.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the instruction executed successfully
    /// * `Err(E)` - If an error occurred during execution
    fn execute(&self, context: &mut T) -> core::result::Result<(), E>;
}
