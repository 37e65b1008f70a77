//! Stackless execution engine
//!
//! The interpreter never recurses on the host stack: calls push arena frames,
//! protected regions push block records, and every unwinding step is a
//! transition of an explicit state machine. Chains of defers of any length
//! run in constant host stack space.

pub mod block;
pub mod call_stack;
pub mod engine;
pub mod frame;
pub mod unwind;

pub use block::{Block, BlockStack};
pub use call_stack::CallStack;
pub use engine::{Engine, ExecutionOutcome};
pub use frame::{BlockMarker, FrameRef, StacklessFrame};
pub use unwind::{UnwindEngine, UnwindState};
