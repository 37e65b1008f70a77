//! Call stack arena.

use tracing::debug;

use super::frame::{BlockMarker, FrameRef, StacklessFrame};
use crate::prelude::*;

/// Ordered sequence of active frames; index 0 is the root frame
#[derive(Debug, Clone)]
pub struct CallStack {
    frames:           Vec<StacklessFrame>,
    locals_per_frame: usize,
    max_depth:        usize,
    next_serial:      u64,
    peak_depth:       usize,
}

impl CallStack {
    /// Create a call stack holding only the root frame.
    ///
    /// Root locals start as `Number(0)`.
    pub fn new(locals_per_frame: usize, max_depth: usize) -> Self {
        let root = StacklessFrame::new(
            None,
            BlockMarker::default(),
            0,
            locals_per_frame,
            &Value::Number(0),
        );
        Self {
            frames: vec![root],
            locals_per_frame,
            max_depth,
            next_serial: 1,
            peak_depth: 1,
        }
    }

    /// Push a callee frame with `Null` locals
    pub fn push(&mut self, return_address: usize, block_marker: BlockMarker) -> Result<FrameRef> {
        if self.frames.len() >= self.max_depth {
            tracing::warn!(depth = self.frames.len(), "call depth limit reached");
            return Err(Error::CALL_STACK_EXHAUSTED);
        }
        let serial = self.next_serial;
        self.next_serial += 1;
        self.frames.push(StacklessFrame::new(
            Some(return_address),
            block_marker,
            serial,
            self.locals_per_frame,
            &Value::Null,
        ));
        self.peak_depth = self.peak_depth.max(self.frames.len());
        Ok(FrameRef {
            index: self.frames.len() - 1,
            serial,
        })
    }

    /// Pop the current frame
    pub fn pop(&mut self) -> Result<StacklessFrame> {
        self.frames.pop().ok_or(Error::CALL_STACK_EMPTY)
    }

    /// Reference to the current frame
    pub fn current(&self) -> Result<FrameRef> {
        let frame = self.frames.last().ok_or(Error::CALL_STACK_EMPTY)?;
        Ok(FrameRef {
            index:  self.frames.len() - 1,
            serial: frame.serial(),
        })
    }

    /// The current frame
    pub fn current_frame(&self) -> Result<&StacklessFrame> {
        self.frames.last().ok_or(Error::CALL_STACK_EMPTY)
    }

    /// The current frame, mutably
    pub fn current_frame_mut(&mut self) -> Result<&mut StacklessFrame> {
        self.frames.last_mut().ok_or(Error::CALL_STACK_EMPTY)
    }

    /// Dereference a frame reference, rejecting stale ones
    pub fn get(&self, frame: FrameRef) -> Result<&StacklessFrame> {
        self.frames
            .get(frame.index)
            .filter(|candidate| candidate.serial() == frame.serial)
            .ok_or(Error::invalid_frame("Frame reference is no longer live"))
    }

    /// Pop frames until `target` is current; returns how many were discarded
    pub fn unwind_to(&mut self, target: FrameRef) -> Result<usize> {
        self.get(target)?;
        let discarded = self.frames.len() - 1 - target.index;
        for frame in self.frames.drain(target.index + 1..) {
            debug!(serial = frame.serial(), "discarding frame");
        }
        Ok(discarded)
    }

    /// Number of frames, root included
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Deepest depth observed
    pub fn peak_depth(&self) -> usize {
        self.peak_depth
    }

    /// Frames from root to current
    pub fn frames(&self) -> &[StacklessFrame] {
        &self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_frame_is_zeroed() {
        let stack = CallStack::new(4, 8);
        let root = stack.current_frame().unwrap();
        assert_eq!(root.return_address, None);
        assert!(root.locals().iter().all(|v| *v == Value::Number(0)));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_push_and_validate_refs() {
        let mut stack = CallStack::new(2, 8);
        let callee = stack.push(10, BlockMarker(0)).unwrap();
        assert_eq!(stack.current().unwrap(), callee);
        assert_eq!(stack.get(callee).unwrap().return_address, Some(10));
        assert_eq!(stack.get(callee).unwrap().locals(), &[Value::Null, Value::Null]);

        stack.pop().unwrap();
        let reused = stack.push(20, BlockMarker(0)).unwrap();
        assert_eq!(reused.index, callee.index);
        assert_ne!(reused.serial, callee.serial);
        assert_eq!(
            stack.get(callee).unwrap_err().code,
            codes::EXECUTION_INVALID_FRAME
        );
    }

    #[test]
    fn test_depth_limit() {
        let mut stack = CallStack::new(1, 2);
        stack.push(1, BlockMarker(0)).unwrap();
        assert_eq!(stack.push(2, BlockMarker(0)), Err(Error::CALL_STACK_EXHAUSTED));
        assert_eq!(stack.peak_depth(), 2);
    }

    #[test]
    fn test_unwind_to_discards_callees() {
        let mut stack = CallStack::new(1, 8);
        let root = stack.current().unwrap();
        stack.push(1, BlockMarker(0)).unwrap();
        stack.push(2, BlockMarker(0)).unwrap();
        assert_eq!(stack.unwind_to(root).unwrap(), 2);
        assert_eq!(stack.current().unwrap(), root);
        assert_eq!(stack.unwind_to(root).unwrap(), 0);
    }
}
