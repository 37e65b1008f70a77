//! Stackless function activation frame
//!
//! Frames live in the [`CallStack`](super::CallStack) arena. Other records
//! refer to a frame through a [`FrameRef`], which pairs the arena slot with
//! the frame's unique serial so that a reference outliving its frame is
//! detected instead of silently aliasing whatever frame reuses the slot.

use crate::prelude::*;

/// Validated reference to a frame in the call stack arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRef {
    /// Arena slot, equal to the frame's depth below the root
    pub index:  usize,
    /// Serial number unique to one activation
    pub serial: u64,
}

impl fmt::Display for FrameRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame#{}@{}", self.serial, self.index)
    }
}

/// Block stack depth captured when a frame is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BlockMarker(pub usize);

impl BlockMarker {
    /// Number of blocks below the marker
    pub fn depth(self) -> usize {
        self.0
    }
}

/// One function activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StacklessFrame {
    /// Slot to resume in the caller; `None` for the root frame
    pub return_address: Option<usize>,
    /// Blocks at or below this depth belong to callers
    pub block_marker:   BlockMarker,
    serial:             u64,
    locals:             Box<[Value]>,
}

impl StacklessFrame {
    /// Create a frame with `locals_count` slots set to `fill`
    pub fn new(
        return_address: Option<usize>,
        block_marker: BlockMarker,
        serial: u64,
        locals_count: usize,
        fill: &Value,
    ) -> Self {
        Self {
            return_address,
            block_marker,
            serial,
            locals: vec![fill.clone(); locals_count].into_boxed_slice(),
        }
    }

    /// Serial number of this activation
    pub fn serial(&self) -> u64 {
        self.serial
    }

    /// Local slots
    pub fn locals(&self) -> &[Value] {
        &self.locals
    }

    /// Get a local variable
    pub fn get_local(&self, index: u32) -> Result<Value> {
        self.locals
            .get(index as usize)
            .cloned()
            .ok_or(Error::runtime_invalid_local("Local index out of bounds"))
    }

    /// Set a local variable
    pub fn set_local(&mut self, index: u32, value: Value) -> Result<()> {
        let slot = self
            .locals
            .get_mut(index as usize)
            .ok_or(Error::runtime_invalid_local("Local index out of bounds"))?;
        *slot = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locals_are_prefilled() {
        let frame = StacklessFrame::new(Some(3), BlockMarker(1), 7, 4, &Value::Null);
        assert_eq!(frame.locals(), &[Value::Null, Value::Null, Value::Null, Value::Null]);
        assert_eq!(frame.return_address, Some(3));
        assert_eq!(frame.block_marker.depth(), 1);
        assert_eq!(frame.serial(), 7);
    }

    #[test]
    fn test_local_bounds() {
        let mut frame = StacklessFrame::new(None, BlockMarker::default(), 0, 2, &Value::Number(0));
        frame.set_local(1, Value::Number(42)).unwrap();
        assert_eq!(frame.get_local(1).unwrap(), Value::Number(42));
        assert_eq!(frame.get_local(2).unwrap_err().code, codes::INVALID_LOCAL_INDEX);
        assert_eq!(
            frame.set_local(2, Value::Null).unwrap_err().code,
            codes::INVALID_LOCAL_INDEX
        );
    }
}
