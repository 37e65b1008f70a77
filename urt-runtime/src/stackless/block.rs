//! Block stack.
//!
//! One record per active protected region, ordered by creation time across
//! all frames. The stack is strictly LIFO: blocks owned by a callee always
//! sit above the blocks of its callers.

use tracing::debug;

use super::frame::{BlockMarker, FrameRef};
use super::unwind::UnwindState;
use crate::prelude::*;

/// An active catch or defer region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Catch or defer
    pub kind:    BlockKind,
    /// Slot entered when the block is activated
    pub handler: usize,
    /// Slot entered when the region is left without activation
    pub resume:  usize,
    /// Frame that was current when the block was pushed
    pub owner:   FrameRef,
    /// Index of the nearest same-kind block below this one at creation time.
    ///
    /// Recorded for diagnostics only.
    pub parent:  Option<usize>,
    /// Set while a defer's handler body is executing
    pub running: bool,
    /// Unwind suspended while this defer's body runs
    pub pending: UnwindState,
}

/// Ordered sequence of active blocks
#[derive(Debug, Clone, Default)]
pub struct BlockStack {
    blocks:     Vec<Block>,
    peak_depth: usize,
}

impl BlockStack {
    /// Create an empty block stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block; returns its index
    pub fn push(&mut self, kind: BlockKind, handler: usize, resume: usize, owner: FrameRef) -> usize {
        let parent = self.nearest(kind).map(|(index, _)| index);
        self.blocks.push(Block {
            kind,
            handler,
            resume,
            owner,
            parent,
            running: false,
            pending: UnwindState::Idle,
        });
        self.peak_depth = self.peak_depth.max(self.blocks.len());
        self.blocks.len() - 1
    }

    /// Remove the top block
    pub fn pop(&mut self) -> Result<Block> {
        self.blocks.pop().ok_or(Error::BLOCK_STACK_EMPTY)
    }

    /// The top block
    pub fn top(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// The top block, mutably
    pub fn top_mut(&mut self) -> Option<&mut Block> {
        self.blocks.last_mut()
    }

    /// Topmost block of `kind`, searching across all frames
    pub fn nearest(&self, kind: BlockKind) -> Option<(usize, &Block)> {
        self.blocks
            .iter()
            .enumerate()
            .rev()
            .find(|(_, block)| block.kind == kind)
    }

    /// Current depth, as captured by a new frame
    pub fn marker(&self) -> BlockMarker {
        BlockMarker(self.blocks.len())
    }

    /// Drop every block above `marker`.
    ///
    /// Each dropped block must be owned by `owner`; returns how many were
    /// dropped.
    pub fn discard_above(&mut self, marker: BlockMarker, owner: FrameRef) -> Result<usize> {
        let mut discarded = 0;
        while self.blocks.len() > marker.depth() {
            let top = self.pop()?;
            if top.owner != owner {
                tracing::warn!(owner = %top.owner, frame = %owner, "block discarded by foreign frame");
                return Err(urt_error::block_owner_mismatch_error(
                    "Discarded block is owned by another frame",
                ));
            }
            debug!(kind = %top.kind, handler = top.handler, "discarding block");
            discarded += 1;
        }
        Ok(discarded)
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no region is active
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Deepest depth observed
    pub fn peak_depth(&self) -> usize {
        self.peak_depth
    }

    /// Blocks from oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Block> {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: FrameRef = FrameRef { index: 0, serial: 0 };
    const CALLEE: FrameRef = FrameRef { index: 1, serial: 1 };

    #[test]
    fn test_nearest_scans_across_frames() {
        let mut blocks = BlockStack::new();
        blocks.push(BlockKind::Catch, 10, 11, ROOT);
        blocks.push(BlockKind::Defer, 20, 21, ROOT);
        blocks.push(BlockKind::Catch, 30, 31, CALLEE);

        let (index, catch) = blocks.nearest(BlockKind::Catch).unwrap();
        assert_eq!((index, catch.handler), (2, 30));
        let (index, defer) = blocks.nearest(BlockKind::Defer).unwrap();
        assert_eq!((index, defer.owner), (1, ROOT));
        assert_eq!(blocks.peak_depth(), 3);
    }

    #[test]
    fn test_parent_links_same_kind() {
        let mut blocks = BlockStack::new();
        blocks.push(BlockKind::Catch, 0, 0, ROOT);
        blocks.push(BlockKind::Defer, 0, 0, ROOT);
        blocks.push(BlockKind::Catch, 0, 0, ROOT);
        let parents: Vec<_> = blocks.iter().map(|b| b.parent).collect();
        assert_eq!(parents, vec![None, None, Some(0)]);
    }

    #[test]
    fn test_iter_walks_both_directions() {
        let mut blocks = BlockStack::new();
        blocks.push(BlockKind::Catch, 10, 11, ROOT);
        blocks.push(BlockKind::Defer, 20, 21, CALLEE);
        let newest_first: Vec<_> = blocks.iter().rev().map(|b| b.handler).collect();
        assert_eq!(newest_first, vec![20, 10]);
    }

    #[test]
    fn test_discard_above_marker() {
        let mut blocks = BlockStack::new();
        blocks.push(BlockKind::Catch, 1, 2, ROOT);
        let marker = blocks.marker();
        blocks.push(BlockKind::Catch, 3, 4, CALLEE);
        blocks.push(BlockKind::Defer, 5, 6, CALLEE);

        assert_eq!(blocks.discard_above(marker, CALLEE).unwrap(), 2);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks.discard_above(marker, CALLEE).unwrap(), 0);
    }

    #[test]
    fn test_discard_rejects_foreign_blocks() {
        let mut blocks = BlockStack::new();
        blocks.push(BlockKind::Catch, 1, 2, ROOT);
        let err = blocks.discard_above(BlockMarker(0), CALLEE).unwrap_err();
        assert_eq!(err.code, codes::BLOCK_OWNER_MISMATCH);
    }

    #[test]
    fn test_pop_empty() {
        let mut blocks = BlockStack::new();
        assert_eq!(blocks.pop(), Err(Error::BLOCK_STACK_EMPTY));
        assert!(blocks.top().is_none());
    }
}
