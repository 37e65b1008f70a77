// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Structured unwinding engine
//!
//! [`UnwindEngine`] owns the call stack, the block stack and the unwind
//! state, and exposes one entry point per control-transfer instruction. Each
//! entry point performs a single state transition and returns the next
//! instruction pointer; it never calls back into the execution loop.
//!
//! # Exception unwind
//!
//! `throw` requires a catch block somewhere on the block stack. The engine
//! repeatedly aligns the call stack with the owner of the top block and
//! inspects that block:
//!
//! - a catch is popped and its handler entered, ending the unwind
//! - an idle defer is marked running and its handler entered; the unwind is
//!   suspended on the block until the body executes `defercontinue`
//! - a defer whose body is already running is dropped and the scan goes on
//!
//! # Return unwind
//!
//! `ret` from a frame that still owns blocks runs the frame's defers from
//! newest to oldest. Catch blocks owned by the frame are dropped without
//! firing. A defer owned by a caller is left alone.
//!
//! Resuming after a defer body is a state transition back into the scan, so
//! chains of defers never grow the host stack.

use tracing::debug;

use super::{
    block::{Block, BlockStack},
    call_stack::CallStack,
    frame::{BlockMarker, FrameRef, StacklessFrame},
};
use crate::prelude::*;

/// Propagation currently in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnwindState {
    /// No propagation
    #[default]
    Idle,
    /// Looking for a catch handler
    Exception,
    /// Running the returning frame's defers
    Return,
}

impl fmt::Display for UnwindState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Exception => f.write_str("exception"),
            Self::Return => f.write_str("return"),
        }
    }
}

/// Machine state touched by control transfers
#[derive(Debug, Clone)]
pub struct UnwindEngine {
    call_stack:     CallStack,
    blocks:         BlockStack,
    state:          UnwindState,
    catches_taken:  u64,
    defers_entered: u64,
    returns:        u64,
}

impl UnwindEngine {
    /// Create the machine with a root frame and no blocks
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            call_stack:     CallStack::new(config.locals_per_frame, config.max_call_depth),
            blocks:         BlockStack::new(),
            state:          UnwindState::Idle,
            catches_taken:  0,
            defers_entered: 0,
            returns:        0,
        }
    }

    /// Current unwind state
    pub fn state(&self) -> UnwindState {
        self.state
    }

    /// The call stack
    pub fn call_stack(&self) -> &CallStack {
        &self.call_stack
    }

    /// The block stack
    pub fn blocks(&self) -> &BlockStack {
        &self.blocks
    }

    /// The current frame
    pub fn current_frame(&self) -> Result<&StacklessFrame> {
        self.call_stack.current_frame()
    }

    /// The current frame, mutably
    pub fn current_frame_mut(&mut self) -> Result<&mut StacklessFrame> {
        self.call_stack.current_frame_mut()
    }

    /// Exceptions handed to a catch handler so far
    pub fn catches_taken(&self) -> u64 {
        self.catches_taken
    }

    /// Defer bodies entered so far
    pub fn defers_entered(&self) -> u64 {
        self.defers_entered
    }

    /// Frames popped by returns so far
    pub fn returns(&self) -> u64 {
        self.returns
    }

    /// Push a catch block owned by the current frame
    pub fn setup_catch(&mut self, handler: usize, resume: usize) -> Result<()> {
        self.setup_block(BlockKind::Catch, handler, resume)
    }

    /// Push a defer block owned by the current frame
    pub fn setup_defer(&mut self, handler: usize, resume: usize) -> Result<()> {
        self.setup_block(BlockKind::Defer, handler, resume)
    }

    /// Push a block of `kind` owned by the current frame
    pub fn setup_block(&mut self, kind: BlockKind, handler: usize, resume: usize) -> Result<()> {
        let owner = self.call_stack.current()?;
        let index = self.blocks.push(kind, handler, resume, owner);
        debug!(%kind, index, handler, resume, %owner, "block pushed");
        Ok(())
    }

    /// Leave the innermost region without an exception.
    ///
    /// A catch is popped and its resume slot returned. A defer stays on the
    /// stack and its handler is entered; the following `defercontinue`
    /// resumes at the defer's resume slot.
    pub fn scope_exit(&mut self) -> Result<usize> {
        let current = self.call_stack.current()?;
        let top = *self.blocks.top().ok_or(Error::BLOCK_STACK_EMPTY)?;
        if top.owner != current {
            return Err(urt_error::block_owner_mismatch_error(
                "Scope exit of a block owned by another frame",
            ));
        }
        match top.kind {
            BlockKind::Catch => {
                self.blocks.pop()?;
                debug!(resume = top.resume, "catch region left");
                Ok(top.resume)
            }
            BlockKind::Defer if top.running => Err(urt_error::defer_body_escape_error(
                "Scope exit inside a running defer body",
            )),
            BlockKind::Defer => self.enter_defer(UnwindState::Idle),
        }
    }

    /// Finish the defer body on top of the block stack.
    ///
    /// Pops the defer and either resumes the suspended unwind or continues
    /// at the defer's resume slot.
    pub fn defer_continue(&mut self) -> Result<usize> {
        let current = self.call_stack.current()?;
        let top = *self.blocks.top().ok_or(Error::BLOCK_STACK_EMPTY)?;
        if top.kind != BlockKind::Defer {
            return Err(urt_error::unexpected_block_kind_error(
                "Defer continue with a catch block on top",
            ));
        }
        if !top.running {
            return Err(urt_error::unexpected_block_kind_error(
                "Defer continue outside a defer body",
            ));
        }
        if top.owner != current {
            return Err(urt_error::block_owner_mismatch_error(
                "Defer continue from a frame that does not own the defer",
            ));
        }
        let finished = self.blocks.pop()?;
        self.state = finished.pending;
        if finished.pending == UnwindState::Idle {
            // An enclosing defer body may still hold a suspended unwind
            self.settle();
        }
        debug!(state = %self.state, "defer body finished");
        match finished.pending {
            UnwindState::Idle => Ok(finished.resume),
            UnwindState::Exception => self.unwind_exception(),
            UnwindState::Return => self.unwind_return(),
        }
    }

    /// Raise an exception and return the slot of the first body to run.
    pub fn throw(&mut self) -> Result<usize> {
        if self.blocks.nearest(BlockKind::Catch).is_none() {
            tracing::warn!(frames = self.call_stack.depth(), "exception with no catch block");
            return Err(Error::UNHANDLED_EXCEPTION);
        }
        self.state = UnwindState::Exception;
        debug!(blocks = self.blocks.len(), "exception unwind started");
        self.unwind_exception()
    }

    /// Push a callee frame and return the callee's entry slot
    pub fn call(&mut self, target: usize, return_address: usize) -> Result<usize> {
        let marker = self.blocks.marker();
        let frame = self.call_stack.push(return_address, marker)?;
        debug!(%frame, target, return_address, marker = marker.depth(), "frame pushed");
        Ok(target)
    }

    /// Return from the current frame.
    ///
    /// A frame that owns the top block starts a return unwind; any other
    /// frame is popped directly.
    pub fn ret(&mut self) -> Result<usize> {
        let current = self.call_stack.current()?;
        if current.index == 0 {
            return Err(urt_error::return_from_root_frame_error(
                "Return from the root frame",
            ));
        }
        match self.blocks.top() {
            Some(top) if top.owner == current => {
                self.state = UnwindState::Return;
                debug!(%current, "return unwind started");
                self.unwind_return()
            }
            _ => self.pop_frame(current),
        }
    }

    fn unwind_exception(&mut self) -> Result<usize> {
        loop {
            let top = *self.blocks.top().ok_or(Error::UNHANDLED_EXCEPTION)?;
            let discarded = self.call_stack.unwind_to(top.owner)?;
            if discarded > 0 {
                debug!(discarded, owner = %top.owner, "frames discarded by exception");
            }
            match top.kind {
                BlockKind::Catch => {
                    self.blocks.pop()?;
                    self.catches_taken += 1;
                    self.settle();
                    debug!(handler = top.handler, state = %self.state, "exception caught");
                    return Ok(top.handler);
                }
                BlockKind::Defer if top.running => {
                    // The exception escaped this defer's body; it already ran once.
                    self.blocks.pop()?;
                    debug!(handler = top.handler, "running defer abandoned");
                }
                BlockKind::Defer => return self.enter_defer(UnwindState::Exception),
            }
        }
    }

    fn unwind_return(&mut self) -> Result<usize> {
        let current = self.call_stack.current()?;
        let found = self
            .blocks
            .nearest(BlockKind::Defer)
            .map(|(index, block)| (index, *block));
        match found {
            Some((index, defer)) if defer.owner == current => {
                if defer.running {
                    return Err(urt_error::defer_body_escape_error(
                        "Return inside a running defer body",
                    ));
                }
                let dropped = self.blocks.discard_above(BlockMarker(index + 1), current)?;
                if dropped > 0 {
                    debug!(dropped, "catch blocks dropped by return");
                }
                self.enter_defer(UnwindState::Return)
            }
            _ => self.pop_frame(current),
        }
    }

    fn pop_frame(&mut self, current: FrameRef) -> Result<usize> {
        let marker = self.call_stack.current_frame()?.block_marker;
        self.blocks.discard_above(marker, current)?;
        let frame = self.call_stack.pop()?;
        self.returns += 1;
        let return_address = frame.return_address.ok_or(
            urt_error::return_from_root_frame_error("Return from the root frame"),
        )?;
        self.settle();
        debug!(%current, return_address, "frame returned");
        Ok(return_address)
    }

    /// Activate the defer on top of the block stack
    fn enter_defer(&mut self, reason: UnwindState) -> Result<usize> {
        let top: &mut Block = self.blocks.top_mut().ok_or(Error::BLOCK_STACK_EMPTY)?;
        top.running = true;
        top.pending = reason;
        let handler = top.handler;
        self.defers_entered += 1;
        debug!(handler, %reason, "defer body entered");
        Ok(handler)
    }

    /// After a propagation ends, fall back to the one suspended underneath
    fn settle(&mut self) {
        self.state = self
            .blocks
            .iter()
            .rev()
            .find(|block| block.running)
            .map_or(UnwindState::Idle, |block| block.pending);
    }
}
