//! Pending-object worklist
//!
//! Secondary objects (extended dictionaries and their entries) are not
//! written where they are discovered. Their handles are queued here and the
//! OBJECTS section drains the queue breadth-first, so a long chain of nested
//! dictionaries never deepens the call stack.

use std::collections::VecDeque;

use ahash::AHashSet;

use crate::types::Handle;

/// FIFO of handles, each accepted at most once per pass
#[derive(Debug, Default)]
pub struct ObjectQueue {
    pending: VecDeque<Handle>,
    scheduled: AHashSet<Handle>,
}

impl ObjectQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handle` to the tail.
    ///
    /// Returns `false` and leaves the queue unchanged when the handle was
    /// already scheduled during this pass, even if it has since been
    /// dequeued.
    pub fn enqueue(&mut self, handle: Handle) -> bool {
        if handle.is_null() || !self.scheduled.insert(handle) {
            return false;
        }
        self.pending.push_back(handle);
        true
    }

    /// Remove the head of the queue
    pub fn dequeue(&mut self) -> Option<Handle> {
        self.pending.pop_front()
    }

    /// Whether `handle` was ever accepted in this pass
    pub fn was_scheduled(&self, handle: Handle) -> bool {
        self.scheduled.contains(&handle)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Number of distinct handles accepted in this pass
    pub fn scheduled_count(&self) -> usize {
        self.scheduled.len()
    }
}
