//! Pending-action buffer for the Gametrics SDK.
//!
//! Actions are queued locally in arrival order until a send is
//! attempted, then shipped to the service as one batch. The queue makes
//! two promises and no others:
//!
//! - **FIFO**: a drain yields actions in the exact order they were
//!   appended. No deduplication, no reordering.
//! - **Atomic drain**: no action is ever observed both in a drain result
//!   and still in the queue.
//!
//! The clear-only-after-success send protocol is built from
//! [`ActionQueue::snapshot`] and [`ActionQueue::remove_first`]: the
//! sender snapshots the queue, posts the batch, and removes exactly the
//! snapshot length once delivery is confirmed. A failed send touches
//! nothing, so the batch stays recoverable; appends that raced the send
//! survive the removal.
//!
//! # Concurrency note
//!
//! `ActionQueue` is NOT thread-safe by itself; it is a plain `VecDeque`
//! owned by the client and guarded with a lock at that higher level.
//! Keeping the locking out of this crate avoids hidden double-locking
//! in the single-threaded hosts that drive the SDK from one update loop.

use std::collections::VecDeque;

use gametrics_protocol::Action;

/// An ordered buffer of actions awaiting delivery.
#[derive(Debug, Default)]
pub struct ActionQueue {
    actions: VecDeque<Action>,
}

impl ActionQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an action to the back of the queue. O(1), never fails.
    pub fn append(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    /// Removes and returns every queued action, front to back, leaving
    /// the queue empty.
    pub fn drain(&mut self) -> Vec<Action> {
        self.actions.drain(..).collect()
    }

    /// Clones the queue contents, front to back, without removing them.
    ///
    /// This is the read half of the clear-only-after-success protocol:
    /// the snapshot is what gets serialized and sent while the queue
    /// itself stays intact until the send is confirmed.
    pub fn snapshot(&self) -> Vec<Action> {
        self.actions.iter().cloned().collect()
    }

    /// Removes the first `n` actions (or all of them if fewer remain).
    ///
    /// Called after a confirmed send with the snapshot length, so that
    /// actions appended while the send was in flight stay queued.
    pub fn remove_first(&mut self, n: usize) {
        let n = n.min(self.actions.len());
        self.actions.drain(..n);
    }

    /// The oldest queued action, if any. Diagnostics only.
    pub fn peek(&self) -> Option<&Action> {
        self.actions.front()
    }

    /// Number of queued actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

// =========================================================================
// Tests
// =========================================================================
