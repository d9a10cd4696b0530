use std::cmp::Ordering;
use std::fmt::Debug;

use crate::weight::Weight;
use crate::Result;

/// A queue entry: tentative distance and the node it belongs to
///
/// Ordered by priority, then by node index, so that equal priorities pop in a
/// deterministic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueKey<W> {
    pub priority: W,
    pub node: usize,
}

impl<W> QueueKey<W> {
    pub fn new(priority: W, node: usize) -> Self {
        QueueKey { priority, node }
    }
}

impl<W: Ord> Ord for QueueKey<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl<W: Ord> PartialOrd for QueueKey<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Mutable min-priority queue driven by the shortest-path engine
///
/// `pop` must always return the smallest key not yet popped. How decrease-key is
/// realised is up to the backend:
///
/// * in place, through a handle that stays valid while its entry is queued
///   ([`IndexedBinaryHeap`](super::IndexedBinaryHeap));
/// * as a fresh push that leaves the superseded entry behind
///   ([`LinearScanQueue`](super::LinearScanQueue),
///   [`LazyBinaryHeap`](super::LazyBinaryHeap)). Such backends set
///   [`MODELS_DECREASE_BY_PUSH`](PriorityQueue::MODELS_DECREASE_BY_PUSH), and the
///   caller must discard a popped entry whose node it has already finalised. The
///   superseded entry always carries a larger priority than its replacement, so it
///   can only surface after the replacement has been popped.
pub trait PriorityQueue<W>: Debug + Default
where
    W: Weight,
{
    /// Stable address of a queued entry
    type Handle: Copy + Debug;

    /// Whether `decrease` leaves stale entries in the queue
    const MODELS_DECREASE_BY_PUSH: bool;

    /// Inserts a key and returns the handle addressing it
    fn push(&mut self, key: QueueKey<W>) -> Self::Handle;

    /// Returns the minimum key without removing it
    fn top(&self) -> Result<QueueKey<W>>;

    /// Removes and returns the minimum key
    fn pop(&mut self) -> Result<QueueKey<W>>;

    /// Lowers the priority of the entry at `handle` to `key.priority`
    ///
    /// Returns the handle to use for later decreases of the same node.
    fn decrease(&mut self, handle: Self::Handle, key: QueueKey<W>) -> Result<Self::Handle>;

    /// Number of entries still queued, including stale ones
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn name() -> &'static str;
}
