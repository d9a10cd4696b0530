use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::data_structures::priority_queue::{PriorityQueue, QueueKey};
use crate::weight::Weight;
use crate::{Error, Result};

/// A wrapper around BinaryHeap with decrease-key modelled as a fresh push
///
/// Same stale-entry contract as [`LinearScanQueue`](super::LinearScanQueue),
/// with O(log n) push and pop.
#[derive(Debug, Clone)]
pub struct LazyBinaryHeap<W>
where
    W: Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<QueueKey<W>>>,
}

impl<W: Ord> Default for LazyBinaryHeap<W> {
    fn default() -> Self {
        LazyBinaryHeap {
            heap: BinaryHeap::new(),
        }
    }
}

impl<W: Weight> LazyBinaryHeap<W> {
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W: Weight> PriorityQueue<W> for LazyBinaryHeap<W> {
    type Handle = QueueKey<W>;

    const MODELS_DECREASE_BY_PUSH: bool = true;

    fn push(&mut self, key: QueueKey<W>) -> QueueKey<W> {
        self.heap.push(Reverse(key));
        key
    }

    fn top(&self) -> Result<QueueKey<W>> {
        self.heap
            .peek()
            .map(|Reverse(key)| *key)
            .ok_or(Error::EmptyQueueAccess)
    }

    fn pop(&mut self) -> Result<QueueKey<W>> {
        self.heap
            .pop()
            .map(|Reverse(key)| key)
            .ok_or(Error::EmptyQueueAccess)
    }

    fn decrease(&mut self, handle: QueueKey<W>, key: QueueKey<W>) -> Result<QueueKey<W>> {
        if key.priority > handle.priority {
            return Err(Error::PriorityIncrease);
        }
        Ok(self.push(key))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn name() -> &'static str {
        "LazyBinaryHeap"
    }
}
