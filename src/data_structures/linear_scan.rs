use crate::data_structures::priority_queue::{PriorityQueue, QueueKey};
use crate::weight::Weight;
use crate::{Error, Result};

/// Unordered queue that finds the minimum by scanning
///
/// `push` is O(1) and `pop` is O(len). Decrease-key is a plain push: the entry it
/// replaces stays queued until it is popped, at which point the engine has
/// already closed that node and drops it. The handle is the key itself.
#[derive(Debug, Clone)]
pub struct LinearScanQueue<W> {
    entries: Vec<QueueKey<W>>,
}

impl<W> Default for LinearScanQueue<W> {
    fn default() -> Self {
        LinearScanQueue {
            entries: Vec::new(),
        }
    }
}

impl<W: Weight> LinearScanQueue<W> {
    pub fn new() -> Self {
        Self::default()
    }

    fn min_position(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .min_by_key(|(_, key)| **key)
            .map(|(position, _)| position)
    }
}

impl<W: Weight> PriorityQueue<W> for LinearScanQueue<W> {
    type Handle = QueueKey<W>;

    const MODELS_DECREASE_BY_PUSH: bool = true;

    fn push(&mut self, key: QueueKey<W>) -> QueueKey<W> {
        self.entries.push(key);
        key
    }

    fn top(&self) -> Result<QueueKey<W>> {
        self.min_position()
            .map(|position| self.entries[position])
            .ok_or(Error::EmptyQueueAccess)
    }

    fn pop(&mut self) -> Result<QueueKey<W>> {
        let position = self.min_position().ok_or(Error::EmptyQueueAccess)?;
        Ok(self.entries.swap_remove(position))
    }

    fn decrease(&mut self, handle: QueueKey<W>, key: QueueKey<W>) -> Result<QueueKey<W>> {
        if key.priority > handle.priority {
            return Err(Error::PriorityIncrease);
        }
        Ok(self.push(key))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn name() -> &'static str {
        "LinearScanQueue"
    }
}
