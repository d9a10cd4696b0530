use log::trace;

use crate::data_structures::priority_queue::{PriorityQueue, QueueKey};
use crate::weight::Weight;
use crate::{Error, Result};

/// Stable address of an entry in an [`IndexedBinaryHeap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapHandle(usize);

impl HeapHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Slot<W> {
    key: QueueKey<W>,
    /// Position in `heap`, `None` once popped
    position: Option<usize>,
}

/// Binary min-heap with in-place decrease-key
///
/// Entries live in an append-only arena and are addressed by their arena index,
/// which is the handle returned from `push`. The heap array holds arena indices
/// and every slot tracks its current heap position, so sifting never
/// invalidates a handle. Arena slots are not reused; a heap instance serves a
/// single traversal.
#[derive(Debug, Clone)]
pub struct IndexedBinaryHeap<W> {
    slots: Vec<Slot<W>>,
    heap: Vec<usize>,
}

impl<W> Default for IndexedBinaryHeap<W> {
    fn default() -> Self {
        IndexedBinaryHeap {
            slots: Vec::new(),
            heap: Vec::new(),
        }
    }
}

impl<W: Weight> IndexedBinaryHeap<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current key of a live entry
    pub fn get(&self, handle: HeapHandle) -> Option<QueueKey<W>> {
        self.slots
            .get(handle.0)
            .filter(|slot| slot.position.is_some())
            .map(|slot| slot.key)
    }

    fn key_at(&self, position: usize) -> &QueueKey<W> {
        &self.slots[self.heap[position]].key
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a]].position = Some(a);
        self.slots[self.heap[b]].position = Some(b);
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if self.key_at(position) >= self.key_at(parent) {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut smallest = position;

            if left < len && self.key_at(left) < self.key_at(smallest) {
                smallest = left;
            }
            if right < len && self.key_at(right) < self.key_at(smallest) {
                smallest = right;
            }
            if smallest == position {
                break;
            }
            self.swap(position, smallest);
            position = smallest;
        }
    }
}

impl<W: Weight> PriorityQueue<W> for IndexedBinaryHeap<W> {
    type Handle = HeapHandle;

    const MODELS_DECREASE_BY_PUSH: bool = false;

    fn push(&mut self, key: QueueKey<W>) -> HeapHandle {
        let slot = self.slots.len();
        let position = self.heap.len();
        self.slots.push(Slot {
            key,
            position: Some(position),
        });
        self.heap.push(slot);
        self.sift_up(position);
        HeapHandle(slot)
    }

    fn top(&self) -> Result<QueueKey<W>> {
        self.heap
            .first()
            .map(|&slot| self.slots[slot].key)
            .ok_or(Error::EmptyQueueAccess)
    }

    fn pop(&mut self) -> Result<QueueKey<W>> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueueAccess);
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let slot = self.heap.pop().ok_or(Error::EmptyQueueAccess)?;
        self.slots[slot].position = None;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(self.slots[slot].key)
    }

    fn decrease(&mut self, handle: HeapHandle, key: QueueKey<W>) -> Result<HeapHandle> {
        let slot = self
            .slots
            .get_mut(handle.0)
            .ok_or(Error::InvalidHandle(handle.0))?;
        let position = slot.position.ok_or(Error::InvalidHandle(handle.0))?;

        if key.priority > slot.key.priority {
            return Err(Error::PriorityIncrease);
        }
        trace!(
            "decrease node {}: {} -> {}",
            key.node,
            slot.key.priority,
            key.priority
        );
        slot.key = key;
        self.sift_up(position);
        Ok(handle)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn name() -> &'static str {
        "IndexedBinaryHeap"
    }
}
