pub mod indexed_heap;
pub mod lazy_heap;
pub mod linear_scan;
pub mod priority_queue;

pub use indexed_heap::{HeapHandle, IndexedBinaryHeap};
pub use lazy_heap::LazyBinaryHeap;
pub use linear_scan::LinearScanQueue;
pub use priority_queue::{PriorityQueue, QueueKey};
