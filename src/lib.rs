//! labelset - label-setting shortest paths over pluggable priority queues
//!
//! Dijkstra's algorithm on directed graphs with non-negative arc costs. The traversal
//! is written once and is generic over the priority queue that drives it, so a
//! handle-based binary heap (in-place decrease-key) and simpler queues that model
//! decrease-key as a fresh push can be swapped at compile time and compared.
//!
//! ```rust
//! use labelset::{Dijkstra, DirectedGraph, IndexedBinaryHeap};
//!
//! let mut graph = DirectedGraph::<u64>::new(4, 5).unwrap();
//! graph.add_arc(0, 1, 4).unwrap();
//! graph.add_arc(0, 2, 1).unwrap();
//! graph.add_arc(2, 1, 2).unwrap();
//! graph.add_arc(1, 3, 1).unwrap();
//! graph.add_arc(2, 3, 5).unwrap();
//!
//! let dijkstra = Dijkstra::<IndexedBinaryHeap<u64>>::new();
//! let (cost, result) = dijkstra.shortest_path(&graph, 0, 3).unwrap();
//! assert_eq!(cost, 4);
//! assert_eq!(result.path_to(3), Some(vec![0, 2, 1, 3]));
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod weight;

pub use algorithm::{
    batch::par_shortest_paths, dijkstra::Dijkstra, Label, ShortestPathAlgorithm,
    ShortestPathResult,
};
pub use data_structures::{
    IndexedBinaryHeap, LazyBinaryHeap, LinearScanQueue, PriorityQueue, QueueKey,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use weight::Weight;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid graph size: {0} nodes")]
    InvalidSize(usize),

    #[error("Node {node} out of range for a graph of {node_count} nodes")]
    OutOfRange { node: usize, node_count: usize },

    #[error("Access to the top of an empty priority queue")]
    EmptyQueueAccess,

    #[error("Queue handle {0} does not address a live entry")]
    InvalidHandle(usize),

    #[error("Decrease-key called with a larger priority")]
    PriorityIncrease,

    #[error("Negative arc cost on {from} -> {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("Arc cost {cost} on {from} -> {to} could push a path cost to the infinity sentinel")]
    CostTooLarge { from: usize, to: usize, cost: String },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
