pub mod batch;
pub mod dijkstra;
pub mod traits;

pub use traits::{Label, ShortestPathAlgorithm, ShortestPathResult};
