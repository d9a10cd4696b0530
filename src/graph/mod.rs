pub mod directed;
pub mod generators;
pub mod reader;
pub mod traits;

pub use directed::{Arc, DirectedGraph, MAX_NODES};
pub use reader::{read_graph, read_graph_file, GraphFormat};
pub use traits::Graph;
