use rayon::prelude::*;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPathResult;
use crate::data_structures::PriorityQueue;
use crate::graph::Graph;
use crate::weight::Weight;
use crate::Result;

/// Runs independent `(source, target)` queries in parallel over one shared graph
///
/// Each query builds its own queue and tables; only the graph is shared, and
/// only for reading. Results come back in the order of `queries`.
pub fn par_shortest_paths<W, G, Q>(
    engine: &Dijkstra<Q>,
    graph: &G,
    queries: &[(usize, usize)],
) -> Vec<Result<(W, ShortestPathResult<W>)>>
where
    W: Weight,
    G: Graph<W>,
    Q: PriorityQueue<W>,
{
    queries
        .par_iter()
        .map(|&(source, target)| engine.shortest_path(graph, source, target))
        .collect()
}
