use log::warn;
use serde::Serialize;

use crate::graph::Graph;
use crate::weight::Weight;
use crate::Result;

/// Per-node traversal state
///
/// A node only moves forward: `Unreached -> Labeled -> Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Label {
    /// Never enqueued
    Unreached,
    /// Enqueued with a tentative distance
    Labeled,
    /// Popped as the minimum; its distance is final
    Closed,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Best known distance from source to each vertex, `None` if never reached
    ///
    /// Final for `Closed` vertices; tentative for `Labeled` ones left behind by an
    /// early exit.
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Traversal state of each vertex when the search stopped
    pub labels: Vec<Label>,

    /// Source vertex ID
    pub source: usize,

    /// Target of a single-target query, `None` when the queue was drained
    pub target: Option<usize>,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Distance to `vertex`, or [`Weight::infinity`] if it was never reached
    pub fn distance_to(&self, vertex: usize) -> W {
        self.distances
            .get(vertex)
            .copied()
            .flatten()
            .unwrap_or_else(W::infinity)
    }

    /// True if `vertex` was closed, i.e. its distance is exact
    pub fn is_settled(&self, vertex: usize) -> bool {
        self.labels.get(vertex) == Some(&Label::Closed)
    }

    /// Number of closed vertices
    pub fn settled_count(&self) -> usize {
        self.labels.iter().filter(|l| **l == Label::Closed).count()
    }

    /// Vertices on the predecessor chain of `vertex`, nearest first
    ///
    /// Empty for the source and for vertices that were never reached.
    pub fn predecessor_chain(&self, vertex: usize) -> Vec<usize> {
        let mut chain = Vec::new();
        let mut current = vertex;
        while let Some(pred) = self.predecessors.get(current).copied().flatten() {
            // A chain longer than the graph means the table is corrupt
            if chain.len() >= self.predecessors.len() {
                warn!("Predecessor chain of {} does not terminate", vertex);
                break;
            }
            chain.push(pred);
            current = pred;
        }
        chain
    }

    /// Path from the source to `vertex`, both inclusive
    ///
    /// `None` if `vertex` was never reached or the chain does not lead back to
    /// the source.
    pub fn path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        if self.distances.get(vertex).copied().flatten().is_none() {
            return None;
        }

        let mut path = self.predecessor_chain(vertex);
        if path.last().copied().unwrap_or(vertex) != self.source {
            warn!("Broken predecessor chain from {} to source {}", vertex, self.source);
            return None;
        }
        path.reverse();
        path.push(vertex);
        Some(path)
    }

    /// Renders a path as `0 -> 2 -> 1 -> 3`
    pub fn format_path(&self, vertex: usize) -> Option<String> {
        self.path_to(vertex).map(|path| {
            path.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" -> ")
        })
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }
}
