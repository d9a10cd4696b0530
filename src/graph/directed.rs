use std::fmt;

use crate::graph::traits::Graph;
use crate::weight::Weight;
use crate::{Error, Result};

/// Largest node count a graph can hold; arc targets are stored as `u32`.
pub const MAX_NODES: usize = u32::MAX as usize;

/// An outgoing arc: target node and cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc<W> {
    target: u32,
    cost: W,
}

impl<W: Weight> Arc<W> {
    pub fn target(&self) -> usize {
        self.target as usize
    }

    pub fn cost(&self) -> W {
        self.cost
    }
}

/// A directed graph implementation using adjacency lists
///
/// Node identity is positional: nodes are the indices `0..n`. Arcs are appended
/// per source in insertion order during a build phase; parallel arcs and
/// self-loops are kept as given. Once handed to a traversal the graph is only
/// read, so one instance can back any number of concurrent queries.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing arcs for each node: node_id -> [(target, cost)]
    adjacency_list: Vec<Vec<Arc<W>>>,

    /// Number of arcs across all lists
    arc_count: usize,

    /// Largest accepted arc cost, see [`Weight::max_arc_cost`]
    max_arc_cost: W,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a graph with `n_nodes` nodes and no arcs
    ///
    /// Each arc list is pre-sized to the average out-degree implied by
    /// `n_edges_hint`. Fails with [`Error::InvalidSize`] when `n_nodes` is zero or
    /// above [`MAX_NODES`].
    pub fn new(n_nodes: usize, n_edges_hint: usize) -> Result<Self> {
        if n_nodes == 0 || n_nodes > MAX_NODES {
            return Err(Error::InvalidSize(n_nodes));
        }

        let avg_degree = n_edges_hint / n_nodes + 1;
        let adjacency_list = (0..n_nodes)
            .map(|_| Vec::with_capacity(avg_degree))
            .collect();

        Ok(DirectedGraph {
            adjacency_list,
            arc_count: 0,
            max_arc_cost: W::max_arc_cost(n_nodes),
        })
    }

    /// Builds a graph from `(source, target, cost)` triples
    pub fn from_arcs<I>(n_nodes: usize, arcs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let arcs = arcs.into_iter();
        let mut graph = Self::new(n_nodes, arcs.size_hint().0)?;
        for (source, target, cost) in arcs {
            graph.add_arc(source, target, cost)?;
        }
        Ok(graph)
    }

    /// Appends the arc `source -> target` with the given cost
    ///
    /// Fails with [`Error::CostTooLarge`] when `cost` exceeds
    /// [`max_arc_cost`](Self::max_arc_cost), so that no path in the graph can
    /// cost as much as the infinity sentinel.
    pub fn add_arc(&mut self, source: usize, target: usize, cost: W) -> Result<()> {
        self.check_node(source)?;
        self.check_node(target)?;
        if cost > self.max_arc_cost {
            return Err(Error::CostTooLarge {
                from: source,
                to: target,
                cost: cost.to_string(),
            });
        }

        self.adjacency_list[source].push(Arc {
            target: target as u32,
            cost,
        });
        self.arc_count += 1;
        Ok(())
    }

    /// Largest arc cost this graph accepts
    pub fn max_arc_cost(&self) -> W {
        self.max_arc_cost
    }

    pub fn node_count(&self) -> usize {
        self.adjacency_list.len()
    }

    /// Outgoing arcs of `node`, in insertion order
    ///
    /// # Panics
    ///
    /// Panics if `node` is not in `0..node_count()`.
    pub fn arcs_of(&self, node: usize) -> &[Arc<W>] {
        &self.adjacency_list[node]
    }

    /// Returns true if no arc has a negative cost
    pub fn validate_non_negative(&self) -> bool {
        self.find_negative_arc().is_none()
    }

    pub(crate) fn check_node(&self, node: usize) -> Result<()> {
        if node < self.node_count() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                node,
                node_count: self.node_count(),
            })
        }
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.node_count()
    }

    fn edge_count(&self) -> usize {
        self.arc_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency_list.get(vertex) {
            Some(arcs) => Box::new(arcs.iter().map(|arc| (arc.target(), arc.cost))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn find_negative_arc(&self) -> Option<(usize, usize)> {
        self.adjacency_list
            .iter()
            .enumerate()
            .find_map(|(source, arcs)| {
                arcs.iter()
                    .find(|arc| arc.cost.is_negative())
                    .map(|arc| (source, arc.target()))
            })
    }
}

/// Adjacency list dump, one line per node
impl<W> fmt::Display for DirectedGraph<W>
where
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, arcs) in self.adjacency_list.iter().enumerate() {
            write!(f, "from: {} ==> ", node)?;
            for arc in arcs {
                write!(f, "to:{} ({}) | ", arc.target, arc.cost)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
