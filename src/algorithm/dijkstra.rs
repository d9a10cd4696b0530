use std::marker::PhantomData;

use log::{debug, trace};

use crate::algorithm::{Label, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{IndexedBinaryHeap, PriorityQueue, QueueKey};
use crate::graph::Graph;
use crate::weight::Weight;
use crate::{Error, Result};

/// Label-setting Dijkstra, generic over the priority queue that drives it
///
/// The queue backend is a compile-time choice; each call builds a fresh queue
/// and fresh tables, so one engine (and one graph) can serve any number of
/// queries, concurrently if needed.
///
/// Arc costs must be non-negative. This is not checked unless enabled through
/// [`with_negative_weight_check`](Dijkstra::with_negative_weight_check); without
/// the check, negative costs give unspecified (but terminating) results.
///
/// Path costs stay strictly below [`Weight::infinity`] as long as every arc
/// respects [`Weight::max_arc_cost`], which [`DirectedGraph`] enforces when arcs
/// are added.
///
/// [`DirectedGraph`]: crate::graph::DirectedGraph
#[derive(Debug)]
pub struct Dijkstra<Q = IndexedBinaryHeap<u64>> {
    /// Scan the graph for negative costs before each query
    check_negative_weights: bool,
    _queue: PhantomData<fn() -> Q>,
}

impl<Q> Dijkstra<Q> {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            check_negative_weights: false,
            _queue: PhantomData,
        }
    }

    /// Fail fast with [`Error::NegativeWeight`] instead of assuming non-negative costs
    pub fn with_negative_weight_check(mut self, enabled: bool) -> Self {
        self.check_negative_weights = enabled;
        self
    }
}

impl<Q> Default for Dijkstra<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q> Clone for Dijkstra<Q> {
    fn clone(&self) -> Self {
        Dijkstra {
            check_negative_weights: self.check_negative_weights,
            _queue: PhantomData,
        }
    }
}

impl<Q> Dijkstra<Q> {
    /// Shortest path from `source` to `target`
    ///
    /// Returns the target's distance, or [`Weight::infinity`] if it cannot be
    /// reached, together with the predecessor table. The search stops as soon
    /// as the target is closed.
    pub fn shortest_path<W, G>(
        &self,
        graph: &G,
        source: usize,
        target: usize,
    ) -> Result<(W, ShortestPathResult<W>)>
    where
        W: Weight,
        G: Graph<W>,
        Q: PriorityQueue<W>,
    {
        check_vertex::<W, G>(graph, target)?;
        let result = self.run::<W, G>(graph, source, Some(target))?;
        Ok((result.distance_to(target), result))
    }

    /// Shortest paths from `source` to every vertex; the queue is drained
    pub fn shortest_paths<W, G>(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
        Q: PriorityQueue<W>,
    {
        self.run(graph, source, None)
    }

    fn run<W, G>(
        &self,
        graph: &G,
        source: usize,
        target: Option<usize>,
    ) -> Result<ShortestPathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
        Q: PriorityQueue<W>,
    {
        check_vertex::<W, G>(graph, source)?;
        if self.check_negative_weights {
            if let Some((u, v)) = graph.find_negative_arc() {
                return Err(Error::NegativeWeight { from: u, to: v });
            }
        }

        let n = graph.vertex_count();
        debug!(
            "{} query from {} to {:?} on {} vertices",
            Q::name(),
            source,
            target,
            n
        );

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut labels = vec![Label::Unreached; n];
        let mut handles: Vec<Option<Q::Handle>> = vec![None; n];

        let mut queue = Q::default();
        distances[source] = Some(W::zero());
        labels[source] = Label::Labeled;
        handles[source] = Some(queue.push(QueueKey::new(W::zero(), source)));

        let mut stale = 0usize;
        while !queue.is_empty() {
            let QueueKey { priority: dist_u, node: u } = queue.pop()?;

            // Superseded entry left behind by a decrease-by-push backend
            if labels[u] == Label::Closed {
                debug_assert!(Q::MODELS_DECREASE_BY_PUSH, "{} popped node {} twice", Q::name(), u);
                stale += 1;
                continue;
            }
            labels[u] = Label::Closed;
            handles[u] = None;

            if Some(u) == target {
                break;
            }

            for (v, cost) in graph.outgoing_edges(u) {
                let new_dist = dist_u.saturating_add(cost);

                match labels[v] {
                    Label::Closed => {}
                    Label::Unreached => {
                        trace!("label {} via {} at {}", v, u, new_dist);
                        predecessors[v] = Some(u);
                        distances[v] = Some(new_dist);
                        labels[v] = Label::Labeled;
                        handles[v] = Some(queue.push(QueueKey::new(new_dist, v)));
                    }
                    Label::Labeled => {
                        // A labeled node always holds a distance and a queue handle
                        debug_assert!(
                            distances[v].is_some() && handles[v].is_some(),
                            "labeled node {} has no queue entry",
                            v
                        );
                        if let (Some(current), Some(handle)) = (distances[v], handles[v]) {
                            if new_dist < current {
                                trace!("improve {} via {} to {}", v, u, new_dist);
                                predecessors[v] = Some(u);
                                distances[v] = Some(new_dist);
                                let key = QueueKey::new(new_dist, v);
                                handles[v] = Some(queue.decrease(handle, key)?);
                            }
                        }
                    }
                }
            }
        }

        let result = ShortestPathResult {
            distances,
            predecessors,
            labels,
            source,
            target,
        };
        debug!(
            "{} settled {} vertices, skipped {} stale entries",
            Q::name(),
            result.settled_count(),
            stale
        );
        Ok(result)
    }
}

impl<W, G, Q> ShortestPathAlgorithm<W, G> for Dijkstra<Q>
where
    W: Weight,
    G: Graph<W>,
    Q: PriorityQueue<W>,
{
    fn name(&self) -> &'static str {
        Q::name()
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.shortest_paths(graph, source)
    }
}

fn check_vertex<W, G>(graph: &G, vertex: usize) -> Result<()>
where
    W: Weight,
    G: Graph<W>,
{
    if graph.has_vertex(vertex) {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            node: vertex,
            node_count: graph.vertex_count(),
        })
    }
}
