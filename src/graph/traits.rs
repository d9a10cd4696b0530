use std::fmt::Debug;

use crate::weight::Weight;

/// Trait representing a read-only weighted directed graph
///
/// Implementors must be safe to share between independent queries: nothing
/// reachable through `&self` may change while a traversal is running.
pub trait Graph<W>: Debug + Sync
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of arcs in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing arcs of a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's at least one arc between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.has_vertex(from) && self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the cheapest weight among the arcs `from -> to`, if any exist
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if !self.has_vertex(from) {
            return None;
        }
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }

    /// Returns the first arc with a negative cost, as `(source, target)`
    fn find_negative_arc(&self) -> Option<(usize, usize)> {
        (0..self.vertex_count()).find_map(|u| {
            self.outgoing_edges(u)
                .find(|(_, weight)| weight.is_negative())
                .map(|(v, _)| (u, v))
        })
    }
}
