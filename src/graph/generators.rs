use rand::prelude::*;

use crate::graph::directed::DirectedGraph;
use crate::Result;

/// Generates a random directed graph with about `edge_factor * n` arcs
/// Costs are drawn uniformly from `1..=max_cost`; self-loops are skipped
pub fn generate_random<R: Rng>(
    rng: &mut R,
    n: usize,
    edge_factor: f64,
    max_cost: u64,
) -> Result<DirectedGraph<u64>> {
    let num_edges = (edge_factor * n as f64) as usize;
    let mut graph = DirectedGraph::new(n, num_edges)?;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_arc(u, v, rng.gen_range(1..=max_cost))?;
        }
    }

    Ok(graph)
}

/// Generates a `width` x `height` grid with arcs in the 4 cardinal directions
/// Horizontal moves cost `1`, vertical moves cost `vertical_cost`
pub fn generate_grid(
    width: usize,
    height: usize,
    vertical_cost: u64,
) -> Result<DirectedGraph<u64>> {
    let mut graph = DirectedGraph::new(width * height, 4 * width * height)?;

    // Helper function to get node index from 2D coordinates
    let index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x > 0 {
                graph.add_arc(current, index(x - 1, y), 1)?;
            }
            if x + 1 < width {
                graph.add_arc(current, index(x + 1, y), 1)?;
            }
            if y > 0 {
                graph.add_arc(current, index(x, y - 1), vertical_cost)?;
            }
            if y + 1 < height {
                graph.add_arc(current, index(x, y + 1), vertical_cost)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a path `0 -> 1 -> ... -> n-1` plus random shortcut arcs that are never
/// cheaper than walking the path
///
/// Every node is reachable from `0` and the distance to node `i` is exactly `i`.
pub fn generate_chain_with_shortcuts<R: Rng>(
    rng: &mut R,
    n: usize,
    shortcuts: usize,
) -> Result<DirectedGraph<u64>> {
    let mut graph = DirectedGraph::new(n, n + shortcuts)?;

    for i in 1..n {
        graph.add_arc(i - 1, i, 1)?;
    }
    for _ in 0..shortcuts {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let cost = if v > u { (v - u) as u64 + rng.gen_range(0..3) } else { 1 };
        graph.add_arc(u, v, cost)?;
    }

    Ok(graph)
}
