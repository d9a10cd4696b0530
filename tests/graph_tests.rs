use labelset::graph::{DirectedGraph, Graph, MAX_NODES};
use labelset::Error;
use ordered_float::OrderedFloat;

#[test]
fn test_construct_rejects_empty_graph() {
    let result = DirectedGraph::<u64>::new(0, 10);
    assert!(matches!(result, Err(Error::InvalidSize(0))));
}

#[test]
fn test_construct_rejects_oversized_graph() {
    let result = DirectedGraph::<u64>::new(MAX_NODES + 1, 0);
    assert!(matches!(result, Err(Error::InvalidSize(n)) if n == MAX_NODES + 1));
}

#[test]
fn test_add_arc_out_of_range() {
    let mut graph = DirectedGraph::<u64>::new(3, 3).unwrap();

    let err = graph.add_arc(0, 3, 1).unwrap_err();
    assert!(matches!(err, Error::OutOfRange { node: 3, node_count: 3 }));

    let err = graph.add_arc(7, 1, 1).unwrap_err();
    assert!(matches!(err, Error::OutOfRange { node: 7, node_count: 3 }));

    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_parallel_arcs_and_self_loops_are_kept() {
    let mut graph = DirectedGraph::<u64>::new(2, 4).unwrap();
    graph.add_arc(0, 1, 5).unwrap();
    graph.add_arc(0, 1, 2).unwrap();
    graph.add_arc(1, 1, 3).unwrap();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 3);

    let arcs: Vec<(usize, u64)> = graph
        .arcs_of(0)
        .iter()
        .map(|arc| (arc.target(), arc.cost()))
        .collect();
    assert_eq!(arcs, vec![(1, 5), (1, 2)]);

    assert!(graph.has_edge(1, 1));
    assert!(!graph.has_edge(1, 0));
    assert_eq!(graph.get_edge_weight(0, 1), Some(2));
}

#[test]
fn test_arcs_are_restartable() {
    let graph = DirectedGraph::from_arcs(3, vec![(0, 1, 1u64), (0, 2, 4)]).unwrap();

    let first: Vec<_> = graph.outgoing_edges(0).collect();
    let second: Vec<_> = graph.outgoing_edges(0).collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![(1, 1), (2, 4)]);

    assert_eq!(graph.outgoing_edges(42).count(), 0);
}

#[test]
fn test_negative_arc_detection() {
    let graph = DirectedGraph::from_arcs(3, vec![(0, 1, 2i64), (1, 2, -1)]).unwrap();
    assert!(!graph.validate_non_negative());
    assert_eq!(graph.find_negative_arc(), Some((1, 2)));

    let graph = DirectedGraph::from_arcs(
        2,
        vec![(0, 1, OrderedFloat(0.5)), (1, 0, OrderedFloat(0.0))],
    )
    .unwrap();
    assert!(graph.validate_non_negative());
}

#[test]
fn test_display_adjacency_list() {
    let graph = DirectedGraph::from_arcs(2, vec![(0, 1, 7u64)]).unwrap();
    assert_eq!(graph.to_string(), "from: 0 ==> to:1 (7) | \nfrom: 1 ==> \n");
}

#[test]
fn test_arc_cost_budget() {
    let mut graph = DirectedGraph::<u64>::new(5, 4).unwrap();
    assert_eq!(graph.max_arc_cost(), (u64::MAX - 1) / 4);

    graph.add_arc(0, 1, graph.max_arc_cost()).unwrap();
    let err = graph.add_arc(1, 2, graph.max_arc_cost() + 1).unwrap_err();
    assert!(matches!(err, Error::CostTooLarge { from: 1, to: 2, .. }));
    assert_eq!(graph.edge_count(), 1);

    let mut graph = DirectedGraph::<OrderedFloat<f64>>::new(2, 1).unwrap();
    assert!(graph.add_arc(0, 1, OrderedFloat(f64::INFINITY)).is_err());
    assert!(graph.add_arc(0, 1, OrderedFloat(f64::NAN)).is_err());
    graph.add_arc(0, 1, OrderedFloat(1e300)).unwrap();
}
