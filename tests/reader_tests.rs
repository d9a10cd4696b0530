use std::io::{Cursor, Write};

use labelset::graph::{read_graph, read_graph_file, DirectedGraph, Graph};
use labelset::{Dijkstra, Error, IndexedBinaryHeap};
use ordered_float::OrderedFloat;

const PLAIN: &str = "\
# diamond
4 5
0 1 4
0 2 1
2 1 2
1 3 1

2 3 5
";

const DIMACS: &str = "\
c 9th DIMACS shortest path format
c nodes are 1-based
p sp 4 5
a 1 2 4
a 1 3 1
a 3 2 2
a 2 4 1
a 3 4 5
";

#[test]
fn test_read_plain_format() {
    let graph: DirectedGraph<u64> = read_graph(Cursor::new(PLAIN)).unwrap();
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.get_edge_weight(2, 1), Some(2));

    let (cost, _) = Dijkstra::<IndexedBinaryHeap<u64>>::new()
        .shortest_path(&graph, 0, 3)
        .unwrap();
    assert_eq!(cost, 4);
}

#[test]
fn test_read_dimacs_format_is_zero_based() {
    let graph: DirectedGraph<u64> = read_graph(Cursor::new(DIMACS)).unwrap();
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 5);
    assert!(graph.has_edge(0, 1));
    assert!(graph.has_edge(2, 3));
    assert!(!graph.has_edge(3, 0));
}

#[test]
fn test_read_float_costs() {
    let input = "2 1\n0 1 0.25\n";
    let graph: DirectedGraph<OrderedFloat<f64>> = read_graph(Cursor::new(input)).unwrap();
    assert_eq!(graph.get_edge_weight(0, 1), Some(OrderedFloat(0.25)));
}

#[test]
fn test_read_errors() {
    let missing: Result<DirectedGraph<u64>, _> = read_graph(Cursor::new("# nothing\n"));
    assert!(matches!(missing, Err(Error::Parse { line: 0, .. })));

    let bad_header: Result<DirectedGraph<u64>, _> = read_graph(Cursor::new("p sp 4\n"));
    assert!(matches!(bad_header, Err(Error::Parse { line: 1, .. })));

    let bad_arc: Result<DirectedGraph<u64>, _> = read_graph(Cursor::new("2 1\n0 x 3\n"));
    assert!(matches!(bad_arc, Err(Error::Parse { line: 2, .. })));

    let wrong_format: Result<DirectedGraph<u64>, _> = read_graph(Cursor::new("2 1\na 1 2 3\n"));
    assert!(matches!(wrong_format, Err(Error::Parse { line: 2, .. })));

    let zero_id: Result<DirectedGraph<u64>, _> = read_graph(Cursor::new("p sp 2 1\na 0 1 3\n"));
    assert!(matches!(zero_id, Err(Error::Parse { line: 2, .. })));

    let out_of_range: Result<DirectedGraph<u64>, _> = read_graph(Cursor::new("2 1\n0 2 3\n"));
    assert!(matches!(out_of_range, Err(Error::OutOfRange { node: 2, .. })));

    let empty: Result<DirectedGraph<u64>, _> = read_graph(Cursor::new("0 0\n"));
    assert!(matches!(empty, Err(Error::InvalidSize(0))));
}

#[test]
fn test_read_arc_count_must_match_header() {
    let truncated: Result<DirectedGraph<u64>, _> = read_graph(Cursor::new("3 2\n0 1 1\n"));
    assert!(matches!(truncated, Err(Error::Parse { line: 2, .. })));

    let oversized: Result<DirectedGraph<u64>, _> =
        read_graph(Cursor::new("p sp 3 1\na 1 2 1\na 2 3 1\n"));
    assert!(matches!(oversized, Err(Error::Parse { line: 3, .. })));

    let header_only: Result<DirectedGraph<u64>, _> = read_graph(Cursor::new("3 1\n"));
    assert!(matches!(header_only, Err(Error::Parse { line: 1, .. })));

    let no_arcs: DirectedGraph<u64> = read_graph(Cursor::new("3 0\n")).unwrap();
    assert_eq!(no_arcs.node_count(), 3);
}

#[test]
fn test_read_graph_file() {
    let path = std::env::temp_dir().join(format!("labelset-reader-{}.gr", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(DIMACS.as_bytes()).unwrap();
    }

    let graph: DirectedGraph<u64> = read_graph_file(&path).unwrap();
    assert_eq!(graph.edge_count(), 5);
    std::fs::remove_file(&path).unwrap();

    let missing: Result<DirectedGraph<u64>, _> = read_graph_file(&path);
    assert!(matches!(missing, Err(Error::Io(_))));
}
