use std::env;
use std::process;

use labelset::graph::read_graph_file;
use labelset::{
    Dijkstra, DirectedGraph, IndexedBinaryHeap, LazyBinaryHeap, LinearScanQueue, PriorityQueue,
    ShortestPathResult, Weight,
};
use log::info;
use serde::Serialize;

const USAGE: &str = "usage: labelset <graph-file> <source> [target] \
[--queue heap|linear|lazy] [--json] [--print-graph] [--check-negative]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueueKind {
    Heap,
    Linear,
    Lazy,
}

#[derive(Debug)]
struct Options {
    graph_file: String,
    source: usize,
    target: Option<usize>,
    queue: QueueKind,
    json: bool,
    print_graph: bool,
    check_negative: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    queue: &'static str,
    cost: Option<u64>,
    path: Option<Vec<usize>>,
    result: &'a ShortestPathResult<u64>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut positional = Vec::new();
    let mut queue = QueueKind::Heap;
    let mut json = false;
    let mut print_graph = false;
    let mut check_negative = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--print-graph" => print_graph = true,
            "--check-negative" => check_negative = true,
            "--queue" => {
                queue = match iter.next().map(String::as_str) {
                    Some("heap") => QueueKind::Heap,
                    Some("linear") => QueueKind::Linear,
                    Some("lazy") => QueueKind::Lazy,
                    other => return Err(format!("unknown queue {:?}", other)),
                }
            }
            flag if flag.starts_with("--") => return Err(format!("unknown flag {}", flag)),
            value => positional.push(value.to_string()),
        }
    }

    let parse_node = |s: &String| {
        s.parse::<usize>()
            .map_err(|_| format!("invalid node id `{}`", s))
    };
    match positional.as_slice() {
        [file, source] => Ok(Options {
            graph_file: file.clone(),
            source: parse_node(source)?,
            target: None,
            queue,
            json,
            print_graph,
            check_negative,
        }),
        [file, source, target] => Ok(Options {
            graph_file: file.clone(),
            source: parse_node(source)?,
            target: Some(parse_node(target)?),
            queue,
            json,
            print_graph,
            check_negative,
        }),
        _ => Err(USAGE.to_string()),
    }
}

fn run_query<Q>(
    graph: &DirectedGraph<u64>,
    options: &Options,
) -> labelset::Result<(Option<u64>, ShortestPathResult<u64>)>
where
    Q: PriorityQueue<u64>,
{
    let dijkstra = Dijkstra::<Q>::new().with_negative_weight_check(options.check_negative);
    match options.target {
        Some(target) => {
            let (cost, result) = dijkstra.shortest_path(graph, options.source, target)?;
            Ok((Some(cost).filter(|c| !c.is_infinite()), result))
        }
        None => Ok((None, dijkstra.shortest_paths(graph, options.source)?)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(2);
        }
    };

    let graph: DirectedGraph<u64> = read_graph_file(&options.graph_file)?;
    if options.print_graph {
        print!("{}", graph);
    }

    let (queue_name, (cost, result)) = match options.queue {
        QueueKind::Heap => (
            IndexedBinaryHeap::<u64>::name(),
            run_query::<IndexedBinaryHeap<u64>>(&graph, &options)?,
        ),
        QueueKind::Linear => (
            LinearScanQueue::<u64>::name(),
            run_query::<LinearScanQueue<u64>>(&graph, &options)?,
        ),
        QueueKind::Lazy => (
            LazyBinaryHeap::<u64>::name(),
            run_query::<LazyBinaryHeap<u64>>(&graph, &options)?,
        ),
    };
    info!("{} settled {} vertices", queue_name, result.settled_count());

    if options.json {
        let report = Report {
            queue: queue_name,
            cost,
            path: options.target.and_then(|t| result.path_to(t)),
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match options.target {
        Some(target) => match cost {
            Some(cost) => {
                println!("cost: {}", cost);
                if let Some(path) = result.format_path(target) {
                    println!("path: {}", path);
                }
            }
            None => println!("{} is unreachable from {}", target, options.source),
        },
        None => {
            for v in 0..graph.node_count() {
                match result.format_path(v) {
                    Some(path) => println!("{}: {} ({})", v, result.distance_to(v), path),
                    None => println!("{}: unreachable", v),
                }
            }
        }
    }

    Ok(())
}
