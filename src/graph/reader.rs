//! Line-oriented graph input.
//!
//! Two formats are accepted and told apart by their first significant line:
//!
//! * plain: `n m` followed by `u v c` lines with 0-based node ids;
//! * DIMACS shortest-path (`.gr`): `p sp n m` followed by `a u v c` lines with
//!   1-based node ids.
//!
//! Blank lines and lines starting with `#` or `c` are skipped in both.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};

use crate::graph::directed::DirectedGraph;
use crate::graph::traits::Graph;
use crate::weight::Weight;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Plain,
    Dimacs,
}

/// Reads a graph from a file, detecting the format
pub fn read_graph_file<W, P>(path: P) -> Result<DirectedGraph<W>>
where
    W: Weight + FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let graph = read_graph(BufReader::new(File::open(path)?))?;
    info!(
        "Loaded {} with {} nodes",
        path.display(),
        graph.node_count()
    );
    Ok(graph)
}

/// Reads a graph from any buffered reader, detecting the format
pub fn read_graph<W, R>(reader: R) -> Result<DirectedGraph<W>>
where
    W: Weight + FromStr,
    R: BufRead,
{
    let mut lines = significant_lines(reader);

    let (line_no, header) = lines.next().transpose()?.ok_or(Error::Parse {
        line: 0,
        message: "missing header line".to_string(),
    })?;

    let fields: Vec<&str> = header.split_whitespace().collect();
    let (format, counts) = match fields.as_slice() {
        ["p", "sp", n, m] => (GraphFormat::Dimacs, (*n, *m)),
        [n, m] => (GraphFormat::Plain, (*n, *m)),
        _ => {
            return Err(Error::Parse {
                line: line_no,
                message: format!("unrecognised header `{}`", header),
            })
        }
    };
    let n_nodes: usize = parse_field(counts.0, line_no)?;
    let n_edges: usize = parse_field(counts.1, line_no)?;
    debug!("{:?} header: {} nodes, {} arcs", format, n_nodes, n_edges);

    let mut graph = DirectedGraph::new(n_nodes, n_edges)?;
    let mut last_line = line_no;
    for line in lines {
        let (line_no, line) = line?;
        let (source, target, cost) = parse_arc::<W>(&line, line_no, format)?;
        graph.add_arc(source, target, cost)?;
        last_line = line_no;
    }

    if graph.edge_count() != n_edges {
        return Err(Error::Parse {
            line: last_line,
            message: format!(
                "header announces {} arcs but {} were read",
                n_edges,
                graph.edge_count()
            ),
        });
    }

    Ok(graph)
}

fn parse_arc<W>(line: &str, line_no: usize, format: GraphFormat) -> Result<(usize, usize, W)>
where
    W: FromStr,
{
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (u, v, c) = match (format, fields.as_slice()) {
        (GraphFormat::Plain, [u, v, c]) => (*u, *v, *c),
        (GraphFormat::Dimacs, ["a", u, v, c]) => (*u, *v, *c),
        _ => {
            return Err(Error::Parse {
                line: line_no,
                message: format!("malformed arc `{}`", line),
            })
        }
    };

    let mut source: usize = parse_field(u, line_no)?;
    let mut target: usize = parse_field(v, line_no)?;
    let cost: W = parse_field(c, line_no)?;

    if format == GraphFormat::Dimacs {
        if source == 0 || target == 0 {
            return Err(Error::Parse {
                line: line_no,
                message: "DIMACS node ids start at 1".to_string(),
            });
        }
        source -= 1;
        target -= 1;
    }

    Ok((source, target, cost))
}

fn parse_field<T: FromStr>(field: &str, line_no: usize) -> Result<T> {
    field.parse().map_err(|_| Error::Parse {
        line: line_no,
        message: format!("invalid number `{}`", field),
    })
}

/// Numbered (1-based) lines that carry data
fn significant_lines<R: BufRead>(reader: R) -> impl Iterator<Item = Result<(usize, String)>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('c') {
                    None
                } else {
                    Some(Ok((idx + 1, trimmed.to_string())))
                }
            }
            Err(e) => Some(Err(Error::from(e))),
        })
}
