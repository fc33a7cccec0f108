//! Reading and writing the plain-text edge-list format.
//!
//! ```text
//! V E
//! u v w
//! ...
//! ```
//!
//! The header gives the vertex and edge counts, followed by `E` edge lines.
//! Fields are separated by runs of whitespace and blank lines are skipped.

use num_traits::PrimInt;
use std::fmt::{Debug, Display};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::graph::{GraphDescription, Vertex, WeightedGraph};

/// Parses text into a raw description without building the graph.
pub fn parse_description<W>(text: &str) -> Result<GraphDescription<W>>
where
    W: PrimInt + Debug,
{
    read_description(text.as_bytes())
}

/// Parses text into a graph.
pub fn parse_graph<W>(text: &str) -> Result<WeightedGraph<W>>
where
    W: PrimInt + Debug,
{
    read_graph(text.as_bytes())
}

/// Reads a graph from any buffered reader.
pub fn read_graph<W, R>(reader: R) -> Result<WeightedGraph<W>>
where
    W: PrimInt + Debug,
    R: BufRead,
{
    let description = read_description(reader)?;
    WeightedGraph::from_description(&description)
}

/// Reads a graph from a file.
pub fn load_graph<W, P>(path: P) -> Result<WeightedGraph<W>>
where
    W: PrimInt + Debug,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    log::debug!("loading graph from {}", path.display());
    let file = File::open(path)?;
    read_graph(BufReader::new(file))
}

fn read_description<W, R>(reader: R) -> Result<GraphDescription<W>>
where
    W: PrimInt + Debug,
    R: BufRead,
{
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|l| (i + 1, l)))
        .filter(|line| !matches!(line, Ok((_, l)) if l.trim().is_empty()));

    let (header_line, header) = match lines.next() {
        Some(line) => line?,
        None => return Err(GraphError::format(1, "missing \"V E\" header")),
    };
    let fields = split_fields(&header, 2, header_line)?;
    let vertex_count: usize = parse_count(fields[0], "vertex count", header_line)?;
    let edge_count: usize = parse_count(fields[1], "edge count", header_line)?;

    let mut edges = Vec::with_capacity(edge_count);
    let mut last_line = header_line;
    while edges.len() < edge_count {
        let (line_no, line) = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(GraphError::format(
                    last_line + 1,
                    format!("expected {} edges, found {}", edge_count, edges.len()),
                ))
            }
        };
        last_line = line_no;

        let fields = split_fields(&line, 3, line_no)?;
        let u = parse_vertex(fields[0], vertex_count, line_no)?;
        let v = parse_vertex(fields[1], vertex_count, line_no)?;
        let w = parse_weight::<W>(fields[2], line_no)?;
        edges.push((u, v, w));
    }

    if let Some(extra) = lines.next() {
        let (line_no, _) = extra?;
        log::warn!("ignoring input after the last declared edge, from line {}", line_no);
    }

    Ok(GraphDescription {
        vertex_count,
        edge_count,
        edges,
    })
}

fn split_fields(line: &str, expected: usize, line_no: usize) -> Result<Vec<&str>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != expected {
        return Err(GraphError::format(
            line_no,
            format!("expected {} fields, found {}", expected, fields.len()),
        ));
    }
    Ok(fields)
}

fn parse_count(field: &str, what: &str, line_no: usize) -> Result<usize> {
    if field.starts_with('-') {
        return Err(GraphError::format(line_no, format!("negative {what} {field}")));
    }
    field
        .parse()
        .map_err(|_| GraphError::format(line_no, format!("invalid {what} {field:?}")))
}

fn parse_vertex(field: &str, vertex_count: usize, line_no: usize) -> Result<Vertex> {
    let v: i64 = field
        .parse()
        .map_err(|_| GraphError::format(line_no, format!("invalid vertex {field:?}")))?;
    if v < 1 || v as u64 > vertex_count as u64 {
        return Err(GraphError::format(
            line_no,
            format!("vertex {v} outside 1..={vertex_count}"),
        ));
    }
    Ok(v as Vertex)
}

fn parse_weight<W>(field: &str, line_no: usize) -> Result<W>
where
    W: PrimInt,
{
    let w = W::from_str_radix(field, 10)
        .map_err(|_| GraphError::format(line_no, format!("invalid weight {field:?}")))?;
    if w < W::zero() {
        return Err(GraphError::format(line_no, format!("negative weight {field}")));
    }
    if w == W::max_value() {
        return Err(GraphError::format(
            line_no,
            format!("weight {field} is reserved for unreached vertices"),
        ));
    }
    Ok(w)
}

/// Writes a graph in the loader format. Edges come out once each, in
/// [`WeightedGraph::edges`] order.
pub fn write_graph<W, O>(graph: &WeightedGraph<W>, out: O) -> Result<()>
where
    W: PrimInt + Display,
    O: Write,
{
    let edges: Vec<_> = graph.edges().collect();
    write_edges(graph.vertex_count(), &edges, out)
}

/// Writes a raw description in the loader format, preserving edge order.
pub fn write_description<W, O>(description: &GraphDescription<W>, out: O) -> Result<()>
where
    W: PrimInt + Display,
    O: Write,
{
    write_edges(description.vertex_count, &description.edges, out)
}

fn write_edges<W, O>(vertex_count: usize, edges: &[(Vertex, Vertex, W)], mut out: O) -> Result<()>
where
    W: Display,
    O: Write,
{
    writeln!(out, "{} {}", vertex_count, edges.len())?;
    for (u, v, w) in edges {
        writeln!(out, "{} {} {}", u, v, w)?;
    }
    out.flush()?;
    Ok(())
}
