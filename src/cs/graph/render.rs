//! Text reports for graphs and algorithm results.
//!
//! The algorithms only produce integer vertex ids. How an id is shown is
//! decided by a [`VertexLabel`] passed to each report: [`Letters`] for small
//! hand-written graphs, [`Numbers`] for large ones, or any closure.

use num_traits::PrimInt;
use std::fmt::{Display, Write};

use crate::graph::{BfsResult, DfsResult, MstResult, SptResult, Vertex, WeightedGraph, NIL};

/// Turns a vertex id into display text.
pub trait VertexLabel {
    fn label(&self, v: Vertex) -> String;
}

/// Shows 1 as `A`, 2 as `B` and so on. Ids past 26 fall back to numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Letters;

impl VertexLabel for Letters {
    fn label(&self, v: Vertex) -> String {
        match v {
            1..=26 => char::from(b'A' + (v - 1) as u8).to_string(),
            _ => v.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Numbers;

impl VertexLabel for Numbers {
    fn label(&self, v: Vertex) -> String {
        v.to_string()
    }
}

impl<F> VertexLabel for F
where
    F: Fn(Vertex) -> String,
{
    fn label(&self, v: Vertex) -> String {
        self(v)
    }
}

fn parent_label<L: VertexLabel + ?Sized>(labels: &L, p: Vertex) -> String {
    if p == NIL {
        "-".to_string()
    } else {
        labels.label(p)
    }
}

/// One line per vertex: `adj[A] -> |B | 2| -> |C | 5| -> Z`.
pub fn adjacency<W, L>(graph: &WeightedGraph<W>, labels: &L) -> String
where
    W: Copy + Display,
    L: VertexLabel + ?Sized,
{
    let mut out = String::new();
    for v in graph.vertices() {
        let _ = write!(out, "adj[{}] ->", labels.label(v));
        for (u, w) in graph.neighbors(v) {
            let _ = write!(out, " |{} | {}| ->", labels.label(u), w);
        }
        out.push_str(" Z\n");
    }
    out
}

/// Discovery and finish events in time order.
pub fn dfs_report<L>(result: &DfsResult, labels: &L) -> String
where
    L: VertexLabel + ?Sized,
{
    let mut events: Vec<(usize, &str, Vertex)> = Vec::new();
    for v in result.discovery_order() {
        events.push((result.discovery[v], "Discovered", v));
        events.push((result.finish[v], "Finished", v));
    }
    events.sort_unstable_by_key(|&(time, _, _)| time);

    let mut out = format!("Depth-First Search from {}\n", labels.label(result.start));
    for (time, what, v) in events {
        let _ = writeln!(out, "{} {} at time {}", what, labels.label(v), time);
    }
    out
}

/// Vertices in visit order with their edge distance from the start.
pub fn bfs_report<L>(result: &BfsResult, labels: &L) -> String
where
    L: VertexLabel + ?Sized,
{
    let start = labels.label(result.start);
    let mut out = format!("Breadth-First Search from {}\n", start);
    for &v in &result.order {
        let _ = writeln!(
            out,
            "Visited {} with a distance of {} edge(s) away from {}",
            labels.label(v),
            result.distance[v],
            start
        );
    }
    out
}

/// Tree edges as `Vertex Parent Weight` rows, followed by the total.
pub fn mst_report<W, L>(result: &MstResult<W>, labels: &L) -> String
where
    W: PrimInt + Display + std::fmt::Debug,
    L: VertexLabel + ?Sized,
{
    let mut out = format!(
        "Minimum Spanning Tree from {}\nVertex\tParent\tWeight\n",
        labels.label(result.start)
    );
    for (v, p, w) in result.edges() {
        let _ = writeln!(out, "{}\t{}\t{}", labels.label(v), labels.label(p), w);
    }
    let _ = writeln!(out, "Total Weight of MST = {}", result.total_weight);
    out
}

/// Distance and parent of every vertex except the source.
pub fn spt_report<W, L>(result: &SptResult<W>, labels: &L) -> String
where
    W: PrimInt + Display + std::fmt::Debug,
    L: VertexLabel + ?Sized,
{
    let start = labels.label(result.start);
    let mut out = format!(
        "Shortest Path Tree from {}\nVertex\tParent\tDistance from {}\n",
        start, start
    );
    for v in 1..result.distance.len() {
        if v == result.start {
            continue;
        }
        let distance = match result.distance(v) {
            Some(d) => d.to_string(),
            None => "inf".to_string(),
        };
        let _ = writeln!(
            out,
            "{}\t{}\t{}",
            labels.label(v),
            parent_label(labels, result.parent[v]),
            distance
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{
        breadth_first_search, depth_first_search, minimum_spanning_tree, shortest_path_tree,
    };

    fn sample() -> WeightedGraph {
        WeightedGraph::build(
            6,
            &[(1, 2, 2), (1, 3, 5), (2, 3, 1), (2, 4, 3), (3, 4, 2), (4, 5, 4)],
        )
        .unwrap()
    }

    #[test]
    fn test_letter_labels() {
        assert_eq!(Letters.label(1), "A");
        assert_eq!(Letters.label(26), "Z");
        assert_eq!(Letters.label(27), "27");
        assert_eq!(Numbers.label(27), "27");
    }

    #[test]
    fn test_closure_labels() {
        let labels = |v: Vertex| format!("v{v}");
        assert_eq!(labels.label(3), "v3");
        let graph: WeightedGraph = WeightedGraph::build(2, &[(1, 2, 9)]).unwrap();
        assert_eq!(
            adjacency(&graph, &labels),
            "adj[v1] -> |v2 | 9| -> Z\nadj[v2] -> |v1 | 9| -> Z\n"
        );
    }

    #[test]
    fn test_adjacency_report() {
        let text = adjacency(&sample(), &Letters);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "adj[A] -> |C | 5| -> |B | 2| -> Z");
        assert_eq!(lines[5], "adj[F] -> Z");
    }

    #[test]
    fn test_dfs_report_orders_events_by_time() {
        let graph = sample();
        let result = depth_first_search(&graph, 1).unwrap();
        let text = dfs_report(&result, &Letters);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Depth-First Search from A");
        assert_eq!(lines[1], "Discovered A at time 1");
        assert_eq!(lines[2], "Discovered C at time 2");
        assert_eq!(lines.last(), Some(&"Finished F at time 12"));
    }

    #[test]
    fn test_bfs_report() {
        let result = breadth_first_search(&sample(), 1).unwrap();
        let text = bfs_report(&result, &Numbers);
        assert!(text.contains("Visited 5 with a distance of 3 edge(s) away from 1\n"));
        assert!(!text.contains("Visited 6"));
    }

    #[test]
    fn test_mst_report() {
        let result = minimum_spanning_tree(&sample(), 1).unwrap();
        let text = mst_report(&result, &Letters);
        assert_eq!(
            text,
            "Minimum Spanning Tree from A\nVertex\tParent\tWeight\n\
             B\tA\t2\nC\tB\t1\nD\tC\t2\nE\tD\t4\nTotal Weight of MST = 9\n"
        );
    }

    #[test]
    fn test_spt_report_marks_unreachable() {
        let result = shortest_path_tree(&sample(), 1).unwrap();
        let text = spt_report(&result, &Letters);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[1], "Vertex\tParent\tDistance from A");
        assert_eq!(lines[2], "B\tA\t2");
        assert_eq!(lines[5], "E\tD\t9");
        assert_eq!(lines[6], "F\t-\tinf");
        assert_eq!(lines.len(), 7);
    }
}
