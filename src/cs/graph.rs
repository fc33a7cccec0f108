use std::fmt::Debug;
use std::iter::{FusedIterator, Rev};
use std::slice;

use num_traits::PrimInt;

use crate::error::{GraphError, Result};

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod generate;
pub mod kruskal;
pub mod loader;
pub mod prim;
pub mod render;

pub use bfs::{breadth_first_search, BfsResult};
pub use dfs::{depth_first_search, Colour, DfsResult};
pub use dijkstra::{shortest_path_tree, SptResult};
pub use generate::random_graph;
pub use kruskal::{minimum_spanning_forest, KruskalResult, UnionFind};
pub use loader::{load_graph, parse_description, parse_graph, read_graph, write_graph};
pub use prim::{minimum_spanning_tree, MstResult};
pub use render::{Letters, Numbers, VertexLabel};

/// Vertex identifier. Real vertices are `1..=V`.
pub type Vertex = usize;

/// The reserved "no vertex" id, used for absent parents.
pub const NIL: Vertex = 0;

/// An undirected edge `{u, v}` with its weight, as supplied by a loader.
pub type EdgeTriple<W> = (Vertex, Vertex, W);

/// Raw graph description handed over by a loader before construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDescription<W = u32> {
    pub vertex_count: usize,
    /// Number of edges the source declared; `edges` must hold at least this many.
    pub edge_count: usize,
    pub edges: Vec<EdgeTriple<W>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AdjEntry<W> {
    vertex: Vertex,
    weight: W,
}

/// Undirected weighted graph stored as adjacency lists over vertices `1..=V`.
///
/// Each edge `(u, v, w)` is recorded in both lists. A list yields its most
/// recently added edge first, so neighbours come back in reverse input order.
/// The graph cannot be changed after construction.
///
/// # Examples
/// ```
/// use adjgraph::graph::WeightedGraph;
///
/// let graph = WeightedGraph::build(3, &[(1, 2, 4), (1, 3, 1)]).unwrap();
/// let around_1: Vec<_> = graph.neighbors(1).collect();
/// assert_eq!(around_1, vec![(3, 1), (2, 4)]);
/// assert_eq!(graph.neighbors(2).collect::<Vec<_>>(), vec![(1, 4)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph<W = u32> {
    vertex_count: usize,
    edge_count: usize,
    adj: Vec<Vec<AdjEntry<W>>>,
}

impl<W> WeightedGraph<W>
where
    W: PrimInt + Debug,
{
    /// Builds a graph with vertices `1..=vertex_count` from undirected edges.
    ///
    /// # Errors
    /// * `Format` if an endpoint is outside `1..=vertex_count`, or a weight is
    ///   negative or equal to `W::max_value()` (the "unreached" distance)
    pub fn build(vertex_count: usize, edges: &[EdgeTriple<W>]) -> Result<Self> {
        let mut adj = vec![Vec::new(); vertex_count + 1];

        for (i, &(u, v, weight)) in edges.iter().enumerate() {
            for endpoint in [u, v] {
                if endpoint == NIL || endpoint > vertex_count {
                    return Err(GraphError::format(
                        0,
                        format!(
                            "edge {} has vertex {endpoint} outside 1..={vertex_count}",
                            i + 1
                        ),
                    ));
                }
            }
            if weight < W::zero() {
                return Err(GraphError::format(
                    0,
                    format!("edge {} has negative weight {weight:?}", i + 1),
                ));
            }
            if weight == W::max_value() {
                return Err(GraphError::format(
                    0,
                    format!("edge {} has reserved weight {weight:?}", i + 1),
                ));
            }

            adj[u].push(AdjEntry { vertex: v, weight });
            adj[v].push(AdjEntry { vertex: u, weight });
        }

        log::debug!(
            "built graph with {} vertices and {} edges",
            vertex_count,
            edges.len()
        );

        Ok(Self {
            vertex_count,
            edge_count: edges.len(),
            adj,
        })
    }

    /// Builds a graph from a loader description.
    ///
    /// # Errors
    /// * `Format` if fewer edges are present than declared, or if [`build`](Self::build) fails
    pub fn from_description(description: &GraphDescription<W>) -> Result<Self> {
        if description.edges.len() < description.edge_count {
            return Err(GraphError::format(
                0,
                format!(
                    "declared {} edges but only {} supplied",
                    description.edge_count,
                    description.edges.len()
                ),
            ));
        }
        Self::build(
            description.vertex_count,
            &description.edges[..description.edge_count],
        )
    }
}

impl<W: Copy> WeightedGraph<W> {
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Vertex ids `1..=V` in ascending order.
    pub fn vertices(&self) -> std::ops::RangeInclusive<Vertex> {
        1..=self.vertex_count
    }

    pub fn has_vertex(&self, v: Vertex) -> bool {
        v != NIL && v <= self.vertex_count
    }

    /// Rejects a start vertex outside `1..=V`.
    pub fn check_vertex(&self, v: Vertex) -> Result<()> {
        if self.has_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::Range {
                vertex: v,
                vertex_count: self.vertex_count,
            })
        }
    }

    /// `(neighbour, weight)` pairs of `v`, newest edge first.
    ///
    /// The iterator is cheap to clone, and calling `neighbors` again starts
    /// over from the beginning.
    ///
    /// # Panics
    /// Panics if `v` is not a vertex of the graph.
    pub fn neighbors(&self, v: Vertex) -> Neighbors<'_, W> {
        assert!(self.has_vertex(v), "vertex {v} is not in the graph");
        Neighbors {
            inner: self.adj[v].iter().rev(),
        }
    }

    /// # Panics
    /// Panics if `v` is not a vertex of the graph.
    pub fn degree(&self, v: Vertex) -> usize {
        self.neighbors(v).len()
    }

    /// Weight of the most recently added edge between `u` and `v`, if any.
    pub fn edge_weight(&self, u: Vertex, v: Vertex) -> Option<W> {
        self.neighbors(u).find(|&(n, _)| n == v).map(|(_, w)| w)
    }

    /// Each undirected edge once as `(u, v, w)` with `u <= v`, grouped by `u`.
    pub fn edges(&self) -> impl Iterator<Item = EdgeTriple<W>> + '_ {
        self.vertices().flat_map(move |u| {
            self.neighbors(u)
                .filter(move |&(v, _)| u < v)
                .map(move |(v, w)| (u, v, w))
                .chain(self.self_loops(u))
        })
    }

    fn self_loops(&self, u: Vertex) -> impl Iterator<Item = EdgeTriple<W>> + '_ {
        // a self-loop is stored twice in its own list
        self.neighbors(u)
            .filter(move |&(v, _)| v == u)
            .step_by(2)
            .map(move |(v, w)| (u, v, w))
    }
}

/// Iterator over the adjacency list of one vertex.
#[derive(Debug, Clone)]
pub struct Neighbors<'a, W> {
    inner: Rev<slice::Iter<'a, AdjEntry<W>>>,
}

impl<W: Copy> Iterator for Neighbors<'_, W> {
    type Item = (Vertex, W);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (e.vertex, e.weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<W: Copy> ExactSizeIterator for Neighbors<'_, W> {}

impl<W: Copy> FusedIterator for Neighbors<'_, W> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WeightedGraph {
        WeightedGraph::build(
            5,
            &[(1, 2, 2), (1, 3, 5), (2, 3, 1), (2, 4, 3), (3, 4, 2), (4, 5, 4)],
        )
        .unwrap()
    }

    #[test]
    fn test_build_counts() {
        let graph = sample();
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_neighbors_in_reverse_input_order() {
        let graph = sample();
        assert_eq!(graph.neighbors(2).collect::<Vec<_>>(), vec![(4, 3), (3, 1), (1, 2)]);
        assert_eq!(graph.neighbors(5).collect::<Vec<_>>(), vec![(4, 4)]);
        assert_eq!(graph.neighbors(2).len(), 3);
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let graph = sample();
        for u in graph.vertices() {
            for (v, w) in graph.neighbors(u) {
                assert!(graph.neighbors(v).any(|(x, wx)| x == u && wx == w));
            }
        }
    }

    #[test]
    fn test_neighbors_restartable() {
        let graph = sample();
        let mut first = graph.neighbors(3);
        let saved = first.clone();
        first.next();
        assert_eq!(saved.count(), 3);
        assert_eq!(graph.neighbors(3).count(), 3);
    }

    #[test]
    fn test_isolated_vertex_has_no_neighbors() {
        let graph: WeightedGraph = WeightedGraph::build(3, &[(1, 2, 1)]).unwrap();
        assert_eq!(graph.neighbors(3).next(), None);
        assert_eq!(graph.degree(3), 0);
    }

    #[test]
    fn test_edges_lists_each_edge_once() {
        let graph = sample();
        let mut edges: Vec<_> = graph.edges().collect();
        edges.sort();
        assert_eq!(
            edges,
            vec![(1, 2, 2), (1, 3, 5), (2, 3, 1), (2, 4, 3), (3, 4, 2), (4, 5, 4)]
        );
    }

    #[test]
    fn test_edges_with_self_loop() {
        let graph: WeightedGraph = WeightedGraph::build(2, &[(1, 1, 7), (1, 2, 1)]).unwrap();
        let mut edges: Vec<_> = graph.edges().collect();
        edges.sort();
        assert_eq!(edges, vec![(1, 1, 7), (1, 2, 1)]);
    }

    #[test]
    fn test_edge_weight_lookup() {
        let graph = sample();
        assert_eq!(graph.edge_weight(4, 5), Some(4));
        assert_eq!(graph.edge_weight(1, 5), None);
    }

    #[test]
    fn test_build_rejects_out_of_range_vertex() {
        let result: Result<WeightedGraph> = WeightedGraph::build(3, &[(1, 4, 1)]);
        assert!(matches!(result, Err(GraphError::Format { .. })));

        let result: Result<WeightedGraph> = WeightedGraph::build(3, &[(0, 2, 1)]);
        assert!(matches!(result, Err(GraphError::Format { .. })));
    }

    #[test]
    fn test_build_rejects_negative_weight() {
        let result = WeightedGraph::<i32>::build(2, &[(1, 2, -1)]);
        assert!(matches!(result, Err(GraphError::Format { .. })));
    }

    #[test]
    fn test_build_rejects_unreached_weight() {
        let result: Result<WeightedGraph> = WeightedGraph::build(2, &[(1, 2, u32::MAX)]);
        assert!(matches!(result, Err(GraphError::Format { line: 0, .. })));

        let graph: WeightedGraph = WeightedGraph::build(2, &[(1, 2, u32::MAX - 1)]).unwrap();
        assert_eq!(graph.edge_weight(1, 2), Some(u32::MAX - 1));
    }

    #[test]
    #[should_panic(expected = "vertex 4 is not in the graph")]
    fn test_degree_of_missing_vertex() {
        let graph: WeightedGraph = WeightedGraph::build(3, &[(1, 2, 1)]).unwrap();
        graph.degree(4);
    }

    #[test]
    fn test_from_description_requires_declared_edges() {
        let description = GraphDescription {
            vertex_count: 3,
            edge_count: 2,
            edges: vec![(1, 2, 1u32)],
        };
        assert!(matches!(
            WeightedGraph::from_description(&description),
            Err(GraphError::Format { .. })
        ));
    }

    #[test]
    fn test_check_vertex() {
        let graph = sample();
        assert!(graph.check_vertex(1).is_ok());
        assert!(graph.check_vertex(5).is_ok());
        assert!(matches!(
            graph.check_vertex(0),
            Err(GraphError::Range { vertex: 0, vertex_count: 5 })
        ));
        assert!(matches!(graph.check_vertex(6), Err(GraphError::Range { .. })));
    }

    #[test]
    fn test_empty_graph() {
        let graph: WeightedGraph = WeightedGraph::build(0, &[]).unwrap();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edges().count(), 0);
        assert!(graph.check_vertex(1).is_err());
    }
}
