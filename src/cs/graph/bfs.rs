use std::collections::VecDeque;
use std::fmt::Debug;

use crate::error::Result;
use crate::graph::{Vertex, WeightedGraph, NIL};

/// Distance recorded for vertices that breadth-first search never reached.
pub const UNREACHED: usize = usize::MAX;

/// Per-vertex output of [`breadth_first_search`], indexed by vertex id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsResult {
    pub start: Vertex,
    /// Edge count from `start`, or [`UNREACHED`].
    pub distance: Vec<usize>,
    pub parent: Vec<Vertex>,
    /// Vertices in the order they were dequeued.
    pub order: Vec<Vertex>,
}

impl BfsResult {
    pub fn distance(&self, v: Vertex) -> Option<usize> {
        match self.distance[v] {
            UNREACHED => None,
            d => Some(d),
        }
    }

    pub fn parent(&self, v: Vertex) -> Option<Vertex> {
        match self.parent[v] {
            NIL => None,
            p => Some(p),
        }
    }

    /// Vertices on the BFS-tree path from `start` to `target`, inclusive.
    pub fn path_to(&self, target: Vertex) -> Option<Vec<Vertex>> {
        self.distance(target)?;
        let mut path = vec![target];
        let mut current = target;
        while let Some(p) = self.parent(current) {
            path.push(p);
            current = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Breadth-first search labelling every reachable vertex with its edge count
/// from `start`.
///
/// Neighbours are enqueued in adjacency order. Unreachable vertices keep
/// distance [`UNREACHED`] and parent [`NIL`].
///
/// # Errors
/// * `Range` if `start` is not a vertex of the graph
///
/// # Complexity
/// * Time: O(V + E)
/// * Space: O(V)
pub fn breadth_first_search<W>(graph: &WeightedGraph<W>, start: Vertex) -> Result<BfsResult>
where
    W: Copy + Debug,
{
    graph.check_vertex(start)?;

    let n = graph.vertex_count();
    let mut visited = vec![false; n + 1];
    let mut distance = vec![UNREACHED; n + 1];
    let mut parent = vec![NIL; n + 1];
    let mut order = Vec::with_capacity(n);
    let mut queue = VecDeque::new();

    log::debug!("starting breadth-first search from {}", start);

    visited[start] = true;
    distance[start] = 0;
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        log::trace!("visited {} at distance {}", u, distance[u]);
        order.push(u);

        for (v, _) in graph.neighbors(u) {
            if !visited[v] {
                visited[v] = true;
                distance[v] = distance[u] + 1;
                parent[v] = u;
                queue.push_back(v);
            }
        }
    }

    log::debug!("breadth-first search reached {} vertices", order.len());

    Ok(BfsResult {
        start,
        distance,
        parent,
        order,
    })
}
