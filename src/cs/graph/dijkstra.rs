use num_traits::PrimInt;
use std::fmt::Debug;

use crate::error::{GraphError, Result};
use crate::graph::{Vertex, WeightedGraph, NIL};
use crate::heap::IndexedMinHeap;

/// Shortest-path tree produced by [`shortest_path_tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SptResult<W> {
    pub start: Vertex,
    /// Shortest distance from `start`; `W::max_value()` if unreachable.
    pub distance: Vec<W>,
    pub parent: Vec<Vertex>,
    /// Vertices in the order they were settled.
    pub order: Vec<Vertex>,
}

impl<W> SptResult<W>
where
    W: PrimInt + Debug,
{
    pub fn distance(&self, v: Vertex) -> Option<W> {
        let d = self.distance[v];
        (d != W::max_value()).then_some(d)
    }

    pub fn parent(&self, v: Vertex) -> Option<Vertex> {
        match self.parent[v] {
            NIL => None,
            p => Some(p),
        }
    }

    /// Shortest path from `start` to `target` as a list of vertices.
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

/// Computes single-source shortest paths with Dijkstra's algorithm.
///
/// The driver loop is the same as in [`prim`](super::prim): remove the closest
/// vertex, relax its edges, insert newly reached vertices and `sift_up` the
/// ones whose tentative distance dropped. Only finite distances are
/// propagated.
///
/// A sum that does not fit below `W::max_value()` is never recorded. If a
/// vertex is reachable only through such sums its true distance cannot be
/// represented, and the run fails instead of reporting it as unreached.
///
/// # Examples
/// ```
/// use adjgraph::graph::{dijkstra, WeightedGraph};
///
/// let graph: WeightedGraph =
///     WeightedGraph::build(3, &[(1, 2, 4), (1, 3, 1), (3, 2, 1)]).unwrap();
/// let spt = dijkstra::shortest_path_tree(&graph, 1).unwrap();
/// assert_eq!(spt.distance(2), Some(2));
/// assert_eq!(spt.path_to(2), Some(vec![1, 3, 2]));
/// ```
///
/// # Errors
/// * `Range` if `start` is not a vertex of the graph
/// * `Overflow` if a reachable vertex's distance does not fit in `W`
///
/// # Complexity
/// * Time: O((V + E) log V)
/// * Space: O(V)
pub fn shortest_path_tree<W>(graph: &WeightedGraph<W>, start: Vertex) -> Result<SptResult<W>>
where
    W: PrimInt + Debug,
{
    graph.check_vertex(start)?;

    let n = graph.vertex_count();
    let infinity = W::max_value();
    let mut dist = vec![infinity; n + 1];
    let mut parent = vec![NIL; n + 1];
    let mut order = Vec::with_capacity(n);
    let mut overflowed = Vec::new();

    log::debug!("starting Dijkstra SPT from {}", start);

    dist[start] = W::zero();
    let mut heap = IndexedMinHeap::new(n);
    heap.insert(start, &dist);

    while !heap.is_empty() {
        let v = heap.remove(&dist);
        order.push(v);
        log::trace!("settled {} at distance {:?}", v, dist[v]);

        if dist[v] == infinity {
            continue;
        }

        for (u, wgt) in graph.neighbors(v) {
            let candidate = match dist[v].checked_add(&wgt) {
                Some(d) if d < infinity => d,
                _ => {
                    if dist[u] == infinity {
                        overflowed.push(u);
                    }
                    continue;
                }
            };
            if candidate < dist[u] {
                dist[u] = candidate;
                parent[u] = v;
                if heap.contains(u) {
                    heap.sift_up(heap.position(u), &dist);
                } else {
                    heap.insert(u, &dist);
                }
            }
        }
    }

    if let Some(&u) = overflowed.iter().find(|&&u| dist[u] == infinity) {
        return Err(GraphError::overflow(format!(
            "distance from {start} to vertex {u} exceeds {infinity:?}"
        )));
    }

    log::debug!("Dijkstra SPT reached {} of {} vertices", order.len(), n);

    Ok(SptResult {
        start,
        distance: dist,
        parent,
        order,
    })
}
