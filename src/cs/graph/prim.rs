use num_traits::PrimInt;
use std::fmt::Debug;

use crate::error::{GraphError, Result};
use crate::graph::{Vertex, WeightedGraph, NIL};
use crate::heap::IndexedMinHeap;

/// Minimum spanning tree grown by [`minimum_spanning_tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MstResult<W> {
    pub start: Vertex,
    /// Tree parent of each vertex; [`NIL`] for the root and unreached vertices.
    pub parent: Vec<Vertex>,
    /// Weight of the edge that attached each vertex to the tree, `W::max_value()`
    /// if it was never reached. The root has 0.
    pub key: Vec<W>,
    /// Vertices in the order they joined the tree.
    pub order: Vec<Vertex>,
    pub total_weight: W,
}

impl<W> MstResult<W>
where
    W: PrimInt + Debug,
{
    pub fn parent(&self, v: Vertex) -> Option<Vertex> {
        match self.parent[v] {
            NIL => None,
            p => Some(p),
        }
    }

    pub fn in_tree(&self, v: Vertex) -> bool {
        self.key[v] != W::max_value()
    }

    /// Tree edges as `(vertex, parent, weight)` in ascending vertex order.
    /// The root and vertices outside the start component are left out.
    pub fn edges(&self) -> Vec<(Vertex, Vertex, W)> {
        (1..self.parent.len())
            .filter(|&v| self.parent[v] != NIL)
            .map(|v| (v, self.parent[v], self.key[v]))
            .collect()
    }
}

/// Computes a minimum spanning tree of the component containing `start` with
/// Prim's algorithm on an [`IndexedMinHeap`].
///
/// A vertex is keyed by the lightest edge seen so far that connects it to the
/// tree. When it is removed from the heap its key is added to the total and
/// it is marked settled; settled vertices are never relaxed again. A key that
/// drops for a vertex already in the heap is repaired with `sift_up` at its
/// tracked position.
///
/// # Examples
/// ```
/// use adjgraph::graph::{prim, WeightedGraph};
///
/// let graph: WeightedGraph =
///     WeightedGraph::build(3, &[(1, 2, 4), (1, 3, 2), (2, 3, 1)]).unwrap();
/// let mst = prim::minimum_spanning_tree(&graph, 1).unwrap();
/// assert_eq!(mst.total_weight, 3);
/// assert_eq!(mst.edges(), vec![(2, 3, 1), (3, 1, 2)]);
/// ```
///
/// # Errors
/// * `Range` if `start` is not a vertex of the graph
/// * `Overflow` if the total tree weight does not fit in `W`
///
/// # Complexity
/// * Time: O((V + E) log V)
/// * Space: O(V)
pub fn minimum_spanning_tree<W>(graph: &WeightedGraph<W>, start: Vertex) -> Result<MstResult<W>>
where
    W: PrimInt + Debug,
{
    graph.check_vertex(start)?;

    let n = graph.vertex_count();
    let mut dist = vec![W::max_value(); n + 1];
    let mut parent = vec![NIL; n + 1];
    let mut settled = vec![false; n + 1];
    let mut order = Vec::with_capacity(n);
    let mut total_weight = W::zero();

    log::debug!("starting Prim MST from {}", start);

    dist[start] = W::zero();
    let mut heap = IndexedMinHeap::new(n);
    heap.insert(start, &dist);

    while !heap.is_empty() {
        let v = heap.remove(&dist);

        // the key is counted before the vertex is marked settled
        total_weight = total_weight.checked_add(&dist[v]).ok_or_else(|| {
            GraphError::overflow(format!("tree weight from {start} exceeds {:?}", W::max_value()))
        })?;
        settled[v] = true;
        order.push(v);
        log::trace!("added {} to tree via {} with weight {:?}", v, parent[v], dist[v]);

        for (u, wgt) in graph.neighbors(v) {
            if !settled[u] && wgt < dist[u] {
                dist[u] = wgt;
                parent[u] = v;
                if heap.contains(u) {
                    heap.sift_up(heap.position(u), &dist);
                } else {
                    heap.insert(u, &dist);
                }
            }
        }
    }

    log::debug!(
        "Prim MST spans {} of {} vertices, total weight {:?}",
        order.len(),
        n,
        total_weight
    );

    Ok(MstResult {
        start,
        parent,
        key: dist,
        order,
        total_weight,
    })
}
