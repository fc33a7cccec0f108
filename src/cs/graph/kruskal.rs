use num_traits::PrimInt;
use std::fmt::Debug;

use crate::error::{GraphError, Result};
use crate::graph::{EdgeTriple, Vertex, WeightedGraph};

/// Disjoint sets over ids `0..n`, merged by rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    /// Starts with every id in its own set.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Root of the set holding `x`. Every id on the walk up is relinked
    /// straight to the root.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets of `x` and `y`, hanging the lower-rank root under the
    /// higher one. Returns `false` when both are already in the same set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }

        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }
        true
    }
}

/// Minimum spanning forest found by [`minimum_spanning_forest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KruskalResult<W> {
    pub edges: Vec<EdgeTriple<W>>,
    pub total_weight: W,
}

impl<W> KruskalResult<W> {
    /// Number of trees in the forest over `vertex_count` vertices.
    pub fn component_count(&self, vertex_count: usize) -> usize {
        vertex_count - self.edges.len()
    }
}

/// Kruskal's algorithm over every component of the graph.
///
/// Serves as an independent reference for the heap-driven Prim: the total
/// weight of a connected graph's forest equals the Prim tree weight from any
/// start. Edges of equal weight keep their order from
/// [`WeightedGraph::edges`].
///
/// # Errors
/// * `Overflow` if the total forest weight does not fit in `W`
///
/// # Complexity
/// * Time: O(E log E)
/// * Space: O(V + E)
pub fn minimum_spanning_forest<W>(graph: &WeightedGraph<W>) -> Result<KruskalResult<W>>
where
    W: PrimInt + Debug,
{
    let mut edges: Vec<_> = graph.edges().collect();
    edges.sort_by_key(|&(_, _, w)| w);

    let mut uf = UnionFind::new(graph.vertex_count() + 1);
    let mut forest = Vec::with_capacity(graph.vertex_count().saturating_sub(1));
    let mut total_weight = W::zero();

    for (u, v, w) in edges {
        if uf.union(u, v) {
            log::trace!("kruskal takes {}--{} ({:?})", u, v, w);
            forest.push((u, v, w));
            total_weight = total_weight.checked_add(&w).ok_or_else(|| {
                GraphError::overflow(format!("forest weight exceeds {:?}", W::max_value()))
            })?;
            if forest.len() + 1 == graph.vertex_count() {
                break;
            }
        }
    }

    log::debug!(
        "kruskal forest has {} edges, total weight {:?}",
        forest.len(),
        total_weight
    );

    Ok(KruskalResult {
        edges: forest,
        total_weight,
    })
}

/// Vertices connected to `start` in a forest given as edge triples.
pub fn component_of<W>(forest: &[EdgeTriple<W>], vertex_count: usize, start: Vertex) -> Vec<Vertex> {
    let mut uf = UnionFind::new(vertex_count + 1);
    for &(u, v, _) in forest {
        uf.union(u, v);
    }
    let root = uf.find(start);
    (1..=vertex_count).filter(|&v| uf.find(v) == root).collect()
}
