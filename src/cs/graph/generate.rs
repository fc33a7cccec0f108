use std::collections::HashSet;

use rand::Rng;

use crate::error::{GraphError, Result};
use crate::graph::{GraphDescription, Vertex};

/// Generates a connected simple graph with `vertices` vertices and exactly
/// `edges` edges, with weights drawn uniformly from `1..=max_weight`.
///
/// A random spanning tree is laid down first (every vertex `v >= 2` is joined
/// to a random earlier vertex), then distinct extra edges are added until the
/// edge count is reached. There are no self-loops or parallel edges.
///
/// The output depends only on the RNG state, so a seeded generator such as
/// `rand_chacha::ChaCha8Rng` reproduces the same graph.
///
/// # Examples
/// ```
/// use adjgraph::graph::{generate, WeightedGraph};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let description = generate::random_graph(10, 15, 100, &mut rng).unwrap();
/// let graph = WeightedGraph::from_description(&description).unwrap();
/// assert_eq!(graph.edge_count(), 15);
/// ```
///
/// # Errors
/// * `InvalidInput` if `edges` is below `vertices - 1`, above `vertices * (vertices - 1) / 2`,
///   or if `max_weight` is 0
/// * `InvalidInput` if `vertices * (vertices - 1)` does not fit in `usize`
pub fn random_graph<R>(
    vertices: usize,
    edges: usize,
    max_weight: u32,
    rng: &mut R,
) -> Result<GraphDescription<u32>>
where
    R: Rng + ?Sized,
{
    let min_edges = vertices.saturating_sub(1);
    let max_edges = vertices
        .checked_mul(min_edges)
        .map(|pairs| pairs / 2)
        .ok_or_else(|| GraphError::invalid_input(format!("{vertices} vertices is too many")))?;
    if edges < min_edges || edges > max_edges {
        return Err(GraphError::invalid_input(format!(
            "a connected simple graph on {vertices} vertices needs between {min_edges} and {max_edges} edges, {edges} requested"
        )));
    }
    if max_weight == 0 {
        return Err(GraphError::invalid_input("max_weight must be at least 1"));
    }

    let mut seen: HashSet<(Vertex, Vertex)> = HashSet::with_capacity(edges);
    let mut list = Vec::with_capacity(edges);

    for v in 2..=vertices {
        let u = rng.gen_range(1..v);
        seen.insert((u, v));
        list.push((u, v, rng.gen_range(1..=max_weight)));
    }

    while list.len() < edges {
        let a = rng.gen_range(1..=vertices);
        let b = rng.gen_range(1..=vertices);
        if a == b {
            continue;
        }
        let key = (a.min(b), a.max(b));
        if seen.insert(key) {
            list.push((key.0, key.1, rng.gen_range(1..=max_weight)));
        }
    }

    log::debug!(
        "generated random graph with {} vertices and {} edges",
        vertices,
        list.len()
    );

    Ok(GraphDescription {
        vertex_count: vertices,
        edge_count: edges,
        edges: list,
    })
}
