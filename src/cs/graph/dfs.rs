use std::fmt::Debug;

use crate::error::Result;
use crate::graph::{Neighbors, Vertex, WeightedGraph, NIL};

/// Visit state of a vertex during depth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    /// Not yet discovered.
    White,
    /// Discovered, subtree still being explored.
    Grey,
    /// Subtree fully explored.
    Black,
}

/// Per-vertex output of [`depth_first_search`], indexed by vertex id.
///
/// Index 0 is unused. Vertices that were never discovered keep colour
/// `White`, timestamps 0 and parent [`NIL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsResult {
    pub start: Vertex,
    pub discovery: Vec<usize>,
    pub finish: Vec<usize>,
    pub parent: Vec<Vertex>,
    pub colour: Vec<Colour>,
}

impl DfsResult {
    pub fn parent(&self, v: Vertex) -> Option<Vertex> {
        match self.parent[v] {
            NIL => None,
            p => Some(p),
        }
    }

    pub fn is_discovered(&self, v: Vertex) -> bool {
        self.colour[v] != Colour::White
    }

    /// Discovered vertices sorted by discovery time.
    pub fn discovery_order(&self) -> Vec<Vertex> {
        let mut order: Vec<_> = (1..self.discovery.len())
            .filter(|&v| self.is_discovered(v))
            .collect();
        order.sort_by_key(|&v| self.discovery[v]);
        order
    }

    /// Discovered vertices sorted by finish time.
    pub fn finish_order(&self) -> Vec<Vertex> {
        let mut order: Vec<_> = (1..self.finish.len())
            .filter(|&v| self.is_discovered(v))
            .collect();
        order.sort_by_key(|&v| self.finish[v]);
        order
    }
}

/// Working state of one depth-first search call.
struct DfsState {
    time: usize,
    discovery: Vec<usize>,
    finish: Vec<usize>,
    parent: Vec<Vertex>,
    colour: Vec<Colour>,
}

/// Depth-first search with discovery and finish timestamps.
///
/// Starting at `start`, every still-white vertex from `start` up to `V` is
/// used as the root of a new DFS tree, in ascending id order. Vertices below
/// `start` are reached only as descendants. Neighbours are explored in
/// adjacency order. The clock starts at 0 and is incremented before each
/// stamp, so the first discovery happens at time 1.
///
/// The walk uses an explicit stack, so deep graphs do not exhaust the call
/// stack.
///
/// # Errors
/// * `Range` if `start` is not a vertex of the graph
///
/// # Complexity
/// * Time: O(V + E)
/// * Space: O(V)
pub fn depth_first_search<W>(graph: &WeightedGraph<W>, start: Vertex) -> Result<DfsResult>
where
    W: Copy + Debug,
{
    graph.check_vertex(start)?;

    let n = graph.vertex_count();
    let mut state = DfsState {
        time: 0,
        discovery: vec![0; n + 1],
        finish: vec![0; n + 1],
        parent: vec![NIL; n + 1],
        colour: vec![Colour::White; n + 1],
    };

    log::debug!("starting depth-first search from {}", start);

    for root in start..=n {
        if state.colour[root] == Colour::White {
            visit(graph, root, &mut state);
        }
    }

    log::debug!("depth-first search finished at time {}", state.time);

    Ok(DfsResult {
        start,
        discovery: state.discovery,
        finish: state.finish,
        parent: state.parent,
        colour: state.colour,
    })
}

fn discover(v: Vertex, state: &mut DfsState) {
    state.colour[v] = Colour::Grey;
    state.time += 1;
    state.discovery[v] = state.time;
    log::trace!("discovered {} at time {}", v, state.time);
}

/// Explores the tree rooted at `root`, stamping vertices as the recursive
/// formulation would.
fn visit<W: Copy>(graph: &WeightedGraph<W>, root: Vertex, state: &mut DfsState) {
    let mut stack: Vec<(Vertex, Neighbors<'_, W>)> = Vec::new();

    discover(root, state);
    stack.push((root, graph.neighbors(root)));

    while let Some((u, neighbors)) = stack.last_mut() {
        let u = *u;
        let next = neighbors.find(|&(v, _)| state.colour[v] == Colour::White);
        match next {
            Some((v, _)) => {
                state.parent[v] = u;
                discover(v, state);
                stack.push((v, graph.neighbors(v)));
            }
            None => {
                stack.pop();
                state.colour[u] = Colour::Black;
                state.time += 1;
                state.finish[u] = state.time;
                log::trace!("finished {} at time {}", u, state.time);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    fn sample() -> WeightedGraph {
        WeightedGraph::build(
            5,
            &[(1, 2, 2), (1, 3, 5), (2, 3, 1), (2, 4, 3), (3, 4, 2), (4, 5, 4)],
        )
        .unwrap()
    }

    #[test]
    fn test_dfs_timestamps_on_sample() {
        // adjacency: 1 -> [3, 2], 3 -> [4, 2, 1], 4 -> [5, 3, 2], 5 -> [4], 2 -> [4, 3, 1]
        let result = depth_first_search(&sample(), 1).unwrap();
        assert_eq!(result.discovery, vec![0, 1, 6, 2, 3, 4]);
        assert_eq!(result.finish, vec![0, 10, 7, 9, 8, 5]);
        assert_eq!(result.parent, vec![NIL, NIL, 4, 1, 3, 4]);
        assert_eq!(result.discovery_order(), vec![1, 3, 4, 5, 2]);
        assert_eq!(result.finish_order(), vec![5, 2, 4, 3, 1]);
        assert!(result.colour[1..].iter().all(|&c| c == Colour::Black));
    }

    #[test]
    fn test_dfs_timestamps_nest() {
        let graph = sample();
        let result = depth_first_search(&graph, 2).unwrap();
        for v in graph.vertices() {
            let mut ancestor = result.parent[v];
            while ancestor != NIL {
                assert!(result.discovery[ancestor] < result.discovery[v]);
                assert!(result.discovery[v] < result.finish[v]);
                assert!(result.finish[v] < result.finish[ancestor]);
                ancestor = result.parent[ancestor];
            }
        }
    }

    #[test]
    fn test_dfs_does_not_wrap_below_start() {
        // 1 is isolated and below the start vertex
        let graph: WeightedGraph = WeightedGraph::build(4, &[(2, 3, 1), (3, 4, 1)]).unwrap();
        let result = depth_first_search(&graph, 2).unwrap();
        assert_eq!(result.colour[1], Colour::White);
        assert_eq!(result.discovery[1], 0);
        assert_eq!(result.finish[1], 0);
        assert!(!result.is_discovered(1));
        assert_eq!(result.discovery_order(), vec![2, 3, 4]);
    }

    #[test]
    fn test_dfs_restarts_on_later_components() {
        let graph: WeightedGraph = WeightedGraph::build(4, &[(1, 2, 1), (3, 4, 1)]).unwrap();
        let result = depth_first_search(&graph, 1).unwrap();
        assert_eq!(result.discovery, vec![0, 1, 2, 5, 6]);
        assert_eq!(result.finish, vec![0, 4, 3, 8, 7]);
        assert_eq!(result.parent(3), None);
        assert_eq!(result.parent(4), Some(3));
    }

    #[test]
    fn test_dfs_reaches_lower_vertices_as_descendants() {
        let graph: WeightedGraph = WeightedGraph::build(3, &[(3, 1, 1)]).unwrap();
        let result = depth_first_search(&graph, 3).unwrap();
        assert_eq!(result.parent(1), Some(3));
        assert_eq!(result.colour[2], Colour::White);
    }

    #[test]
    fn test_dfs_deep_path() {
        let n = 100_000;
        let edges: Vec<_> = (1..n).map(|v| (v, v + 1, 1u32)).collect();
        let graph = WeightedGraph::build(n, &edges).unwrap();
        let result = depth_first_search(&graph, 1).unwrap();
        assert_eq!(result.discovery[n], n);
        assert_eq!(result.finish[1], 2 * n);
    }

    #[test]
    fn test_dfs_invalid_start() {
        let graph = sample();
        assert!(matches!(
            depth_first_search(&graph, 0),
            Err(GraphError::Range { .. })
        ));
        assert!(matches!(
            depth_first_search(&graph, 6),
            Err(GraphError::Range { .. })
        ));
    }
}
