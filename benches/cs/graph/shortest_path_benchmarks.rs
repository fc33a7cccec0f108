use adjgraph::graph::{
    breadth_first_search, depth_first_search, generate, minimum_spanning_tree, shortest_path_tree,
    WeightedGraph,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn sparse_graph(vertices: usize) -> WeightedGraph {
    let mut rng = ChaCha8Rng::seed_from_u64(vertices as u64);
    // road networks average about three edges per vertex
    let description = generate::random_graph(vertices, vertices * 3 / 2, 1_000, &mut rng)
        .expect("valid generator parameters");
    WeightedGraph::from_description(&description).expect("generated graph is well formed")
}

fn bench_priority_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority");
    for &size in &[1_000usize, 10_000, 100_000] {
        let graph = sparse_graph(size);
        group.bench_with_input(BenchmarkId::new("dijkstra", size), &graph, |b, g| {
            b.iter(|| shortest_path_tree(black_box(g), 1))
        });
        group.bench_with_input(BenchmarkId::new("prim", size), &graph, |b, g| {
            b.iter(|| minimum_spanning_tree(black_box(g), 1))
        });
    }
    group.finish();
}

fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    for &size in &[1_000usize, 100_000] {
        let graph = sparse_graph(size);
        group.bench_with_input(BenchmarkId::new("dfs", size), &graph, |b, g| {
            b.iter(|| depth_first_search(black_box(g), 1))
        });
        group.bench_with_input(BenchmarkId::new("bfs", size), &graph, |b, g| {
            b.iter(|| breadth_first_search(black_box(g), 1))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_priority_algorithms, bench_traversals);
criterion_main!(benches);
