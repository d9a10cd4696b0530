use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use labelset::graph::generators::{generate_grid, generate_random};
use labelset::{Dijkstra, IndexedBinaryHeap, LazyBinaryHeap, LinearScanQueue};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_graph");
    let mut rng = StdRng::seed_from_u64(2015);

    for &size in &[1_000usize, 5_000] {
        let graph = generate_random(&mut rng, size, 4.0, 100).expect("valid graph size");

        group.bench_with_input(BenchmarkId::new("indexed_heap", size), &graph, |b, g| {
            let dijkstra = Dijkstra::<IndexedBinaryHeap<u64>>::new();
            b.iter(|| dijkstra.shortest_paths(g, black_box(0)).expect("source in range"))
        });
        group.bench_with_input(BenchmarkId::new("lazy_heap", size), &graph, |b, g| {
            let dijkstra = Dijkstra::<LazyBinaryHeap<u64>>::new();
            b.iter(|| dijkstra.shortest_paths(g, black_box(0)).expect("source in range"))
        });
        group.bench_with_input(BenchmarkId::new("linear_scan", size), &graph, |b, g| {
            let dijkstra = Dijkstra::<LinearScanQueue<u64>>::new();
            b.iter(|| dijkstra.shortest_paths(g, black_box(0)).expect("source in range"))
        });
    }

    group.finish();
}

fn bench_grid_point_to_point(c: &mut Criterion) {
    let graph = generate_grid(100, 100, 3).expect("valid graph size");
    let target = graph.node_count() - 1;

    c.bench_function("grid_100x100/indexed_heap", |b| {
        let dijkstra = Dijkstra::<IndexedBinaryHeap<u64>>::new();
        b.iter(|| {
            dijkstra
                .shortest_path(&graph, black_box(0), black_box(target))
                .expect("nodes in range")
        })
    });
    c.bench_function("grid_100x100/lazy_heap", |b| {
        let dijkstra = Dijkstra::<LazyBinaryHeap<u64>>::new();
        b.iter(|| {
            dijkstra
                .shortest_path(&graph, black_box(0), black_box(target))
                .expect("nodes in range")
        })
    });
}

criterion_group!(benches, bench_random_graphs, bench_grid_point_to_point);
criterion_main!(benches);
