use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graphpad::algorithm::{Dijkstra, FloydWarshall};
use graphpad::graph::{Graph, VertexId};
use rand::Rng;
use static_init::dynamic;

#[dynamic]
static VERTEX_SIZE: usize = std::env::var("VERTEX_SIZE")
    .unwrap_or("64".to_string())
    .parse()
    .unwrap();
#[dynamic]
static EDGE_SIZE: usize = std::env::var("EDGE_SIZE")
    .unwrap_or("512".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, build_matrix, dijkstra, floyd_warshall);
criterion_main!(benches);

fn random_graph(vertex_size: usize, edge_size: usize) -> (Graph<()>, Vec<VertexId>) {
    let mut graph = Graph::new();
    let ids: Vec<_> = (0..vertex_size).map(|_| graph.create_vertex(())).collect();
    let mut rng = rand::thread_rng();
    for _ in 0..edge_size {
        let a = ids[rng.gen::<usize>() % ids.len()];
        let b = ids[rng.gen::<usize>() % ids.len()];
        graph.create_edge(a);
        if let Some(eid) = graph.create_edge(b) {
            graph.set_edge_weight(eid, Some(rng.gen::<u64>() % 100));
        }
    }
    (graph, ids)
}

fn build_matrix(c: &mut Criterion) {
    let vertex_size = *VERTEX_SIZE;
    let edge_size = *EDGE_SIZE;
    let (graph, _) = random_graph(vertex_size, edge_size);
    c.bench_function("adjacency_matrix", |b| {
        b.iter(|| black_box(graph.adjacency_matrix()).size())
    });
}

fn dijkstra(c: &mut Criterion) {
    let vertex_size = *VERTEX_SIZE;
    let edge_size = *EDGE_SIZE;
    println!("VERTEX_SIZE: {}", vertex_size);
    println!("EDGE_SIZE: {}", edge_size);
    let (graph, _) = random_graph(vertex_size, edge_size);
    let matrix = graph.adjacency_matrix();
    c.bench_function("dijkstra/find_path", |b| {
        b.iter(|| {
            let mut engine = Dijkstra::new();
            engine.find_path(0, black_box(&matrix));
            engine.paths().len()
        })
    });
}

fn floyd_warshall(c: &mut Criterion) {
    let vertex_size = *VERTEX_SIZE;
    let edge_size = *EDGE_SIZE;
    let (graph, _) = random_graph(vertex_size, edge_size);
    let matrix = graph.adjacency_matrix();
    c.bench_function("floyd_warshall/find_path", |b| {
        b.iter(|| {
            let mut engine = FloydWarshall::new();
            engine.find_path(black_box(&matrix));
            engine.paths().len()
        })
    });
}
