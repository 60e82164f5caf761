//! Criterion benchmark for canonical-form checking, the pruning step run
//! on every candidate edge of the search.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use low_index::canonicity::is_canonical;
use low_index::covering_subgraph::CoveringSubgraph;

fn build_graph(rank: usize, degree: usize) -> CoveringSubgraph {
    let mut graph = CoveringSubgraph::new(rank, degree);
    'fill: while !graph.is_complete() {
        let (from, letter) = graph.first_empty_slot().unwrap();
        for target in 1..=graph.degree() as u32 {
            if graph.verified_add_edge(letter, from, target) {
                continue 'fill;
            }
        }
        if graph.degree() < graph.max_degree() {
            graph.verified_add_edge(letter, from, graph.degree() as u32 + 1);
        } else {
            break;
        }
    }
    graph
}

fn bench_is_canonical(c: &mut Criterion) {
    let graph = build_graph(2, 20);
    c.bench_function("is_canonical_rank2_degree20", |b| {
        b.iter(|| black_box(is_canonical(black_box(&graph))));
    });
}

criterion_group!(benches, bench_is_canonical);
criterion_main!(benches);
