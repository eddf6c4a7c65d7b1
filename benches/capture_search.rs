use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

use checkers_engine::{board::Board, square::Square};

fn criterion_benchmark(c: &mut Criterion) {
    let board = Board::try_from([
        ".R......",
        "..w.....",
        "........",
        "..w.w...",
        "........",
        "..w.w...",
        "........",
        "........",
    ])
    .unwrap();

    c.bench_function("king_capture_search", |b| {
        b.iter(|| board.legal_moves(Square { row: 0, col: 1 }).unwrap());
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = criterion_benchmark
}

criterion_main!(benches);
