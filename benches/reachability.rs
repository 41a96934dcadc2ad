//! Reachability micro-benchmarks.
//!
//! The search is exponential in the worst case (an unreachable target
//! forces a visit to every subset), so the bench pins both the early-exit
//! and the full-sweep paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shutbox::can_reach;

fn bench_reachability(c: &mut Criterion) {
    let full: Vec<u8> = (1..=12).collect();
    c.bench_function("full_board_reachable_12", |b| {
        b.iter(|| can_reach(black_box(&full), black_box(12)))
    });

    // All-even tiles, odd target: unreachable, every subset visited
    let evens = vec![2u8, 4, 6, 8, 10, 12];
    c.bench_function("even_tiles_unreachable_11", |b| {
        b.iter(|| can_reach(black_box(&evens), black_box(11)))
    });

    c.bench_function("full_board_unreachable_1", |b| {
        b.iter(|| can_reach(black_box(&full), black_box(1)))
    });
}

criterion_group!(benches, bench_reachability);
criterion_main!(benches);
