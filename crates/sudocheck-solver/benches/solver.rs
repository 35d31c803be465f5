//! Benchmarks for the solving engine.
//!
//! Two fixed puzzles cover the two regimes: a puzzle propagation finishes
//! on its own, and one that forces the backtracking search to do the work.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sudocheck_core::Grid;
use sudocheck_solver::solve;

const PUZZLES: [(&str, &str); 2] = [
    (
        "propagation_only",
        "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
        ",
    ),
    (
        "backtracking",
        "
        8__ ___ ___
        __3 6__ ___
        _7_ _9_ 2__
        _5_ __7 ___
        ___ _45 7__
        ___ 1__ _3_
        __1 ___ _68
        __8 5__ _1_
        _9_ ___ 4__
        ",
    ),
];

fn bench_solve(c: &mut Criterion) {
    for (name, text) in PUZZLES {
        let grid: Grid = text.parse().unwrap();
        c.bench_with_input(BenchmarkId::new("solve", name), &grid, |b, grid| {
            b.iter_batched(
                || hint::black_box(grid.clone()),
                |mut grid| solve(&mut grid),
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
