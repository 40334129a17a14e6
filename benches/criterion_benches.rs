#[macro_use]
extern crate criterion;

use criterion::{Benchmark, Criterion};

use eight_puzzle_solver::config::Method;
use eight_puzzle_solver::{LoadPuzzle, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_medium(c: &mut Criterion) {
    bench_puzzle(c, Method::Greedy, "puzzles/medium.txt", 100);
}

#[allow(unused)]
fn bench_hardest_greedy(c: &mut Criterion) {
    bench_puzzle(c, Method::Greedy, "puzzles/hardest.txt", 50);
}

#[allow(unused)]
fn bench_hardest_optimal(c: &mut Criterion) {
    // 31 moves
    bench_puzzle(c, Method::AStar, "puzzles/hardest.txt", 20);
}

#[allow(unused)]
fn bench_no_solution(c: &mut Criterion) {
    // visits all 181,440 reachable boards
    bench_puzzle(c, Method::Greedy, "puzzles/no-solution.txt", 10);
}

fn bench_puzzle(c: &mut Criterion, method: Method, puzzle_path: &str, samples: usize) {
    let puzzle = puzzle_path.load_puzzle().unwrap();

    c.bench(
        &format!("{}", method),
        Benchmark::new(puzzle_path, move |b| {
            b.iter(|| {
                criterion::black_box(
                    puzzle.solve(criterion::black_box(method), criterion::black_box(false)),
                )
            })
        })
        .sample_size(samples),
    );
}

criterion_group!(
    benches,
    bench_medium,
    bench_hardest_greedy,
    bench_hardest_optimal,
    //bench_no_solution,
);
criterion_main!(benches);
