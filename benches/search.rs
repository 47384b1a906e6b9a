//! Times a single search over a scattered-obstacle grid, once per
//! heuristic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gridpath::{heuristics, Cost, Grid, Node, Point};
use nanorand::WyRand;

type Heuristic = fn(&Node, &Node) -> Cost;

const WIDTH: usize = 128;
const HEIGHT: usize = 128;
const OBSTACLE_PERCENT: u32 = 10;
const SEED: u64 = 0x5EED;

/// A reproducible obstacle field with usable endpoints near opposite
/// corners.
fn scene() -> (Grid, Point, Point) {
    let mut rng = WyRand::new_seed(SEED);
    let mut grid = Grid::new(WIDTH, HEIGHT);
    grid.generate_obstacles_with(OBSTACLE_PERCENT, &mut rng);
    let start = grid.find_free_node_near_with(0, 0, &mut rng).unwrap();
    let goal = grid
        .find_free_node_near_with(HEIGHT - 1, WIDTH - 1, &mut rng)
        .unwrap();
    (grid, start, goal)
}

fn bench_find_path(c: &mut Criterion) {
    let (grid, start, goal) = scene();

    let mut group = c.benchmark_group("find_path");
    for (name, heuristic) in [
        ("manhattan", heuristics::manhattan as Heuristic),
        ("diagonal", heuristics::diagonal),
        ("chebyshev", heuristics::chebyshev),
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &heuristic,
            |b, &heuristic| {
                b.iter(|| grid.find_path(black_box(start), black_box(goal), heuristic))
            },
        );
    }
    group.finish();
}

fn bench_free_node_lookup(c: &mut Criterion) {
    let (grid, _, _) = scene();

    c.bench_function("find_free_node_near", |b| {
        let mut rng = WyRand::new_seed(SEED);
        b.iter(|| {
            grid.find_free_node_near_with(black_box(HEIGHT / 2), black_box(WIDTH / 2), &mut rng)
        })
    });
}

criterion_group!(benches, bench_find_path, bench_free_node_lookup);
criterion_main!(benches);
