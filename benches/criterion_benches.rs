use criterion::{criterion_group, criterion_main, Criterion};

use sokoban_astar::config::Config;
use sokoban_astar::{LoadLevel, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_one_way(c: &mut Criterion) {
    bench_level(c, "levels/one-way.txt", 100);
}

#[allow(unused)]
fn bench_two_boxes(c: &mut Criterion) {
    // needs a walk around the second box
    bench_level(c, "levels/two-boxes.txt", 100);
}

#[allow(unused)]
fn bench_no_solution(c: &mut Criterion) {
    bench_level(c, "levels/no-solution.txt", 100);
}

fn bench_level(c: &mut Criterion, level_path: &str, samples: usize) {
    let level = level_path.load_level().unwrap();
    let config = Config::default();

    let mut group = c.benchmark_group("pushes");
    group.sample_size(samples);
    group.bench_function(level_path, |b| {
        b.iter(|| criterion::black_box(level.solve(criterion::black_box(&config))))
    });
    group.finish();
}

criterion_group!(benches, bench_one_way, bench_two_boxes, bench_no_solution);
criterion_main!(benches);
