use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use perc::{Grid, ThresholdStats};
use rand::{rngs::StdRng, SeedableRng};

fn open_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_all");
    for n in [16, 64, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut grid = Grid::new(n).unwrap();
                for row in 1..=n {
                    for col in 1..=n {
                        grid.open(row, col).unwrap();
                    }
                }
                black_box(grid.percolates())
            })
        });
    }
    group.finish();
}

fn trials(c: &mut Criterion) {
    c.bench_function("trials 64x64 x 20", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| black_box(ThresholdStats::with_rng(64, 20, &mut rng).unwrap().mean()))
    });
    c.bench_function("parallel trials 64x64 x 20", |b| {
        b.iter(|| black_box(ThresholdStats::with_seed_parallel(64, 20, 0).unwrap().mean()))
    });
}

criterion_group!(benches, open_all, trials);
criterion_main!(benches);
