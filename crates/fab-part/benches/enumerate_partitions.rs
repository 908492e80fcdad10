use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fab_part::{partitions, Partitions};

fn bench_partitions(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_partitions");
    group.bench_function("recursive_30", |b| {
        b.iter(|| black_box(partitions(black_box(30))).len())
    });
    group.bench_function("lazy_30", |b| {
        b.iter(|| Partitions::new(black_box(30)).count())
    });
    group.finish();
}

criterion_group!(benches, bench_partitions);
criterion_main!(benches);
