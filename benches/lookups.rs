use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use turkiyedb::TurkiyeDb;

fn bench_lookups(c: &mut Criterion) {
    let db = TurkiyeDb::load();

    // Worst case for the linear scan: the highest license-plate ID.
    c.bench_function("find_city_by_id/last", |b| {
        b.iter(|| db.find_city_by_id(black_box(81)))
    });

    c.bench_function("find_quarter_by_id/deep", |b| {
        b.iter(|| db.find_quarter_by_id(black_box(81), black_box(1), black_box(1), black_box(1)))
    });

    c.bench_function("stats/full_walk", |b| b.iter(|| db.stats()));

    c.bench_function("iter_quarters/count", |b| {
        b.iter(|| db.iter_quarters().count())
    });
}

criterion_group!(benches, bench_lookups);
criterion_main!(benches);
