//! Criterion benchmarks for the filter recompute.
//!
//! Every filter change and mutation recomputes the visible list with a
//! linear scan. These benches show how that scales with the record count.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use radar_core::config::DashboardConfig;
use radar_core::domain::{Record, Status};
use radar_core::filter::FilterState;
use radar_core::sample;

fn make_records(n: usize) -> Vec<Record> {
    let config = DashboardConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    sample::generate(&config, n, &mut rng)
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_apply");

    for n in [20usize, 1_000, 10_000] {
        let records = make_records(n);

        group.bench_with_input(BenchmarkId::new("search", n), &records, |b, records| {
            let mut filter = FilterState::new();
            filter.set_search("person 3");
            b.iter(|| black_box(filter.apply(records)));
        });

        group.bench_with_input(BenchmarkId::new("all_three", n), &records, |b, records| {
            let mut filter = FilterState::new();
            filter.set_search("radar");
            filter.toggle_status(Status::Completed);
            filter.toggle_tag("Bug");
            b.iter(|| black_box(filter.apply(records)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
