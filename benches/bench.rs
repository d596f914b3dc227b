// Criterion benchmarks for Userdata Proxy

use chrono::DateTime;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use userdata_proxy::core::{filter_by_time_range, parse_timestamp};
use userdata_proxy::models::{QueryParameters, UserRecord};

fn create_record(id: usize) -> UserRecord {
    UserRecord {
        gender: if id % 2 == 0 { "female" } else { "male" }.to_string(),
        first_name: format!("First{}", id),
        last_name: format!("Last{}", id),
        postcode: 10000 + id as i64,
        created_at: format!("20{:02}-06-01T12:00:00.{:03}Z", 2 + id % 20, id % 1000),
    }
}

fn bench_parse_params(c: &mut Criterion) {
    c.bench_function("parse_query_parameters", |b| {
        b.iter(|| {
            QueryParameters::from_raw(
                black_box("50"),
                black_box("2012-11-09T07:47:23.904Z"),
                black_box("2019-11-09T07:47:23.904Z"),
            )
        });
    });

    c.bench_function("parse_timestamp", |b| {
        b.iter(|| parse_timestamp(black_box("2019-11-09T07:47:23.904Z"), "from"));
    });
}

fn bench_filter(c: &mut Criterion) {
    let from = Some(DateTime::parse_from_rfc3339("2008-01-01T00:00:00Z").unwrap());
    let to = Some(DateTime::parse_from_rfc3339("2016-01-01T00:00:00Z").unwrap());

    let mut group = c.benchmark_group("filter_by_time_range");

    for size in [10, 100, 1000, 5000] {
        let records: Vec<UserRecord> = (0..size).map(create_record).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| filter_by_time_range(black_box(records.clone()), from, to));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_params, bench_filter);
criterion_main!(benches);
