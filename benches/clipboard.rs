//! Benchmarks for clipboard parsing performance.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::cast_possible_truncation
)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use gridclip::clip::{parse, stringify};

/// Build a plain `rows x cols` paste payload.
fn plain_payload(rows: usize, cols: usize) -> String {
    let mut table = Vec::with_capacity(rows);
    for r in 0..rows {
        let row: Vec<String> = (0..cols).map(|c| format!("cell_{r}_{c}")).collect();
        table.push(row);
    }
    stringify(&table)
}

/// Build a payload where every tenth cell is a quoted multi-line value.
fn multiline_payload(rows: usize, cols: usize) -> String {
    let mut table = Vec::with_capacity(rows);
    for r in 0..rows {
        let row: Vec<String> = (0..cols)
            .map(|c| {
                if (r * cols + c) % 10 == 0 {
                    format!("line one {r}\nline \"two\" {c}")
                } else {
                    format!("cell_{r}_{c}")
                }
            })
            .collect();
        table.push(row);
    }
    stringify(&table)
}

fn bench_parse_plain(c: &mut Criterion) {
    let payload = plain_payload(1000, 20);
    let mut group = c.benchmark_group("parse_plain");
    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function("parse_1000x20", |b| b.iter(|| parse(black_box(&payload))));
    group.finish();
}

fn bench_parse_multiline(c: &mut Criterion) {
    let payload = multiline_payload(1000, 20);
    let mut group = c.benchmark_group("parse_multiline");
    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function("parse_1000x20_quoted", |b| {
        b.iter(|| parse(black_box(&payload)))
    });
    group.finish();
}

fn bench_stringify(c: &mut Criterion) {
    let table: Vec<Vec<String>> = (0..1000)
        .map(|r| (0..20).map(|c| format!("cell_{r}_{c}")).collect())
        .collect();

    c.bench_function("stringify_1000x20", |b| {
        b.iter(|| stringify(black_box(&table)))
    });
}

criterion_group!(
    benches,
    bench_parse_plain,
    bench_parse_multiline,
    bench_stringify,
);

criterion_main!(benches);
