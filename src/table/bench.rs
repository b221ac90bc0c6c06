use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

// Reference the main crate
extern crate memtable;

use memtable::infrastructure::{FixedClock, SequentialIdSource};
use memtable::table::{Attribute, Table, TableBuilder};
use memtable::types::TableConfig;

const NO_COLUMNS: [&str; 0] = [];

// Build a table of `rows` random people without match logging
fn build_table(rows: usize) -> Table {
    const NAMES: [&str; 6] = ["Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald"];
    let mut rng = rand::thread_rng();

    let mut table = TableBuilder::new("people")
        .attribute(Attribute::new("name", "string"))
        .attribute(Attribute::new("age", "int"))
        .config(TableConfig {
            log_matches: false,
            ..TableConfig::default()
        })
        .id_source(SequentialIdSource::new("p"))
        .clock(FixedClock::new("2024-01-01 00:00:00"))
        .build();

    for _ in 0..rows {
        let name = NAMES[rng.gen_range(0..NAMES.len())];
        let age = rng.gen_range(0..100).to_string();
        table
            .add_row(&["name", "age"], &[name, age.as_str()])
            .expect("add_row");
    }

    table
}

// Benchmark row insertion
pub fn bench_add_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("AddRow");

    group.bench_function("add_row_1000", |b: &mut criterion::Bencher| {
        b.iter(|| black_box(build_table(1000)))
    });

    group.finish();
}

// Benchmark each operator family over 10k rows
pub fn bench_select(c: &mut Criterion) {
    let table = build_table(10_000);

    let mut group = c.benchmark_group("Select");

    group.bench_function("eq", |b: &mut criterion::Bencher| {
        b.iter(|| table.select(&NO_COLUMNS, black_box(&["name", "==", "ada"])))
    });
    group.bench_function("not_eq", |b: &mut criterion::Bencher| {
        b.iter(|| table.select(&NO_COLUMNS, black_box(&["name", "!=", "Ada"])))
    });
    group.bench_function("gt", |b: &mut criterion::Bencher| {
        b.iter(|| table.select(&NO_COLUMNS, black_box(&["age", ">", "50"])))
    });
    group.bench_function("like", |b: &mut criterion::Bencher| {
        b.iter(|| table.select(&NO_COLUMNS, black_box(&["name", "LIKE", "ar"])))
    });

    group.finish();
}

criterion_group!(benches, bench_add_row, bench_select);
criterion_main!(benches);
