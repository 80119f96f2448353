#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use taglib::{
    language::html::{self, HtmlElements},
    Attributes, Builder,
};

fn build_table(rows: usize) -> Builder {
    let mut root = Builder::new(html::config());
    let table = root.table("", [("class", "data")]).into_builder().unwrap();
    for row in 0..rows {
        let tr = table.tr("", Attributes::new()).into_builder().unwrap();
        let label = row.to_string();
        tr.td(&label, [("__r", "data-row")]);
        tr.td("value", Attributes::new());
    }
    root
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_table_1000", |b| {
        b.iter(|| build_table(black_box(1000)))
    });
}

fn bench_serialize(c: &mut Criterion) {
    let root = build_table(1000);

    c.bench_function("serialize_table_1000", |b| {
        b.iter(|| black_box(&root).serialize(0))
    });
}

criterion_group!(benches, bench_build, bench_serialize);
criterion_main!(benches);
