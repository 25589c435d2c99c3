//! Benchmarks for tab-stop insertion and lookup.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tabstops::{Document, Length};

/// Creates a document whose single paragraph holds `count` evenly spaced stops.
fn create_test_document(count: i64) -> Document {
    let mut doc = Document::new();
    let p = doc.add_paragraph().unwrap();
    let mut stops = doc.tab_stops_mut(p).unwrap();
    for i in 0..count {
        stops.add(Length::twips(i * 360)).unwrap();
    }
    doc
}

/// Benchmark ordered insertion into collections of various sizes.
fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for count in [0, 8, 64].iter() {
        let doc = create_test_document(*count);
        let middle = Length::twips(count * 180 + 1);

        group.bench_function(format!("{}_stops", count), |b| {
            b.iter(|| {
                let mut doc = doc.clone();
                let p = doc.paragraph(0).unwrap();
                let mut stops = doc.tab_stops_mut(p).unwrap();
                black_box(stops.add(black_box(middle)).unwrap().node_id());
            });
        });
    }

    group.finish();
}

/// Benchmark indexed reads, which walk the tree on every call.
fn bench_get(c: &mut Criterion) {
    let doc = create_test_document(64);
    let p = doc.paragraph(0).unwrap();

    c.bench_function("get_last_of_64", |b| {
        b.iter(|| {
            let stops = doc.tab_stops(p).unwrap();
            stops.get(black_box(63)).unwrap().position().unwrap()
        });
    });
}

criterion_group!(benches, bench_add, bench_get);
criterion_main!(benches);
