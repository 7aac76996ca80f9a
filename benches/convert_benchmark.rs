//! Benchmark projection, curve flattening and whole-document conversion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use plotconv::flatten::flatten_cubic;
use plotconv::proj::wgs84_to_rd;
use plotconv::types::Point;
use plotconv::{convert_document, ConvertOptions, SymbolTable, EXPECTED_VERSION};
use serde_json::{json, Value};

/// Build a document of `n` top-level arcs spread over the Dutch bbox.
fn arc_document(n: usize) -> String {
    let entities: Vec<Value> = (0..n)
        .map(|i| {
            let lon = 3.5 + 4.0 * (i as f64 / n as f64);
            json!({
                "entityIdentifier": "Arc",
                "entity": {
                    "id": format!("a{i}"), "zLevel": 0, "attributes": [],
                    "point1": {"x": lon, "y": 52.0},
                    "point2": {"x": lon + 0.01, "y": 52.01},
                    "start": 30.0, "extent": 240.0,
                    "color": "#204060", "lineWidth": 1.0, "alpha": 1.0
                }
            })
        })
        .collect();
    let tops: Vec<String> = (0..n).map(|i| format!("a{i}")).collect();
    json!({
        "version": EXPECTED_VERSION,
        "topEntityIds": tops,
        "entityList": entities
    })
    .to_string()
}

fn bench_projection(c: &mut Criterion) {
    c.bench_function("wgs84_to_rd", |b| {
        b.iter(|| wgs84_to_rd(black_box(52.155174), black_box(5.387204)))
    });
}

fn bench_flattening(c: &mut Criterion) {
    let start = Point::new(0.0, 0.0);
    let c1 = Point::new(120.0, 350.0);
    let c2 = Point::new(480.0, -90.0);
    let end = Point::new(600.0, 200.0);

    c.bench_function("flatten_cubic", |b| {
        b.iter(|| {
            let mut out = vec![start];
            flatten_cubic(
                black_box(start),
                black_box(c1),
                black_box(c2),
                black_box(end),
                1.0,
                &mut out,
            );
            out
        })
    });
}

fn bench_document_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_document");
    for n in [16usize, 256] {
        let json = arc_document(n);
        group.bench_with_input(BenchmarkId::new("sequential", n), &json, |b, json| {
            b.iter(|| {
                convert_document(
                    black_box(json),
                    &ConvertOptions::default(),
                    SymbolTable::standard(),
                )
                .unwrap()
            })
        });
        let parallel = ConvertOptions {
            parallel: true,
            ..ConvertOptions::default()
        };
        group.bench_with_input(BenchmarkId::new("parallel", n), &json, |b, json| {
            b.iter(|| {
                convert_document(black_box(json), &parallel, SymbolTable::standard()).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_projection,
    bench_flattening,
    bench_document_conversion
);
criterion_main!(benches);
