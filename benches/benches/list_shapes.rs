//! Benchmarks for the list-shape converter and canonicalizer.
//!
//! Fixture lists are short, but generated fixtures can carry long cons
//! chains; these measure the iterative walks on a 500-element chain.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use serde_json::{Value, json};
use zobject_core::{ElementTypes, canonicalize, delist, normalize_list_shapes};

/// A `Z10` chain of string literals, typed by reference.
fn cons_chain(len: usize) -> Value {
    let mut list = json!({"Z1K1": {"Z1K1": "Z9", "Z9K1": "Z10"}});
    for i in (0..len).rev() {
        list = json!({
            "Z1K1": {"Z1K1": "Z9", "Z9K1": "Z10"},
            "Z10K1": {"Z1K1": "Z6", "Z6K1": format!("element {i}")},
            "Z10K2": list
        });
    }
    list
}

fn bench_delist_500(c: &mut Criterion) {
    let chain = cons_chain(500);
    c.bench_function("delist_500_chain", |b| {
        b.iter(|| delist(black_box(&chain)));
    });
}

fn bench_canonicalize_500(c: &mut Criterion) {
    let chain = cons_chain(500);
    c.bench_function("canonicalize_500_chain", |b| {
        b.iter(|| canonicalize(black_box(&chain)));
    });
}

/// Full typed-list normalization inside a function's argument field, so the
/// fixed element-type lookup is on the path.
fn bench_normalize_500(c: &mut Criterion) {
    let function = json!({"Z1K1": "Z8", "Z8K1": cons_chain(500)});
    let table = ElementTypes::default();
    c.bench_function("normalize_list_shapes_500_chain", |b| {
        b.iter(|| normalize_list_shapes(black_box(&function), black_box(&table)));
    });
}

criterion_group!(
    benches,
    bench_delist_500,
    bench_canonicalize_500,
    bench_normalize_500
);
criterion_main!(benches);
