use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizsift_core::classify::contains_number;
use quizsift_core::entities::{EntityRecognizer, HeuristicRecognizer};

const QUESTION: &str =
    "In 1815 the armies of Napoleon Bonaparte met the Duke of Wellington near Waterloo";

fn bench_numeric_predicate(c: &mut Criterion) {
    c.bench_function("contains_number", |b| {
        b.iter(|| contains_number(black_box(QUESTION)))
    });
}

fn bench_entity_recognition(c: &mut Criterion) {
    let recognizer = HeuristicRecognizer::new();
    c.bench_function("recognize_entities", |b| {
        b.iter(|| recognizer.recognize(black_box(QUESTION)))
    });
}

criterion_group!(benches, bench_numeric_predicate, bench_entity_recognition);
criterion_main!(benches);
