//! Criterion benchmarks for candidate extraction and occurrence scanning.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use spellspan::checker::positions::find_positions;
use spellspan::checker::tokenizer::tokenize;
use std::hint::black_box;

/// Build a chunk of prose with punctuation, abbreviations and a few typos.
fn generate_chunk(sentences: usize) -> String {
    let samples = [
        "Helo wrld, this is fyne.",
        "We recieve mail e.g. letters and/or parcels (mostly) on Mondays.",
        "The café served crème brûlée... twice in 2024!",
        "Well-known authors don't always spell definately right.",
    ];

    (0..sentences)
        .map(|i| samples[i % samples.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for sentences in [10, 1000] {
        let chunk = generate_chunk(sentences);
        group.throughput(Throughput::Bytes(chunk.len() as u64));
        group.bench_function(format!("{sentences}_sentences"), |b| {
            b.iter(|| black_box(tokenize(black_box(&chunk))))
        });
    }

    group.finish();
}

fn bench_find_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_positions");
    let chunk = generate_chunk(1000);

    group.bench_function("frequent_word", |b| {
        b.iter(|| black_box(find_positions(black_box(&chunk), "recieve")))
    });
    group.bench_function("absent_word", |b| {
        b.iter(|| black_box(find_positions(black_box(&chunk), "zzyzx")))
    });

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_find_positions);
criterion_main!(benches);
