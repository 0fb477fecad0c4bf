// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tart_edit::edit::AutoIndentStrategy;
use tart_edit::syntax::{Highlighter, Partitioning, sample_source, tokenize};
use tart_edit::{Document, EditorConfig};

const SIZES: [usize; 3] = [4 * 1024, 64 * 1024, 512 * 1024];

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    for size in SIZES {
        let document = Document::new(sample_source(size));
        group.throughput(Throughput::Bytes(document.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &document, |b, document| {
            b.iter(|| Partitioning::new(black_box(document)))
        });
    }
    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for size in SIZES {
        let document = Document::new(sample_source(size));
        let partitioning = Partitioning::new(&document);
        group.throughput(Throughput::Bytes(document.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &document, |b, document| {
            b.iter(|| {
                partitioning
                    .partitions()
                    .iter()
                    .map(|partition| tokenize(black_box(document), partition).count())
                    .sum::<usize>()
            })
        });
    }
    group.finish();
}

fn bench_highlight(c: &mut Criterion) {
    let document = Document::new(sample_source(64 * 1024));
    let partitioning = Partitioning::new(&document);
    let mut highlighter = Highlighter::new();
    // Roughly one screen of text.
    let viewport = 0..4096.min(document.len());
    c.bench_function("highlight/viewport", |b| {
        b.iter(|| highlighter.highlight(black_box(&document), &partitioning, viewport.clone()))
    });
}

fn bench_auto_indent(c: &mut Criterion) {
    let strategy = AutoIndentStrategy::new(EditorConfig::default());
    let document = Document::new(sample_source(64 * 1024));
    let newline_at = document.text().rfind('{').map_or(0, |offset| offset + 1);
    let brace_at = document.len();

    c.bench_function("auto_indent/newline", |b| {
        b.iter(|| strategy.on_insert_text(black_box(&document), newline_at, "\n"))
    });
    c.bench_function("auto_indent/close_brace", |b| {
        b.iter(|| strategy.on_insert_close_brace(black_box(&document), brace_at))
    });
}

criterion_group!(benches, bench_classify, bench_tokenize, bench_highlight, bench_auto_indent);
criterion_main!(benches);
