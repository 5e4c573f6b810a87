//! Layout engine micro-benchmarks
//!
//! Measures line-breaking throughput for various paragraph shapes and
//! budget pressures.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kumihan::{
    FixedMetrics, JapaneseRule, LayoutConfig, LayoutEngine, RunInstruction, StyleModifier,
};
use std::sync::Arc;

fn bench_engine() -> LayoutEngine {
    LayoutEngine::new(Arc::new(JapaneseRule), Arc::new(FixedMetrics)).with_config(LayoutConfig {
        base_font_size: 10.0,
        ..Default::default()
    })
}

/// Plain Japanese prose with sentence punctuation.
fn japanese_prose(sentences: usize) -> Vec<RunInstruction> {
    let sentence = "吾輩は猫である、名前はまだ無い。";
    vec![RunInstruction::text(sentence.repeat(sentences))]
}

/// Mixed-script paragraph with spans and ruby annotations.
fn mixed_stream(repeats: usize) -> Vec<RunInstruction> {
    let mut stream = Vec::new();
    for _ in 0..repeats {
        stream.push(RunInstruction::text("これは mixed テキスト "));
        stream.push(RunInstruction::PushStyle(StyleModifier::span()));
        stream.push(RunInstruction::text("強調された範囲"));
        stream.push(RunInstruction::PopStyle);
        stream.push(RunInstruction::Ruby {
            base: "振仮名".to_string(),
            text: "ふりがな".to_string(),
        });
        stream.push(RunInstruction::text("の 続き です。"));
    }
    stream
}

/// Punctuation-dense text that forces half-width restarts.
fn squeeze_stream(repeats: usize) -> Vec<RunInstruction> {
    vec![RunInstruction::text("「はい。」「いいえ、」".repeat(repeats))]
}

fn bench_plain_prose(c: &mut Criterion) {
    let engine = bench_engine();
    let mut group = c.benchmark_group("plain_prose");
    for sentences in [10, 100, 500] {
        let stream = japanese_prose(sentences);
        group.bench_with_input(
            BenchmarkId::from_parameter(sentences),
            &stream,
            |b, stream| b.iter(|| engine.layout(stream, 240.0, None).unwrap()),
        );
    }
    group.finish();
}

fn bench_mixed_content(c: &mut Criterion) {
    let engine = bench_engine();
    let mut group = c.benchmark_group("mixed_content");
    for repeats in [10, 50] {
        let stream = mixed_stream(repeats);
        group.bench_with_input(
            BenchmarkId::from_parameter(repeats),
            &stream,
            |b, stream| b.iter(|| engine.layout(stream, 240.0, None).unwrap()),
        );
    }
    group.finish();
}

fn bench_half_width_restarts(c: &mut Criterion) {
    let engine = bench_engine();
    let mut group = c.benchmark_group("half_width_restarts");
    for repeats in [5, 25] {
        let stream = squeeze_stream(repeats);
        group.bench_with_input(
            BenchmarkId::from_parameter(repeats),
            &stream,
            |b, stream| b.iter(|| engine.layout(stream, 240.0, None).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_plain_prose,
    bench_mixed_content,
    bench_half_width_restarts
);
criterion_main!(benches);
