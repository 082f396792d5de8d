//! Benchmarks for rapid_textstats

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rapid_textstats::*;

/// Sample text for benchmarking
const SAMPLE_TEXT: &str = r#"
Machine learning is a subset of artificial intelligence (AI) that provides systems
the ability to automatically learn and improve from experience without being explicitly
programmed. Machine learning focuses on the development of computer programs that can
access data and use it to learn for themselves.

The process of learning begins with observations or data, such as examples, direct
experience, or instruction, in order to look for patterns in data and make better
decisions in the future based on the examples that we provide. The primary aim is to
allow the computers to learn automatically without human intervention or assistance
and adjust actions accordingly.

Deep learning is a subset of machine learning that uses artificial neural networks
with representation learning! Can it be supervised? It can… or not. 🚀
"#;

fn benchmark_tokenization(c: &mut Criterion) {
    let tokenizer = Tokenizer::new();

    c.bench_function("tokenize_sample", |b| {
        b.iter(|| tokenizer.tokenize(black_box(SAMPLE_TEXT)))
    });

    c.bench_function("count_words_sample", |b| {
        b.iter(|| tokenizer.count_words(black_box(SAMPLE_TEXT)))
    });
}

fn benchmark_metrics(c: &mut Criterion) {
    let config = Configuration::default();

    c.bench_function("metrics_sample", |b| {
        b.iter(|| compute_metrics(black_box(SAMPLE_TEXT), &config))
    });

    // Benchmark different document sizes
    let mut group = c.benchmark_group("metrics_by_size");
    for size in [1, 10, 50, 200].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| compute_metrics(black_box(text.as_str()), &config))
        });
    }
    group.finish();

    let markup = format!("<article><p>{}</p></article>", SAMPLE_TEXT.replace("\n\n", "</p><p>"));
    let stripping = Configuration::default().with_strip_tags(true);
    c.bench_function("metrics_strip_tags", |b| {
        b.iter(|| compute_metrics(black_box(markup.as_str()), &stripping))
    });
}

fn benchmark_frequencies(c: &mut Criterion) {
    let config = Configuration::default();

    c.bench_function("frequencies_sample", |b| {
        b.iter(|| compute_frequencies(black_box(SAMPLE_TEXT), &config))
    });

    let mut group = c.benchmark_group("frequencies_by_size");
    for size in [1, 10, 50, 200].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| compute_frequencies(black_box(text.as_str()), &config))
        });
    }
    group.finish();
}

fn benchmark_counting_sort(c: &mut Criterion) {
    let text = SAMPLE_TEXT.repeat(50);
    let table = word_frequencies(text.as_str(), &Configuration::default()).unwrap_or_default();

    let mut group = c.benchmark_group("counting_sort_limit");
    for limit in [1usize, 10, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(limit), limit, |b, &limit| {
            b.iter(|| counting_sort(black_box(&table), limit))
        });
    }
    group.finish();
}

fn benchmark_decode(c: &mut Criterion) {
    let units: Vec<u16> = SAMPLE_TEXT.repeat(20).encode_utf16().collect();

    c.bench_function("decode_utf16", |b| b.iter(|| decode(black_box(&units))));
    c.bench_function("code_point_len", |b| {
        b.iter(|| code_point_len(black_box(SAMPLE_TEXT)))
    });
}

fn benchmark_live_updates(c: &mut Criterion) {
    use std::rc::Rc;

    let buffer = Rc::new(TextBuffer::new(SAMPLE_TEXT));
    let mut registry = SubscriptionRegistry::new();
    let _ = registry.live(
        &buffer,
        |m| {
            black_box(m);
        },
        None,
    );
    let _ = registry.live_freq(
        &buffer,
        |f| {
            black_box(f);
        },
        None,
    );

    c.bench_function("live_edit", |b| {
        b.iter(|| buffer.set_text(black_box(SAMPLE_TEXT)))
    });
}

criterion_group!(
    benches,
    benchmark_tokenization,
    benchmark_metrics,
    benchmark_frequencies,
    benchmark_counting_sort,
    benchmark_decode,
    benchmark_live_updates,
);
criterion_main!(benches);
