//! Benchmarks for unpaste correction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks exercise the full pipeline over synthetic pasted text at
//! various sizes, plus the dictionary-guided word repair pass on its own.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use unpaste::{correct, Corrector, Dictionary};

fn test_dictionary() -> Dictionary {
    Dictionary::from_words([
        "a", "an", "and", "argument", "body", "claim", "comes", "evidence", "example", "final",
        "footnote", "for", "from", "in", "is", "it", "line", "next", "of", "offered", "one",
        "paragraph", "sentence", "supports", "text", "that", "the", "this", "with", "wrapped",
    ])
}

/// Builds pasted-looking text with the usual artifacts: hard wraps,
/// hyphenated wraps, a bare endnote number, and spaced parentheses.
fn create_pasted_text(paragraph_count: usize) -> String {
    let mut text = String::from("THE OPENING LINE OF THE TEXT\n");
    for i in 0..paragraph_count {
        text.push_str(&format!(
            "This sentence comes from para-\ngraph {i} and it is wrapped\nacross lines,3 with a foot note\nnumber in the body ( like this ).\n"
        ));
    }
    text
}

/// Benchmark the full pipeline at various input sizes.
fn bench_correct(c: &mut Criterion) {
    let mut group = c.benchmark_group("correct");
    let dictionary = test_dictionary();

    for para_count in [1, 10, 100, 500].iter() {
        let text = create_pasted_text(*para_count);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("paragraphs", para_count),
            &text,
            |b, text| {
                b.iter(|| correct(black_box(text), &dictionary));
            },
        );
    }

    group.finish();
}

/// Benchmark the corrector on already-clean prose, where every stage is a
/// no-op pass over the text.
fn bench_clean_input(c: &mut Criterion) {
    let corrector = Corrector::new(test_dictionary());
    let clean = correct(&create_pasted_text(100), corrector.dictionary());

    c.bench_function("correct_clean_input", |b| {
        b.iter(|| corrector.correct(black_box(&clean)));
    });
}

criterion_group!(benches, bench_correct, bench_clean_input);
criterion_main!(benches);
