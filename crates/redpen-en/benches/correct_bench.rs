// Criterion benchmarks for redpen-en.
//
// Everything runs against small in-memory word lists; no external
// files are required.
//
// Run:
//   cargo bench -p redpen-en

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use redpen_core::enums::CorrectMode;
use redpen_en::policy::Silent;
use redpen_en::session::{CorrectorSession, SessionOptions};
use redpen_en::speller::LevenshteinEngine;
use redpen_en::stemmer;
use redpen_en::tokenizer;
use redpen_en::wordstore::WordStore;

/// Words for the custom word list.
const WORD_LIST: &[&str] = &[
    "the", "quick", "brown", "fox", "jump", "over", "lazy", "dog", "and", "run", "through",
    "field", "while", "bird", "watch", "from", "tree",
];

/// Words for the engine lexicon.
const LEXICON: &[&str] = &[
    "amble", "branch", "breeze", "canter", "chase", "cloud", "dart", "evening", "feather",
    "gallop", "gleam", "hedge", "hollow", "meadow", "morning", "pounce", "ripple", "scamper",
    "shadow", "stream", "thicket", "twilight", "whisker", "wander",
];

/// A paragraph with a few misspellings mixed in.
const PARAGRAPH: &str =
    "The quick brown fox jumps over the lazy dog, then wanders through the meaddow \
     while birds watch from the trees. In the eveing it chases shadows by the streem.";

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_paragraph", |b| {
        b.iter(|| {
            for word in PARAGRAPH.split_whitespace() {
                black_box(tokenizer::split(black_box(word)));
            }
        })
    });
}

fn bench_stem(c: &mut Criterion) {
    let words: Vec<&str> = PARAGRAPH
        .split_whitespace()
        .chain(WORD_LIST.iter().copied())
        .collect();
    c.bench_function("stem_words", |b| {
        b.iter(|| {
            for word in &words {
                black_box(stemmer::stem(black_box(word)));
            }
        })
    });
}

fn bench_correct_line(c: &mut Criterion) {
    let session = CorrectorSession::new(
        WordStore::from_lines(WORD_LIST.iter().copied()),
        Box::new(LevenshteinEngine::from_terms(
            WORD_LIST.iter().chain(LEXICON.iter()).copied(),
        )),
        SessionOptions {
            mode: CorrectMode::Auto,
        },
    );

    c.bench_function("correct_paragraph_auto", |b| {
        b.iter(|| {
            let line = session.correct_line(black_box(PARAGRAPH), &mut Silent);
            black_box(line);
        })
    });
}

criterion_group!(benches, bench_tokenize, bench_stem, bench_correct_line);
criterion_main!(benches);
