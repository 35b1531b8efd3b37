// Criterion benchmarks for fuzzyspell-engine.
//
// The dictionary is generated so the benchmarks run without external data.
// Set FUZZYSPELL_BENCH_DICT to a word list file to benchmark a real one
// instead.
//
// Run:
//   cargo bench -p fuzzyspell-engine
//   FUZZYSPELL_BENCH_DICT=/usr/share/dict/words cargo bench -p fuzzyspell-engine

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fuzzyspell_engine::{CapPolicy, DistanceTable, Speller, SpellerOptions, distance};

// ---------------------------------------------------------------------------
// Dictionary setup
// ---------------------------------------------------------------------------

/// Deterministic pseudo-words of 3 to 12 letters.
fn synthetic_words(count: usize) -> Vec<String> {
    let mut state: u32 = 0x9E37_79B9;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    (0..count)
        .map(|_| {
            let len = 3 + (next() % 10) as usize;
            (0..len)
                .map(|_| (b'a' + (next() % 26) as u8) as char)
                .collect()
        })
        .collect()
}

fn load_speller(options: SpellerOptions) -> Speller {
    let mut speller = Speller::with_options(options);
    if let Ok(path) = std::env::var("FUZZYSPELL_BENCH_DICT") {
        if speller.load_path(&path).is_ok() {
            return speller;
        }
        eprintln!("[bench] cannot load {path}, falling back to synthetic words");
    }
    speller
        .load_lines(synthetic_words(50_000))
        .expect("synthetic dictionary");
    speller
}

const QUERIES: &[&str] = &["nayway", "recieve", "definately", "teh", "speling", "wether"];

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");
    for (a, b) in [("nayway", "anyway"), ("kitten", "sitting"), ("definately", "definitely")] {
        group.bench_with_input(BenchmarkId::new("fresh_table", a), &(a, b), |bench, (a, b)| {
            bench.iter(|| distance(black_box(a), black_box(b)));
        });
        let mut table = DistanceTable::new();
        group.bench_with_input(BenchmarkId::new("reused_table", a), &(a, b), |bench, (a, b)| {
            bench.iter(|| table.distance(black_box(a), black_box(b)));
        });
    }
    group.finish();
}

fn bench_is_correct(c: &mut Criterion) {
    let speller = load_speller(SpellerOptions::default());
    c.bench_function("is_correct", |b| {
        b.iter(|| {
            for word in QUERIES {
                black_box(speller.is_correct(word));
            }
        });
    });
}

fn bench_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest");
    for policy in [CapPolicy::FirstFound, CapPolicy::BestN] {
        let speller = load_speller(SpellerOptions {
            max_suggestions: 10,
            cap_policy: policy,
            ..SpellerOptions::default()
        });
        group.bench_function(format!("{policy:?}"), |b| {
            b.iter(|| {
                for word in QUERIES {
                    black_box(speller.suggest(word, 2, 2).ok());
                }
            });
        });
    }
    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let words = synthetic_words(50_000);
    c.bench_function("load_50k_lines", |b| {
        b.iter(|| {
            let mut speller = Speller::new();
            black_box(speller.load_lines(&words).ok());
        });
    });
}

criterion_group!(
    benches,
    bench_distance,
    bench_is_correct,
    bench_suggest,
    bench_load,
);
criterion_main!(benches);
