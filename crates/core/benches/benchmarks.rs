//! Benchmarks for dateguess-core.
//!
//! Run with: `cargo bench -p dateguess-core`
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dateguess_core::{lexer, Guesser, Notation, ResolveConfig, TokenSequence};

/// Benchmark inputs representing common use cases.
struct BenchmarkInputs {
    /// ISO 8601 calendar date
    iso_date: &'static str,
    /// ISO 8601 date and full time with offset
    iso_full: &'static str,
    /// ISO 8601 basic format
    iso_basic: &'static str,
    /// Three small numbers (three templates)
    ambiguous: &'static str,
    /// Dotted date and dotted time (widest search)
    dotted: &'static str,
    /// Month name, 12-hour clock and zone
    named: &'static str,
    /// Rejected after a full search
    invalid: &'static str,
}

const INPUTS: BenchmarkInputs = BenchmarkInputs {
    iso_date: "2020-01-01",
    iso_full: "2013-02-08 09:30:26.123+07:00",
    iso_basic: "20130208T093026.123+07:00",
    ambiguous: "01/02/03",
    dotted: "01.02.03 10.00 PDT",
    named: "13-Jan-2020, 10:00 am IST",
    invalid: "99/99/2020",
};

/// Benchmark the full guess pipeline for various input types.
fn bench_guess(c: &mut Criterion) {
    let guesser = Guesser::new();

    let mut group = c.benchmark_group("guess");

    let inputs = [
        ("iso_date", INPUTS.iso_date),
        ("iso_full", INPUTS.iso_full),
        ("iso_basic", INPUTS.iso_basic),
        ("ambiguous", INPUTS.ambiguous),
        ("dotted", INPUTS.dotted),
        ("named", INPUTS.named),
        ("invalid", INPUTS.invalid),
    ];

    for (name, input) in inputs {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("input", name), &input, |b, input| {
            b.iter(|| guesser.guess(black_box(input), Notation::Default));
        });
    }

    group.finish();
}

/// Benchmark just the classification phase (no resolution).
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let inputs = [
        ("iso_full", INPUTS.iso_full),
        ("dotted", INPUTS.dotted),
        ("named", INPUTS.named),
    ];

    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::new("lexer", name), &input, |b, input| {
            b.iter(|| lexer::classify(black_box(input)));
        });
        group.bench_with_input(BenchmarkId::new("sequence", name), &input, |b, input| {
            b.iter(|| TokenSequence::build(black_box(input)));
        });
    }

    group.finish();
}

/// Benchmark rendering in each notation.
fn bench_notation(c: &mut Criterion) {
    let guesser = Guesser::new();

    let mut group = c.benchmark_group("notation");

    for notation in Notation::ALL {
        group.bench_with_input(
            BenchmarkId::new("ambiguous", notation),
            &notation,
            |b, notation| {
                b.iter(|| guesser.guess(black_box(INPUTS.ambiguous), *notation));
            },
        );
    }

    group.finish();
}

/// Benchmark strict against lenient calendar checks.
fn bench_calendar_check(c: &mut Criterion) {
    let strict = Guesser::new();
    let lenient = Guesser::with_config(ResolveConfig::lenient());

    let mut group = c.benchmark_group("calendar_check");

    group.bench_function("strict", |b| {
        b.iter(|| strict.templates(black_box(INPUTS.ambiguous)));
    });
    group.bench_function("lenient", |b| {
        b.iter(|| lenient.templates(black_box(INPUTS.ambiguous)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_guess,
    bench_classify,
    bench_notation,
    bench_calendar_check,
);

criterion_main!(benches);
