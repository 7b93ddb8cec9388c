//! Benchmarks for cardcheck.
//!
//! Run with: cargo bench

use cardcheck::{
    batch::{count_valid, summarize},
    check,
    detect::detect_brand,
    identify_brand, inspect, luhn,
    stream::InspectExt,
    validate,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const VISA_16: &str = "4539148803436467";
const VISA_SPACED: &str = "4539 1488 0343 6467";
const DISCOVER_622: &str = "6221260000000000";
const AMEX: &str = "371449635398431";
const INVALID_CHAR: &str = "abcd efgh";

const VISA_DIGITS: [u8; 16] = [4, 5, 3, 9, 1, 4, 8, 8, 0, 3, 4, 3, 6, 4, 6, 7];

/// Benchmark the boolean validator
fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    group.bench_function("visa_16_raw", |b| b.iter(|| validate(black_box(VISA_16))));

    group.bench_function("visa_16_spaced", |b| {
        b.iter(|| validate(black_box(VISA_SPACED)))
    });

    group.bench_function("amex_15", |b| b.iter(|| validate(black_box(AMEX))));

    group.bench_function("early_reject", |b| {
        b.iter(|| validate(black_box(INVALID_CHAR)))
    });

    group.bench_function("check_with_reason", |b| b.iter(|| check(black_box(VISA_16))));

    group.finish();
}

/// Benchmark the brand table
fn bench_identify(c: &mut Criterion) {
    let mut group = c.benchmark_group("identify");

    // Visa is the first rule, the 622 Discover range is near the end
    group.bench_function("first_rule", |b| b.iter(|| detect_brand(black_box(VISA_16))));

    group.bench_function("late_rule", |b| {
        b.iter(|| detect_brand(black_box(DISCOVER_622)))
    });

    group.bench_function("identify_spaced", |b| {
        b.iter(|| identify_brand(black_box(VISA_SPACED)))
    });

    group.bench_function("inspect", |b| b.iter(|| inspect(black_box(VISA_SPACED))));

    group.finish();
}

/// Benchmark Luhn on digit values
fn bench_luhn(c: &mut Criterion) {
    let mut group = c.benchmark_group("luhn");

    group.bench_function("luhn_16", |b| b.iter(|| luhn::validate(black_box(&VISA_DIGITS))));

    group.bench_function("check_digit_15", |b| {
        b.iter(|| luhn::generate_check_digit(black_box(&VISA_DIGITS[..15])))
    });

    group.finish();
}

/// Benchmark batch and stream helpers with various sizes
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for size in [10, 100, 1000, 10000].iter() {
        let cards: Vec<&str> = (0..*size)
            .map(|i| match i % 4 {
                0 => VISA_16,
                1 => VISA_SPACED,
                2 => AMEX,
                _ => INVALID_CHAR,
            })
            .collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("summarize", size), &cards, |b, cards| {
            b.iter(|| summarize(black_box(cards)))
        });

        group.bench_with_input(BenchmarkId::new("count_valid", size), &cards, |b, cards| {
            b.iter(|| count_valid(black_box(cards)))
        });

        group.bench_with_input(BenchmarkId::new("stream", size), &cards, |b, cards| {
            b.iter(|| cards.iter().valid_cards().count())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validate, bench_identify, bench_luhn, bench_batch);

criterion_main!(benches);
