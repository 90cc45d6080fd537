//! Benchmarks comparing checked span access against plain slices.
//!
//! Every span operation validates its input before touching memory. These benches
//! measure what that costs relative to the slice equivalents:
//! - indexed reads (`span[i]` vs `slice[i]`)
//! - iteration (cursor-driven `Iter` vs `slice::Iter`)
//! - sub-view construction (`subspan` vs range indexing)
//! - byte reinterpretation
//!
//! Run with: cargo bench

use checked_span::{as_bytes, RandomAccessCursor, Span, SpanMut};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

/// Buffer lengths to benchmark
const LENGTHS: &[usize] = &[64, 4096, 262_144];

fn buffer(len: usize) -> Vec<u64> {
    (0..len as u64).map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15)).collect()
}

// ============================================================================
// ELEMENT ACCESS
// ============================================================================

fn bench_indexed_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_reads");

    for &len in LENGTHS {
        let data = buffer(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("slice", len), &data, |b, data| {
            let slice = data.as_slice();
            b.iter(|| {
                let mut acc = 0u64;
                for i in 0..slice.len() {
                    acc = acc.wrapping_add(slice[black_box(i)]);
                }
                acc
            });
        });

        group.bench_with_input(BenchmarkId::new("span", len), &data, |b, data| {
            let span = Span::from_slice(data);
            b.iter(|| {
                let mut acc = 0u64;
                for i in 0..span.len() {
                    acc = acc.wrapping_add(span[black_box(i)]);
                }
                acc
            });
        });

        group.bench_with_input(BenchmarkId::new("span_at", len), &data, |b, data| {
            let span = Span::from_slice(data);
            b.iter(|| {
                let mut acc = 0u64;
                for i in 0..span.len() as isize {
                    acc = acc.wrapping_add(*span.at(black_box(i)));
                }
                acc
            });
        });
    }

    group.finish();
}

// ============================================================================
// ITERATION
// ============================================================================

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for &len in LENGTHS {
        let data = buffer(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("slice_iter", len), &data, |b, data| {
            b.iter(|| black_box(data.as_slice()).iter().copied().fold(0u64, u64::wrapping_add));
        });

        group.bench_with_input(BenchmarkId::new("span_iter", len), &data, |b, data| {
            let span = Span::from_slice(data);
            b.iter(|| black_box(span).iter().copied().fold(0u64, u64::wrapping_add));
        });

        group.bench_with_input(BenchmarkId::new("reverse_cursor", len), &data, |b, data| {
            let span = Span::from_slice(data);
            b.iter(|| {
                let mut acc = 0u64;
                let mut cursor = span.rbegin();
                let end = span.rend();
                while cursor != end {
                    acc = acc.wrapping_add(*cursor.get());
                    cursor.advance();
                }
                acc
            });
        });

        group.bench_with_input(BenchmarkId::new("span_iter_mut", len), &data, |b, data| {
            let mut owned = data.clone();
            b.iter(|| {
                let mut span = SpanMut::from_slice(&mut owned);
                for v in span.iter_mut() {
                    *v = v.rotate_left(1);
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// SUB-VIEWS
// ============================================================================

fn bench_subviews(c: &mut Criterion) {
    let mut group = c.benchmark_group("subviews");
    let data = buffer(4096);

    group.bench_function("slice_range", |b| {
        let slice = data.as_slice();
        b.iter(|| {
            let mut total = 0usize;
            for offset in 0..1024 {
                total += slice[black_box(offset)..black_box(offset + 64)].len();
            }
            total
        });
    });

    group.bench_function("span_subspan", |b| {
        let span = Span::from_slice(&data);
        b.iter(|| {
            let mut total = 0usize;
            for offset in 0..1024 {
                total += span.subspan(black_box(offset), black_box(64)).len();
            }
            total
        });
    });

    group.bench_function("span_first_last", |b| {
        let span = Span::from_slice(&data);
        b.iter(|| {
            let mut total = 0usize;
            for count in 0..1024 {
                total += span.first(black_box(count)).last(black_box(count / 2)).len();
            }
            total
        });
    });

    group.bench_function("span_first_const", |b| {
        let span = Span::from_slice(&data);
        b.iter(|| black_box(span).first_const::<64>().iter().copied().fold(0, u64::wrapping_add));
    });

    group.finish();
}

// ============================================================================
// BYTE VIEWS
// ============================================================================

fn bench_byte_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("byte_views");

    for &len in LENGTHS {
        let data = buffer(len);
        group.throughput(Throughput::Bytes((len * std::mem::size_of::<u64>()) as u64));

        group.bench_with_input(BenchmarkId::new("xor_bytes", len), &data, |b, data| {
            let span = Span::from_slice(data);
            b.iter(|| {
                as_bytes(black_box(span))
                    .iter()
                    .fold(0u8, |acc, byte| acc ^ byte.to_u8())
            });
        });
    }

    group.finish();
}

// ============================================================================
// CRITERION CONFIGURATION
// ============================================================================

/// Configure Criterion for tight confidence intervals:
/// - 99% confidence level (vs default 95%)
/// - 100 samples
/// - 3s measurement time
/// - 1% significance level (vs default 5%)
fn tight_confidence() -> Criterion {
    Criterion::default()
        .confidence_level(0.99)
        .sample_size(100)
        .measurement_time(Duration::from_secs(3))
        .warm_up_time(Duration::from_secs(1))
        .significance_level(0.01)
        .noise_threshold(0.02) // Only report changes > 2%
}

// ============================================================================
// CRITERION GROUPS
// ============================================================================

criterion_group!(
    name = benches;
    config = tight_confidence();
    targets =
    bench_indexed_reads,
    bench_iteration,
    bench_subviews,
    bench_byte_views,
);

criterion_main!(benches);
