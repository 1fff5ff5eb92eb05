//! Criterion benchmarks for sdr-simd-dispatch
//!
//! Compares the scalar references against the dispatched backends.
//! Run with: cargo bench --bench criterion_benches

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sdr_simd_dispatch::complex::{conj, conj_in_place, Complex32};
use sdr_simd_dispatch::{reference, BackendType, SimdContext};
use std::hint::black_box;

const SIZES: [usize; 3] = [64, 1024, 16384];

fn iq_buffers(len: usize) -> (Vec<f32>, Vec<f32>) {
    let y = (0..len).map(|n| ((n * 37) % 200) as f32 / 100.0 - 1.0).collect();
    let x = (0..len).map(|n| ((n * 53) % 200) as f32 / 100.0 - 1.0).collect();
    (y, x)
}

fn contexts() -> Vec<SimdContext> {
    [BackendType::Scalar, BackendType::Avx2, BackendType::Neon]
        .iter()
        .filter_map(|&backend| SimdContext::with_backend(backend))
        .collect()
}

/// Benchmark a single atan2 evaluation
fn bench_atan2_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("atan2_pair");

    group.bench_function("reference_fast", |bencher| {
        bencher.iter(|| reference::atan2_fast(black_box(0.3), black_box(-0.7)))
    });
    group.bench_function("reference_fast_alt", |bencher| {
        bencher.iter(|| reference::atan2_fast_alt(black_box(0.3), black_box(-0.7)))
    });
    group.bench_function("dispatched_fast", |bencher| {
        bencher.iter(|| sdr_simd_dispatch::atan2_fast(black_box(0.3), black_box(-0.7)))
    });
    group.bench_function("dispatched_fast_alt", |bencher| {
        bencher.iter(|| sdr_simd_dispatch::atan2_fast_alt(black_box(0.3), black_box(-0.7)))
    });
    group.bench_function("libm", |bencher| {
        bencher.iter(|| libm::atan2f(black_box(0.3), black_box(-0.7)))
    });

    group.finish();
}

/// Benchmark atan2 over slices on every available backend
fn bench_atan2_slices(c: &mut Criterion) {
    let mut group = c.benchmark_group("atan2_slices");

    for &size in &SIZES {
        let (y, x) = iq_buffers(size);
        let mut output = vec![0.0f32; size];
        group.throughput(Throughput::Elements(size as u64));

        for ctx in contexts() {
            group.bench_with_input(
                BenchmarkId::new(format!("fast/{}", ctx.backend_name()), size),
                &size,
                |bencher, _| bencher.iter(|| ctx.atan2_fast(black_box(&y), black_box(&x), &mut output)),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("fast_alt/{}", ctx.backend_name()), size),
                &size,
                |bencher, _| {
                    bencher.iter(|| ctx.atan2_fast_alt(black_box(&y), black_box(&x), &mut output))
                },
            );
        }
    }

    group.finish();
}

/// Benchmark scaling, aligned and offset by one sample
fn bench_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale");

    for &size in &SIZES {
        let input: Vec<f32> = (0..size + 1).map(|n| (n % 256) as f32).collect();
        let mut output = vec![0.0f32; size + 1];
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("reference", size), &size, |bencher, &size| {
            bencher.iter(|| {
                reference::scale(black_box(&input[..size]), &mut output[..size], 1.0 / 256.0)
            })
        });

        for ctx in contexts() {
            group.bench_with_input(
                BenchmarkId::new(ctx.backend_name(), size),
                &size,
                |bencher, &size| {
                    bencher.iter(|| ctx.scale(black_box(&input[..size]), &mut output[..size], 1.0 / 256.0))
                },
            );
            group.bench_with_input(
                BenchmarkId::new(format!("{}/offset", ctx.backend_name()), size),
                &size,
                |bencher, _| {
                    bencher.iter(|| ctx.scale(black_box(&input[1..]), &mut output[1..], 1.0 / 256.0))
                },
            );
        }
    }

    group.finish();
}

/// Benchmark complex conjugation
fn bench_conj(c: &mut Criterion) {
    let mut group = c.benchmark_group("conj");

    group.bench_function("single", |bencher| {
        bencher.iter(|| conj(black_box(Complex32::new(1.0, -0.2))))
    });

    let mut buffer: Vec<Complex32> = (0..1024).map(|n| Complex32::new(n as f32, -(n as f32))).collect();
    group.throughput(Throughput::Elements(buffer.len() as u64));
    group.bench_function("in_place_1024", |bencher| {
        bencher.iter(|| conj_in_place(black_box(&mut buffer)))
    });

    group.finish();
}

criterion_group!(benches, bench_atan2_pair, bench_atan2_slices, bench_scale, bench_conj);
criterion_main!(benches);
