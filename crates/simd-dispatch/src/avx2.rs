//! AVX2 Backend Implementation
//!
//! This module provides the AVX2 SIMD backend for x86_64 processors with AVX2 support.
//! AVX2 uses 256-bit registers to process 8 f32 values simultaneously.
//!
//! # Requirements
//! - x86/x86_64 architecture
//! - AVX2 CPU support (Intel Haswell 2013+, AMD Excavator 2015+)
//! - Compiled with `avx2` feature flag
//!
//! # Implementation Strategy
//!
//! Each operation instantiates a generic helper from `super::helpers` with
//! `Avx2Vector` inside a `#[target_feature(enable = "avx2")]` function, so
//! the vector methods inline into AVX2 code even when the crate is built
//! for baseline x86_64.
//!
//! # Safety
//! The `target_feature` functions are only entered after `CpuFeatures`
//! reports AVX2. On a CPU without it every operation runs the scalar
//! reference instead, which produces the same bits.

#![cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]

use super::backend::SimdBackend;
use super::dispatcher::CpuFeatures;
use super::helpers::{process_binary, scale_aligned, scale_in_place_aligned};
use super::scalar::ScalarBackend;
use sdr_math::{math, scalar, Avx2Vector, ScalarVector};

/// AVX2 Backend (256-bit SIMD)
///
/// Zero-sized type that implements SIMD operations using `Avx2Vector`.
/// Processes 8 f32 values per iteration with scalar prefix and suffix.
///
/// # Performance
/// - Processes 8 samples per iteration (256-bit / 32-bit)
/// - Aligned loads/stores in `scale` when both buffers share alignment
/// - Requires AVX2 CPU support
#[derive(Copy, Clone, Debug)]
pub struct Avx2Backend;

#[inline(always)]
fn avx2_supported() -> bool {
    CpuFeatures::detect().has_avx2
}

impl SimdBackend for Avx2Backend {
    #[inline]
    fn name() -> &'static str {
        "avx2"
    }

    #[inline]
    fn scale(input: &[f32], output: &mut [f32], factor: f32) {
        if avx2_supported() {
            // SAFETY: AVX2 support was just checked
            unsafe { scale_avx2(input, output, factor) }
        } else {
            ScalarBackend::scale(input, output, factor)
        }
    }

    #[inline]
    fn scale_in_place(buffer: &mut [f32], factor: f32) {
        if avx2_supported() {
            // SAFETY: AVX2 support was just checked
            unsafe { scale_in_place_avx2(buffer, factor) }
        } else {
            ScalarBackend::scale_in_place(buffer, factor)
        }
    }

    #[inline]
    fn atan2_fast(y: &[f32], x: &[f32], output: &mut [f32]) {
        if avx2_supported() {
            // SAFETY: AVX2 support was just checked
            unsafe { atan2_fast_avx2(y, x, output) }
        } else {
            ScalarBackend::atan2_fast(y, x, output)
        }
    }

    #[inline]
    fn atan2_fast_alt(y: &[f32], x: &[f32], output: &mut [f32]) {
        if avx2_supported() {
            // SAFETY: AVX2 support was just checked
            unsafe { atan2_fast_alt_avx2(y, x, output) }
        } else {
            ScalarBackend::atan2_fast_alt(y, x, output)
        }
    }

    // A single pair fills one lane; the branchless kernel on a scalar lane
    // avoids the 8-lane setup.
    #[inline]
    fn atan2_fast_pair(y: f32, x: f32) -> f32 {
        math::atan2_fast(ScalarVector(y), ScalarVector(x)).0
    }

    #[inline]
    fn atan2_fast_alt_pair(y: f32, x: f32) -> f32 {
        math::atan2_fast_alt(ScalarVector(y), ScalarVector(x)).0
    }
}

#[target_feature(enable = "avx2")]
unsafe fn scale_avx2(input: &[f32], output: &mut [f32], factor: f32) {
    scale_aligned::<Avx2Vector>(input, output, factor)
}

#[target_feature(enable = "avx2")]
unsafe fn scale_in_place_avx2(buffer: &mut [f32], factor: f32) {
    scale_in_place_aligned::<Avx2Vector>(buffer, factor)
}

#[target_feature(enable = "avx2")]
unsafe fn atan2_fast_avx2(y: &[f32], x: &[f32], output: &mut [f32]) {
    process_binary::<Avx2Vector, _>(y, x, output, math::atan2_fast, scalar::atan2_fast)
}

#[target_feature(enable = "avx2")]
unsafe fn atan2_fast_alt_avx2(y: &[f32], x: &[f32], output: &mut [f32]) {
    process_binary::<Avx2Vector, _>(y, x, output, math::atan2_fast_alt, scalar::atan2_fast_alt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(align(32))]
    struct Aligned([f32; 40]);

    #[test]
    fn test_avx2_scale_matches_reference_at_every_offset() {
        let mut input = Aligned([0.0; 40]);
        for (i, v) in input.0.iter_mut().enumerate() {
            *v = i as f32 * 1.5 - 7.0;
        }

        for offset in 0..8 {
            let src = &input.0[offset..offset + 30];
            let mut expected = [0.0; 30];
            scalar::scale(src, &mut expected, 0.1);

            let mut output = Aligned([0.0; 40]);
            Avx2Backend::scale(src, &mut output.0[offset..offset + 30], 0.1);

            for i in 0..30 {
                assert_eq!(
                    output.0[offset + i].to_bits(),
                    expected[i].to_bits(),
                    "offset {} index {}",
                    offset,
                    i
                );
            }
        }
    }

    #[test]
    fn test_avx2_atan2_matches_reference() {
        let y: [f32; 11] = [0.0, 0.1, -0.2, 0.3, -0.4, 0.5, -0.6, 0.7, -0.8, 0.9, -1.0];
        let x: [f32; 11] = [0.0, -1.0, 0.9, -0.8, 0.7, -0.6, 0.5, -0.4, 0.3, -0.2, 0.1];
        let mut fast = [0.0; 11];
        let mut alt = [0.0; 11];

        Avx2Backend::atan2_fast(&y, &x, &mut fast);
        Avx2Backend::atan2_fast_alt(&y, &x, &mut alt);

        for i in 0..11 {
            assert_eq!(fast[i].to_bits(), scalar::atan2_fast(y[i], x[i]).to_bits());
            assert_eq!(alt[i].to_bits(), scalar::atan2_fast_alt(y[i], x[i]).to_bits());
        }
    }
}
