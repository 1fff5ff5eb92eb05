//! NEON Backend Implementation
//!
//! This module provides the NEON SIMD backend for ARM64 (aarch64) processors.
//! NEON uses 128-bit registers to process 4 f32 values simultaneously and is
//! part of the aarch64 baseline, so no runtime check is needed.

#![cfg(all(feature = "neon", target_arch = "aarch64"))]

use super::backend::SimdBackend;
use super::helpers::{process_binary, scale_aligned, scale_in_place_aligned};
use sdr_math::{math, scalar, NeonVector, ScalarVector};

/// NEON Backend (128-bit SIMD)
///
/// Zero-sized type that implements SIMD operations using `NeonVector`.
/// Processes 4 f32 values per iteration with scalar prefix and suffix.
#[derive(Copy, Clone, Debug)]
pub struct NeonBackend;

impl SimdBackend for NeonBackend {
    #[inline]
    fn name() -> &'static str {
        "neon"
    }

    #[inline]
    fn scale(input: &[f32], output: &mut [f32], factor: f32) {
        scale_aligned::<NeonVector>(input, output, factor)
    }

    #[inline]
    fn scale_in_place(buffer: &mut [f32], factor: f32) {
        scale_in_place_aligned::<NeonVector>(buffer, factor)
    }

    #[inline]
    fn atan2_fast(y: &[f32], x: &[f32], output: &mut [f32]) {
        process_binary::<NeonVector, _>(y, x, output, math::atan2_fast, scalar::atan2_fast)
    }

    #[inline]
    fn atan2_fast_alt(y: &[f32], x: &[f32], output: &mut [f32]) {
        process_binary::<NeonVector, _>(y, x, output, math::atan2_fast_alt, scalar::atan2_fast_alt)
    }

    #[inline]
    fn atan2_fast_pair(y: f32, x: f32) -> f32 {
        math::atan2_fast(ScalarVector(y), ScalarVector(x)).0
    }

    #[inline]
    fn atan2_fast_alt_pair(y: f32, x: f32) -> f32 {
        math::atan2_fast_alt(ScalarVector(y), ScalarVector(x)).0
    }
}
