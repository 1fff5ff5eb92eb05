//! Scalar Backend Implementation
//!
//! This module provides the scalar (non-SIMD) fallback backend. It forwards
//! to the references in `sdr_math::scalar`, which every other backend is
//! tested against. Always available.

use super::backend::SimdBackend;
use sdr_math::scalar;

/// Scalar Backend (No SIMD)
///
/// Zero-sized type that implements every operation one sample at a time.
/// Always available as fallback when no SIMD instructions are supported.
///
/// # Performance
/// - Baseline: 1.0x (reference performance)
/// - Processes 1 sample per iteration
/// - No alignment requirements
#[derive(Copy, Clone, Debug)]
pub struct ScalarBackend;

impl SimdBackend for ScalarBackend {
    #[inline]
    fn name() -> &'static str {
        "scalar"
    }

    #[inline]
    fn scale(input: &[f32], output: &mut [f32], factor: f32) {
        scalar::scale(input, output, factor)
    }

    #[inline]
    fn scale_in_place(buffer: &mut [f32], factor: f32) {
        scalar::scale_in_place(buffer, factor)
    }

    #[inline]
    fn atan2_fast(y: &[f32], x: &[f32], output: &mut [f32]) {
        assert_eq!(y.len(), x.len(), "Input slices must have the same length");
        assert_eq!(
            y.len(),
            output.len(),
            "Input and output slices must have the same length"
        );

        for ((out, &y_i), &x_i) in output.iter_mut().zip(y).zip(x) {
            *out = scalar::atan2_fast(y_i, x_i);
        }
    }

    #[inline]
    fn atan2_fast_alt(y: &[f32], x: &[f32], output: &mut [f32]) {
        assert_eq!(y.len(), x.len(), "Input slices must have the same length");
        assert_eq!(
            y.len(),
            output.len(),
            "Input and output slices must have the same length"
        );

        for ((out, &y_i), &x_i) in output.iter_mut().zip(y).zip(x) {
            *out = scalar::atan2_fast_alt(y_i, x_i);
        }
    }

    #[inline]
    fn atan2_fast_pair(y: f32, x: f32) -> f32 {
        scalar::atan2_fast(y, x)
    }

    #[inline]
    fn atan2_fast_alt_pair(y: f32, x: f32) -> f32 {
        scalar::atan2_fast_alt(y, x)
    }
}
