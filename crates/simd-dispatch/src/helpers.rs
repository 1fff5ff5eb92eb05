//! Generic helper functions for bridging slice-based backend operations to vector-based kernels
//!
//! This module provides the chunking logic shared by every backend, so each
//! backend is a thin instantiation over its vector type.

use sdr_math::SimdVector;

/// Process a binary operation on slices using a SIMD vector kernel
///
/// Full vectors are loaded unaligned; remainder samples go through
/// `scalar_fallback`. The kernel and fallback must agree lane for lane for
/// the output to be independent of slice length.
///
/// # Type Parameters
///
/// - `V`: The SIMD vector type
/// - `F`: The kernel function type (e.g., `fn(V, V) -> V`)
///
/// # Example
///
/// ```rust
/// use sdr_simd_dispatch::helpers::process_binary;
/// use sdr_simd_dispatch::{math, reference, ScalarVector};
///
/// let y = [0.0, 1.0, -1.0];
/// let x = [1.0, 0.0, 0.0];
/// let mut phase = [0.0; 3];
/// process_binary::<ScalarVector<f32>, _>(
///     &y,
///     &x,
///     &mut phase,
///     math::atan2_fast,
///     reference::atan2_fast,
/// );
/// ```
#[inline(always)]
pub fn process_binary<V, F>(
    a: &[f32],
    b: &[f32],
    output: &mut [f32],
    kernel: F,
    scalar_fallback: fn(f32, f32) -> f32,
) where
    V: SimdVector<Scalar = f32>,
    F: Fn(V, V) -> V,
{
    assert_eq!(a.len(), b.len(), "Input slices must have the same length");
    assert_eq!(
        a.len(),
        output.len(),
        "Input and output slices must have the same length"
    );

    let lanes = V::LANES;
    let len = a.len();

    let chunks = len / lanes;
    let remainder = len % lanes;

    for i in 0..chunks {
        let start = i * lanes;
        let end = start + lanes;

        let vec_a = V::from_slice(&a[start..end]);
        let vec_b = V::from_slice(&b[start..end]);

        kernel(vec_a, vec_b).to_slice(&mut output[start..end]);
    }

    let remainder_start = chunks * lanes;
    for i in 0..remainder {
        output[remainder_start + i] =
            scalar_fallback(a[remainder_start + i], b[remainder_start + i]);
    }
}

/// Scale `input` into `output` with aligned vector loads and stores
///
/// Three phases:
/// 1. Scalar prefix until both pointers reach `V::ALIGN`
/// 2. Aligned vector body while a full vector remains
/// 3. Scalar suffix
///
/// When `input` and `output` are misaligned by different amounts no common
/// prefix aligns both, and the whole call runs the scalar loop. Every path
/// performs one IEEE multiply per sample, so output is bit-identical to
/// `sdr_math::scalar::scale`.
///
/// # Panics
///
/// Panics if `input` and `output` have different lengths.
#[inline(always)]
pub fn scale_aligned<V>(input: &[f32], output: &mut [f32], factor: f32)
where
    V: SimdVector<Scalar = f32>,
{
    assert_eq!(
        input.len(),
        output.len(),
        "Input and output slices must have the same length"
    );

    let len = input.len();
    let input_offset = input.as_ptr().align_offset(V::ALIGN);
    let output_offset = output.as_ptr().align_offset(V::ALIGN);

    if input_offset != output_offset {
        for (out, &sample) in output.iter_mut().zip(input) {
            *out = sample * factor;
        }
        return;
    }

    let lanes = V::LANES;
    let prefix_end = input_offset.min(len);
    let body_end = prefix_end + (len - prefix_end) / lanes * lanes;

    for i in 0..prefix_end {
        output[i] = input[i] * factor;
    }

    let factor_vec = V::splat(factor);
    let mut i = prefix_end;
    while i < body_end {
        V::from_aligned_slice(&input[i..i + lanes])
            .mul(factor_vec)
            .to_aligned_slice(&mut output[i..i + lanes]);
        i += lanes;
    }

    for i in body_end..len {
        output[i] = input[i] * factor;
    }
}

/// Scale `buffer` in place with aligned vector loads and stores
///
/// Same three phases as [`scale_aligned`] with a single pointer, so the
/// vector body is always reachable.
#[inline(always)]
pub fn scale_in_place_aligned<V>(buffer: &mut [f32], factor: f32)
where
    V: SimdVector<Scalar = f32>,
{
    let len = buffer.len();
    let lanes = V::LANES;
    let prefix_end = buffer.as_ptr().align_offset(V::ALIGN).min(len);
    let body_end = prefix_end + (len - prefix_end) / lanes * lanes;

    for sample in &mut buffer[..prefix_end] {
        *sample *= factor;
    }

    let factor_vec = V::splat(factor);
    let mut i = prefix_end;
    while i < body_end {
        let chunk = &mut buffer[i..i + lanes];
        V::from_aligned_slice(chunk).mul(factor_vec).to_aligned_slice(chunk);
        i += lanes;
    }

    for sample in &mut buffer[body_end..] {
        *sample *= factor;
    }
}
