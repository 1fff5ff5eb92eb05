//! SIMD Backend Trait
//!
//! This module defines the contract that all SIMD backend implementations must satisfy.
//! All backends (Scalar, AVX2, NEON) implement the `SimdBackend` trait with identical
//! results; only throughput differs.

/// SIMD Backend Trait
///
/// Slice-level entry points for every kernel. Backends are zero-sized types
/// whose associated functions are collected into a `BackendDispatcher`
/// function-pointer table.
///
/// # Contract Requirements
///
/// 1. **Bit-identical output**: Every backend produces exactly what the scalar
///    references in `sdr_math::scalar` produce
/// 2. **no_std Compatible**: No heap allocations, no std library dependencies
/// 3. **Copy Semantic**: All backends are zero-sized types (ZSTs) and Copy
/// 4. **Length checks**: Slice operations panic on length mismatch before
///    writing anything
pub trait SimdBackend: Copy {
    /// Backend identifier for debugging and logging
    ///
    /// # Returns
    /// Static string identifying the backend: "scalar", "avx2", or "neon"
    fn name() -> &'static str;

    /// Scale a buffer: `output[i] = input[i] * factor`
    ///
    /// # Invariants
    /// - `input.len() == output.len()`, checked with `assert_eq!`
    /// - NaN and infinity propagate per IEEE-754
    ///
    /// # Performance
    /// - Scalar: one sample per iteration
    /// - AVX2: 8 samples per aligned load/store
    /// - NEON: 4 samples per aligned load/store
    fn scale(input: &[f32], output: &mut [f32], factor: f32);

    /// Scale a buffer in place: `buffer[i] *= factor`
    fn scale_in_place(buffer: &mut [f32], factor: f32);

    /// Element-wise fast atan2: `output[i] = atan2_fast(y[i], x[i])`
    ///
    /// # Invariants
    /// - `y.len() == x.len() == output.len()`, checked with `assert_eq!`
    fn atan2_fast(y: &[f32], x: &[f32], output: &mut [f32]);

    /// Element-wise fast atan2 (octant variant): `output[i] = atan2_fast_alt(y[i], x[i])`
    fn atan2_fast_alt(y: &[f32], x: &[f32], output: &mut [f32]);

    /// Fast atan2 of a single `(y, x)` pair
    fn atan2_fast_pair(y: f32, x: f32) -> f32;

    /// Fast atan2 (octant variant) of a single `(y, x)` pair
    fn atan2_fast_alt_pair(y: f32, x: f32) -> f32;
}
