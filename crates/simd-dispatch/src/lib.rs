#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(unexpected_cfgs)]

//! sdr-simd-dispatch: Runtime SIMD dispatch for SDR kernels
//!
//! This crate selects the best SIMD backend for the running CPU (AVX2 on
//! x86_64, NEON on aarch64, scalar elsewhere) and exposes the `sdr-math`
//! kernels behind it. A single binary runs everywhere and produces the same
//! bits on every backend.
//!
//! # Primary Public API
//!
//! - Free functions ([`scale`], [`atan2_fast`], ...) use the process-wide
//!   backend chosen on first use.
//! - `SimdContext` holds a backend explicitly, e.g. to pin the scalar
//!   reference in tests.
//!
//! # Architecture
//!
//! - `context`: SimdContext unified API
//! - `backend`: SimdBackend trait definition
//! - `helpers`: Chunking and three-phase aligned loops shared by backends
//! - `scalar`: Scalar (non-SIMD) fallback implementation
//! - `dispatcher`: CPU feature detection and BackendType selection
//! - Platform-specific backends: `avx2`, `neon`
//!
//! # Feature Flags
//!
//! - `runtime-dispatch`: Enable runtime CPU detection and backend selection
//! - `avx2`: Compile AVX2 backend (x86/x86_64)
//! - `neon`: Compile NEON backend (aarch64)
//! - `force-scalar`: Force scalar backend for deterministic testing
//! - `force-avx2`: Force AVX2 backend for deterministic testing
//! - `force-neon`: Force NEON backend for deterministic testing
//!
//! # Logging
//!
//! Backend selection is reported once through the `log` facade
//! (`info` for the chosen backend, `debug` for detected CPU features).
//! Kernels never log.
//!
//! # Example Usage
//!
//! ```rust
//! use sdr_simd_dispatch as dsp;
//!
//! let raw: [f32; 257] = core::array::from_fn(|i| i as f32);
//! let mut normalised = [0.0f32; 257];
//! dsp::scale(&raw, &mut normalised, 1.0 / 256.0);
//! assert_eq!(normalised[128], 0.5);
//!
//! let phase = dsp::atan2_fast(0.5, -0.5);
//! assert!((phase - 3.0 * core::f32::consts::FRAC_PI_4).abs() < 0.0102);
//! ```

// Re-export the vector abstraction and kernels from sdr-math
pub use sdr_math::{backends, complex, math, traits};
pub use sdr_math::{Complex32, DefaultSimdVector, ScalarMask, ScalarVector, SimdMask, SimdVector};

#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
pub use sdr_math::{Avx2Mask, Avx2Vector};

#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub use sdr_math::{NeonMask, NeonVector};

/// Scalar reference kernels (`sdr_math::scalar`)
pub use sdr_math::scalar as reference;

// Internal modules
pub mod backend;
pub mod context;
pub mod dispatcher;
pub mod helpers;
pub mod scalar;

// Platform-specific backend modules
#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
pub mod avx2;

#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub mod neon;

// Re-export primary public API
pub use context::SimdContext;

// Re-export supporting types
pub use backend::SimdBackend;
pub use dispatcher::{BackendDispatcher, BackendType, CpuFeatures};
pub use scalar::ScalarBackend;

// Conditionally re-export SIMD backends
#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
pub use avx2::Avx2Backend;

#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub use neon::NeonBackend;

/// Fast atan2 of one `(y, x)` pair on the process-wide backend
///
/// Max absolute error 0.0102 rad over [-1, 1]²; the origin maps to 0.
#[inline]
pub fn atan2_fast(y: f32, x: f32) -> f32 {
    BackendDispatcher::global().atan2_fast_pair(y, x)
}

/// Fast atan2 (octant variant) of one `(y, x)` pair on the process-wide backend
///
/// Max absolute error 0.005 rad over [-1, 1]²; the origin maps to 0.
#[inline]
pub fn atan2_fast_alt(y: f32, x: f32) -> f32 {
    BackendDispatcher::global().atan2_fast_alt_pair(y, x)
}

/// Element-wise [`atan2_fast`] over slices
///
/// # Panics
///
/// Panics if `y`, `x` and `output` do not all have the same length.
#[inline]
pub fn atan2_fast_slice(y: &[f32], x: &[f32], output: &mut [f32]) {
    BackendDispatcher::global().atan2_fast(y, x, output)
}

/// Element-wise [`atan2_fast_alt`] over slices
///
/// # Panics
///
/// Panics if `y`, `x` and `output` do not all have the same length.
#[inline]
pub fn atan2_fast_alt_slice(y: &[f32], x: &[f32], output: &mut [f32]) {
    BackendDispatcher::global().atan2_fast_alt(y, x, output)
}

/// Scale a buffer on the process-wide backend: `output[i] = input[i] * factor`
///
/// Bit-identical to [`reference::scale`] for every length and alignment.
///
/// # Panics
///
/// Panics if `input` and `output` have different lengths.
#[inline]
pub fn scale(input: &[f32], output: &mut [f32], factor: f32) {
    BackendDispatcher::global().scale(input, output, factor)
}

/// Scale a buffer in place on the process-wide backend: `buffer[i] *= factor`
#[inline]
pub fn scale_in_place(buffer: &mut [f32], factor: f32) {
    BackendDispatcher::global().scale_in_place(buffer, factor)
}
