#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(unexpected_cfgs)]

//! sdr-math: Trait-based SIMD kernels for software-defined radio
//!
//! Vectorized building blocks for an SDR receive chain, written once against
//! the `SimdVector` trait and compiled to scalar, AVX2 or NEON code.
//!
//! # Features
//!
//! - **Trait-based SIMD abstraction**: Write backend-agnostic code using `SimdVector`
//! - **Fast atan2**: Two approximations for phase and FM demodulation
//! - **Scalar references**: Exact one-sample-at-a-time oracles in [`scalar`]
//! - **Complex helpers**: Conjugation over `num_complex::Complex32`
//! - **No allocations**: Every kernel works on caller-owned slices
//!
//! Runtime CPU detection and backend selection live in `sdr-simd-dispatch`.
//!
//! # Quick Start
//!
//! ```rust
//! use sdr_math::{DefaultSimdVector, SimdVector};
//! use sdr_math::math::atan2_fast_alt;
//!
//! // Phase of eight (or four, or one) I/Q samples at once
//! let i = DefaultSimdVector::splat(0.0);
//! let q = DefaultSimdVector::splat(1.0);
//! let phase = atan2_fast_alt(q, i);
//! ```

extern crate libm;

// Core trait definitions
pub mod traits;

// Backend implementations
pub mod backends;

// Vectorized kernels
pub mod math;

// Scalar reference kernels
pub mod scalar;

// Complex sample helpers
pub mod complex;

pub use traits::{SimdMask, SimdVector};

pub use backends::scalar::{ScalarMask, ScalarVector};

pub use complex::Complex32;

// Only re-export AVX2 types when both feature is enabled AND we're targeting x86/x86_64
#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
pub use backends::avx2::{Avx2Mask, Avx2Vector};

// Only re-export NEON types when both feature is enabled AND we're targeting aarch64
#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub use backends::neon::{NeonMask, NeonVector};

/// Default SIMD vector type for the compilation target
///
/// Resolves to the widest backend the compiler is allowed to assume:
/// - `Avx2Vector` (8 lanes) when built with `-C target-feature=+avx2`
/// - `NeonVector` (4 lanes) on aarch64
/// - `ScalarVector<f32>` (1 lane) otherwise
///
/// Binaries that must run on CPUs without AVX2 should go through
/// `sdr-simd-dispatch`, which picks a backend at runtime.
#[cfg(not(any(
    all(feature = "avx2", target_arch = "x86_64", target_feature = "avx2"),
    all(feature = "neon", target_arch = "aarch64")
)))]
pub type DefaultSimdVector = ScalarVector<f32>;

/// Default SIMD vector type (AVX2 backend for x86-64)
#[cfg(all(feature = "avx2", target_arch = "x86_64", target_feature = "avx2"))]
pub type DefaultSimdVector = Avx2Vector;

/// Default SIMD vector type (NEON backend for ARM64)
#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub type DefaultSimdVector = NeonVector;
