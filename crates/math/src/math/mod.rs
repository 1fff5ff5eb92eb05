//! Fast math kernels for SDR signal processing
//!
//! Vectorized implementations that work across all SIMD backends (scalar,
//! AVX2, NEON) through the `SimdVector` trait abstraction.
//!
//! # Modules
//!
//! - `atan2`: Two fast two-argument arctangent approximations for phase and
//!   FM demodulation
//!
//! # Example
//!
//! ```rust
//! use sdr_math::{DefaultSimdVector, SimdVector};
//! use sdr_math::math::{atan2_fast, atan2_fast_alt};
//!
//! let i = DefaultSimdVector::splat(0.5);
//! let q = DefaultSimdVector::splat(0.5);
//! let coarse = atan2_fast(q, i);
//! let fine = atan2_fast_alt(q, i);
//! ```

pub mod atan2;

pub use self::atan2::{atan2_fast, atan2_fast_alt};
