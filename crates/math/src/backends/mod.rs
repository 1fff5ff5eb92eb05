//! SIMD backend implementations
//!
//! Vector types for each instruction set. The scalar backend is always
//! compiled; the others are feature-gated and additionally gated on their
//! target architecture inside each module.

// Scalar backend (always available as fallback)
pub mod scalar;

#[cfg(feature = "avx2")]
pub mod avx2;

#[cfg(feature = "neon")]
pub mod neon;
