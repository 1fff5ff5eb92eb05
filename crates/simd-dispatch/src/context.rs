//! SIMD Context - Unified Public API
//!
//! This module provides the `SimdContext` type, the interface receive-chain
//! code holds on to. It wraps a `BackendDispatcher`, so each call is one
//! indirect jump to the selected backend.
//!
//! # Example Usage
//!
//! ```rust
//! use sdr_simd_dispatch::SimdContext;
//!
//! // Initialize once during startup
//! let ctx = SimdContext::new();
//!
//! // Normalise 8-bit samples, then take their phase
//! let raw_i = [200.0f32; 64];
//! let raw_q = [56.0f32; 64];
//! let mut i = [0.0f32; 64];
//! let mut q = [0.0f32; 64];
//! ctx.scale(&raw_i, &mut i, 1.0 / 256.0);
//! ctx.scale(&raw_q, &mut q, 1.0 / 256.0);
//!
//! let mut phase = [0.0f32; 64];
//! ctx.atan2_fast_alt(&q, &i, &mut phase);
//! ```

use super::dispatcher::{BackendDispatcher, BackendType};

/// SIMD Context - Unified Public API
///
/// Cheap to copy; store one per processing stage and reuse it.
///
/// # Platform Behavior
///
/// - **x86_64**: AVX2 when the CPU supports it, otherwise scalar
/// - **aarch64**: NEON
/// - **anything else**: scalar
///
/// # Safety
///
/// All methods are safe to call. Internal unsafe SIMD intrinsics are only
/// reached after CPU feature detection.
#[derive(Clone, Copy, Debug)]
pub struct SimdContext {
    dispatcher: BackendDispatcher,
}

impl SimdContext {
    /// Initialize SIMD context with the process-wide backend
    ///
    /// Detection runs once per process (see [`BackendDispatcher::global`]);
    /// later calls copy the cached table.
    pub fn new() -> Self {
        Self {
            dispatcher: *BackendDispatcher::global(),
        }
    }

    /// Initialize SIMD context with a specific backend
    ///
    /// Returns `None` when the backend is not compiled or the CPU does not
    /// support it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sdr_simd_dispatch::{BackendType, SimdContext};
    ///
    /// let reference = SimdContext::with_backend(BackendType::Scalar).unwrap();
    /// assert_eq!(reference.backend_name(), "scalar");
    /// ```
    pub fn with_backend(backend_type: BackendType) -> Option<Self> {
        BackendDispatcher::for_backend(backend_type).map(|dispatcher| Self { dispatcher })
    }

    /// Get backend name for logging/debugging
    ///
    /// # Returns
    ///
    /// Static string: "scalar", "avx2", or "neon"
    pub fn backend_name(&self) -> &'static str {
        self.dispatcher.backend_name()
    }

    /// Query selected backend type
    pub fn backend_type(&self) -> BackendType {
        self.dispatcher.backend_type()
    }

    /// Scale a buffer: `output[i] = input[i] * factor`
    ///
    /// Output is bit-identical to `sdr_math::scalar::scale` on every backend,
    /// whatever the alignment of the two slices.
    ///
    /// # Panics
    ///
    /// Panics if `input` and `output` have different lengths.
    #[inline]
    pub fn scale(&self, input: &[f32], output: &mut [f32], factor: f32) {
        self.dispatcher.scale(input, output, factor)
    }

    /// Scale a buffer in place: `buffer[i] *= factor`
    #[inline]
    pub fn scale_in_place(&self, buffer: &mut [f32], factor: f32) {
        self.dispatcher.scale_in_place(buffer, factor)
    }

    /// Element-wise fast atan2 (max error 0.0102 rad)
    ///
    /// # Panics
    ///
    /// Panics if `y`, `x` and `output` do not all have the same length.
    #[inline]
    pub fn atan2_fast(&self, y: &[f32], x: &[f32], output: &mut [f32]) {
        self.dispatcher.atan2_fast(y, x, output)
    }

    /// Element-wise fast atan2, octant variant (max error 0.005 rad)
    ///
    /// # Panics
    ///
    /// Panics if `y`, `x` and `output` do not all have the same length.
    #[inline]
    pub fn atan2_fast_alt(&self, y: &[f32], x: &[f32], output: &mut [f32]) {
        self.dispatcher.atan2_fast_alt(y, x, output)
    }

    /// Fast atan2 of a single `(y, x)` pair
    #[inline]
    pub fn atan2_fast_pair(&self, y: f32, x: f32) -> f32 {
        self.dispatcher.atan2_fast_pair(y, x)
    }

    /// Fast atan2 (octant variant) of a single `(y, x)` pair
    #[inline]
    pub fn atan2_fast_alt_pair(&self, y: f32, x: f32) -> f32 {
        self.dispatcher.atan2_fast_alt_pair(y, x)
    }
}

impl Default for SimdContext {
    fn default() -> Self {
        Self::new()
    }
}
