//! Runtime Backend Dispatcher
//!
//! This module provides CPU feature detection and SIMD backend selection.
//! On x86/x86_64, it detects AVX2 support at runtime and selects the matching backend.
//! On aarch64, NEON is part of the baseline and is selected whenever it is compiled in.

use core::sync::atomic::{AtomicU8, Ordering};

use super::backend::SimdBackend;
use super::scalar::ScalarBackend;

#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
use super::avx2::Avx2Backend;

#[cfg(all(feature = "neon", target_arch = "aarch64"))]
use super::neon::NeonBackend;

/// CPU Feature Detection Results
///
/// Represents the SIMD capabilities detected on the current CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuFeatures {
    /// AVX2 support available (x86/x86_64)
    pub has_avx2: bool,

    /// NEON support available (aarch64)
    pub has_neon: bool,
}

impl CpuFeatures {
    /// Detect CPU features
    ///
    /// # Platform Behavior
    /// - **x86/x86_64 with `runtime-dispatch`**: CPUID detection using the `cpufeatures` crate
    /// - **x86/x86_64 without `runtime-dispatch`**: Compile-time `target_feature` flags only
    /// - **aarch64**: NEON reported present, AVX2 absent
    ///
    /// # Performance
    /// - First call: ~100-200 CPU cycles (CPUID instruction)
    /// - Subsequent calls: Cached by cpufeatures, a single atomic load
    pub fn detect() -> Self {
        Self {
            has_avx2: detect_avx2(),
            has_neon: cfg!(target_arch = "aarch64"),
        }
    }
}

#[cfg(all(
    feature = "runtime-dispatch",
    any(target_arch = "x86", target_arch = "x86_64")
))]
#[inline]
fn detect_avx2() -> bool {
    cpufeatures::new!(cpuid_avx2, "avx2");
    cpuid_avx2::get()
}

#[cfg(not(all(
    feature = "runtime-dispatch",
    any(target_arch = "x86", target_arch = "x86_64")
)))]
#[inline]
fn detect_avx2() -> bool {
    cfg!(target_feature = "avx2")
}

/// Backend Type Enumeration
///
/// Represents the selected SIMD backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BackendType {
    /// Scalar fallback (no SIMD, always available)
    Scalar = 0,

    /// AVX2 backend (x86_64, 256-bit SIMD)
    Avx2 = 1,

    /// NEON backend (aarch64, 128-bit SIMD)
    Neon = 2,
}

impl BackendType {
    /// Select optimal backend based on CPU features
    ///
    /// # Selection Priority
    /// 1. AVX2 (if `avx2` feature compiled AND CPU supports AVX2)
    /// 2. NEON (if `neon` feature compiled AND target is aarch64)
    /// 3. Scalar (fallback, always available)
    ///
    /// # Forced Backend Selection (CI testing)
    /// When `force-scalar`, `force-avx2`, or `force-neon` features are enabled,
    /// this function ignores CPU detection and returns the forced backend.
    /// `force-scalar` wins over the others.
    ///
    /// # Example
    /// ```rust
    /// use sdr_simd_dispatch::{BackendType, CpuFeatures};
    ///
    /// let backend = BackendType::select(CpuFeatures::detect());
    /// assert!(!backend.name().is_empty());
    /// ```
    pub fn select(features: CpuFeatures) -> Self {
        if cfg!(feature = "force-scalar") {
            return BackendType::Scalar;
        }
        if cfg!(feature = "force-avx2") {
            return BackendType::Avx2;
        }
        if cfg!(feature = "force-neon") {
            return BackendType::Neon;
        }

        if Self::Avx2.is_compiled() && features.has_avx2 {
            return BackendType::Avx2;
        }
        if Self::Neon.is_compiled() && features.has_neon {
            return BackendType::Neon;
        }

        BackendType::Scalar
    }

    /// Whether this backend is compiled into the current build
    pub const fn is_compiled(self) -> bool {
        match self {
            BackendType::Scalar => true,
            BackendType::Avx2 => cfg!(all(
                feature = "avx2",
                any(target_arch = "x86", target_arch = "x86_64")
            )),
            BackendType::Neon => cfg!(all(feature = "neon", target_arch = "aarch64")),
        }
    }

    /// Backend name for logging/debugging
    ///
    /// # Returns
    /// Static string: "scalar", "avx2", or "neon"
    pub const fn name(self) -> &'static str {
        match self {
            BackendType::Scalar => "scalar",
            BackendType::Avx2 => "avx2",
            BackendType::Neon => "neon",
        }
    }

    const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(BackendType::Scalar),
            1 => Some(BackendType::Avx2),
            2 => Some(BackendType::Neon),
            _ => None,
        }
    }
}

// Type aliases for function pointers to reduce complexity
type ScaleFn = fn(&[f32], &mut [f32], f32);
type ScaleInPlaceFn = fn(&mut [f32], f32);
type BinaryOpFn = fn(&[f32], &[f32], &mut [f32]);
type PairFn = fn(f32, f32) -> f32;

/// Runtime Backend Dispatcher
///
/// Function pointer table for dispatching SIMD operations to the selected backend.
/// Every entry has the same signature across backends, so switching backends
/// is a matter of which table is read.
#[derive(Clone, Copy, Debug)]
pub struct BackendDispatcher {
    scale_fn: ScaleFn,
    scale_in_place_fn: ScaleInPlaceFn,
    atan2_fast_fn: BinaryOpFn,
    atan2_fast_alt_fn: BinaryOpFn,
    atan2_fast_pair_fn: PairFn,
    atan2_fast_alt_pair_fn: PairFn,

    backend_type: BackendType,
}

static SCALAR_DISPATCHER: BackendDispatcher = BackendDispatcher::for_scalar();

#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
static AVX2_DISPATCHER: BackendDispatcher = BackendDispatcher::for_avx2();

#[cfg(all(feature = "neon", target_arch = "aarch64"))]
static NEON_DISPATCHER: BackendDispatcher = BackendDispatcher::for_neon();

const UNSELECTED: u8 = u8::MAX;

// Process-wide selection made by `BackendDispatcher::global`
static GLOBAL_BACKEND: AtomicU8 = AtomicU8::new(UNSELECTED);

impl BackendDispatcher {
    /// Initialize dispatcher with optimal backend
    ///
    /// This function:
    /// 1. Detects CPU features (via `cpufeatures` crate on x86_64)
    /// 2. Selects best available backend based on features + compilation flags
    /// 3. Falls back to scalar if a forced backend cannot run on this CPU
    ///
    /// The selection is logged at `info` level. Prefer [`BackendDispatcher::global`]
    /// when one process-wide choice is enough.
    pub fn init() -> Self {
        let dispatcher = Self::resolve();
        log::info!("Selected SIMD backend: {}", dispatcher.backend_name());
        dispatcher
    }

    /// Dispatcher for a specific backend
    ///
    /// Returns `None` when the backend is not compiled into this build or the
    /// CPU does not support it.
    pub fn for_backend(backend_type: BackendType) -> Option<Self> {
        Self::table(backend_type).copied()
    }

    /// Process-wide dispatcher
    ///
    /// Selects a backend on first use and caches the choice. Concurrent first
    /// calls may both run detection; they store the same value and only the
    /// thread that publishes it logs the selection.
    pub fn global() -> &'static Self {
        if let Some(backend_type) = BackendType::from_u8(GLOBAL_BACKEND.load(Ordering::Acquire)) {
            if let Some(table) = Self::table(backend_type) {
                return table;
            }
        }

        let backend_type = Self::resolve().backend_type;
        if GLOBAL_BACKEND
            .compare_exchange(
                UNSELECTED,
                backend_type as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
        {
            log::info!("Selected SIMD backend: {}", backend_type.name());
        }

        Self::table(backend_type).unwrap_or(&SCALAR_DISPATCHER)
    }

    fn resolve() -> Self {
        let features = CpuFeatures::detect();
        log::debug!("Detected CPU features: {:?}", features);

        let requested = BackendType::select(features);
        match Self::for_backend(requested) {
            Some(dispatcher) => dispatcher,
            None => {
                log::warn!(
                    "SIMD backend {} is unavailable, falling back to scalar",
                    requested.name()
                );
                Self::for_scalar()
            }
        }
    }

    fn table(backend_type: BackendType) -> Option<&'static Self> {
        match backend_type {
            BackendType::Scalar => Some(&SCALAR_DISPATCHER),

            #[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
            BackendType::Avx2 if CpuFeatures::detect().has_avx2 => Some(&AVX2_DISPATCHER),

            #[cfg(all(feature = "neon", target_arch = "aarch64"))]
            BackendType::Neon if CpuFeatures::detect().has_neon => Some(&NEON_DISPATCHER),

            _ => None,
        }
    }

    /// Create dispatcher for scalar backend
    const fn for_scalar() -> Self {
        Self {
            scale_fn: ScalarBackend::scale,
            scale_in_place_fn: ScalarBackend::scale_in_place,
            atan2_fast_fn: ScalarBackend::atan2_fast,
            atan2_fast_alt_fn: ScalarBackend::atan2_fast_alt,
            atan2_fast_pair_fn: ScalarBackend::atan2_fast_pair,
            atan2_fast_alt_pair_fn: ScalarBackend::atan2_fast_alt_pair,
            backend_type: BackendType::Scalar,
        }
    }

    /// Create dispatcher for AVX2 backend
    #[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
    const fn for_avx2() -> Self {
        Self {
            scale_fn: Avx2Backend::scale,
            scale_in_place_fn: Avx2Backend::scale_in_place,
            atan2_fast_fn: Avx2Backend::atan2_fast,
            atan2_fast_alt_fn: Avx2Backend::atan2_fast_alt,
            atan2_fast_pair_fn: Avx2Backend::atan2_fast_pair,
            atan2_fast_alt_pair_fn: Avx2Backend::atan2_fast_alt_pair,
            backend_type: BackendType::Avx2,
        }
    }

    /// Create dispatcher for NEON backend
    #[cfg(all(feature = "neon", target_arch = "aarch64"))]
    const fn for_neon() -> Self {
        Self {
            scale_fn: NeonBackend::scale,
            scale_in_place_fn: NeonBackend::scale_in_place,
            atan2_fast_fn: NeonBackend::atan2_fast,
            atan2_fast_alt_fn: NeonBackend::atan2_fast_alt,
            atan2_fast_pair_fn: NeonBackend::atan2_fast_pair,
            atan2_fast_alt_pair_fn: NeonBackend::atan2_fast_alt_pair,
            backend_type: BackendType::Neon,
        }
    }

    /// Scale a buffer: `output[i] = input[i] * factor`
    ///
    /// # Performance
    /// - Overhead: Single indirect jump through function pointer
    #[inline]
    pub fn scale(&self, input: &[f32], output: &mut [f32], factor: f32) {
        (self.scale_fn)(input, output, factor)
    }

    /// Scale a buffer in place: `buffer[i] *= factor`
    #[inline]
    pub fn scale_in_place(&self, buffer: &mut [f32], factor: f32) {
        (self.scale_in_place_fn)(buffer, factor)
    }

    /// Element-wise fast atan2: `output[i] = atan2_fast(y[i], x[i])`
    #[inline]
    pub fn atan2_fast(&self, y: &[f32], x: &[f32], output: &mut [f32]) {
        (self.atan2_fast_fn)(y, x, output)
    }

    /// Element-wise fast atan2 (octant variant)
    #[inline]
    pub fn atan2_fast_alt(&self, y: &[f32], x: &[f32], output: &mut [f32]) {
        (self.atan2_fast_alt_fn)(y, x, output)
    }

    /// Fast atan2 of a single `(y, x)` pair
    #[inline]
    pub fn atan2_fast_pair(&self, y: f32, x: f32) -> f32 {
        (self.atan2_fast_pair_fn)(y, x)
    }

    /// Fast atan2 (octant variant) of a single `(y, x)` pair
    #[inline]
    pub fn atan2_fast_alt_pair(&self, y: f32, x: f32) -> f32 {
        (self.atan2_fast_alt_pair_fn)(y, x)
    }

    /// Get backend name for logging/debugging
    ///
    /// # Returns
    /// Static string: "scalar", "avx2", or "neon"
    pub fn backend_name(&self) -> &'static str {
        self.backend_type.name()
    }

    /// Query selected backend type
    pub fn backend_type(&self) -> BackendType {
        self.backend_type
    }
}
