//! Core SIMD abstraction traits
//!
//! This module defines the traits that every vector backend implements. Kernels
//! written against `SimdVector` compile to the scalar, AVX2 or NEON instruction
//! set without `#[cfg]` directives in the kernel itself.

/// Core SIMD vector abstraction trait
///
/// All backends (scalar, AVX2, NEON) implement this trait, which lets the
/// atan2 and scale kernels be written once.
///
/// # Example
///
/// ```rust
/// use sdr_math::{DefaultSimdVector, SimdVector};
///
/// let a = DefaultSimdVector::splat(2.0);
/// let b = DefaultSimdVector::splat(3.0);
/// let result = a.mul(b);
/// assert_eq!(result.horizontal_sum(), 6.0 * DefaultSimdVector::LANES as f32);
/// ```
pub trait SimdVector: Copy + Clone + Sized {
    /// The underlying scalar type
    type Scalar: Copy;

    /// Associated mask type for comparison operations
    type Mask: SimdMask;

    /// Number of SIMD lanes (1 for scalar, 4 for NEON, 8 for AVX2)
    const LANES: usize;

    /// Byte alignment required by `from_aligned_slice` / `to_aligned_slice`
    const ALIGN: usize;

    // Construction

    /// Broadcast a scalar value to all SIMD lanes
    fn splat(value: Self::Scalar) -> Self;

    /// Load from a slice (must have at least LANES elements)
    ///
    /// # Panics
    ///
    /// Panics if slice has fewer than LANES elements
    fn from_slice(slice: &[Self::Scalar]) -> Self;

    /// Store to a slice (must have at least LANES elements)
    ///
    /// # Panics
    ///
    /// Panics if slice has fewer than LANES elements
    fn to_slice(self, slice: &mut [Self::Scalar]);

    /// Load from a slice whose start address is a multiple of `ALIGN`
    ///
    /// # Panics
    ///
    /// Panics if slice has fewer than LANES elements or is not aligned
    fn from_aligned_slice(slice: &[Self::Scalar]) -> Self;

    /// Store to a slice whose start address is a multiple of `ALIGN`
    ///
    /// # Panics
    ///
    /// Panics if slice has fewer than LANES elements or is not aligned
    fn to_aligned_slice(self, slice: &mut [Self::Scalar]);

    // Arithmetic operations

    /// Element-wise addition
    fn add(self, rhs: Self) -> Self;

    /// Element-wise subtraction
    fn sub(self, rhs: Self) -> Self;

    /// Element-wise multiplication
    fn mul(self, rhs: Self) -> Self;

    /// Element-wise division
    fn div(self, rhs: Self) -> Self;

    /// Element-wise negation
    fn neg(self) -> Self;

    /// Element-wise absolute value
    fn abs(self) -> Self;

    // Comparison operations (return masks)

    /// Element-wise less-than comparison
    fn lt(self, rhs: Self) -> Self::Mask;

    /// Element-wise greater-than comparison
    fn gt(self, rhs: Self) -> Self::Mask;

    /// Element-wise equality comparison
    fn eq(self, rhs: Self) -> Self::Mask;

    // Blending

    /// Select values based on mask
    ///
    /// For each lane: mask[i] ? true_val[i] : false_val[i]
    ///
    /// # Example
    ///
    /// ```rust
    /// use sdr_math::{DefaultSimdVector, SimdVector};
    /// let a = DefaultSimdVector::splat(1.0);
    /// let b = DefaultSimdVector::splat(2.0);
    /// let mask = a.lt(b);
    /// let result = DefaultSimdVector::select(mask, a, b);
    /// assert_eq!(result.horizontal_sum(), 1.0 * DefaultSimdVector::LANES as f32);
    /// ```
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self;

    // Horizontal operations

    /// Sum all SIMD lanes into a scalar
    fn horizontal_sum(self) -> Self::Scalar;
}

/// Mask type for conditional SIMD operations
///
/// Masks represent per-lane boolean values. They feed `select`, which replaces
/// the quadrant branches of the scalar kernels.
///
/// # Example
///
/// ```rust
/// use sdr_math::{DefaultSimdVector, SimdMask, SimdVector};
/// let zero = DefaultSimdVector::splat(0.0);
/// let origin = zero.eq(zero).and(zero.eq(zero));
/// let picked = DefaultSimdVector::select(origin, DefaultSimdVector::splat(1.0), zero);
/// assert_eq!(picked.horizontal_sum(), DefaultSimdVector::LANES as f32);
/// ```
pub trait SimdMask: Copy + Clone + Sized {
    /// Lane-wise AND of two masks
    fn and(self, rhs: Self) -> Self;
}
