//! Scalar backend implementation
//!
//! This backend provides a single-lane fallback that works on any platform.
//! It is the vector type the dispatched single-pair atan2 runs on and the
//! baseline the wider backends are compared against.

use crate::traits::{SimdMask, SimdVector};

/// Scalar vector wrapper (single-lane SIMD)
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct ScalarVector<T>(pub T);

/// Scalar mask wrapper (single boolean)
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct ScalarMask(pub bool);

impl SimdVector for ScalarVector<f32> {
    type Scalar = f32;
    type Mask = ScalarMask;

    const LANES: usize = 1;
    const ALIGN: usize = core::mem::align_of::<f32>();

    #[inline(always)]
    fn splat(value: Self::Scalar) -> Self {
        ScalarVector(value)
    }

    #[inline(always)]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for scalar load");
        ScalarVector(slice[0])
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [Self::Scalar]) {
        assert!(
            slice.len() >= Self::LANES,
            "Slice too short for scalar store"
        );
        slice[0] = self.0;
    }

    // Every &[f32] already satisfies f32 alignment
    #[inline(always)]
    fn from_aligned_slice(slice: &[Self::Scalar]) -> Self {
        Self::from_slice(slice)
    }

    #[inline(always)]
    fn to_aligned_slice(self, slice: &mut [Self::Scalar]) {
        self.to_slice(slice)
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        ScalarVector(self.0 + rhs.0)
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        ScalarVector(self.0 - rhs.0)
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        ScalarVector(self.0 * rhs.0)
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        ScalarVector(self.0 / rhs.0)
    }

    #[inline(always)]
    fn neg(self) -> Self {
        ScalarVector(-self.0)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        ScalarVector(libm::fabsf(self.0))
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        ScalarMask(self.0 < rhs.0)
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        ScalarMask(self.0 > rhs.0)
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        ScalarMask(self.0 == rhs.0)
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        if mask.0 {
            true_val
        } else {
            false_val
        }
    }

    #[inline(always)]
    fn horizontal_sum(self) -> Self::Scalar {
        self.0
    }
}

impl SimdMask for ScalarMask {
    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        ScalarMask(self.0 && rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_select() {
        let a = ScalarVector(1.0f32);
        let b = ScalarVector(2.0f32);
        assert_eq!(ScalarVector::select(a.lt(b), a, b).0, 1.0);
        assert_eq!(ScalarVector::select(a.gt(b), a, b).0, 2.0);
    }

    #[test]
    fn test_scalar_mask_logic() {
        let t = ScalarMask(true);
        let f = ScalarMask(false);
        assert!(t.and(t).0);
        assert!(!t.and(f).0);
        assert!(!f.and(t).0);
        assert!(!f.and(f).0);
    }

    #[test]
    fn test_scalar_abs_clears_sign_of_negative_zero() {
        let v = ScalarVector(-0.0f32).abs();
        assert!(v.0.is_sign_positive());
    }
}
