//! NEON backend implementation (ARM64)
//!
//! This backend provides 4-lane (128-bit) SIMD operations using ARM NEON instructions.
//! Available on all ARM64 CPUs (Apple Silicon, AWS Graviton, Raspberry Pi 4+, etc.).
//!
//! **Note**: NEON is mandatory for ARM64, so no runtime detection is needed.

// This backend only compiles on aarch64 targets
#![cfg(target_arch = "aarch64")]

use crate::traits::{SimdMask, SimdVector};
use core::arch::aarch64::*;

/// NEON vector wrapper (4 lanes of f32)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct NeonVector(float32x4_t);

/// NEON mask wrapper (4-lane mask)
///
/// Uses uint32x4_t to represent per-lane boolean values.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct NeonMask(uint32x4_t);

impl SimdVector for NeonVector {
    type Scalar = f32;
    type Mask = NeonMask;

    const LANES: usize = 4;
    const ALIGN: usize = 16;

    #[inline(always)]
    fn splat(value: Self::Scalar) -> Self {
        unsafe { NeonVector(vdupq_n_f32(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for NEON load");
        unsafe { NeonVector(vld1q_f32(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [Self::Scalar]) {
        assert!(slice.len() >= Self::LANES, "Slice too short for NEON store");
        unsafe { vst1q_f32(slice.as_mut_ptr(), self.0) }
    }

    // vld1q/vst1q take no alignment hint; a 16-byte boundary keeps each
    // access inside one cache line
    #[inline(always)]
    fn from_aligned_slice(slice: &[Self::Scalar]) -> Self {
        assert_eq!(
            slice.as_ptr() as usize % Self::ALIGN,
            0,
            "Slice not 16-byte aligned for NEON load"
        );
        Self::from_slice(slice)
    }

    #[inline(always)]
    fn to_aligned_slice(self, slice: &mut [Self::Scalar]) {
        assert_eq!(
            slice.as_ptr() as usize % Self::ALIGN,
            0,
            "Slice not 16-byte aligned for NEON store"
        );
        self.to_slice(slice)
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { NeonVector(vaddq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { NeonVector(vsubq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { NeonVector(vmulq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { NeonVector(vdivq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe { NeonVector(vnegq_f32(self.0)) }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe { NeonVector(vabsq_f32(self.0)) }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask(vcltq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask(vcgtq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        unsafe { NeonMask(vceqq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self {
        unsafe { NeonVector(vbslq_f32(mask.0, true_val.0, false_val.0)) }
    }

    #[inline(always)]
    fn horizontal_sum(self) -> Self::Scalar {
        unsafe {
            let sum_pair = vpaddq_f32(self.0, self.0);
            let sum = vpaddq_f32(sum_pair, sum_pair);
            vgetq_lane_f32(sum, 0)
        }
    }
}

impl SimdMask for NeonMask {
    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { NeonMask(vandq_u32(self.0, rhs.0)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neon_mul_matches_scalar() {
        let a = NeonVector::splat(0.25);
        let b = NeonVector::splat(3.0);
        assert_eq!(a.mul(b).horizontal_sum(), 3.0);
    }

    #[test]
    fn test_neon_aligned_round_trip() {
        #[repr(align(16))]
        struct Aligned([f32; 4]);

        let input = Aligned([1.0, 2.0, 3.0, 4.0]);
        let mut output = Aligned([0.0; 4]);
        NeonVector::from_aligned_slice(&input.0).to_aligned_slice(&mut output.0);
        assert_eq!(output.0, input.0);
    }
}
