//! Vectorized fast atan2 approximations
//!
//! Two branchless kernels for phase and FM demodulation, generic over
//! `SimdVector`. Each performs the same IEEE operations in the same order as
//! its reference in [`crate::scalar`], with branches replaced by `select`, so
//! the two paths agree lane for lane.
//!
//! | Kernel | Max abs error on [-1,1]² | Cost |
//! |---|---|---|
//! | [`atan2_fast`] | 0.0102 rad | 1 div, cubic |
//! | [`atan2_fast_alt`] | 0.005 rad | 1 div, quadratic in \|z\| |

use crate::traits::{SimdMask, SimdVector};
use core::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// 3π/4, base angle of the left half-plane in [`atan2_fast`]
pub(crate) const FRAC_3PI_4: f32 = 3.0 * FRAC_PI_4;

/// Cubic coefficient of the ratio polynomial in [`atan2_fast`]
pub(crate) const FAST_CUBIC: f32 = 0.1963;

/// Linear coefficient of the ratio polynomial in [`atan2_fast`]
pub(crate) const FAST_LINEAR: f32 = 0.9817;

/// Correction coefficient of `atan(z) ≈ z (π/4 + c (1 − |z|))` in [`atan2_fast_alt`]
pub(crate) const ALT_CORRECTION: f32 = 0.273;

/// Fast atan2 using the ratio `r = (x − |y|) / (x + |y|)`
///
/// The ratio stays in [-1, 1] for every input, so no octant reduction or
/// reciprocal is needed. A cubic in `r` is added to π/4 (right half-plane) or
/// 3π/4 (left half-plane) and the sign of `y` is applied last.
///
/// # Error Bounds
///
/// - Maximum absolute error: <0.0102 radians over [-1, 1]²
/// - `atan2_fast(0, 0) == 0`
/// - Not clamped: on the negative x-axis the result is slightly above π, as
///   in [`crate::scalar::atan2_fast`]
///
/// # Example
///
/// ```rust
/// use sdr_math::{DefaultSimdVector, SimdVector};
/// use sdr_math::math::atan2_fast;
///
/// let y = DefaultSimdVector::splat(1.0);
/// let x = DefaultSimdVector::splat(1.0);
/// let angle = atan2_fast(y, x).horizontal_sum() / DefaultSimdVector::LANES as f32;
/// assert!((angle - core::f32::consts::FRAC_PI_4).abs() < 0.0102);
/// ```
#[inline(always)]
pub fn atan2_fast<V: SimdVector<Scalar = f32>>(y: V, x: V) -> V {
    let zero = V::splat(0.0);
    let abs_y = y.abs();
    let x_negative = x.lt(zero);

    // Right half-plane: (x - |y|) / (x + |y|); left: (x + |y|) / (|y| - x)
    let num = V::select(x_negative, x.add(abs_y), x.sub(abs_y));
    let den = V::select(x_negative, abs_y.sub(x), x.add(abs_y));
    let r = num.div(den);

    let base = V::select(x_negative, V::splat(FRAC_3PI_4), V::splat(FRAC_PI_4));
    let poly = V::splat(FAST_CUBIC)
        .mul(r)
        .mul(r)
        .sub(V::splat(FAST_LINEAR))
        .mul(r);
    let angle = base.add(poly);

    let signed = V::select(y.lt(zero), angle.neg(), angle);

    let origin = x.eq(zero).and(y.eq(zero));
    V::select(origin, zero, signed)
}

/// Fast atan2 using octant reduction and `atan(z) ≈ z (π/4 + 0.273 (1 − |z|))`
///
/// The smaller of |x|, |y| is divided by the larger so `|z| <= 1`. Near the
/// x-axis the result is corrected by ±π in the left half-plane; near the
/// y-axis it is reflected as ±π/2 − atan(x/y).
///
/// More accurate than [`atan2_fast`] at roughly the same cost.
///
/// # Error Bounds
///
/// - Maximum absolute error: <0.005 radians over [-1, 1]²
/// - `atan2_fast_alt(0, 0) == 0`
///
/// # Example
///
/// ```rust
/// use sdr_math::{DefaultSimdVector, SimdVector};
/// use sdr_math::math::atan2_fast_alt;
///
/// let y = DefaultSimdVector::splat(1.0);
/// let x = DefaultSimdVector::splat(-1.0);
/// let angle = atan2_fast_alt(y, x).horizontal_sum() / DefaultSimdVector::LANES as f32;
/// assert!((angle - 3.0 * core::f32::consts::FRAC_PI_4).abs() < 0.005);
/// ```
#[inline(always)]
pub fn atan2_fast_alt<V: SimdVector<Scalar = f32>>(y: V, x: V) -> V {
    let zero = V::splat(0.0);
    let one = V::splat(1.0);
    let abs_x = x.abs();
    let abs_y = y.abs();

    // Steep lanes (|y| > |x|) use x / y
    let steep = abs_y.gt(abs_x);
    let num = V::select(steep, x, y);
    let den = V::select(steep, y, x);
    let z = num.div(den);

    let correction = V::splat(ALT_CORRECTION).mul(one.sub(z.abs()));
    let atan_z = z.mul(V::splat(FRAC_PI_4).add(correction));

    let y_negative = y.lt(zero);

    // Quadrants II and III: add ±π
    let half_turn = V::select(y_negative, V::splat(-PI), V::splat(PI));
    let shallow_result = V::select(x.lt(zero), atan_z.add(half_turn), atan_z);

    let quarter_turn = V::select(y_negative, V::splat(-FRAC_PI_2), V::splat(FRAC_PI_2));
    let steep_result = quarter_turn.sub(atan_z);

    let result = V::select(steep, steep_result, shallow_result);

    // z is NaN at the origin
    let origin = x.eq(zero).and(y.eq(zero));
    V::select(origin, zero, result)
}
