//! Scalar reference kernels
//!
//! Portable one-sample-at-a-time implementations of every kernel in this
//! workspace. They are the accuracy oracle for the SIMD backends and the
//! fallback for unaligned prefixes and short tails.
//!
//! # Error Bounds
//!
//! - `atan2_fast`: <0.0102 rad absolute error over [-1, 1]²
//! - `atan2_fast_alt`: <0.005 rad absolute error over [-1, 1]²
//! - `scale`, `scale_in_place`: exact (one IEEE multiply per sample)
//!
//! # Example
//!
//! ```rust
//! use sdr_math::scalar::{atan2_fast, scale};
//!
//! // Phase of one I/Q sample
//! let phase = atan2_fast(0.5, -0.5);
//!
//! // Normalise 8-bit magnitudes to [0, 1)
//! let raw = [0.0, 64.0, 128.0, 255.0];
//! let mut normalised = [0.0; 4];
//! scale(&raw, &mut normalised, 1.0 / 256.0);
//! assert_eq!(normalised[2], 0.5);
//! ```

use crate::math::atan2::{ALT_CORRECTION, FAST_CUBIC, FAST_LINEAR, FRAC_3PI_4};
use core::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Reference fast atan2 (ratio form with cubic correction)
///
/// Returns an angle in (−π, π] up to the approximation error. The origin maps
/// to 0.
///
/// # Range
///
/// The result is not clamped. On and near the negative x-axis the cubic lands
/// just past the cut, so `atan2_fast(0.0, -1.0)` is about `π + 2e-6`. Every
/// result stays within 0.0102 rad of the true angle, so `|atan2_fast(y, x)| <= π + 0.0102`.
/// Callers that need a strict (−π, π] must clamp.
///
/// # Example
///
/// ```rust
/// use sdr_math::scalar::atan2_fast;
///
/// assert_eq!(atan2_fast(0.0, 0.0), 0.0);
/// assert!((atan2_fast(1.0, 0.0) - core::f32::consts::FRAC_PI_2).abs() < 0.0102);
/// ```
#[inline]
pub fn atan2_fast(y: f32, x: f32) -> f32 {
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }

    let abs_y = libm::fabsf(y);
    let (r, base) = if x >= 0.0 {
        ((x - abs_y) / (x + abs_y), FRAC_PI_4)
    } else {
        ((x + abs_y) / (abs_y - x), FRAC_3PI_4)
    };
    let angle = base + (FAST_CUBIC * r * r - FAST_LINEAR) * r;

    if y < 0.0 {
        -angle
    } else {
        angle
    }
}

/// Reference fast atan2 (octant reduction, quadratic in |z|)
///
/// More accurate than [`atan2_fast`]. Returns an angle in (−π, π]; the origin
/// maps to 0.
///
/// # Example
///
/// ```rust
/// use sdr_math::scalar::atan2_fast_alt;
///
/// assert_eq!(atan2_fast_alt(0.0, 0.0), 0.0);
/// assert!((atan2_fast_alt(0.0, -1.0) - core::f32::consts::PI).abs() < 0.005);
/// ```
#[inline]
pub fn atan2_fast_alt(y: f32, x: f32) -> f32 {
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }

    let abs_x = libm::fabsf(x);
    let abs_y = libm::fabsf(y);

    if abs_y <= abs_x {
        let angle = atan_unit(y / x);
        if x < 0.0 {
            if y < 0.0 {
                angle - PI
            } else {
                angle + PI
            }
        } else {
            angle
        }
    } else {
        let angle = atan_unit(x / y);
        if y < 0.0 {
            -FRAC_PI_2 - angle
        } else {
            FRAC_PI_2 - angle
        }
    }
}

/// atan(z) for |z| <= 1
#[inline(always)]
fn atan_unit(z: f32) -> f32 {
    z * (FRAC_PI_4 + ALT_CORRECTION * (1.0 - libm::fabsf(z)))
}

/// Reference scale: `output[i] = input[i] * factor`
///
/// # Panics
///
/// Panics if `input` and `output` have different lengths.
#[inline]
pub fn scale(input: &[f32], output: &mut [f32], factor: f32) {
    assert_eq!(
        input.len(),
        output.len(),
        "Input and output slices must have the same length"
    );

    for (out, &sample) in output.iter_mut().zip(input) {
        *out = sample * factor;
    }
}

/// Reference in-place scale: `buffer[i] *= factor`
#[inline]
pub fn scale_in_place(buffer: &mut [f32], factor: f32) {
    for sample in buffer.iter_mut() {
        *sample *= factor;
    }
}
