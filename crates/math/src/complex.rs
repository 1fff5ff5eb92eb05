//! Complex sample helpers
//!
//! I/Q samples are `num_complex::Complex32`. The conjugate is the building
//! block of the quadrature FM discriminator `arg(s[n] * conj(s[n-1]))`.

pub use num_complex::Complex32;

/// Complex conjugate: `(re, im) -> (re, -im)`
///
/// # Example
///
/// ```rust
/// use sdr_math::complex::{conj, Complex32};
///
/// assert_eq!(conj(Complex32::new(1.0, -0.2)), Complex32::new(1.0, 0.2));
/// ```
#[inline(always)]
pub fn conj(c: Complex32) -> Complex32 {
    Complex32::new(c.re, -c.im)
}

/// Conjugate every sample of `input` into `output`
///
/// # Panics
///
/// Panics if `input` and `output` have different lengths.
#[inline]
pub fn conj_slice(input: &[Complex32], output: &mut [Complex32]) {
    assert_eq!(
        input.len(),
        output.len(),
        "Input and output slices must have the same length"
    );

    for (out, &sample) in output.iter_mut().zip(input) {
        *out = conj(sample);
    }
}

/// Conjugate every sample of `buffer` in place
#[inline]
pub fn conj_in_place(buffer: &mut [Complex32]) {
    for sample in buffer.iter_mut() {
        sample.im = -sample.im;
    }
}
