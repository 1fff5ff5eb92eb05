//! Property-based tests for sdr-math
//!
//! Uses proptest to check that the vector kernels reproduce their scalar
//! references bit for bit and that the references satisfy the symmetries of
//! atan2.

use proptest::prelude::*;
use sdr_math::complex::{conj, conj_in_place, conj_slice, Complex32};
use sdr_math::{math, scalar};

use test_utils::*;

use proptest::test_runner::Config as ProptestConfig;

fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 10_000,
        ..ProptestConfig::default()
    }
}

/// Vector `atan2_fast` matches the scalar reference in every lane
#[test]
fn test_atan2_fast_vector_matches_reference() {
    proptest!(proptest_config(), |((y, x) in atan2_pair())| {
        let expected = scalar::atan2_fast(y, x);
        for (lane, value) in eval_lanes(math::atan2_fast, y, x).into_iter().enumerate() {
            assert_same_bits(value, expected, &format!("atan2_fast({}, {}) lane {}", y, x, lane));
        }
    });
}

/// Vector `atan2_fast_alt` matches the scalar reference in every lane
#[test]
fn test_atan2_fast_alt_vector_matches_reference() {
    proptest!(proptest_config(), |((y, x) in atan2_pair())| {
        let expected = scalar::atan2_fast_alt(y, x);
        for (lane, value) in eval_lanes(math::atan2_fast_alt, y, x).into_iter().enumerate() {
            assert_same_bits(value, expected, &format!("atan2_fast_alt({}, {}) lane {}", y, x, lane));
        }
    });
}

/// Reflecting across the x-axis negates the angle
#[test]
fn test_atan2_odd_in_y() {
    proptest!(proptest_config(), |((y, x) in (nonzero_iq_component(), iq_component()))| {
        prop_assert_eq!(scalar::atan2_fast(-y, x), -scalar::atan2_fast(y, x));
        prop_assert_eq!(scalar::atan2_fast_alt(-y, x), -scalar::atan2_fast_alt(y, x));
    });
}

/// Both approximations stay within their bounds over the unit square
#[test]
fn test_atan2_error_bounds_random() {
    proptest!(proptest_config(), |((y, x) in (iq_component(), iq_component()))| {
        prop_assume!(x != 0.0 || y != 0.0);
        let expected = ref_atan2(y, x);
        prop_assert!(angle_error(scalar::atan2_fast(y, x), expected) <= ATAN2_FAST_MAX_ERROR);
        prop_assert!(angle_error(scalar::atan2_fast_alt(y, x), expected) <= ATAN2_FAST_ALT_MAX_ERROR);
    });
}

/// Out-of-place and in-place scaling agree, and both equal a plain multiply
#[test]
fn test_scale_matches_multiply() {
    proptest!(proptest_config(), |(
        input in prop::collection::vec(normal_f32(), 0..64),
        factor in normal_f32(),
    )| {
        let mut output = vec![0.0; input.len()];
        scalar::scale(&input, &mut output, factor);

        let mut buffer = input.clone();
        scalar::scale_in_place(&mut buffer, factor);

        for i in 0..input.len() {
            assert_same_bits(output[i], input[i] * factor, "scale");
            assert_same_bits(buffer[i], output[i], "scale_in_place");
        }
    });
}

/// Conjugation negates the imaginary part and nothing else
#[test]
fn test_conj_properties() {
    proptest!(|(samples in prop::collection::vec((normal_f32(), normal_f32()), 0..32))| {
        let input: Vec<Complex32> = samples.iter().map(|&(re, im)| Complex32::new(re, im)).collect();
        let mut output = vec![Complex32::new(0.0, 0.0); input.len()];
        conj_slice(&input, &mut output);

        let mut buffer = input.clone();
        conj_in_place(&mut buffer);

        for i in 0..input.len() {
            prop_assert_eq!(output[i].re, input[i].re);
            prop_assert_eq!(output[i].im, -input[i].im);
            prop_assert_eq!(output[i], conj(input[i]));
            prop_assert_eq!(buffer[i], output[i]);
        }
    });
}
