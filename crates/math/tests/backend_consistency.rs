//! Backend consistency tests
//!
//! Every lane of the default backend must produce exactly what scalar f32
//! arithmetic produces. The dispatch layer relies on this to keep vector and
//! scalar paths bit-identical.

use sdr_math::{DefaultSimdVector, SimdMask, SimdVector};

#[repr(align(32))]
struct Aligned([f32; 16]);

fn lanes_of(v: DefaultSimdVector) -> Vec<f32> {
    let mut out = vec![0.0; DefaultSimdVector::LANES];
    v.to_slice(&mut out);
    out
}

fn mask_lanes(mask: <DefaultSimdVector as SimdVector>::Mask) -> Vec<bool> {
    let picked = DefaultSimdVector::select(
        mask,
        DefaultSimdVector::splat(1.0),
        DefaultSimdVector::splat(0.0),
    );
    lanes_of(picked).into_iter().map(|v| v == 1.0).collect()
}

#[test]
fn test_backend_arithmetic_consistency() {
    let test_values = [
        (2.0f32, 3.0f32),
        (1.5, 2.5),
        (-1.0, 4.0),
        (0.0, 5.0),
        (100.0, 0.01),
        (1.0 / 3.0, 7.0),
    ];

    for &(a, b) in &test_values {
        let vec_a = DefaultSimdVector::splat(a);
        let vec_b = DefaultSimdVector::splat(b);

        for (i, v) in lanes_of(vec_a.add(vec_b)).into_iter().enumerate() {
            assert_eq!(v.to_bits(), (a + b).to_bits(), "Addition mismatch at lane {}", i);
        }
        for (i, v) in lanes_of(vec_a.sub(vec_b)).into_iter().enumerate() {
            assert_eq!(v.to_bits(), (a - b).to_bits(), "Subtraction mismatch at lane {}", i);
        }
        for (i, v) in lanes_of(vec_a.mul(vec_b)).into_iter().enumerate() {
            assert_eq!(v.to_bits(), (a * b).to_bits(), "Multiplication mismatch at lane {}", i);
        }
        for (i, v) in lanes_of(vec_a.div(vec_b)).into_iter().enumerate() {
            assert_eq!(v.to_bits(), (a / b).to_bits(), "Division mismatch at lane {}", i);
        }
    }
}

#[test]
fn test_neg_and_abs_handle_signed_zero() {
    let zero = DefaultSimdVector::splat(0.0);
    let neg_zero = DefaultSimdVector::splat(-0.0);

    for v in lanes_of(zero.neg()) {
        assert_eq!(v.to_bits(), (-0.0f32).to_bits());
    }
    for v in lanes_of(neg_zero.abs()) {
        assert_eq!(v.to_bits(), 0.0f32.to_bits());
    }
    for v in lanes_of(DefaultSimdVector::splat(-2.5).abs()) {
        assert_eq!(v, 2.5);
    }
}

#[test]
fn test_backend_comparison_consistency() {
    let test_values = [
        (2.0, 3.0, true, false, false),
        (3.0, 2.0, false, true, false),
        (2.0, 2.0, false, false, true),
        (0.0, -0.0, false, false, true),
    ];

    for &(a, b, expected_lt, expected_gt, expected_eq) in &test_values {
        let vec_a = DefaultSimdVector::splat(a);
        let vec_b = DefaultSimdVector::splat(b);

        for lane in mask_lanes(vec_a.lt(vec_b)) {
            assert_eq!(lane, expected_lt, "{} < {}", a, b);
        }
        for lane in mask_lanes(vec_a.gt(vec_b)) {
            assert_eq!(lane, expected_gt, "{} > {}", a, b);
        }
        for lane in mask_lanes(vec_a.eq(vec_b)) {
            assert_eq!(lane, expected_eq, "{} == {}", a, b);
        }
    }
}

#[test]
fn test_nan_compares_false() {
    let nan = DefaultSimdVector::splat(f32::NAN);
    let one = DefaultSimdVector::splat(1.0);

    assert!(mask_lanes(nan.lt(one)).iter().all(|&lane| !lane));
    assert!(mask_lanes(nan.gt(one)).iter().all(|&lane| !lane));
    assert!(mask_lanes(nan.eq(nan)).iter().all(|&lane| !lane));
    assert!(mask_lanes(one.eq(nan)).iter().all(|&lane| !lane));
}

#[test]
fn test_select_and_mask_logic() {
    let a = DefaultSimdVector::splat(1.0);
    let b = DefaultSimdVector::splat(2.0);

    let t = a.lt(b);
    let f = a.gt(b);

    assert!(mask_lanes(t.and(t)).iter().all(|&lane| lane));
    assert!(mask_lanes(t.and(f)).iter().all(|&lane| !lane));
    assert!(mask_lanes(f.and(t)).iter().all(|&lane| !lane));

    for v in lanes_of(DefaultSimdVector::select(t, a, b)) {
        assert_eq!(v, 1.0);
    }
    for v in lanes_of(DefaultSimdVector::select(f, a, b)) {
        assert_eq!(v, 2.0);
    }
}

#[test]
fn test_aligned_load_store_round_trip() {
    let mut src = Aligned([0.0; 16]);
    for (i, v) in src.0.iter_mut().enumerate() {
        *v = i as f32 * 0.25;
    }
    let mut dst = Aligned([0.0; 16]);

    let lanes = DefaultSimdVector::LANES;
    assert!(DefaultSimdVector::ALIGN <= 32);

    for start in (0..16).step_by(lanes) {
        let v = DefaultSimdVector::from_aligned_slice(&src.0[start..start + lanes]);
        v.to_aligned_slice(&mut dst.0[start..start + lanes]);
    }

    assert_eq!(src.0, dst.0);
}

#[test]
fn test_horizontal_sum() {
    let v = DefaultSimdVector::splat(0.5);
    assert_eq!(v.horizontal_sum(), 0.5 * DefaultSimdVector::LANES as f32);
}

/// Integration test: normalise 8-bit magnitudes with the vector backend
#[test]
fn test_simple_normalisation_pipeline() {
    const BLOCK_SIZE: usize = 64;
    let mut input = [0.0f32; BLOCK_SIZE];
    let mut output = [0.0f32; BLOCK_SIZE];

    for (i, v) in input.iter_mut().enumerate() {
        *v = (i * 4) as f32;
    }

    let factor = DefaultSimdVector::splat(1.0 / 256.0);
    let lanes = DefaultSimdVector::LANES;
    for chunk_start in (0..BLOCK_SIZE).step_by(lanes) {
        let v = DefaultSimdVector::from_slice(&input[chunk_start..]);
        v.mul(factor).to_slice(&mut output[chunk_start..]);
    }

    for i in 0..BLOCK_SIZE {
        assert_eq!(output[i], input[i] * (1.0 / 256.0), "Mismatch at sample {}", i);
    }
}
