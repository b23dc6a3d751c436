//! Ordinary finite sums.

use pretty_assertions::assert_eq;
use rstest::rstest;
use sef_core::Fpu;
use sef_core::codec::{decode, encode};

use crate::common::{add_f64, init_tracing, reference_add};

#[rstest]
#[case::same_exponent_carry(1.5, 2.5, 4.0)]
#[case::halves(0.5, 0.5, 1.0)]
#[case::mixed_signs(3.5, -1.5, 2.0)]
#[case::negative_result(-3.25, 1.5, -1.75)]
#[case::exact_difference(1.0, -0.5, 0.5)]
#[case::zero_identity(0.0, 5.0, 5.0)]
#[case::near_max(255.9375, -255.9375, 0.0)]
fn test_exact_sums(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
    init_tracing();
    assert_eq!(add_f64(a, b), expected, "{a} + {b}");
    assert_eq!(add_f64(b, a), expected, "{b} + {a}");
}

#[rstest]
#[case::hundred_and_a_tenth(0x6C80, 0x1CCD, 0x6C83)]
#[case::tenth_and_fifth(0x1CCD, 0x24CD, 0x299A)]
#[case::tiny_addend_vanishes(0x4000, 0x8001, 0x4000)]
fn test_rounded_sums(#[case] a: u16, #[case] b: u16, #[case] expected: u16) {
    assert_eq!(Fpu::add(a, b), expected);
    assert_eq!(reference_add(a, b), expected);
}

#[test]
fn test_cancellation_gives_positive_zero() {
    let pos = encode(24.0);
    let neg = encode(-24.0);
    assert_eq!(Fpu::add(pos, neg), 0x0000);
    assert_eq!(Fpu::add(neg, pos), 0x0000);
    assert_eq!(Fpu::add(0x0001, 0x8001), 0x0000);
    assert_eq!(Fpu::add(0xF7FF, 0x77FF), 0x0000);
}

#[rstest]
#[case::subnormals_add_exactly(0x0001, 0x0001, 0x0002)]
#[case::two_pow_minus_13_doubled(0x0010, 0x0010, 0x0020)]
#[case::two_pow_minus_14_doubled(0x0008, 0x0008, 0x0010)]
#[case::largest_subnormal(0x03FF, 0x0400, 0x07FF)]
#[case::subnormal_carries_into_normal(0x07FF, 0x0001, 0x0800)]
#[case::normal_drops_to_subnormal(0x0800, 0x8001, 0x07FF)]
#[case::near_cancellation(0x0401, 0x8400, 0x0001)]
#[case::normal_difference_goes_subnormal(0x0C00, 0x8801, 0x03FF)]
fn test_gradual_underflow(#[case] a: u16, #[case] b: u16, #[case] expected: u16) {
    assert_eq!(Fpu::add(a, b), expected);
    assert_eq!(Fpu::add(b, a), expected);
}

#[test]
fn test_small_normal_difference_is_exact() {
    // 1.00048828125 - 1 is 2^-11, a normal value with a short mantissa.
    assert_eq!(Fpu::add(0x3801, 0xB800), 0x0040);
    assert_eq!(decode(0x0040), 2f64.powi(-11));
}

#[test]
fn test_sign_follows_larger_magnitude() {
    assert_eq!(add_f64(-5.0, 3.0), -2.0);
    assert_eq!(add_f64(5.0, -3.0), 2.0);
    assert_eq!(add_f64(-5.0, -3.0), -8.0);
}

#[test]
fn test_far_apart_exponents() {
    // 2^-20 encodes to +0, so the larger operand comes back unchanged.
    assert_eq!(add_f64(1.0, 2f64.powi(-20)), 1.0);
    assert_eq!(add_f64(-1.0, 2f64.powi(-20)), -1.0);
    // The smallest subnormal against the largest normal only sets sticky.
    assert_eq!(Fpu::add(0x77FF, 0x0001), 0x77FF);
    assert_eq!(Fpu::add(0xF7FF, 0x0001), 0xF7FF);
}
