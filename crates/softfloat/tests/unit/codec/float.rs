//! Host double encode/decode tests.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use sef_core::codec::{decode, encode, encode_checked};
use sef_core::common::RangeError;
use sef_core::{FpClass, Sef};

use crate::common::init_tracing;

#[rstest]
#[case::one_and_a_half(1.5, 0x3C00)]
#[case::two_and_a_half(2.5, 0x4200)]
#[case::half(0.5, 0x3000)]
#[case::one(1.0, 0x3800)]
#[case::negative(-1.5, 0xBC00)]
#[case::five(5.0, 0x4A00)]
#[case::hundred(100.0, 0x6C80)]
#[case::max_normal(255.9375, 0x77FF)]
#[case::min_normal(0.015625, 0x0800)]
#[case::largest_subnormal_exponent(0.0078125, 0x0400)]
#[case::min_subnormal(7.62939453125e-6, 0x0001)]
#[case::point_one(0.1, 0x1CCD)]
#[case::third(1.0 / 3.0, 0x2AAB)]
#[case::nearest_max(255.95, 0x77FF)]
fn test_encode_finite(#[case] value: f64, #[case] expected: u16) {
    assert_eq!(encode(value), expected, "encode({value})");
}

#[rstest]
#[case::half_ulp_above_one(1.0 + 2f64.powi(-12), 0x3800)]
#[case::three_half_ulps_above_one(1.0 + 3.0 * 2f64.powi(-12), 0x3802)]
#[case::half_min_subnormal(2f64.powi(-18), 0x0000)]
#[case::three_quarter_min_subnormal(3.0 * 2f64.powi(-19), 0x0001)]
#[case::negative_tiny(-(2f64.powi(-18)), 0x8000)]
fn test_encode_ties_to_even(#[case] value: f64, #[case] expected: u16) {
    assert_eq!(encode(value), expected, "encode({value})");
}

#[test]
fn test_encode_saturates() {
    init_tracing();
    assert_eq!(encode(256.0), 0x7800);
    assert_eq!(encode(1.0e6), 0x7800);
    assert_eq!(encode(-1.0e6), 0xF800);
    assert_eq!(encode(5000.0), 0x7800);
    // Half an ULP above the maximum rounds up to an even fraction that
    // no longer fits.
    assert_eq!(encode(255.96875), 0x7800);
    assert_eq!(encode(f64::MAX), 0x7800);
}

#[test]
fn test_encode_specials() {
    assert_eq!(encode(f64::NAN), 0x7801);
    assert_eq!(encode(-f64::NAN), 0x7801);
    assert_eq!(encode(f64::INFINITY), 0x7800);
    assert_eq!(encode(f64::NEG_INFINITY), 0xF800);
    assert_eq!(encode(0.0), 0x0000);
    assert_eq!(encode(-0.0), 0x8000);
}

#[test]
fn test_encode_host_subnormal_flushes_to_signed_zero() {
    assert_eq!(encode(f64::from_bits(1)), 0x0000);
    assert_eq!(encode(-f64::from_bits(1)), 0x8000);
    assert_eq!(encode(f64::MIN_POSITIVE), 0x0000);
}

#[test]
fn test_encode_subnormal_carries_into_min_normal() {
    let just_below = 2047.75 / 2048.0 * 2f64.powi(-6);
    assert_eq!(encode(just_below), 0x0800);
}

#[rstest]
#[case(0x3C00, 1.5)]
#[case(0x0001, 7.62939453125e-6)]
#[case(0x07FF, 0.01561737060546875)]
#[case(0x0800, 0.015625)]
#[case(0x77FF, 255.9375)]
#[case(0xC500, -3.25)]
#[case(0x7800, f64::INFINITY)]
#[case(0xF800, f64::NEG_INFINITY)]
fn test_decode(#[case] bits: u16, #[case] expected: f64) {
    assert_eq!(decode(bits), expected);
}

#[test]
fn test_decode_signed_zero() {
    assert_eq!(decode(0x0000).to_bits(), 0.0f64.to_bits());
    assert_eq!(decode(0x8000).to_bits(), (-0.0f64).to_bits());
}

#[test]
fn test_decode_nan_patterns() {
    for bits in [0x7801, 0x7C00, 0x7FFF, 0xF801, 0xFFFF] {
        assert!(decode(bits).is_nan(), "{bits:#06x} should decode to NaN");
    }
}

#[test]
fn test_round_trip_every_pattern() {
    for bits in 0..=u16::MAX {
        let round_trip = encode(decode(bits));
        if Sef::from_bits(bits).is_nan() {
            assert_eq!(round_trip, 0x7801, "NaN {bits:#06x} should canonicalize");
            assert_eq!(Sef::from_bits(round_trip).class(), FpClass::Nan);
        } else {
            assert_eq!(round_trip, bits, "pattern {bits:#06x} did not survive");
        }
    }
}

#[test]
fn test_decode_is_monotonic() {
    for bits in 0..0x7800u16 {
        assert!(
            decode(bits) < decode(bits + 1),
            "{bits:#06x} and its successor are out of order"
        );
    }
}

#[test]
fn test_encode_checked() {
    assert_eq!(encode_checked(1.5), Ok(0x3C00));
    assert_eq!(encode_checked(255.9375), Ok(0x77FF));
    assert_eq!(encode_checked(-0.0), Ok(0x8000));
    assert_eq!(encode_checked(f64::INFINITY), Ok(0x7800));
    assert_eq!(encode_checked(f64::NAN), Ok(0x7801));
    assert_eq!(
        encode_checked(1.0e6),
        Err(RangeError::Overflow { value: 1.0e6 })
    );
    assert_eq!(
        encode_checked(-255.96875),
        Err(RangeError::Overflow { value: -255.96875 })
    );
}

proptest! {
    #[test]
    fn prop_encode_picks_nearest(value in 0.0f64..255.9375) {
        let bits = encode(value);
        let error = (decode(bits) - value).abs();
        if bits > 0 {
            prop_assert!(error <= (decode(bits - 1) - value).abs());
        }
        if bits < 0x77FF {
            prop_assert!(error <= (decode(bits + 1) - value).abs());
        }
    }

    #[test]
    fn prop_encode_is_odd(value in -300.0f64..300.0) {
        prop_assert_eq!(encode(-value), encode(value) ^ 0x8000);
    }
}
