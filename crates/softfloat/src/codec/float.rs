//! Host double conversions.

use tracing::debug;

use crate::common::bits::{pack_fields, split_fields};
use crate::common::constants::{
    CANONICAL_NAN, EXP_ALL_ONES, EXP_BIAS, EXP_MIN_UNBIASED, FRAC_BITS, FRAC_MAX, IMPLICIT_BIT,
};
use crate::common::error::RangeError;
use crate::format::FpClass;

/// Mask of the 52-bit stored fraction of an f64.
const F64_FRAC_MASK: u64 = (1 << 52) - 1;

/// Biased exponent field of an f64 in `[1, 2)`, already in position.
const F64_ONE_EXP: u64 = 0x3FF << 52;

/// Exponent bias of an f64.
const F64_EXP_BIAS: i32 = 1023;

/// Scale applied to host subnormals so their exponent field becomes nonzero.
const F64_SUBNORMAL_SCALE: i32 = 64;

/// `2^FRAC_BITS` as a host double.
const FRAC_SCALE: f64 = (1u32 << FRAC_BITS) as f64;

/// Splits a positive finite nonzero magnitude into a mantissa in `[1, 2)`
/// and an unbiased binary exponent.
fn decompose(magnitude: f64) -> (f64, i32) {
    let (bits, adjust) = if magnitude.to_bits() >> 52 == 0 {
        (
            (magnitude * 2f64.powi(F64_SUBNORMAL_SCALE)).to_bits(),
            F64_SUBNORMAL_SCALE,
        )
    } else {
        (magnitude.to_bits(), 0)
    };
    let exponent = ((bits >> 52) & 0x7FF) as i32 - F64_EXP_BIAS - adjust;
    let mantissa = f64::from_bits((bits & F64_FRAC_MASK) | F64_ONE_EXP);
    (mantissa, exponent)
}

/// Encodes and reports whether a finite input saturated to infinity.
fn encode_inner(value: f64) -> (u16, bool) {
    if value.is_nan() {
        return (CANONICAL_NAN, false);
    }

    let sign = u16::from(value.is_sign_negative());
    if value.is_infinite() {
        return (pack_fields(sign, EXP_ALL_ONES, 0), false);
    }
    if value == 0.0 {
        return (pack_fields(sign, 0, 0), false);
    }

    let magnitude = value.abs();
    let (mantissa, exponent) = decompose(magnitude);
    let exp_bits = exponent + EXP_BIAS;

    if exp_bits <= 0 {
        // Below 2^-6: scale onto the subnormal grid. Fraction 0 is a signed zero.
        let scaled = magnitude * 2f64.powi(-EXP_MIN_UNBIASED) * FRAC_SCALE;
        let fraction = scaled.round_ties_even();
        if fraction >= f64::from(IMPLICIT_BIT) {
            return (pack_fields(sign, 1, 0), false);
        }
        return (pack_fields(sign, 0, fraction as u16), false);
    }

    if exp_bits >= i32::from(EXP_ALL_ONES) {
        debug!(value, "encode saturated to infinity");
        return (pack_fields(sign, EXP_ALL_ONES, 0), true);
    }

    let mut exp_bits = exp_bits as u16;
    let mut fraction = ((mantissa - 1.0) * FRAC_SCALE).round_ties_even() as u16;
    if fraction > FRAC_MAX {
        fraction = 0;
        exp_bits += 1;
        if exp_bits >= EXP_ALL_ONES {
            debug!(value, "encode rounded up to infinity");
            return (pack_fields(sign, EXP_ALL_ONES, 0), true);
        }
    }

    (pack_fields(sign, exp_bits, fraction), false)
}

/// Encodes a host double as a SEF pattern.
///
/// NaN becomes the canonical NaN, infinities and zeros keep their sign, and
/// magnitudes beyond the largest finite value saturate to infinity. Finite
/// in-range values are rounded to nearest, ties to even.
///
/// # Examples
///
/// ```
/// use sef_core::codec::{decode, encode};
///
/// assert_eq!(encode(1.5), 0x3C00);
/// assert_eq!(decode(encode(-0.0)).to_bits(), (-0.0f64).to_bits());
/// assert_eq!(encode(1.0e6), 0x7800);
/// ```
pub fn encode(value: f64) -> u16 {
    encode_inner(value).0
}

/// Encodes a host double, refusing finite values that would saturate.
///
/// # Errors
///
/// Returns [`RangeError::Overflow`] when a finite `value` rounds beyond the
/// largest finite SEF value. NaN and infinite inputs encode as usual.
pub fn encode_checked(value: f64) -> Result<u16, RangeError> {
    match encode_inner(value) {
        (_, true) => Err(RangeError::Overflow { value }),
        (bits, false) => Ok(bits),
    }
}

/// Decodes a SEF pattern to a host double.
///
/// Every non-NaN pattern decodes exactly. NaN patterns decode to a host NaN
/// whose sign and payload are unspecified.
pub fn decode(bits: u16) -> f64 {
    let (sign, exponent, fraction) = split_fields(bits);
    let magnitude = match FpClass::classify(exponent, fraction) {
        FpClass::Zero => 0.0,
        FpClass::Subnormal => f64::from(fraction) / FRAC_SCALE * 2f64.powi(EXP_MIN_UNBIASED),
        FpClass::Normal => {
            (1.0 + f64::from(fraction) / FRAC_SCALE)
                * 2f64.powi(i32::from(exponent) - EXP_BIAS)
        }
        FpClass::Infinite => f64::INFINITY,
        FpClass::Nan => return f64::NAN,
    };
    if sign == 1 { -magnitude } else { magnitude }
}
