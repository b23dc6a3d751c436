//! Guard/round/sticky arithmetic on widened mantissas.
//!
//! Mantissas are held in a `u64` as `1.fraction` followed by [`GUARD_BITS`]
//! extra low-order bits. Every right shift goes through
//! [`shift_right_sticky`], so no nonzero bit is discarded without being
//! folded into bit 0.

use crate::common::constants::{FRAC_BITS, GUARD_BITS};

/// Bit position of the implicit leading one in a widened mantissa.
pub const LEADING_BIT: u32 = FRAC_BITS + GUARD_BITS;

/// Smallest exponent the normalizer may reach; subnormals share it.
pub const MIN_EXPONENT: i32 = 1;

/// Shifts `value` right by `shift`, ORing every discarded bit into bit 0.
///
/// Shifts of 64 or more collapse to `1` for a nonzero value and `0` otherwise.
#[inline]
pub const fn shift_right_sticky(value: u64, shift: u32) -> u64 {
    if shift == 0 {
        return value;
    }
    if shift >= u64::BITS {
        return (value != 0) as u64;
    }
    let lost = value & ((1 << shift) - 1);
    (value >> shift) | (lost != 0) as u64
}

/// Brings a widened mantissa back to `[2^LEADING_BIT, 2^(LEADING_BIT+1))`.
///
/// Oversized mantissas shift right with sticky and raise the exponent.
/// Undersized ones shift left while the exponent stays above
/// [`MIN_EXPONENT`]; a mantissa still short at that floor is subnormal.
///
/// # Returns
///
/// The normalized `(mantissa, exponent)`.
pub const fn normalize(mut mantissa: u64, mut exponent: i32) -> (u64, i32) {
    while mantissa >= 1 << (LEADING_BIT + 1) {
        mantissa = shift_right_sticky(mantissa, 1);
        exponent += 1;
    }
    while mantissa < 1 << LEADING_BIT && exponent > MIN_EXPONENT {
        mantissa <<= 1;
        exponent -= 1;
    }
    (mantissa, exponent)
}

/// The three rounding bits read from the guard region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grs {
    /// Most significant guard bit: the half-ULP position.
    pub guard: bool,
    /// The bit below `guard`.
    pub round: bool,
    /// OR of every remaining guard bit, including alignment sticky.
    pub sticky: bool,
}

impl Grs {
    /// Reads the guard region of a widened mantissa.
    pub const fn from_mantissa(mantissa: u64) -> Self {
        Self {
            guard: (mantissa >> (GUARD_BITS - 1)) & 1 == 1,
            round: (mantissa >> (GUARD_BITS - 2)) & 1 == 1,
            sticky: mantissa & ((1 << (GUARD_BITS - 2)) - 1) != 0,
        }
    }

    /// True if any discarded bit is set.
    pub const fn is_inexact(self) -> bool {
        self.guard || self.round || self.sticky
    }

    /// Round-to-nearest-even decision given the kept LSB.
    pub const fn rounds_up(self, lsb: bool) -> bool {
        self.guard && (self.round || self.sticky || lsb)
    }
}

/// A mantissa rounded to `FRAC_BITS + 1` bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rounded {
    /// `implicit.fraction`, below `2^(FRAC_BITS + 1)`.
    pub mantissa: u64,
    /// Biased exponent after any rounding carry.
    pub exponent: i32,
    /// True if the rounding discarded a nonzero bit.
    pub inexact: bool,
}

/// Drops the guard region of a normalized mantissa, rounding to nearest,
/// ties to even.
///
/// A carry out of the top bit shifts right once and bumps the exponent.
pub const fn round_nearest_even(mantissa: u64, exponent: i32) -> Rounded {
    let grs = Grs::from_mantissa(mantissa);
    let mut kept = mantissa >> GUARD_BITS;
    let mut exponent = exponent;

    if grs.rounds_up(kept & 1 == 1) {
        kept += 1;
        if kept >= 1 << (FRAC_BITS + 1) {
            kept >>= 1;
            exponent += 1;
        }
    }

    Rounded {
        mantissa: kept,
        exponent,
        inexact: grs.is_inexact(),
    }
}
