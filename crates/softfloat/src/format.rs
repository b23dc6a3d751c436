//! The SEF value type.
//!
//! A `Sef` is an immutable `(sign, exponent, fraction)` triple laid out as
//! `sign(1) | exponent(4) | fraction(11)`, MSB first. Every field is masked
//! to its width on construction, so every `Sef` maps to exactly one 16-bit
//! pattern and back.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use serde::Serialize;

use crate::codec;
use crate::common::bits::{pack_fields, split_fields};
use crate::common::constants::{
    CANONICAL_NAN, EXP_ALL_ONES, FRAC_MAX, MAX_NORMAL, MIN_NORMAL, MIN_SUBNORMAL, NEG_INFINITY,
    NEG_ZERO, POS_INFINITY, POS_ZERO,
};
use crate::common::error::FormatError;
use crate::core::units::fpu::Fpu;

/// Value class of a pattern, determined by its exponent and fraction alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FpClass {
    /// Exponent 0, fraction 0.
    Zero,
    /// Exponent 0, fraction nonzero; no implicit bit.
    Subnormal,
    /// Exponent 1..=14; implicit leading 1.
    Normal,
    /// Exponent 15, fraction 0.
    Infinite,
    /// Exponent 15, fraction nonzero.
    Nan,
}

impl FpClass {
    /// Classifies a stored `(exponent, fraction)` pair.
    pub const fn classify(exponent: u16, fraction: u16) -> Self {
        match (exponent, fraction) {
            (0, 0) => Self::Zero,
            (0, _) => Self::Subnormal,
            (EXP_ALL_ONES, 0) => Self::Infinite,
            (EXP_ALL_ONES, _) => Self::Nan,
            _ => Self::Normal,
        }
    }
}

impl fmt::Display for FpClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Zero => "zero",
            Self::Subnormal => "subnormal",
            Self::Normal => "normal",
            Self::Infinite => "infinite",
            Self::Nan => "nan",
        };
        f.write_str(name)
    }
}

/// A SEF 16-bit floating-point value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sef {
    sign: u16,
    exponent: u16,
    fraction: u16,
}

impl Sef {
    /// Positive zero.
    pub const ZERO: Self = Self::from_bits(POS_ZERO);
    /// Negative zero.
    pub const NEG_ZERO: Self = Self::from_bits(NEG_ZERO);
    /// Positive infinity.
    pub const INFINITY: Self = Self::from_bits(POS_INFINITY);
    /// Negative infinity.
    pub const NEG_INFINITY: Self = Self::from_bits(NEG_INFINITY);
    /// Canonical NaN.
    pub const NAN: Self = Self::from_bits(CANONICAL_NAN);
    /// Largest finite value (255.9375).
    pub const MAX: Self = Self::from_bits(MAX_NORMAL);
    /// Smallest positive normal value (2^-6).
    pub const MIN_POSITIVE: Self = Self::from_bits(MIN_NORMAL);
    /// Smallest positive subnormal value (2^-17).
    pub const MIN_POSITIVE_SUBNORMAL: Self = Self::from_bits(MIN_SUBNORMAL);

    /// Creates a value from its fields, masking each to its width.
    ///
    /// # Arguments
    ///
    /// * `sign`     - Sign bit; only bit 0 is kept.
    /// * `exponent` - Biased exponent; only the low 4 bits are kept.
    /// * `fraction` - Stored fraction; only the low 11 bits are kept.
    pub const fn new(sign: u16, exponent: u16, fraction: u16) -> Self {
        Self {
            sign: sign & 1,
            exponent: exponent & EXP_ALL_ONES,
            fraction: fraction & FRAC_MAX,
        }
    }

    /// Creates a value from a raw 16-bit pattern.
    pub const fn from_bits(bits: u16) -> Self {
        let (sign, exponent, fraction) = split_fields(bits);
        Self {
            sign,
            exponent,
            fraction,
        }
    }

    /// Returns the raw 16-bit pattern.
    pub const fn to_bits(self) -> u16 {
        pack_fields(self.sign, self.exponent, self.fraction)
    }

    /// Encodes a host double. See [`codec::encode`].
    pub fn from_f64(value: f64) -> Self {
        Self::from_bits(codec::encode(value))
    }

    /// Decodes to a host double. See [`codec::decode`].
    pub fn to_f64(self) -> f64 {
        codec::decode(self.to_bits())
    }

    /// Sign bit (0 or 1).
    pub const fn sign(self) -> u16 {
        self.sign
    }

    /// Stored (biased) exponent.
    pub const fn exponent(self) -> u16 {
        self.exponent
    }

    /// Stored fraction.
    pub const fn fraction(self) -> u16 {
        self.fraction
    }

    /// Value class.
    pub const fn class(self) -> FpClass {
        FpClass::classify(self.exponent, self.fraction)
    }

    /// True for any NaN pattern.
    pub const fn is_nan(self) -> bool {
        matches!(self.class(), FpClass::Nan)
    }

    /// True for either infinity.
    pub const fn is_infinite(self) -> bool {
        matches!(self.class(), FpClass::Infinite)
    }

    /// True for either zero.
    pub const fn is_zero(self) -> bool {
        matches!(self.class(), FpClass::Zero)
    }

    /// True for nonzero values with exponent 0.
    pub const fn is_subnormal(self) -> bool {
        matches!(self.class(), FpClass::Subnormal)
    }

    /// True for values with an implicit leading bit.
    pub const fn is_normal(self) -> bool {
        matches!(self.class(), FpClass::Normal)
    }

    /// True when the sign bit is set, including `-0` and NaNs with sign 1.
    pub const fn is_sign_negative(self) -> bool {
        self.sign == 1
    }

    /// Fixed-width binary text. See [`codec::to_binary_string`].
    pub fn to_binary_string(self) -> String {
        codec::to_binary_string(self.to_bits())
    }

    /// Prefixed lowercase hex text. See [`codec::to_hex_string`].
    pub fn to_hex_string(self) -> String {
        codec::to_hex_string(self.to_bits())
    }
}

impl From<u16> for Sef {
    fn from(bits: u16) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Sef> for u16 {
    fn from(value: Sef) -> Self {
        value.to_bits()
    }
}

impl FromStr for Sef {
    type Err = FormatError;

    /// Parses binary text; see [`codec::from_binary_string`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::from_binary_string(s).map(Self::from_bits)
    }
}

impl Add for Sef {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_bits(Fpu::add(self.to_bits(), rhs.to_bits()))
    }
}

impl fmt::Display for Sef {
    /// Formats the decoded host value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}

impl fmt::Binary for Sef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.to_bits(), f)
    }
}

impl fmt::LowerHex for Sef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.to_bits(), f)
    }
}
