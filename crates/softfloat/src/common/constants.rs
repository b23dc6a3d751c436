//! SEF Format Constants.
//!
//! This module is the single source of the format parameters shared by the
//! codec and the adder. It includes:
//! 1. **Field Widths:** Sign, exponent, and fraction widths and their bit positions.
//! 2. **Exponent Encoding:** Bias and the reserved all-zeros/all-ones exponents.
//! 3. **Adder Precision:** The number of extra low-order guard bits.
//! 4. **Named Patterns:** Zeros, infinities, canonical NaN, and range limits.

/// Width of the exponent field in bits.
pub const EXP_BITS: u32 = 4;

/// Width of the stored fraction field in bits.
pub const FRAC_BITS: u32 = 11;

/// Total width of a SEF pattern in bits.
pub const PATTERN_BITS: u32 = 1 + EXP_BITS + FRAC_BITS;

/// Exponent bias: `stored = unbiased + EXP_BIAS`.
pub const EXP_BIAS: i32 = 7;

/// Extra low-order bits the adder carries for alignment and rounding.
pub const GUARD_BITS: u32 = 8;

/// Stored exponent reserved for infinities and NaNs (15).
pub const EXP_ALL_ONES: u16 = (1 << EXP_BITS) - 1;

/// Largest stored exponent of a normal number (14).
pub const EXP_MAX_NORMAL: u16 = EXP_ALL_ONES - 1;

/// Mask of the fraction field, also its largest value (2047).
pub const FRAC_MAX: u16 = (1 << FRAC_BITS) - 1;

/// Implicit leading mantissa bit of a normal number.
pub const IMPLICIT_BIT: u16 = 1 << FRAC_BITS;

/// Unbiased exponent shared by the minimum normal and every subnormal (-6).
pub const EXP_MIN_UNBIASED: i32 = 1 - EXP_BIAS;

/// Bit position of the sign.
pub const SIGN_SHIFT: u32 = PATTERN_BITS - 1;

/// Bit position of the exponent's least significant bit.
pub const EXP_SHIFT: u32 = FRAC_BITS;

/// Bit position of the fraction's least significant bit.
pub const FRAC_SHIFT: u32 = 0;

/// Positive zero.
pub const POS_ZERO: u16 = 0x0000;

/// Negative zero.
pub const NEG_ZERO: u16 = 0x8000;

/// Positive infinity.
pub const POS_INFINITY: u16 = 0x7800;

/// Negative infinity.
pub const NEG_INFINITY: u16 = 0xF800;

/// Canonical NaN: sign 0, exponent all ones, fraction 1.
pub const CANONICAL_NAN: u16 = 0x7801;

/// Largest finite magnitude, `(2 - 2^-11) * 2^7` = 255.9375.
pub const MAX_NORMAL: u16 = 0x77FF;

/// Smallest normal magnitude, `2^-6`.
pub const MIN_NORMAL: u16 = 0x0800;

/// Smallest subnormal magnitude, `2^-17`.
pub const MIN_SUBNORMAL: u16 = 0x0001;
