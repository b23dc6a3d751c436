//! Bit-field helpers for 16-bit patterns.
//!
//! All helpers build their masks in a wider integer so that a full-width
//! field (`width == 16`) never overflows the shift.

use super::constants::{
    EXP_ALL_ONES, EXP_BITS, EXP_SHIFT, FRAC_BITS, FRAC_MAX, FRAC_SHIFT, PATTERN_BITS, SIGN_SHIFT,
};

/// Returns a mask of `width` low-order ones.
#[inline]
const fn low_mask(width: u32) -> u16 {
    debug_assert!(width <= PATTERN_BITS);
    ((1u32 << width) - 1) as u16
}

/// Extracts `width` bits of `value` starting at bit `start`.
///
/// # Arguments
///
/// * `value` - The pattern to read from.
/// * `start` - Position of the field's least significant bit.
/// * `width` - Field width in bits.
///
/// # Returns
///
/// The field, right-aligned.
#[inline]
pub const fn extract_field(value: u16, start: u32, width: u32) -> u16 {
    debug_assert!(start + width <= PATTERN_BITS);
    (value >> start) & low_mask(width)
}

/// Replaces `width` bits of `value` starting at bit `start` with `bits`.
///
/// Bits of `bits` above `width` are discarded.
#[inline]
pub const fn insert_field(value: u16, start: u32, width: u32, bits: u16) -> u16 {
    debug_assert!(start + width <= PATTERN_BITS);
    let mask = low_mask(width) << start;
    (value & !mask) | ((bits << start) & mask)
}

/// Assembles a pattern from its three fields.
///
/// Each field is masked to its declared width.
#[inline]
pub const fn pack_fields(sign: u16, exponent: u16, fraction: u16) -> u16 {
    let x = insert_field(0, SIGN_SHIFT, 1, sign);
    let x = insert_field(x, EXP_SHIFT, EXP_BITS, exponent & EXP_ALL_ONES);
    insert_field(x, FRAC_SHIFT, FRAC_BITS, fraction & FRAC_MAX)
}

/// Splits a pattern into `(sign, exponent, fraction)`.
#[inline]
pub const fn split_fields(bits: u16) -> (u16, u16, u16) {
    (
        extract_field(bits, SIGN_SHIFT, 1),
        extract_field(bits, EXP_SHIFT, EXP_BITS),
        extract_field(bits, FRAC_SHIFT, FRAC_BITS),
    )
}
