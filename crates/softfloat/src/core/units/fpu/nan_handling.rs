//! NaN and infinity propagation for the adder.
//!
//! Any NaN operand yields the canonical NaN (sign 0, fraction 1); its payload
//! and sign are never propagated. SEF has no signaling NaNs, so a NaN operand
//! raises no flag. `inf + -inf` is the only invalid addition.

use tracing::trace;

use super::exception_flags::FpFlags;
use crate::common::bits::split_fields;
use crate::common::constants::{CANONICAL_NAN, EXP_ALL_ONES};

/// True for any NaN pattern.
#[inline]
pub const fn is_nan(bits: u16) -> bool {
    let (_, exponent, fraction) = split_fields(bits);
    exponent == EXP_ALL_ONES && fraction != 0
}

/// True for either infinity.
#[inline]
pub const fn is_infinite(bits: u16) -> bool {
    let (_, exponent, fraction) = split_fields(bits);
    exponent == EXP_ALL_ONES && fraction == 0
}

/// Resolves additions with a NaN or infinite operand.
///
/// # Returns
///
/// `Some((result, flags))` when either operand is NaN or infinite, `None`
/// when both are finite and the caller must compute the sum.
pub fn propagate_specials(a: u16, b: u16) -> Option<(u16, FpFlags)> {
    if is_nan(a) || is_nan(b) {
        trace!(a, b, "nan operand");
        return Some((CANONICAL_NAN, FpFlags::NONE));
    }

    match (is_infinite(a), is_infinite(b)) {
        (true, true) if a != b => {
            trace!(a, b, "opposite infinities");
            Some((CANONICAL_NAN, FpFlags::NV))
        }
        (true, _) => Some((a, FpFlags::NONE)),
        (false, true) => Some((b, FpFlags::NONE)),
        (false, false) => None,
    }
}
