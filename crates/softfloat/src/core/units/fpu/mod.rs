//! Floating-Point Unit (FPU).
//!
//! This module implements SEF addition on raw 16-bit patterns using only
//! integer arithmetic. The datapath is:
//!
//! 1. **Dispatch:** NaN, infinity, and zero operands are resolved up front.
//! 2. **Unpack:** Mantissas get their implicit bit and [`GUARD_BITS`] of
//!    extra precision; subnormals align as exponent 1.
//! 3. **Align:** The smaller operand shifts right with sticky collection.
//! 4. **Combine:** Same signs add, different signs subtract the smaller
//!    magnitude from the larger.
//! 5. **Normalize / Round:** Back to 12 significant bits, round to nearest,
//!    ties to even.
//! 6. **Finalize:** Zero, overflow to infinity, gradual underflow, or normal.
//!
//! Operations are organized into submodules:
//! - [`nan_handling`]: NaN and infinity propagation.
//! - [`rounding`]: Sticky shifts, normalization, and GRS rounding.
//! - [`exception_flags`]: Accrued IEEE exception flags.

/// NaN and infinity propagation.
pub mod nan_handling;

/// Sticky shifts, normalization, and guard/round/sticky rounding.
pub mod rounding;

/// Floating-point exception flag types.
pub mod exception_flags;

use std::cmp::Ordering;

use tracing::{debug, trace};

use self::exception_flags::FpFlags;
use self::nan_handling::propagate_specials;
use self::rounding::{MIN_EXPONENT, Rounded, normalize, round_nearest_even, shift_right_sticky};
use crate::common::bits::{pack_fields, split_fields};
use crate::common::constants::{
    EXP_ALL_ONES, FRAC_MAX, GUARD_BITS, IMPLICIT_BIT, NEG_ZERO, POS_ZERO,
};

/// A finite nonzero operand with its mantissa widened by the guard bits.
#[derive(Clone, Copy, Debug)]
struct Operand {
    sign: u16,
    exponent: i32,
    mantissa: u64,
}

impl Operand {
    fn unpack(bits: u16) -> Self {
        let (sign, exponent, fraction) = split_fields(bits);
        let mantissa = if exponent == 0 {
            fraction
        } else {
            fraction | IMPLICIT_BIT
        };
        Self {
            sign,
            exponent: i32::from(exponent).max(MIN_EXPONENT),
            mantissa: u64::from(mantissa) << GUARD_BITS,
        }
    }

    fn shifted(self, shift: u32) -> Self {
        Self {
            mantissa: shift_right_sticky(self.mantissa, shift),
            ..self
        }
    }
}

/// Floating-Point Unit for SEF addition.
///
/// Stateless; every method is a pure function of its operand patterns and
/// may be called from any thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fpu;

impl Fpu {
    /// Adds two SEF patterns.
    ///
    /// Every pattern is a valid input. The result is correctly rounded to
    /// nearest, ties to even; overflow saturates to infinity and results
    /// below the normal range degrade to subnormals.
    ///
    /// # Arguments
    ///
    /// * `a` - First operand pattern.
    /// * `b` - Second operand pattern.
    ///
    /// # Returns
    ///
    /// The pattern of `a + b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sef_core::Fpu;
    /// use sef_core::codec::{decode, encode};
    ///
    /// let sum = Fpu::add(encode(1.5), encode(2.5));
    /// assert_eq!(decode(sum), 4.0);
    ///
    /// // Opposite infinities are invalid.
    /// assert_eq!(Fpu::add(0x7800, 0xF800), 0x7801);
    /// ```
    pub fn add(a: u16, b: u16) -> u16 {
        Self::add_full(a, b).0
    }

    /// Adds two SEF patterns and returns the accrued exception flags.
    ///
    /// The result pattern is identical to [`Fpu::add`].
    ///
    /// # Returns
    ///
    /// A tuple `(result, flags)`.
    pub fn add_full(a: u16, b: u16) -> (u16, FpFlags) {
        if let Some(special) = propagate_specials(a, b) {
            return special;
        }
        if let Some(result) = Self::add_zero(a, b) {
            return (result, FpFlags::NONE);
        }

        let (x, y, exponent) = Self::align(Operand::unpack(a), Operand::unpack(b));
        let (sign, mantissa) = Self::combine(x, y);
        let (mantissa, exponent) = normalize(mantissa, exponent);
        Self::finalize(sign, round_nearest_even(mantissa, exponent))
    }

    /// Resolves sums with a zero operand.
    ///
    /// A single zero returns the other operand unchanged. Two zeros give
    /// `-0` only when both are `-0`, matching `x + 0 == 0 + x`.
    fn add_zero(a: u16, b: u16) -> Option<u16> {
        let a_zero = a & !NEG_ZERO == 0;
        let b_zero = b & !NEG_ZERO == 0;
        match (a_zero, b_zero) {
            (true, true) if a != b => Some(POS_ZERO),
            (true, _) => Some(b),
            (false, true) => Some(a),
            (false, false) => None,
        }
    }

    /// Shifts the smaller-exponent operand onto the larger exponent.
    fn align(x: Operand, y: Operand) -> (Operand, Operand, i32) {
        match x.exponent.cmp(&y.exponent) {
            Ordering::Less => {
                let shift = (y.exponent - x.exponent) as u32;
                trace!(shift, "align first operand");
                (x.shifted(shift), y, y.exponent)
            }
            Ordering::Greater => {
                let shift = (x.exponent - y.exponent) as u32;
                trace!(shift, "align second operand");
                (x, y.shifted(shift), x.exponent)
            }
            Ordering::Equal => (x, y, x.exponent),
        }
    }

    /// Adds or subtracts aligned mantissas.
    ///
    /// # Returns
    ///
    /// `(sign, magnitude)`. Exact cancellation yields `(0, 0)`, so `x + -x`
    /// is `+0` in either operand order.
    fn combine(x: Operand, y: Operand) -> (u16, u64) {
        if x.sign == y.sign {
            return (x.sign, x.mantissa + y.mantissa);
        }
        match x.mantissa.cmp(&y.mantissa) {
            Ordering::Greater => (x.sign, x.mantissa - y.mantissa),
            Ordering::Less => (y.sign, y.mantissa - x.mantissa),
            Ordering::Equal => (0, 0),
        }
    }

    /// Packs a rounded mantissa into a pattern and derives the flags.
    fn finalize(sign: u16, rounded: Rounded) -> (u16, FpFlags) {
        let mut flags = if rounded.inexact {
            FpFlags::NX
        } else {
            FpFlags::NONE
        };

        if rounded.mantissa == 0 {
            return (pack_fields(sign, 0, 0), flags);
        }

        if rounded.exponent >= i32::from(EXP_ALL_ONES) {
            debug!(sign, exponent = rounded.exponent, "sum overflowed to infinity");
            flags |= FpFlags::OF | FpFlags::NX;
            return (pack_fields(sign, EXP_ALL_ONES, 0), flags);
        }

        let mantissa = rounded.mantissa as u16;
        if rounded.exponent == MIN_EXPONENT && mantissa < IMPLICIT_BIT {
            if rounded.inexact {
                flags |= FpFlags::UF;
            }
            return (pack_fields(sign, 0, mantissa & FRAC_MAX), flags);
        }

        debug_assert!(mantissa >= IMPLICIT_BIT);
        (
            pack_fields(sign, rounded.exponent as u16, mantissa & FRAC_MAX),
            flags,
        )
    }
}
