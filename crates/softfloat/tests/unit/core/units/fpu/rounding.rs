//! Round-to-nearest-even and overflow tests.

use pretty_assertions::assert_eq;
use rstest::rstest;
use sef_core::Fpu;
use sef_core::core::units::fpu::exception_flags::FpFlags;

use crate::common::{init_tracing, reference_add};

#[rstest]
#[case::tie_stays_even(0x3800, 0x0020, 0x3800)]
#[case::above_tie_rounds_up(0x3800, 0x0060, 0x3802)]
#[case::tie_at_max_stays_even(0x77FE, 0x1000, 0x77FE)]
#[case::below_half_ulp_at_max(0x77FF, 0x0C00, 0x77FF)]
#[case::min_normal_addend_at_max(0x77FF, 0x0800, 0x77FF)]
fn test_inexact_sums(#[case] a: u16, #[case] b: u16, #[case] expected: u16) {
    assert_eq!(Fpu::add_full(a, b), (expected, FpFlags::NX));
    assert_eq!(reference_add(a, b), expected);
}

#[rstest]
#[case::next_representable(0x3801, 0x0040, 0x3802)]
#[case::carry_bumps_exponent(0x3FFF, 0x0040, 0x4000)]
#[case::reaches_max(0x77FE, 0x1800, 0x77FF)]
#[case::doubling(0x3800, 0x3800, 0x4000)]
fn test_exact_sums_set_no_flags(#[case] a: u16, #[case] b: u16, #[case] expected: u16) {
    assert_eq!(Fpu::add_full(a, b), (expected, FpFlags::NONE));
}

#[rstest]
#[case::tie_rounds_odd_max_up(0x77FF, 0x1000, 0x7800)]
#[case::negative_tie(0xF7FF, 0x9000, 0xF800)]
#[case::large_finite_sum(0x7480, 0x6C80, 0x7800)]
#[case::large_negative_sum(0xF480, 0xEC80, 0xF800)]
fn test_overflow_saturates(#[case] a: u16, #[case] b: u16, #[case] expected: u16) {
    init_tracing();
    let (result, flags) = Fpu::add_full(a, b);
    assert_eq!(result, expected);
    assert!(flags.contains(FpFlags::OF));
    assert!(flags.contains(FpFlags::NX));
    assert!(!flags.contains(FpFlags::NV));
}
