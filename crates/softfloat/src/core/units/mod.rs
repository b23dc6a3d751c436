//! Execution units.

/// Floating-point unit (SEF addition, rounding, exception flags).
pub mod fpu;
