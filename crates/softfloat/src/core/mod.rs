//! Arithmetic core.
//!
//! Holds the execution units that operate on raw SEF patterns. Only the
//! floating-point adder exists today.

/// Execution units.
pub mod units;
