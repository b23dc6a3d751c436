//! SEF 16-bit floating-point emulation library.
//!
//! This crate implements the SEF (Sign, Exponent, Fraction) half-width format
//! using only fixed-width integer arithmetic. It provides the following:
//! 1. **Format:** The `Sef` value type, field layout, and classification.
//! 2. **Codec:** Conversions between patterns, host doubles, and binary/hex text.
//! 3. **FPU:** A correctly rounded adder with guard/round/sticky rounding and
//!    accrued IEEE exception flags.
//! 4. **Report:** The all-formats breakdown used by front ends.
//! 5. **Configuration:** Presentation settings loaded from JSON.

/// Common types and constants (format parameters, bit fields, errors).
pub mod common;
/// Presentation configuration (defaults, JSON loading).
pub mod config;
/// Pattern conversions to and from host doubles and text.
pub mod codec;
/// Arithmetic units operating on raw patterns.
pub mod core;
/// The `Sef` value type and its classification.
pub mod format;
/// Human-readable breakdown of a single pattern.
pub mod report;

/// Root error type; every fallible operation converts into it.
pub use crate::common::Error;
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// The adder unit; `Fpu::add` operates on raw 16-bit patterns.
pub use crate::core::units::fpu::Fpu;
/// The SEF value type.
pub use crate::format::{FpClass, Sef};
/// All-formats breakdown of one pattern.
pub use crate::report::Report;
