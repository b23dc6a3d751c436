//! Common utilities and types shared by every SEF component.
//!
//! This module provides the building blocks used by the codec and the FPU:
//! 1. **Constants:** The format parameters (widths, bias, guard bits) and named patterns.
//! 2. **Bit Fields:** Fixed-width extract/insert helpers and pattern assembly.
//! 3. **Error Handling:** The format, range, and configuration error taxonomy.

/// Field extraction and insertion on fixed-width integers.
pub mod bits;

/// Format parameters and named bit patterns.
pub mod constants;

/// Error types for parsing, strict encoding, and configuration.
pub mod error;

pub use bits::{extract_field, insert_field, pack_fields, split_fields};
pub use constants::{EXP_ALL_ONES, EXP_BIAS, FRAC_BITS, FRAC_MAX, GUARD_BITS};
pub use error::{ConfigError, Error, FormatError, RangeError};
