//! Error definitions.
//!
//! This module defines the error taxonomy of the library. It provides:
//! 1. **Format Errors:** Text that is not a valid binary, hex, or decimal value.
//! 2. **Range Errors:** Finite values that the strict encoder refuses to saturate.
//! 3. **Configuration Errors:** Unreadable or malformed configuration files.
//!
//! Every 16-bit pattern is a legal codec and adder input, so none of these
//! are raised by arithmetic on patterns.

use std::path::PathBuf;

use thiserror::Error;

use super::constants::PATTERN_BITS;

/// Malformed textual input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Binary text did not hold exactly 16 binary digits after stripping
    /// every other character.
    #[error("SEF binary string must be {expected} bits long, found {found}", expected = PATTERN_BITS)]
    BinaryLength {
        /// Number of `0`/`1` characters that remained.
        found: usize,
    },

    /// Text is not valid base-16.
    #[error("invalid hexadecimal pattern {input:?}")]
    InvalidHex {
        /// The offending input.
        input: String,
    },

    /// Valid base-16 text whose value needs more than 16 bits.
    #[error("hexadecimal pattern {input:?} does not fit in {bits} bits", bits = PATTERN_BITS)]
    HexOverflow {
        /// The offending input.
        input: String,
    },

    /// Text is not a valid host double.
    #[error("invalid decimal value {input:?}")]
    InvalidDecimal {
        /// The offending input.
        input: String,
    },
}

/// A finite value outside the representable range.
///
/// Only the strict encoder produces this; the default encoder saturates.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum RangeError {
    /// The magnitude rounds above the largest finite value.
    #[error("value {value} overflows the SEF range")]
    Overflow {
        /// The rejected input.
        value: f64,
    },
}

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid JSON for [`crate::Config`].
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// See [`FormatError`].
    #[error(transparent)]
    Format(#[from] FormatError),

    /// See [`RangeError`].
    #[error(transparent)]
    Range(#[from] RangeError),

    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),
}
