//! SEF Codec.
//!
//! This module maps 16-bit patterns to and from their external forms. It provides:
//! 1. **Host Doubles:** `encode`/`decode` with saturation, signed zero, and
//!    round-half-to-even fraction rounding.
//! 2. **Strict Encoding:** `encode_checked`, which reports overflow instead of saturating.
//! 3. **Text:** Fixed-width binary strings, prefixed hex strings, and decimal parsing.
//!
//! Decoding and encoding are exact inverses on every non-NaN pattern.

/// Conversions between patterns and host doubles.
pub mod float;

/// Binary, hex, and decimal text forms.
pub mod text;

pub use float::{decode, encode, encode_checked};
pub use text::{
    from_binary_string, from_hex_string, parse_decimal, to_binary_string, to_hex_string,
};
