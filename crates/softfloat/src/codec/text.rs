//! Binary, hex, and decimal text forms of a pattern.

use std::num::IntErrorKind;

use crate::common::constants::PATTERN_BITS;
use crate::common::error::FormatError;

/// Renders a pattern as exactly 16 binary digits, MSB first.
pub fn to_binary_string(bits: u16) -> String {
    format!("{bits:016b}")
}

/// Parses binary text into a pattern.
///
/// Every character other than `0` and `1` is discarded first, so
/// `"0 0111 10000000000"` and `"0_0111_10000000000"` are both accepted.
///
/// # Errors
///
/// Returns [`FormatError::BinaryLength`] unless exactly 16 binary digits remain.
pub fn from_binary_string(text: &str) -> Result<u16, FormatError> {
    let digits: Vec<u8> = text
        .bytes()
        .filter(|b| matches!(b, b'0' | b'1'))
        .collect();
    if digits.len() != PATTERN_BITS as usize {
        return Err(FormatError::BinaryLength {
            found: digits.len(),
        });
    }
    Ok(digits
        .iter()
        .fold(0u16, |acc, &digit| (acc << 1) | u16::from(digit == b'1')))
}

/// Renders a pattern as lowercase hex with a `0x` prefix and no padding.
pub fn to_hex_string(bits: u16) -> String {
    format!("{bits:#x}")
}

/// Parses hex text into a pattern.
///
/// Surrounding whitespace and one optional `0x`/`0X` prefix are stripped.
///
/// # Errors
///
/// Returns [`FormatError::HexOverflow`] for values wider than 16 bits and
/// [`FormatError::InvalidHex`] for anything that is not base-16 text.
pub fn from_hex_string(text: &str) -> Result<u16, FormatError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    u16::from_str_radix(digits, 16).map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => FormatError::HexOverflow {
            input: text.to_owned(),
        },
        _ => FormatError::InvalidHex {
            input: text.to_owned(),
        },
    })
}

/// Parses decimal text into a host double.
///
/// Accepts everything `f64::from_str` does, including `inf` and `nan`.
///
/// # Errors
///
/// Returns [`FormatError::InvalidDecimal`] when the text is not a number.
pub fn parse_decimal(text: &str) -> Result<f64, FormatError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| FormatError::InvalidDecimal {
            input: text.to_owned(),
        })
}
