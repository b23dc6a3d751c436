//! All-formats breakdown of a single pattern.
//!
//! A [`Report`] shows one value as decimal, hex, and binary, plus its split
//! sign, exponent, and fraction fields. Front ends build one from whichever
//! form the user typed; every conversion goes through [`crate::codec`].

use std::fmt;

use serde::Serialize;

use crate::codec;
use crate::common::error::FormatError;
use crate::format::{FpClass, Sef};

/// One pattern in every external form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    /// Raw pattern.
    pub bits: u16,
    /// Decimal value as entered, or the decoded value for binary/hex input.
    pub decimal: f64,
    /// Decoded value of the stored pattern.
    pub stored: f64,
    /// `0x`-prefixed lowercase hex.
    pub hex: String,
    /// 16 binary digits, MSB first.
    pub binary: String,
    /// Sign field as one binary digit.
    pub sign: String,
    /// Exponent field as 4 binary digits.
    pub exponent: String,
    /// Stored (biased) exponent value.
    pub exponent_value: u16,
    /// Fraction field as 11 binary digits.
    pub fraction: String,
    /// Stored fraction value.
    pub fraction_value: u16,
    /// Value class of the pattern.
    pub class: FpClass,
}

impl Report {
    /// Builds the report of a raw pattern.
    pub fn from_bits(bits: u16) -> Self {
        Self::with_decimal(bits, codec::decode(bits))
    }

    /// Builds a report from decimal text.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidDecimal`] if `text` is not a number.
    pub fn from_decimal(text: &str) -> Result<Self, FormatError> {
        let value = codec::parse_decimal(text)?;
        Ok(Self::with_decimal(codec::encode(value), value))
    }

    /// Builds a report from binary text.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::BinaryLength`] unless `text` holds exactly 16
    /// binary digits.
    pub fn from_binary(text: &str) -> Result<Self, FormatError> {
        codec::from_binary_string(text).map(Self::from_bits)
    }

    /// Builds a report from hex text.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] for text that is not a 16-bit hex value.
    pub fn from_hex(text: &str) -> Result<Self, FormatError> {
        codec::from_hex_string(text).map(Self::from_bits)
    }

    fn with_decimal(bits: u16, decimal: f64) -> Self {
        let sef = Sef::from_bits(bits);
        let binary = codec::to_binary_string(bits);
        Self {
            bits,
            decimal,
            stored: codec::decode(bits),
            hex: codec::to_hex_string(bits),
            sign: binary[..1].to_owned(),
            exponent: binary[1..5].to_owned(),
            exponent_value: sef.exponent(),
            fraction: binary[5..].to_owned(),
            fraction_value: sef.fraction(),
            class: sef.class(),
            binary,
        }
    }

    /// True when the entered decimal differs from what was stored.
    pub fn is_rounded(&self) -> bool {
        let both_nan = self.decimal.is_nan() && self.stored.is_nan();
        !both_nan && self.decimal.to_bits() != self.stored.to_bits()
    }

    /// Renders the report, optionally without the field breakdown.
    pub fn render(&self, show_fields: bool) -> String {
        let mut out = format!("Decimal:  {:?}\n", self.decimal);
        if self.is_rounded() {
            out.push_str(&format!("Stored:   {:?}\n", self.stored));
        }
        out.push_str(&format!("Hex:      {}\n", self.hex));
        out.push_str(&format!("Binary:   {}", self.binary));
        if show_fields {
            out.push_str(&format!("\n  Sign:     {}", self.sign));
            out.push_str(&format!(
                "\n  Exponent: {} (decimal: {})",
                self.exponent, self.exponent_value
            ));
            out.push_str(&format!(
                "\n  Fraction: {} (decimal: {})",
                self.fraction, self.fraction_value
            ));
        }
        out
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}
