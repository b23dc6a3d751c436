//! Conversion and addition commands shared by the one-shot CLI and the REPL.
//!
//! Every direction routes through `sef_core`; this module only picks the
//! constructor and formats the result.

use sef_core::Fpu;
use sef_core::Report;
use sef_core::common::FormatError;
use sef_core::config::DisplayConfig;
use serde_json::json;

/// Input form selected by the `d`, `b`, or `h` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Host decimal text.
    Decimal,
    /// 16 binary digits.
    Binary,
    /// Hex text with optional `0x` prefix.
    Hex,
}

impl Kind {
    /// Maps a single-letter command, case-insensitively.
    pub fn from_command(cmd: &str) -> Option<Self> {
        match cmd.to_ascii_lowercase().as_str() {
            "d" => Some(Self::Decimal),
            "b" => Some(Self::Binary),
            "h" => Some(Self::Hex),
            _ => None,
        }
    }

    /// Builds the report for `value` in this form.
    pub fn report(self, value: &str) -> Result<Report, FormatError> {
        match self {
            Self::Decimal => Report::from_decimal(value),
            Self::Binary => Report::from_binary(value),
            Self::Hex => Report::from_hex(value),
        }
    }
}

/// Renders a report as text or JSON.
pub fn render(report: &Report, display: &DisplayConfig) -> String {
    if display.json {
        serde_json::to_string_pretty(report).unwrap_or_else(|err| format!("Error: {err}"))
    } else {
        report.render(display.show_fields)
    }
}

/// Adds two decimal values in SEF arithmetic and renders both operands and
/// the sum.
pub fn add(a: &str, b: &str, display: &DisplayConfig) -> Result<String, FormatError> {
    let lhs = Report::from_decimal(a)?;
    let rhs = Report::from_decimal(b)?;
    let (bits, flags) = Fpu::add_full(lhs.bits, rhs.bits);
    let sum = Report::from_bits(bits);

    if display.json {
        let value = json!({
            "a": lhs,
            "b": rhs,
            "sum": sum,
            "flags": flags.to_string(),
        });
        return Ok(serde_json::to_string_pretty(&value)
            .unwrap_or_else(|err| format!("Error: {err}")));
    }

    let mut out = format!(
        "A:\n{}\n\nB:\n{}\n\nSum:\n{}",
        lhs.render(display.show_fields),
        rhs.render(display.show_fields),
        sum.render(display.show_fields),
    );
    if display.show_flags {
        out.push_str(&format!("\nFlags:    {flags}"));
    }
    Ok(out)
}
