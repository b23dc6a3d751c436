//! Interactive conversion loop.
//!
//! Reads `d|b|h <value>` lines until `q` or end of input. Bad input is
//! reported and the loop carries on.

use std::io::{self, BufRead, Write};

use sef_core::Config;
use tracing::debug;

use crate::commands::{self, Kind};

/// Outcome of one input line.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Quit,
    Skip,
    Print(String),
}

const BANNER: &str = "\
16-bit Floating Point Converter
========================================
Commands:
  d <value>  - Convert from decimal
  b <value>  - Convert from binary (16 bits)
  h <value>  - Convert from hex
  q          - Quit
";

fn step(line: &str, config: &Config) -> Step {
    let line = line.trim();
    if line.is_empty() {
        return Step::Skip;
    }
    if line.eq_ignore_ascii_case("q") {
        return Step::Quit;
    }

    let Some((cmd, value)) = line.split_once(char::is_whitespace) else {
        return Step::Print("Invalid input. Use: <type> <value>".to_owned());
    };
    let Some(kind) = Kind::from_command(cmd) else {
        return Step::Print(format!("Unknown command: {}", cmd.to_ascii_lowercase()));
    };

    match kind.report(value.trim()) {
        Ok(report) => Step::Print(commands::render(&report, &config.display)),
        Err(err) => {
            debug!(%err, line, "rejected input");
            Step::Print(format!("Error: {err}"))
        }
    }
}

/// Runs the loop over `input`, writing prompts and reports to `output`.
///
/// # Errors
///
/// Returns any I/O error from reading `input` or writing `output`.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W, config: &Config) -> io::Result<()> {
    if config.repl.banner {
        writeln!(output, "{BANNER}")?;
    }

    let mut line = String::new();
    loop {
        write!(output, "{}", config.repl.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        match step(&line, config) {
            Step::Quit => return Ok(()),
            Step::Skip => {}
            Step::Print(text) => writeln!(output, "{text}\n")?,
        }
    }
}
