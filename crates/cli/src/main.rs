//! SEF 16-bit floating-point converter CLI.
//!
//! This binary provides a single entry point for all conversions. It performs:
//! 1. **One-shot conversion:** `sef d|b|h <value>` prints every form of one value.
//! 2. **Addition:** `sef add <x> <y>` adds two decimals in SEF arithmetic.
//! 3. **Interactive mode:** With no subcommand, a `d|b|h <value>` loop until `q`.

mod commands;
mod repl;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use sef_core::Config;
use sef_core::common::FormatError;
use tracing_subscriber::EnvFilter;

use crate::commands::Kind;

#[derive(Parser, Debug)]
#[command(
    name = "sef",
    author,
    version,
    about = "SEF 16-bit floating-point converter",
    long_about = "Convert values between decimal, hex, and the 16-bit SEF layout \
(1 sign, 4 exponent, 11 fraction bits), or add two values in SEF arithmetic.\n\n\
Run without a subcommand for interactive mode.\n\n\
Examples:\n  sef d 1.5\n  sef b 0011110000000000\n  sef h 0x3c00\n  sef add 1.5 -0.25"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print reports as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Omit the sign/exponent/fraction breakdown.
    #[arg(long, global = true)]
    no_fields: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert from decimal.
    #[command(name = "d", alias = "D")]
    Decimal {
        /// Decimal value (e.g. 1.5, -0.0, inf).
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Convert from binary (16 bits; separators are ignored).
    #[command(name = "b", alias = "B")]
    Binary {
        /// Binary pattern.
        value: String,
    },

    /// Convert from hex.
    #[command(name = "h", alias = "H")]
    Hex {
        /// Hex pattern, with or without 0x.
        value: String,
    },

    /// Add two decimal values in SEF arithmetic.
    Add {
        /// First operand.
        #[arg(allow_hyphen_values = true)]
        a: String,

        /// Second operand.
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli);

    let result = match cli.command {
        Some(Commands::Decimal { value }) => convert(Kind::Decimal, &value, &config),
        Some(Commands::Binary { value }) => convert(Kind::Binary, &value, &config),
        Some(Commands::Hex { value }) => convert(Kind::Hex, &value, &config),
        Some(Commands::Add { a, b }) => commands::add(&a, &b, &config.display),
        None => {
            let stdin = io::stdin();
            if let Err(e) = repl::run(stdin.lock(), io::stdout(), &config) {
                eprintln!("Error: {e}");
                process::exit(1);
            }
            return;
        }
    };

    match result {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr subscriber; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads the config file if given, then applies command-line overrides.
///
/// Exits with code 1 if the file cannot be loaded.
fn load_config(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    if cli.json {
        config.display.json = true;
    }
    if cli.no_fields {
        config.display.show_fields = false;
    }
    config
}

/// Builds and renders the report of one value.
fn convert(kind: Kind, value: &str, config: &Config) -> Result<String, FormatError> {
    kind.report(value)
        .map(|report| commands::render(&report, &config.display))
}
