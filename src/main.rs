use std::process::ExitCode;

use bibid::call_number;
use bibid::isbn::{self, ConversionMode};
use bibid::IdentifierError;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "bibid", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Compute the ISBN-10 check character of up to nine digits
    ///
    /// Shorter inputs are zero-padded on the left. A full ten-character ISBN-10
    /// is validated and its own check character printed.
    Checksum10 {
        /// Digits, hyphens allowed
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Compute the ISBN-13 check digit of twelve digits starting with 978
    Checksum13 {
        /// Digits, hyphens allowed
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Validate ISBNs, auto-detecting ISBN-10 or ISBN-13
    Validate {
        /// Only accept ISBN-10
        #[arg(long, conflicts_with = "isbn13")]
        isbn10: bool,
        /// Only accept ISBN-13
        #[arg(long)]
        isbn13: bool,
        /// ISBNs to check
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Convert ISBN-13s to ISBN-10
    To10 {
        /// Fail on input that is already an ISBN-10
        #[arg(long)]
        strict: bool,
        /// ISBNs to convert
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Convert ISBN-10s to ISBN-13
    To13 {
        /// Fail on input that is already an ISBN-13
        #[arg(long)]
        strict: bool,
        /// ISBNs to convert
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Zero-pad short ISBN-10s to ten characters
    Patch10 {
        /// ISBN-10s to pad
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Strip copy, volume, and subfield noise from call numbers
    Clean {
        /// Raw call numbers
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Check that call numbers have a plausible shape after cleaning
    CheckCallNumber {
        /// Raw call numbers
        #[arg(required = true)]
        values: Vec<String>,
    },
}

fn mode(strict: bool) -> ConversionMode {
    if strict {
        ConversionMode::Strict
    } else {
        ConversionMode::Lenient
    }
}

/// Print one line per value; returns the number of failures.
fn report<T, F>(values: &[String], op: F) -> usize
where
    T: std::fmt::Display,
    F: Fn(&str) -> std::result::Result<T, IdentifierError>,
{
    let mut failures = 0;
    for value in values {
        match op(value) {
            Ok(output) => println!("{output}"),
            Err(err) => {
                eprintln!("{value}: {err}");
                failures += 1;
            },
        }
    }
    failures
}

fn report_bool<F: Fn(&str) -> bool>(values: &[String], check: F) -> usize {
    let mut failures = 0;
    for value in values {
        let ok = check(value);
        println!("{value}\t{}", if ok { "valid" } else { "invalid" });
        if !ok {
            failures += 1;
        }
    }
    failures
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let failures = match cli.command {
        Commands::Checksum10 { values } => report(&values, isbn::checksum10),
        Commands::Checksum13 { values } => report(&values, isbn::checksum13),
        Commands::Validate {
            isbn10,
            isbn13,
            values,
        } => match (isbn10, isbn13) {
            (true, _) => report_bool(&values, isbn::is_valid10),
            (_, true) => report_bool(&values, isbn::is_valid13),
            _ => report_bool(&values, isbn::is_valid),
        },
        Commands::To10 { strict, values } => {
            report(&values, |value| isbn::convert_to10(value, mode(strict)))
        },
        Commands::To13 { strict, values } => {
            report(&values, |value| isbn::convert_to13(value, mode(strict)))
        },
        Commands::Patch10 { values } => report(&values, isbn::patch10),
        Commands::Clean { values } => {
            for value in &values {
                println!("{}", call_number::clean(value));
            }
            0
        },
        Commands::CheckCallNumber { values } => report_bool(&values, call_number::is_valid),
    };

    log::debug!("{failures} input(s) failed");
    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
