use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ical2csv::{ConverterOptions, convert};
use tracing_subscriber::EnvFilter;

/// Convert the events of an iCalendar file within a date range to CSV.
///
/// Column codes: s summary, b start date, e end date, B start time, E end time,
/// d description, l location, S status.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// First day of the range, YYYYMMDD (inclusive)
    #[arg(short, long, value_name = "YYYYMMDD")]
    from: String,

    /// Last day of the range, YYYYMMDD (inclusive)
    #[arg(short, long, value_name = "YYYYMMDD")]
    to: String,

    /// Columns to emit, in order [default: bd]
    #[arg(short, long, value_name = "CODES", default_value = "")]
    columns: String,

    /// Calendar to read, stdin when omitted
    #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Where to write the CSV, stdout when omitted
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Log every event decision to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let options = ConverterOptions::parse(&args.from, &args.to, &args.columns)?;

    let input: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        ),
        None => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    convert(BufReader::new(input), BufWriter::new(output), &options)
        .context("Conversion failed")?;
    Ok(())
}
