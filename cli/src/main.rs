//! bestchain — select the maximum-work chain from a set of block headers.
//!
//! Reads 80-byte header records from stdin (or a file) until end-of-stream
//! and writes the selected chain as 36-byte height records, sorted by
//! identity, to stdout (or a file). Diagnostics go to stderr.

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bestchain", about = "Proof-of-work fork choice over a header set")]
struct Cli {
    /// Input file of 80-byte header records; defaults to stdin.
    #[arg(long, env = "BESTCHAIN_INPUT")]
    input: Option<PathBuf>,

    /// Output file for 36-byte height records; defaults to stdout.
    #[arg(long, env = "BESTCHAIN_OUTPUT")]
    output: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "BESTCHAIN_LOG_LEVEL")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    bestchain_utils::init_tracing(&cli.log_level);

    let input: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    bestchain_cli::run(input, &mut output)?;
    Ok(())
}
