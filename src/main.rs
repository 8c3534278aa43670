mod config;

use anyhow::{Context, Result};
use authorizer::{engine::Authorizer, operation::Operation};
use clap::Parser;
use config::{CliConfig, Config};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use tracing::{debug, info, warn};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = CliConfig::parse();

    let input = open_input(&config)?;
    let stdout = io::stdout();
    let summary = process_operations(input, stdout.lock())?;

    info!(
        "Processed {} operations, skipped {} invalid lines",
        summary.processed, summary.skipped
    );

    Ok(())
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    processed: usize,
    skipped: usize,
}

fn open_input<C: Config>(config: &C) -> Result<Box<dyn BufRead>> {
    match config.input_path() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;

            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Decide every operation read from `input`, writing one JSON decision per line to `output`
fn process_operations<R: BufRead, W: Write>(input: R, output: W) -> Result<Summary> {
    let mut authorizer = Authorizer::new();
    let mut writer = BufWriter::new(output);
    let mut summary = Summary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line.context("Failed to read input line")?;

        if line.trim().is_empty() {
            continue;
        }

        let operation: Operation = match line.parse() {
            Ok(op) => op,
            Err(e) => {
                warn!("Skipping line {}: {e}", index + 1);
                summary.skipped += 1;

                continue;
            }
        };

        let decision = authorizer.process(operation);
        debug!(line = index + 1, violations = ?decision.violations, "Operation decided");

        serde_json::to_writer(&mut writer, &decision).context("Failed to serialize decision")?;
        writeln!(writer).context("Failed to write decision")?;
        summary.processed += 1;
    }

    writer.flush().context("Failed to flush output")?;

    Ok(summary)
}
