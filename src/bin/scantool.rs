use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use gs1_scan::tools::{bench_limit_from_env, load_scans, scans_path_from_env};
use gs1_scan::{Decoder, EanValidator, Gs1Date, ParsedResult, detect_type};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "scantool", version, about = "GS1 scan decoding tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a single raw scan and print it as JSON
    Parse {
        /// Raw scanner output, reader-prefix marker included
        raw: String,
    },
    /// Print the detected symbology of a raw scan
    Detect { raw: String },
    /// Compute the mod-10 check digit for a digit string
    CheckDigit { digits: String },
    /// Decode every scan in a file (one per line) as JSON lines
    Batch {
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let decoder = Decoder::new();

    match cli.command {
        Command::Parse { raw } => parse_cmd(&decoder, &raw),
        Command::Detect { raw } => {
            detect_cmd(&raw);
            Ok(())
        }
        Command::CheckDigit { digits } => check_digit_cmd(&digits),
        Command::Batch { file, limit } => {
            let file = file.unwrap_or_else(scans_path_from_env);
            batch_cmd(&decoder, &file, limit.or_else(bench_limit_from_env))
        }
    }
}

fn parse_cmd(decoder: &Decoder, raw: &str) -> Result<()> {
    let scan = decoder
        .decode(raw)
        .with_context(|| format!("failed to decode {raw:?}"))?;
    println!("{}", serde_json::to_string_pretty(&scan)?);
    if let ParsedResult::Fields(fields) = &scan.result {
        for field in fields.iter() {
            if let Some(date) = field.date() {
                eprintln!("  {} ({}): {}", field.name, field.code, date);
            }
        }
    }
    Ok(())
}

fn detect_cmd(raw: &str) {
    match detect_type(raw) {
        Some(kind) => println!("{kind}"),
        None => println!("Unknown"),
    }
}

fn check_digit_cmd(digits: &str) -> Result<()> {
    match EanValidator::compute_check_digit(digits) {
        Some(digit) => {
            println!("{digit}");
            Ok(())
        }
        None => bail!("not a digit string: {digits:?}"),
    }
}

fn elapsed_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

fn batch_cmd(decoder: &Decoder, file: &Path, limit: Option<usize>) -> Result<()> {
    let scans = load_scans(file, limit)
        .with_context(|| format!("failed to read scan list {}", file.display()))?;

    let start = Instant::now();
    let results = decoder.parse_batch(&scans);
    let elapsed = start.elapsed();

    let mut failures = 0usize;
    for (raw, result) in scans.iter().zip(&results) {
        match result {
            Ok(parsed) => println!("{}", serde_json::to_string(parsed)?),
            Err(err) => {
                failures += 1;
                eprintln!("FAIL: {raw:?}: {err}");
            }
        }
    }

    tracing::info!(
        scans = scans.len(),
        failures,
        elapsed_us = elapsed_micros(elapsed),
        "batch complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_micros_saturates() {
        assert_eq!(elapsed_micros(Duration::from_micros(1500)), 1500);
        assert_eq!(elapsed_micros(Duration::MAX), u64::MAX);
    }
}
