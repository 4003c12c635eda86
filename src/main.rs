//! TitleNorm - Job Title Normalization
//!
//! Normalizes job titles given as arguments, or one per stdin line.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use titlenorm::config::{config_path, NormaliserConfig};
use titlenorm::TitleNormaliser;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Job titles to normalize (reads stdin lines when omitted)
    titles: Vec<String>,

    /// JSON config file with `vocabulary` and `threshold`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the match threshold
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Print title, label and best score separated by tabs
    #[arg(long, conflicts_with = "json")]
    scores: bool,

    /// Print results as a JSON array
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct Normalized<'a> {
    title: &'a str,
    label: &'a str,
    score: Option<f64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging (stderr keeps stdout clean for results)
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &args.config {
        Some(path) => NormaliserConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            debug!("Using config path {}", config_path().display());
            NormaliserConfig::load()
        }
    };
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }

    let normaliser = TitleNormaliser::with_config(config)?;
    info!(
        "TitleNorm v{}: {} labels, threshold {}",
        env!("CARGO_PKG_VERSION"),
        normaliser.vocabulary().count(),
        normaliser.threshold()
    );

    let titles = if args.titles.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read titles from stdin")?
    } else {
        args.titles.clone()
    };

    let results: Vec<Normalized<'_>> = titles
        .iter()
        .map(|title| Normalized {
            title,
            label: normaliser.normalize_str(title),
            score: normaliser.best_match(title).map(|m| m.score),
        })
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &results)?;
        writeln!(out)?;
    } else {
        for r in &results {
            if args.scores {
                let score = r.score.map_or_else(|| "-".to_string(), |s| format!("{:.4}", s));
                writeln!(out, "{}\t{}\t{}", r.title, r.label, score)?;
            } else {
                writeln!(out, "{}", r.label)?;
            }
        }
    }

    Ok(())
}
