//! neighbours - command-line access to the neighbour engine and prime matching
//!
//! Results are printed to stdout as pretty JSON; logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use neighbours_core::{
    assign_with_config, select_best_match, MatchConfig, NeighbourEngine, NeighbourError,
    OverlapMetric, Regularity,
};
use neighbours_lexicon::{engine_from_config, resolve_config_path, NeighboursConfig};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "neighbours",
    version,
    about = "Orthographic neighbours and minimal-overlap prime matching"
)]
struct Cli {
    /// Configuration file (falls back to $NEIGHBOURS_CONFIG, then config/neighbours.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Same-length words differing by one letter
    Neighbours {
        word: String,
        /// Print only the count
        #[arg(long)]
        count_only: bool,
    },
    /// Neighbours with a different first letter
    Onset { word: String },
    /// Neighbours common to two words
    Shared { word1: String, word2: String },
    /// Lexicon words ending in the given rime
    Rime { rime: String },
    /// Lexicon words formed by swapping adjacent letters
    Transpositions { word: String },
    /// Neighbours grouped by the position at which they differ
    Locations { word: String },
    /// Frequency, syllable count and regularity
    Lookup { word: String },
    /// Least-overlapping candidate for one word
    BestMatch {
        word: String,
        #[arg(required = true)]
        candidates: Vec<String>,
        #[arg(long, value_enum)]
        metric: Option<MetricArg>,
    },
    /// One-to-one matching of words to candidates with minimal total overlap
    Assign {
        #[arg(long, value_delimiter = ',', required = true)]
        words: Vec<String>,
        #[arg(long, value_delimiter = ',', required = true)]
        candidates: Vec<String>,
        #[arg(long, value_enum)]
        metric: Option<MetricArg>,
        #[arg(long)]
        iterations: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    SamePosition,
    Total,
}

impl From<MetricArg> for OverlapMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::SamePosition => OverlapMetric::SamePosition,
            MetricArg::Total => OverlapMetric::Total,
        }
    }
}

#[derive(Serialize)]
struct LookupReport {
    word: String,
    frequency: Option<f64>,
    syllables: Option<usize>,
    regularity: Regularity,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "neighbours=info,neighbours_core=info,neighbours_lexicon=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config_path = resolve_config_path(cli.config);

    match cli.command {
        Command::Neighbours { word, count_only } => {
            let engine = load_engine(&config_path)?;
            if count_only {
                print_json(&engine.neighbour_count(&word)?)
            } else {
                print_json(&engine.find_neighbours(&word)?)
            }
        }
        Command::Onset { word } => {
            print_json(&load_engine(&config_path)?.onset_neighbours(&word)?)
        }
        Command::Shared { word1, word2 } => {
            print_json(&load_engine(&config_path)?.shared_neighbours(&word1, &word2)?)
        }
        Command::Rime { rime } => {
            print_json(&load_engine(&config_path)?.shared_rime_words(&rime)?)
        }
        Command::Transpositions { word } => {
            print_json(&load_engine(&config_path)?.transposition_neighbours(&word)?)
        }
        Command::Locations { word } => {
            print_json(&load_engine(&config_path)?.neighbour_locations(&word)?)
        }
        Command::Lookup { word } => {
            let engine = load_engine(&config_path)?;
            let frequency = match engine.frequency(&word) {
                Ok(f) => Some(f),
                Err(NeighbourError::KeyNotFound(_)) => None,
                Err(e) => return Err(e.into()),
            };
            print_json(&LookupReport {
                frequency,
                syllables: engine.syllable_count(&word)?,
                regularity: engine.regularity(&word)?,
                word,
            })
        }
        Command::BestMatch {
            word,
            candidates,
            metric,
        } => {
            let defaults = matching_defaults(&config_path)?;
            let metric = metric.map(Into::into).unwrap_or(defaults.metric);
            print_json(&select_best_match(&word, &candidates, metric)?)
        }
        Command::Assign {
            words,
            candidates,
            metric,
            iterations,
            seed,
        } => {
            let defaults = matching_defaults(&config_path)?;
            let config = MatchConfig {
                metric: metric.map(Into::into).unwrap_or(defaults.metric),
                iterations: iterations.unwrap_or(defaults.iterations),
                seed: seed.or(defaults.seed),
            };
            print_json(&assign_with_config(&words, &candidates, &config)?)
        }
    }
}

fn load_engine(config_path: &Path) -> Result<NeighbourEngine> {
    let config = NeighboursConfig::from_file(config_path)
        .context("A lexicon configuration is required for this command")?;
    Ok(engine_from_config(&config))
}

/// Matching commands need no lexicon; the config only supplies defaults
fn matching_defaults(config_path: &Path) -> Result<MatchConfig> {
    if config_path.exists() {
        Ok(NeighboursConfig::from_file(config_path)?.matching)
    } else {
        Ok(MatchConfig::default())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
