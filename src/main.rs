use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use tuning_utils::config::TuningConfig;
use tuning_utils::tuning::constants::comma_tempered_fifth;
use tuning_utils::{circle_of_fifths_tuning_offset, NoteLetter, NoteName, TonalPitchClass};

/// Print tuning offsets from 12EDO for a regular temperament
#[derive(Parser, Debug)]
#[command(name = "tuning-utils", version)]
#[command(about = "Circle-of-fifths tuning offsets in cents", long_about = None)]
struct Args {
    /// Configuration file (YAML)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Size of the tempered fifth in cents
    #[arg(short = 'f', long = "fifth", conflicts_with = "comma")]
    fifth: Option<f64>,

    /// Narrow the just fifth by this fraction of a syntonic comma (0.25 = quarter-comma meantone)
    #[arg(long = "comma")]
    comma: Option<f64>,

    /// Reference note that keeps its 12EDO pitch
    #[arg(short = 'r', long = "reference")]
    reference: Option<NoteLetter>,

    /// Notes to tune, e.g. C F# Bb
    #[arg(required = true)]
    notes: Vec<NoteName>,
}

/// Merge command-line overrides into the file configuration
fn resolve_config(args: &Args) -> Result<TuningConfig> {
    let mut config = match &args.config {
        Some(path) => TuningConfig::read(path)?,
        None => TuningConfig::default(),
    };

    if let Some(fifth) = args.fifth {
        config.fifth = fifth;
    }
    if let Some(fraction) = args.comma {
        config.fifth = comma_tempered_fifth(fraction);
    }
    if let Some(reference) = args.reference {
        config.reference = reference;
    }

    config.validate().context("Invalid tuning settings")?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );

    let args = Args::parse();
    let config = resolve_config(&args)?;

    let deviation = config.fifth_deviation();
    log::info!(
        "Fifth {:.3} cents (deviation {:+.3}), reference {}",
        config.fifth,
        deviation,
        config.reference
    );

    for note in &args.notes {
        let offset = circle_of_fifths_tuning_offset(note, deviation, config.reference)
            .with_context(|| format!("Failed to tune {}", note))?;
        println!("{:<4} tpc {:>3}  {:+.3} cents", note.to_string(), note.tpc1(), offset);
    }

    Ok(())
}
