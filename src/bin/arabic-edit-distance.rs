//! arabic-edit-distance -- score a predicted transcription against ground truth.
//!
//! Usage:
//!   arabic-edit-distance [--config <path>] [--standard] [--ignore-prefix] [--tokens] <predicted> <ground_truth>
//!   arabic-edit-distance --variants <word>
//!
//! Prints one JSON object on stdout.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use arabic_edit_distance::{ArabicScorer, ScorerConfig, swap_characters};

const USAGE: &str = "usage: arabic-edit-distance [--config <path>] [--standard] \
    [--ignore-prefix] [--tokens] <predicted> <ground_truth> | --variants <word>";

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config_path = None;
    let mut variants_of = None;
    let mut standard = false;
    let mut ignore_prefix = false;
    let mut tokens = false;
    let mut positional = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_path = Some(args.next().context("--config needs a path")?),
            "--variants" => variants_of = Some(args.next().context("--variants needs a word")?),
            "--standard" => standard = true,
            "--ignore-prefix" => ignore_prefix = true,
            "--tokens" => tokens = true,
            _ => positional.push(arg),
        }
    }

    if let Some(word) = variants_of {
        let variants = swap_characters(&word)?;
        println!("{}", serde_json::json!({ "word": word, "variants": variants }));
        return Ok(());
    }

    let [predicted, ground_truth] =
        <[String; 2]>::try_from(positional).map_err(|_| anyhow!(USAGE))?;

    let mut config = match config_path {
        Some(path) => ScorerConfig::from_path(Path::new(&path))
            .with_context(|| format!("failed to load config {path}"))?,
        None => ScorerConfig::default(),
    };
    config.ignore_prefix |= ignore_prefix;
    config.use_standard_distance |= standard;

    let scorer = ArabicScorer::new(&config)?;
    let output = if tokens {
        serde_json::json!({ "score": scorer.fuzzy_token_set_ratio(&predicted, &ground_truth)? })
    } else {
        serde_json::to_value(scorer.get_edit_distance(&predicted, &ground_truth)?)?
    };
    println!("{output}");

    Ok(())
}
