//! `arabic-edit-distance` — weighted edit distance for Arabic script.
//!
//! Scores how close a predicted transcription (OCR, speech-to-text) is to
//! the ground truth. Letters that are easily confused in Arabic cost less to
//! substitute than unrelated letters, and an attached definite article,
//! conjunction or preposition can be dropped for free.
//!
//! # Layers
//!
//! - `cost` — confusable-letter tiers (0.1 orthographic, 0.5 phonetic)
//! - `distance` — weighted Wagner-Fischer engine, plus plain Levenshtein
//! - `prefix` — minimum distance over every prefix-stripping combination
//! - `scorer` — percentage scores and the word-order-free token-set ratio
//! - `variants` — enumerate alternative spellings of a word
//!
//! # Architecture
//!
//! ```text
//! ScorerConfig ──validate──→ ArabicScorer
//!                              ├─ get_edit_distance ──→ PrefixResolver ──→ DistanceEngine ──→ CostModel
//!                              │                    └─ levenshtein (standard mode)
//!                              └─ fuzzy_token_set_ratio ──→ Tokenizer + get_edit_distance
//! ```

pub mod config;
pub mod cost;
pub mod distance;
pub mod error;
pub mod prefix;
pub mod scorer;
pub mod tokenize;
pub mod variants;

pub use config::{ScorerConfig, TierConfig};
pub use error::{ScoreError, ScoreResult};
pub use scorer::{ArabicScorer, EditScore};
pub use variants::swap_characters;

use distance::DistanceEngine;

/// Weighted edit distance from `a` to `b` with unit costs and the built-in
/// confusable tiers. No prefix stripping.
pub fn weighted_edit_distance(a: &str, b: &str) -> f64 {
    DistanceEngine::default().distance(a, b)
}

/// [`weighted_edit_distance`] divided by the length of `b` in code points.
///
/// # Errors
///
/// Returns [`ScoreError::DivisionByZero`] if `b` is empty.
#[allow(clippy::cast_precision_loss)]
pub fn normalized_weighted_edit_distance(a: &str, b: &str) -> ScoreResult<f64> {
    let len = b.chars().count();
    if len == 0 {
        return Err(ScoreError::DivisionByZero("string"));
    }
    Ok(weighted_edit_distance(a, b) / len as f64)
}
