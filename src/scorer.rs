//! Per-pair and token-set scoring.
//!
//! A pair score is `round((1 - distance / len(ground_truth)) * 100)`, with the
//! length counted in code points of the ground truth as given (prefix
//! stripping lowers the distance but never the denominator). Scores can go
//! negative when the prediction is much longer than the ground truth.
//!
//! The token-set ratio matches each ground-truth word against its best
//! predicted word, regardless of order, and averages those best scores.
//!
//! Rounding is half-to-even throughout.

use serde::Serialize;
use tracing::debug;

use crate::config::ScorerConfig;
use crate::distance::{DistanceEngine, levenshtein};
use crate::error::{ScoreError, ScoreResult};
use crate::prefix::{PrefixResolver, PrefixSet};
use crate::tokenize::{Tokenizer, UnicodeWordTokenizer};

/// Distance and normalized score for one (predicted, ground truth) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EditScore {
    pub distance: f64,
    pub score: i64,
}

/// Configured Arabic scorer. Immutable; safe to share across threads.
pub struct ArabicScorer {
    engine: DistanceEngine,
    prefixes: PrefixSet,
    ignore_prefix: bool,
    use_standard_distance: bool,
    tokenizer: Box<dyn Tokenizer>,
}

impl ArabicScorer {
    /// Validate `config` and build a scorer.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidConfiguration`] for negative or
    /// non-finite costs, tier letters that are not single characters, or
    /// empty prefix literals.
    pub fn new(config: &ScorerConfig) -> ScoreResult<Self> {
        let model = config.cost_model()?;
        let prefixes = config.prefix_set()?;
        debug!(
            tiers = model.map().tiers().len(),
            prefixes = prefixes.as_slice().len(),
            ignore_prefix = config.ignore_prefix,
            use_standard_distance = config.use_standard_distance,
            "scorer configured"
        );

        Ok(Self {
            engine: DistanceEngine::new(config.insertion_cost, config.deletion_cost, model),
            prefixes,
            ignore_prefix: config.ignore_prefix,
            use_standard_distance: config.use_standard_distance,
            tokenizer: Box::new(UnicodeWordTokenizer),
        })
    }

    /// Replace the word tokenizer used by [`Self::fuzzy_token_set_ratio`].
    #[must_use]
    pub fn with_tokenizer<T: Tokenizer + 'static>(mut self, tokenizer: T) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    /// The prefix-tolerant resolver over this scorer's engine.
    pub fn resolver(&self) -> PrefixResolver<'_> {
        PrefixResolver::new(&self.engine, &self.prefixes, self.ignore_prefix)
    }

    /// Distance from `predicted` to `ground_truth` under the configured mode.
    #[allow(clippy::cast_precision_loss)]
    pub fn distance(&self, predicted: &str, ground_truth: &str) -> f64 {
        if self.use_standard_distance {
            levenshtein::distance(predicted, ground_truth) as f64
        } else {
            self.resolver().distance(predicted, ground_truth)
        }
    }

    /// Distance and percentage score of `predicted` against `ground_truth`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::DivisionByZero`] if `ground_truth` is empty.
    pub fn get_edit_distance(&self, predicted: &str, ground_truth: &str) -> ScoreResult<EditScore> {
        let len = ground_truth.chars().count();
        if len == 0 {
            return Err(ScoreError::DivisionByZero("string"));
        }

        let distance = self.distance(predicted, ground_truth);
        Ok(EditScore {
            distance,
            score: percent(distance, len),
        })
    }

    /// Order-independent token-set score of `predicted` against `ground_truth`.
    ///
    /// A ground-truth token with no predicted tokens to compare against
    /// scores 0.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::DivisionByZero`] if `ground_truth` has no tokens.
    #[allow(clippy::cast_precision_loss)]
    pub fn fuzzy_token_set_ratio(&self, predicted: &str, ground_truth: &str) -> ScoreResult<i64> {
        let truth_tokens = self.tokenizer.tokenize(ground_truth);
        if truth_tokens.is_empty() {
            return Err(ScoreError::DivisionByZero("token list"));
        }
        let predicted_tokens = self.tokenizer.tokenize(predicted);

        let mut total: i64 = 0;
        for truth in &truth_tokens {
            let mut best: Option<i64> = None;
            for candidate in &predicted_tokens {
                let score = self.get_edit_distance(candidate, truth)?.score;
                best = Some(best.map_or(score, |b| b.max(score)));
            }
            total += best.unwrap_or(0);
        }

        let ratio = round_half_even(total as f64 / truth_tokens.len() as f64);
        debug!(
            truth_tokens = truth_tokens.len(),
            predicted_tokens = predicted_tokens.len(),
            ratio,
            "token set ratio"
        );
        Ok(ratio)
    }

    /// Token-set ratio for many pairs. Each pair is scored independently, in
    /// parallel when the `parallel` feature is enabled.
    pub fn batch_token_set_ratio<S>(&self, pairs: &[(S, S)]) -> Vec<ScoreResult<i64>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            pairs
                .par_iter()
                .map(|(predicted, truth)| self.fuzzy_token_set_ratio(predicted.as_ref(), truth.as_ref()))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            pairs
                .iter()
                .map(|(predicted, truth)| self.fuzzy_token_set_ratio(predicted.as_ref(), truth.as_ref()))
                .collect()
        }
    }
}

impl Default for ArabicScorer {
    /// Unit costs, built-in tiers and prefixes, weighted mode.
    fn default() -> Self {
        Self {
            engine: DistanceEngine::default(),
            prefixes: PrefixSet::default(),
            ignore_prefix: false,
            use_standard_distance: false,
            tokenizer: Box::new(UnicodeWordTokenizer),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn percent(distance: f64, len: usize) -> i64 {
    round_half_even((1.0 - distance / len as f64) * 100.0)
}

#[allow(clippy::cast_possible_truncation)]
fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}
