//! Scorer configuration.
//!
//! [`ScorerConfig`] is the serializable form: plain numbers, string letters,
//! and flags. It is validated when compiled into an
//! [`ArabicScorer`](crate::ArabicScorer); after that the configuration is
//! immutable.
//!
//! JSON layout (every field optional, defaults shown for scalars):
//!
//! ```json
//! {
//!   "insertion_cost": 1.0,
//!   "deletion_cost": 1.0,
//!   "substitution_cost": 1.0,
//!   "confusable_tiers": [
//!     { "cost": 0.1, "letters": { "ه": ["ة", "ا"] } },
//!     { "cost": 0.5, "letters": { "ء": [""] } }
//!   ],
//!   "prefixes": ["ال", "و"],
//!   "ignore_prefix": false,
//!   "use_standard_distance": false
//! }
//! ```
//!
//! An empty string in a tier's letter list is the silent letter.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cost::tables::{DEFAULT_PREFIXES, DEFAULT_TIERS};
use crate::cost::{ConfusableMap, ConfusableTier, CostModel};
use crate::error::{ScoreError, ScoreResult};
use crate::prefix::PrefixSet;

/// One confusable tier in serializable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierConfig {
    /// Substitution cost for every pair in this tier.
    pub cost: f64,
    /// Letter to the letters it may be confused with.
    pub letters: BTreeMap<String, Vec<String>>,
}

impl TierConfig {
    /// Serializable form of a static table (see [`crate::cost::tables`]).
    pub fn from_table(cost: f64, table: &[(char, &str)]) -> Self {
        let letters = table
            .iter()
            .map(|&(key, set)| {
                let values = if set.is_empty() {
                    vec![String::new()]
                } else {
                    set.chars().map(String::from).collect()
                };
                (key.to_string(), values)
            })
            .collect();
        Self { cost, letters }
    }

    fn compile(&self, index: usize) -> ScoreResult<ConfusableTier> {
        check_cost(&format!("confusable_tiers[{index}].cost"), self.cost)?;

        let mut tier = ConfusableTier::new(self.cost);
        for (key, values) in &self.letters {
            let Some(key_char) = single_char(key) else {
                return Err(ScoreError::InvalidConfiguration(format!(
                    "confusable_tiers[{index}]: key {key:?} must be exactly one character"
                )));
            };
            for value in values {
                let letter = if value.is_empty() {
                    None
                } else if let Some(c) = single_char(value) {
                    Some(c)
                } else {
                    return Err(ScoreError::InvalidConfiguration(format!(
                        "confusable_tiers[{index}]: letter {value:?} for key {key:?} \
                         must be one character or empty"
                    )));
                };
                tier.insert(key_char, letter);
            }
        }
        Ok(tier)
    }
}

/// Scorer configuration, shared read-only by every call on one scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScorerConfig {
    pub insertion_cost: f64,
    pub deletion_cost: f64,
    /// Cost of substituting letters no tier relates.
    pub substitution_cost: f64,
    /// Tiers in lookup order; the first matching tier decides the cost.
    pub confusable_tiers: Vec<TierConfig>,
    /// Prefix literals that may be elided at the start of a word.
    pub prefixes: Vec<String>,
    /// Skip prefix stripping and use the plain weighted distance.
    pub ignore_prefix: bool,
    /// Use unweighted Levenshtein distance instead of the weighted engine.
    pub use_standard_distance: bool,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            insertion_cost: 1.0,
            deletion_cost: 1.0,
            substitution_cost: 1.0,
            confusable_tiers: DEFAULT_TIERS
                .iter()
                .map(|&(cost, table)| TierConfig::from_table(cost, table))
                .collect(),
            prefixes: DEFAULT_PREFIXES.iter().map(|p| (*p).to_owned()).collect(),
            ignore_prefix: false,
            use_standard_distance: false,
        }
    }
}

impl ScorerConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::Json`] if the text is not a valid configuration.
    pub fn from_json_str(json: &str) -> ScoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::Io`] if the file cannot be read, or
    /// [`ScoreError::Json`] if its contents do not parse.
    pub fn from_path(path: &Path) -> ScoreResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ScoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Validate costs and tables and build the cost model.
    pub(crate) fn cost_model(&self) -> ScoreResult<CostModel> {
        check_cost("insertion_cost", self.insertion_cost)?;
        check_cost("deletion_cost", self.deletion_cost)?;
        check_cost("substitution_cost", self.substitution_cost)?;

        let tiers = self
            .confusable_tiers
            .iter()
            .enumerate()
            .map(|(index, tier)| tier.compile(index))
            .collect::<ScoreResult<Vec<_>>>()?;

        Ok(CostModel::new(ConfusableMap::new(tiers), self.substitution_cost))
    }

    /// Validate and build the prefix set.
    pub(crate) fn prefix_set(&self) -> ScoreResult<PrefixSet> {
        if let Some(index) = self.prefixes.iter().position(String::is_empty) {
            return Err(ScoreError::InvalidConfiguration(format!(
                "prefixes[{index}] is empty"
            )));
        }
        Ok(PrefixSet::new(self.prefixes.iter().cloned()))
    }
}

fn check_cost(name: &str, value: f64) -> ScoreResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ScoreError::InvalidConfiguration(format!(
            "{name} must be a finite non-negative number, got {value}"
        )))
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
