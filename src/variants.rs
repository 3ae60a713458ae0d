//! Spelling variant enumeration.
//!
//! Expands a word into every spelling reachable by swapping letters for
//! their common orthographic variants: hamza carriers and alef forms
//! anywhere in the word, and ta marbuta / ha / alef maksura endings on the
//! last letter only. The expansion is a cross product over positions, built
//! one position at a time.

use std::collections::{BTreeSet, HashMap};

use crate::cost::tables::{VARIANTS_ANYWHERE, VARIANTS_WORD_FINAL};
use crate::error::{ScoreError, ScoreResult};

/// Upper bound on the number of variants a single word may expand to.
pub const MAX_VARIANTS: usize = 10_000;

/// Substitution tables for variant enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantTables {
    anywhere: HashMap<char, Vec<char>>,
    word_final: HashMap<char, Vec<char>>,
}

impl VariantTables {
    /// Build from static tables (see [`crate::cost::tables`]).
    pub fn from_tables(anywhere: &[(char, &str)], word_final: &[(char, &str)]) -> Self {
        Self {
            anywhere: table_map(anywhere),
            word_final: table_map(word_final),
        }
    }

    /// Every spelling of `word`, the original included, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::VariantLimit`] if the word would expand to more
    /// than `limit` spellings.
    pub fn expand(&self, word: &str, limit: usize) -> ScoreResult<BTreeSet<String>> {
        let chars: Vec<char> = word.chars().collect();
        let positions: Vec<Vec<char>> = chars
            .iter()
            .enumerate()
            .map(|(i, &c)| self.options(c, i + 1 == chars.len()))
            .collect();

        let total = positions
            .iter()
            .try_fold(1usize, |acc, options| {
                acc.checked_mul(options.len()).filter(|&n| n <= limit)
            });
        if total.is_none() {
            return Err(ScoreError::VariantLimit {
                word: word.to_owned(),
                limit,
            });
        }

        let mut partials = vec![String::with_capacity(word.len())];
        for options in &positions {
            partials = partials
                .iter()
                .flat_map(|partial| {
                    options.iter().map(move |&c| {
                        let mut next = partial.clone();
                        next.push(c);
                        next
                    })
                })
                .collect();
        }

        Ok(partials.into_iter().collect())
    }

    fn options(&self, c: char, is_last: bool) -> Vec<char> {
        let mut options = vec![c];
        let extra = self.anywhere.get(&c).into_iter().flatten();
        let ending = is_last
            .then(|| self.word_final.get(&c))
            .flatten()
            .into_iter()
            .flatten();
        for &alt in extra.chain(ending) {
            if !options.contains(&alt) {
                options.push(alt);
            }
        }
        options
    }
}

fn table_map(table: &[(char, &str)]) -> HashMap<char, Vec<char>> {
    table
        .iter()
        .map(|&(key, set)| (key, set.chars().collect()))
        .collect()
}

impl Default for VariantTables {
    fn default() -> Self {
        Self::from_tables(VARIANTS_ANYWHERE, VARIANTS_WORD_FINAL)
    }
}

/// Every spelling of `word` under the built-in tables.
///
/// # Errors
///
/// Returns [`ScoreError::VariantLimit`] past [`MAX_VARIANTS`] spellings.
pub fn swap_characters(word: &str) -> ScoreResult<BTreeSet<String>> {
    VariantTables::default().expand(word, MAX_VARIANTS)
}
