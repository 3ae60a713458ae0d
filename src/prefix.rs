//! Prefix-tolerant distance resolution.
//!
//! Arabic attaches the definite article, conjunctions and several
//! prepositions directly to the word. A transcription that drops or adds one
//! of these should not be charged for it. The resolver strips every matching
//! prefix from each side independently and keeps the cheapest combination.
//!
//! ```text
//! baseline   = distance(a, b)
//! candidates = strip(a) × strip(b)          (cross product, not zip)
//! result     = min(baseline, distance over candidates)
//! ```
//!
//! When only one side matches a prefix, the other side takes part in the
//! product unstripped. When neither side matches, only the baseline is
//! scored.
//!
//! A root letter that happens to equal a prefix literal is stripped like any
//! other match; there is no attempt to tell the two apart.

use tracing::trace;

use crate::cost::tables::DEFAULT_PREFIXES;
use crate::distance::DistanceEngine;

/// Ordered set of elidable prefix literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSet {
    prefixes: Vec<String>,
}

impl PrefixSet {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Every remainder of `word` after removing one matching prefix.
    ///
    /// Prefixes are checked independently, so a word can yield several
    /// remainders. The unstripped word is never included.
    pub fn strip_candidates<'a>(&self, word: &'a str) -> Vec<&'a str> {
        self.prefixes
            .iter()
            .filter_map(|prefix| word.strip_prefix(prefix.as_str()))
            .collect()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for PrefixSet {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIXES.iter().copied())
    }
}

/// Outcome of a resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Minimum distance over the baseline and every stripped combination.
    pub distance: f64,
    /// Number of distances computed, baseline included.
    pub evaluated: usize,
}

/// Minimum weighted distance over all prefix-elision combinations.
#[derive(Debug, Clone, Copy)]
pub struct PrefixResolver<'a> {
    engine: &'a DistanceEngine,
    prefixes: &'a PrefixSet,
    ignore_prefix: bool,
}

impl<'a> PrefixResolver<'a> {
    pub fn new(engine: &'a DistanceEngine, prefixes: &'a PrefixSet, ignore_prefix: bool) -> Self {
        Self {
            engine,
            prefixes,
            ignore_prefix,
        }
    }

    /// Resolved distance from `a` to `b`.
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        self.resolve(a, b).distance
    }

    /// Resolve `a` against `b`, reporting how many candidates were scored.
    pub fn resolve(&self, a: &str, b: &str) -> Resolution {
        let baseline = self.engine.distance(a, b);
        if self.ignore_prefix {
            return Resolution {
                distance: baseline,
                evaluated: 1,
            };
        }

        let mut stripped_a = self.prefixes.strip_candidates(a);
        let mut stripped_b = self.prefixes.strip_candidates(b);
        if stripped_a.is_empty() && stripped_b.is_empty() {
            return Resolution {
                distance: baseline,
                evaluated: 1,
            };
        }
        let (left, right) = (stripped_a.len(), stripped_b.len());
        if stripped_a.is_empty() {
            stripped_a.push(a);
        }
        if stripped_b.is_empty() {
            stripped_b.push(b);
        }

        let mut best = baseline;
        let mut evaluated = 1;
        for candidate_a in &stripped_a {
            for candidate_b in &stripped_b {
                best = best.min(self.engine.distance(candidate_a, candidate_b));
                evaluated += 1;
            }
        }

        trace!(
            left,
            right,
            evaluated,
            baseline,
            distance = best,
            "resolved prefix candidates"
        );

        Resolution {
            distance: best,
            evaluated,
        }
    }
}
