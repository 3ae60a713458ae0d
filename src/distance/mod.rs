//! Weighted edit distance engine.
//!
//! Classic Wagner-Fischer dynamic program over code points, with fractional
//! insertion/deletion costs and a pluggable substitution cost. The full
//! `(n+1)×(m+1)` matrix is allocated per call and dropped once the corner
//! cell is read; nothing persists between calls.
//!
//! [`levenshtein`] is the plain unit-cost variant used for standard scoring.

pub mod levenshtein;

use crate::cost::{CostModel, SubstitutionCost};

/// Compute the weighted edit distance turning `a` into `b`.
///
/// Row 0 and column 0 hold cumulative deletion and insertion costs. Equal
/// code points substitute for free; anything else is priced by `costs`.
/// Intermediate sums are never rounded.
#[allow(clippy::cast_precision_loss)]
pub fn weighted_distance<C>(a: &str, b: &str, insertion: f64, deletion: f64, costs: &C) -> f64
where
    C: SubstitutionCost + ?Sized,
{
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = a_chars.len();
    let m = b_chars.len();

    let mut d = vec![vec![0.0_f64; m + 1]; n + 1];

    for (i, row) in d.iter_mut().enumerate().skip(1) {
        row[0] = deletion * i as f64;
    }
    for j in 1..=m {
        d[0][j] = insertion * j as f64;
    }

    for i in 1..=n {
        for j in 1..=m {
            let substitution = if a_chars[i - 1] == b_chars[j - 1] {
                0.0
            } else {
                costs.substitution_cost(a_chars[i - 1], b_chars[j - 1])
            };

            d[i][j] = (d[i - 1][j] + deletion)
                .min(d[i][j - 1] + insertion)
                .min(d[i - 1][j - 1] + substitution);
        }
    }

    d[n][m]
}

/// Weighted distance with a fixed cost configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceEngine {
    insertion_cost: f64,
    deletion_cost: f64,
    model: CostModel,
}

impl DistanceEngine {
    pub fn new(insertion_cost: f64, deletion_cost: f64, model: CostModel) -> Self {
        Self {
            insertion_cost,
            deletion_cost,
            model,
        }
    }

    /// Weighted edit distance from `a` to `b`.
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        weighted_distance(a, b, self.insertion_cost, self.deletion_cost, &self.model)
    }

    pub fn insertion_cost(&self) -> f64 {
        self.insertion_cost
    }

    pub fn deletion_cost(&self) -> f64 {
        self.deletion_cost
    }

    pub fn model(&self) -> &CostModel {
        &self.model
    }
}

impl Default for DistanceEngine {
    /// Unit insertion/deletion/substitution with the built-in tiers.
    fn default() -> Self {
        Self::new(1.0, 1.0, CostModel::default())
    }
}
