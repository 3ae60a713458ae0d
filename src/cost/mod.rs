//! Confusable-letter cost model.
//!
//! Substitution costs come from an ordered list of tiers. Each tier maps a
//! letter to the set of letters it is commonly confused with, and carries a
//! single cost. Lookup scans the tiers in order and the first tier containing
//! the pair (in either direction) decides the cost; letters that no tier
//! relates fall back to the default substitution cost.
//!
//! The model never sees equal letters: the distance engine short-circuits
//! those to zero before asking.

pub mod tables;

use std::collections::{HashMap, HashSet};

/// A letter in a confusable table. `None` is the silent letter.
pub type Letter = Option<char>;

/// Cost of replacing one code point with another, different one.
pub trait SubstitutionCost {
    fn substitution_cost(&self, a: char, b: char) -> f64;
}

/// One cost tier: every related pair costs the same.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfusableTier {
    cost: f64,
    letters: HashMap<char, HashSet<Letter>>,
}

impl ConfusableTier {
    /// Create an empty tier with the given cost.
    pub fn new(cost: f64) -> Self {
        Self {
            cost,
            letters: HashMap::new(),
        }
    }

    /// Build a tier from a static table (see [`tables`] for the row format).
    pub fn from_table(cost: f64, table: &[(char, &str)]) -> Self {
        let mut tier = Self::new(cost);
        for &(key, set) in table {
            if set.is_empty() {
                tier.insert(key, None);
            }
            for confusable in set.chars() {
                tier.insert(key, Some(confusable));
            }
        }
        tier
    }

    /// Relate `key` to `confusable`.
    pub fn insert(&mut self, key: char, confusable: Letter) {
        self.letters.entry(key).or_default().insert(confusable);
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Whether `a` and `b` are related by this tier, checked both ways.
    pub fn matches(&self, a: Letter, b: Letter) -> bool {
        self.contains(a, b) || self.contains(b, a)
    }

    fn contains(&self, key: Letter, confusable: Letter) -> bool {
        key.and_then(|k| self.letters.get(&k))
            .is_some_and(|set| set.contains(&confusable))
    }
}

/// Ordered list of tiers. Order is the tie-break.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfusableMap {
    tiers: Vec<ConfusableTier>,
}

impl ConfusableMap {
    pub fn new(tiers: Vec<ConfusableTier>) -> Self {
        Self { tiers }
    }

    /// The built-in orthographic (0.1) and phonetic (0.5) tiers.
    pub fn builtin() -> Self {
        Self::new(
            tables::DEFAULT_TIERS
                .iter()
                .map(|&(cost, table)| ConfusableTier::from_table(cost, table))
                .collect(),
        )
    }

    /// Cost of the first tier relating `a` and `b`, if any.
    pub fn lookup(&self, a: Letter, b: Letter) -> Option<f64> {
        self.tiers
            .iter()
            .find(|tier| tier.matches(a, b))
            .map(ConfusableTier::cost)
    }

    pub fn tiers(&self) -> &[ConfusableTier] {
        &self.tiers
    }
}

/// Confusable map plus the fallback cost for unrelated letters.
#[derive(Debug, Clone, PartialEq)]
pub struct CostModel {
    map: ConfusableMap,
    default_substitution: f64,
}

impl CostModel {
    pub fn new(map: ConfusableMap, default_substitution: f64) -> Self {
        Self {
            map,
            default_substitution,
        }
    }

    /// Cost of confusing `a` with `b`, either of which may be silent.
    pub fn letter_cost(&self, a: Letter, b: Letter) -> f64 {
        self.map.lookup(a, b).unwrap_or(self.default_substitution)
    }

    pub fn default_substitution(&self) -> f64 {
        self.default_substitution
    }

    pub fn map(&self) -> &ConfusableMap {
        &self.map
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::new(ConfusableMap::builtin(), 1.0)
    }
}

impl SubstitutionCost for CostModel {
    fn substitution_cost(&self, a: char, b: char) -> f64 {
        self.letter_cost(Some(a), Some(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_builtin_high_tier() {
        let model = CostModel::default();
        assert!(approx(model.substitution_cost('ه', 'ة'), 0.1));
        assert!(approx(model.substitution_cost('أ', 'ء'), 0.1));
        assert!(approx(model.substitution_cost('ى', 'ي'), 0.1));
    }

    #[test]
    fn test_builtin_medium_tier() {
        let model = CostModel::default();
        assert!(approx(model.substitution_cost('ل', 'ر'), 0.5));
        assert!(approx(model.substitution_cost('ض', 'د'), 0.5));
        assert!(approx(model.letter_cost(Some('ء'), None), 0.5));
    }

    #[test]
    fn test_one_to_many_pairs_all_kept() {
        // Every confusable of alef-hamza survives, not just the last listed.
        let model = CostModel::default();
        for other in ['ا', 'إ', 'ئ', 'ؤ', 'ء'] {
            assert!(approx(model.substitution_cost('أ', other), 0.1), "أ/{other}");
        }
    }

    #[test]
    fn test_unrelated_letters_use_default() {
        let model = CostModel::new(ConfusableMap::builtin(), 0.75);
        assert!(approx(model.substitution_cost('ك', 'س'), 0.75));
    }

    #[test]
    fn test_lookup_is_symmetric() {
        let mut tier = ConfusableTier::new(0.2);
        tier.insert('ب', Some('ت'));
        let model = CostModel::new(ConfusableMap::new(vec![tier]), 1.0);
        assert!(approx(model.substitution_cost('ب', 'ت'), 0.2));
        assert!(approx(model.substitution_cost('ت', 'ب'), 0.2));

        let builtin = CostModel::default();
        for (a, b) in [('ه', 'ا'), ('و', 'ؤ'), ('ظ', 'ض'), ('ز', 'ر')] {
            assert!(approx(
                builtin.substitution_cost(a, b),
                builtin.substitution_cost(b, a)
            ));
        }
    }

    #[test]
    fn test_first_tier_wins() {
        let mut early = ConfusableTier::new(0.3);
        early.insert('س', Some('ص'));
        let mut late = ConfusableTier::new(0.05);
        late.insert('ص', Some('س'));
        let model = CostModel::new(ConfusableMap::new(vec![early, late]), 1.0);
        assert!(approx(model.substitution_cost('س', 'ص'), 0.3));
        assert!(approx(model.substitution_cost('ص', 'س'), 0.3));
    }

    #[test]
    fn test_self_inclusion_not_special() {
        let tier = ConfusableTier::from_table(0.1, &[('ه', "هة")]);
        assert!(tier.matches(Some('ه'), Some('ه')));
        assert!(tier.matches(Some('ة'), Some('ه')));
    }

    #[test]
    fn test_silent_letter_only_via_key() {
        let tier = ConfusableTier::from_table(0.5, &[('ء', "")]);
        assert!(tier.matches(None, Some('ء')));
        assert!(!tier.matches(None, Some('ا')));
    }
}
