//! Built-in Arabic tables: confusable letter tiers, elidable prefixes, and
//! spelling-variant substitutions.
//!
//! Each table row is `(letter, set)`, where `set` lists the confusable
//! letters as one string, one code point per letter. An empty set string
//! stands for the silent letter (the key may be dropped entirely).

/// Cost of the orthographic-variant tier.
pub const HIGH_CONFUSABILITY_COST: f64 = 0.1;

/// Cost of the phonetic-cluster tier.
pub const MEDIUM_CONFUSABILITY_COST: f64 = 0.5;

/// Orthographic variants: hamza carriers, ta marbuta / ha, alef maksura / ya.
pub const HIGH_CONFUSABILITY: &[(char, &str)] = &[
    ('ه', "ةا"),
    ('ة', "ه"),
    ('ا', "ه"),
    ('ؤ', "وئء"),
    ('و', "ؤ"),
    ('أ', "اإئؤء"),
    ('إ', "اأئؤء"),
    ('ئ', "ؤءي"),
    ('ى', "ياهة"),
];

/// Phonetically similar consonants: the liquids and the "z-family".
pub const MEDIUM_CONFUSABILITY: &[(char, &str)] = &[
    ('ء', ""),
    ('ل', "منر"),
    ('م', "لنر"),
    ('ن', "لمر"),
    ('ر', "لمن"),
    ('ذ', "زظ"),
    ('ز', "ذظ"),
    ('ظ', "ذزض"),
    ('ض', "ظد"),
    ('د', "ض"),
];

/// The built-in tiers in lookup order.
pub const DEFAULT_TIERS: &[(f64, &[(char, &str)])] = &[
    (HIGH_CONFUSABILITY_COST, HIGH_CONFUSABILITY),
    (MEDIUM_CONFUSABILITY_COST, MEDIUM_CONFUSABILITY),
];

/// Definite article, the conjunction waw, and the article fused with a
/// conjunction or preposition. Bare single-letter prepositions are left out;
/// they collide with root letters too often.
pub const DEFAULT_PREFIXES: &[&str] = &["ال", "و", "وال", "فال", "بال", "كال", "لل"];

/// Substitutions allowed at any position when enumerating spellings.
pub const VARIANTS_ANYWHERE: &[(char, &str)] = &[
    ('ا', "ه"),
    ('أ', "اإئؤء"),
    ('إ', "اأئؤء"),
    ('ؤ', "ءئو"),
    ('ئ', "ؤءي"),
];

/// Substitutions allowed only on the last letter of a word.
pub const VARIANTS_WORD_FINAL: &[(char, &str)] = &[
    ('ه', "ةا"),
    ('ة', "ه"),
    ('ى', "ياهة"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique_per_table() {
        for table in [HIGH_CONFUSABILITY, MEDIUM_CONFUSABILITY, VARIANTS_ANYWHERE, VARIANTS_WORD_FINAL] {
            let mut keys: Vec<char> = table.iter().map(|&(k, _)| k).collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), table.len());
        }
    }

    #[test]
    fn test_prefixes_non_empty() {
        assert!(DEFAULT_PREFIXES.iter().all(|p| !p.is_empty()));
    }
}
