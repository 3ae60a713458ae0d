//! End-to-end scoring tests through the public API.

use std::io::Write;

use arabic_edit_distance::cost::ConfusableMap;
use arabic_edit_distance::distance::{DistanceEngine, levenshtein};
use arabic_edit_distance::prefix::{PrefixResolver, PrefixSet};
use arabic_edit_distance::{
    ArabicScorer, ScoreError, ScorerConfig, normalized_weighted_edit_distance,
    weighted_edit_distance,
};
use serde_json::json;

const EPS: f64 = 1e-9;

#[test]
fn test_weighted_edit_distance_ta_marbuta() {
    let distance = weighted_edit_distance("هنية", "هنيه");
    assert!((distance - 0.1).abs() < EPS);

    let normalized = normalized_weighted_edit_distance("هنية", "هنيه").expect("non-empty");
    assert!((normalized - 0.025).abs() < EPS);
}

#[test]
fn test_normalized_distance_empty_target() {
    let err = normalized_weighted_edit_distance("هنية", "").unwrap_err();
    assert!(matches!(err, ScoreError::DivisionByZero(_)));
}

#[test]
fn test_standard_mode_matches_reference_levenshtein() {
    let config = ScorerConfig {
        use_standard_distance: true,
        ..ScorerConfig::default()
    };
    let scorer = ArabicScorer::new(&config).expect("valid");

    let predicted = "Juma";
    let truth = "House of the martyr Ibrahim Juma Mahmoud Al-Najjar";
    let result = scorer.get_edit_distance(predicted, truth).expect("non-empty");

    let reference = levenshtein::distance(predicted, truth);
    assert_eq!(reference, 46);
    assert!((result.distance - 46.0).abs() < EPS);
    assert_eq!(result.score, 8);
}

#[test]
fn test_prefix_tolerance_beats_baseline() {
    let engine = DistanceEngine::default();
    let prefixes = PrefixSet::new(["ال"]);
    let resolver = PrefixResolver::new(&engine, &prefixes, false);

    let resolved = resolver.distance("كتاب", "الكتاب");
    assert!((resolved - engine.distance("كتاب", "كتاب")).abs() < EPS);
    assert!(resolved < engine.distance("كتاب", "الكتاب"));
}

#[test]
fn test_ignore_prefix_flag() {
    let config = ScorerConfig {
        ignore_prefix: true,
        ..ScorerConfig::default()
    };
    let scorer = ArabicScorer::new(&config).expect("valid");
    let result = scorer.get_edit_distance("كتاب", "الكتاب").expect("non-empty");
    assert!((result.distance - 2.0).abs() < EPS);
    assert_eq!(result.score, 67);
}

#[test]
fn test_scorers_with_different_tables_coexist() {
    let builtin = ArabicScorer::default();
    let flat = ArabicScorer::new(&ScorerConfig {
        confusable_tiers: Vec::new(),
        ..ScorerConfig::default()
    })
    .expect("valid");

    let a = builtin.get_edit_distance("ابراهيم", "إبراهيم").expect("non-empty");
    let b = flat.get_edit_distance("ابراهيم", "إبراهيم").expect("non-empty");
    assert!((a.distance - 0.1).abs() < EPS);
    assert!((b.distance - 1.0).abs() < EPS);
}

#[test]
fn test_fractional_costs_not_rounded() {
    let config = ScorerConfig {
        insertion_cost: 0.3,
        deletion_cost: 0.7,
        ignore_prefix: true,
        ..ScorerConfig::default()
    };
    let scorer = ArabicScorer::new(&config).expect("valid");
    assert!((scorer.distance("", "سلام") - 1.2).abs() < EPS);
    assert!((scorer.distance("سلام", "") - 2.8).abs() < EPS);
}

#[test]
fn test_token_set_ratio_end_to_end() {
    let scorer = ArabicScorer::default();
    let truth = "بسم الله الرحمن الرحيم";
    assert_eq!(scorer.fuzzy_token_set_ratio(truth, truth).expect("tokens"), 100);
    assert_eq!(
        scorer
            .fuzzy_token_set_ratio("بسم اللة الرحمن", truth)
            .expect("tokens"),
        93
    );
}

#[test]
fn test_config_from_file() {
    let config_json = json!({
        "substitution_cost": 2.0,
        "confusable_tiers": [
            { "cost": 0.2, "letters": { "س": ["ص"] } }
        ],
        "prefixes": ["ال"],
        "ignore_prefix": false
    });

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{config_json}").expect("write config");

    let config = ScorerConfig::from_path(file.path()).expect("load config");
    let scorer = ArabicScorer::new(&config).expect("valid");

    // Tier pair, and a substitution priced above delete + insert.
    assert!((scorer.distance("صيف", "سيف") - 0.2).abs() < EPS);
    assert!((scorer.distance("باب", "تاب") - 2.0).abs() < EPS);
}

#[test]
fn test_config_from_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = ScorerConfig::from_path(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ScoreError::Io { .. }));
}

#[test]
fn test_invalid_config_rejected_at_construction() {
    let config: ScorerConfig = serde_json::from_value(json!({
        "confusable_tiers": [{ "cost": -0.1, "letters": {} }]
    }))
    .expect("parse");
    assert!(matches!(
        ArabicScorer::new(&config),
        Err(ScoreError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_edit_score_serializes() {
    let result = ArabicScorer::default()
        .get_edit_distance("هنية", "هنيه")
        .expect("non-empty");
    let value = serde_json::to_value(result).expect("serialize");
    assert_eq!(value["score"], json!(98));
    assert!(value["distance"].as_f64().is_some());
}

#[test]
fn test_empty_map_is_uniform_levenshtein() {
    let engine = DistanceEngine::new(
        1.0,
        1.0,
        arabic_edit_distance::cost::CostModel::new(ConfusableMap::default(), 1.0),
    );
    for (a, b) in [("مؤسسة", "موسسة"), ("الولد", "ولد"), ("ذهب", "زهب")] {
        #[allow(clippy::cast_precision_loss)]
        let expected = levenshtein::distance(a, b) as f64;
        assert!((engine.distance(a, b) - expected).abs() < EPS);
    }
}
