//! Deserialization goes through the same checks as the constructors.

use crate::{FieldForgeError, FieldRange, FieldRule, RuleSet};

#[test]
fn test_range_round_trip() {
    let range = FieldRange::new(6, 11);
    let json = serde_json::to_string(&range).unwrap();

    assert_eq!(json, r#"{"min":6,"max":11}"#);
    assert_eq!(serde_json::from_str::<FieldRange>(&json).unwrap(), range);
}

#[test]
fn test_inverted_range_rejected() {
    let err = serde_json::from_str::<FieldRange>(r#"{"min":9,"max":4}"#).unwrap_err();
    assert!(err.to_string().contains("min exceeds max"));
}

#[test]
fn test_rule_without_ranges_rejected() {
    let err = serde_json::from_str::<FieldRule>(r#"{"name":"row","ranges":[]}"#).unwrap_err();
    assert!(err.to_string().contains("no ranges"));
}

#[test]
fn test_rule_with_bad_range_rejected() {
    let json = r#"{"name":"row","ranges":[{"min":1,"max":3},{"min":8,"max":5}]}"#;
    assert!(serde_json::from_str::<FieldRule>(json).is_err());
}

#[test]
fn test_rule_set_round_trip() {
    let rules = RuleSet::new(vec![
        FieldRule::new("class", [FieldRange::new(1, 3), FieldRange::new(5, 7)]),
        FieldRule::new("row", [FieldRange::new(6, 11)]),
    ])
    .unwrap();

    let json = serde_json::to_string(&rules).unwrap();
    assert!(json.starts_with('['));
    assert_eq!(serde_json::from_str::<RuleSet>(&json).unwrap(), rules);
}

#[test]
fn test_rule_set_duplicates_rejected() {
    let json = r#"[
        {"name":"row","ranges":[{"min":1,"max":2}]},
        {"name":"row","ranges":[{"min":3,"max":4}]}
    ]"#;

    let err = serde_json::from_str::<RuleSet>(json).unwrap_err();
    assert!(err.to_string().contains("Duplicate rule name: row"));
}

#[test]
fn test_try_from_vec_matches_new() {
    let result = RuleSet::try_from(vec![
        FieldRule::new("a", [FieldRange::new(0, 1)]),
        FieldRule::new("a", [FieldRange::new(2, 3)]),
    ]);
    assert!(matches!(result, Err(FieldForgeError::DuplicateRule(_))));
}
