//! Test utilities for fieldforge-core
//!
//! Converts the raw fixtures from `fieldforge-test` into core types.

use fieldforge_test::RawRule;

use crate::{FieldRange, FieldRule, RuleSet, Ticket};

/// Builds a rule set from raw `(name, ranges)` pairs.
pub fn rule_set(raw: &[RawRule]) -> RuleSet {
    RuleSet::new(raw.iter().map(|(name, ranges)| {
        FieldRule::new(
            *name,
            ranges.iter().map(|&(min, max)| FieldRange::new(min, max)),
        )
    }))
    .unwrap()
}

/// Builds tickets from raw value rows.
pub fn tickets(raw: &[&[i64]]) -> Vec<Ticket> {
    raw.iter().map(|values| Ticket::new(values.to_vec())).collect()
}

/// Shorthand for a single-range rule.
pub fn rule(name: &str, min: i64, max: i64) -> FieldRule {
    FieldRule::new(name, [FieldRange::new(min, max)])
}
