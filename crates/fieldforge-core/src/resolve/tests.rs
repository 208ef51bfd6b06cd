//! Tests for field resolution.

use fieldforge_test::{departure, ordering};

use super::*;
use crate::test_utils::{rule, rule_set, tickets};
use crate::validate::scan_tickets;
use crate::{FieldRange, FieldRule};

fn names(mapping: &FieldMapping) -> Vec<&str> {
    mapping.iter().map(|(_, name)| name).collect()
}

#[test]
fn test_resolves_ordering_sample() {
    let rules = rule_set(ordering::RULES);
    let mapping = resolve(&tickets(ordering::NEARBY), &rules).unwrap();

    assert_eq!(names(&mapping), ordering::MAPPING);
}

#[test]
fn test_resolves_cascade_with_own_ticket() {
    let rules = rule_set(departure::RULES);
    let mut valid = scan_tickets(tickets(departure::NEARBY), &rules).valid;
    valid.push(Ticket::new(departure::OWN.to_vec()));

    let mapping = resolve(&valid, &rules).unwrap();

    assert_eq!(names(&mapping), departure::MAPPING);
}

#[test]
fn test_every_rule_used_exactly_once() {
    let rules = rule_set(departure::RULES);
    let valid = scan_tickets(tickets(departure::NEARBY), &rules).valid;
    let mapping = resolve(&valid, &rules).unwrap();

    assert_eq!(mapping.len(), rules.len());
    for rule in &rules {
        let hits = mapping.iter().filter(|(_, name)| *name == rule.name()).count();
        assert_eq!(hits, 1, "rule {} assigned {} times", rule.name(), hits);
    }
}

#[test]
fn test_resolution_is_deterministic() {
    let rules = rule_set(departure::RULES);
    let valid = scan_tickets(tickets(departure::NEARBY), &rules).valid;

    let first = resolve(&valid, &rules).unwrap();
    let second = resolve(&valid, &rules).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_single_position_single_rule() {
    let rules = RuleSet::new(vec![rule("only", 1, 1)]).unwrap();
    let mapping = resolve(&[Ticket::from([1])], &rules).unwrap();

    assert_eq!(mapping.get(0), Some("only"));
}

#[test]
fn test_later_position_unlocks_earlier_on_next_pass() {
    // Position 0 fits both rules; position 1 fits only "wide". Claiming
    // "wide" leaves position 0 for the second pass.
    let rules = RuleSet::new(vec![rule("narrow", 0, 5), rule("wide", 0, 100)]).unwrap();
    let tickets = vec![Ticket::from([3, 50]), Ticket::from([4, 60])];

    let err = FieldResolver::new()
        .with_max_passes(1)
        .resolve(&tickets, &rules)
        .unwrap_err();
    assert!(matches!(err, FieldForgeError::PassLimitExceeded { limit: 1 }));

    let mapping = FieldResolver::new()
        .with_max_passes(2)
        .resolve(&tickets, &rules)
        .unwrap();
    assert_eq!(mapping.get(0), Some("narrow"));
    assert_eq!(mapping.get(1), Some("wide"));
}

#[test]
fn test_earlier_claim_resolves_later_position_in_same_pass() {
    // Position 0 fits only "wide"; position 1 fits both until "wide" is
    // claimed earlier in the same pass.
    let rules = RuleSet::new(vec![rule("narrow", 0, 5), rule("wide", 0, 100)]).unwrap();
    let tickets = vec![Ticket::from([3, 4]), Ticket::from([70, 2])];

    let mapping = FieldResolver::new()
        .with_max_passes(1)
        .resolve(&tickets, &rules)
        .unwrap();
    assert_eq!(mapping.get(0), Some("wide"));
    assert_eq!(mapping.get(1), Some("narrow"));
}

#[test]
fn test_pass_limit() {
    let rules = rule_set(departure::RULES);
    let valid = scan_tickets(tickets(departure::NEARBY), &rules).valid;

    let resolver = FieldResolver::new().with_max_passes(departure::PASSES);
    assert!(resolver.resolve(&valid, &rules).is_ok());

    let err = FieldResolver::new()
        .with_max_passes(departure::PASSES - 1)
        .resolve(&valid, &rules)
        .unwrap_err();
    assert!(matches!(
        err,
        FieldForgeError::PassLimitExceeded { limit } if limit == departure::PASSES - 1
    ));
}

#[test]
fn test_ambiguous_input_fails_instead_of_looping() {
    let rules = RuleSet::new(vec![rule("a", 0, 10), rule("b", 0, 10)]).unwrap();
    let tickets = vec![Ticket::from([1, 2]), Ticket::from([3, 4])];

    let err = resolve(&tickets, &rules).unwrap_err();
    match err {
        FieldForgeError::AmbiguousAssignment {
            unresolved_positions,
            remaining_rules,
        } => {
            assert_eq!(unresolved_positions, vec![0, 1]);
            assert_eq!(remaining_rules, vec!["a".to_string(), "b".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_partial_progress_then_ambiguity() {
    let rules = RuleSet::new(vec![
        rule("x", 0, 10),
        rule("y", 0, 10),
        rule("big", 50, 60),
    ])
    .unwrap();
    let tickets = vec![Ticket::from([1, 55, 2])];

    let err = resolve(&tickets, &rules).unwrap_err();
    assert!(matches!(
        err,
        FieldForgeError::AmbiguousAssignment { ref unresolved_positions, .. }
            if unresolved_positions == &vec![0, 2]
    ));
}

#[test]
fn test_position_without_candidates() {
    let rules = RuleSet::new(vec![rule("a", 0, 10), rule("b", 20, 30)]).unwrap();
    let tickets = vec![Ticket::from([5, 15])];

    let err = resolve(&tickets, &rules).unwrap_err();
    assert!(matches!(err, FieldForgeError::UnsatisfiablePosition { position: 1 }));
}

#[test]
fn test_shape_errors() {
    let rules = RuleSet::new(vec![rule("a", 0, 10)]).unwrap();

    assert!(matches!(resolve(&[], &rules), Err(FieldForgeError::NoTickets)));

    let err = resolve(&[Ticket::from([1]), Ticket::from([1, 2])], &rules).unwrap_err();
    assert!(matches!(
        err,
        FieldForgeError::TicketLength { ticket: 1, expected: 1, found: 2 }
    ));

    let err = resolve(&[Ticket::from([1, 2])], &rules).unwrap_err();
    assert!(matches!(err, FieldForgeError::FieldCount { rules: 1, positions: 2 }));
}

#[test]
fn test_multi_range_rules_resolve() {
    let rules = RuleSet::new(vec![
        FieldRule::new(
            "odd",
            [
                FieldRange::new(1, 1),
                FieldRange::new(3, 3),
                FieldRange::new(5, 5),
            ],
        ),
        FieldRule::new("small", [FieldRange::new(0, 5)]),
    ])
    .unwrap();
    let tickets = vec![Ticket::from([2, 3]), Ticket::from([4, 5])];

    let mapping = resolve(&tickets, &rules).unwrap();
    assert_eq!(mapping.get(0), Some("small"));
    assert_eq!(mapping.get(1), Some("odd"));
}

#[test]
fn test_mapping_helpers() {
    let rules = rule_set(departure::RULES);
    let valid = scan_tickets(tickets(departure::NEARBY), &rules).valid;
    let mapping = resolve(&valid, &rules).unwrap();

    assert_eq!(
        mapping.positions_with_prefix("departure ").collect::<Vec<_>>(),
        vec![1, 3]
    );
    assert_eq!(mapping.position_of("wagon"), Some(2));
    assert_eq!(
        mapping
            .product_with_prefix(&Ticket::new(departure::OWN.to_vec()), "departure ")
            .unwrap(),
        departure::DEPARTURE_PRODUCT
    );
    assert!(mapping.to_string().starts_with("0: zone, 1: departure track"));
}

#[test]
fn test_product_without_matches_is_one() {
    let rules = rule_set(ordering::RULES);
    let mapping = resolve(&tickets(ordering::NEARBY), &rules).unwrap();
    let own = Ticket::new(ordering::OWN.to_vec());

    assert_eq!(mapping.product_with_prefix(&own, "departure ").unwrap(), 1);
}

#[test]
fn test_product_overflow() {
    let mapping = FieldMapping::new(vec!["departure a".into(), "departure b".into()]);
    let own = Ticket::from([i64::MAX, 2]);

    assert!(matches!(
        mapping.product_with_prefix(&own, "departure "),
        Err(FieldForgeError::ProductOverflow)
    ));
}
