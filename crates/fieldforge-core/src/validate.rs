//! Ticket validation against a rule set.
//!
//! A value is covered when at least one rule is satisfied by it. Validation
//! only answers coverage; it never decides which rule owns a value.

use tracing::info;

use crate::error::{FieldForgeError, Result};
use crate::rule::RuleSet;
use crate::ticket::Ticket;

/// Outcome of validating one ticket.
///
/// # Examples
///
/// ```
/// use fieldforge_core::{validate, FieldRange, FieldRule, RuleSet, Ticket};
///
/// let rules = RuleSet::new(vec![
///     FieldRule::new("class", [FieldRange::new(1, 3), FieldRange::new(5, 7)]),
/// ])
/// .unwrap();
///
/// let outcome = validate(&Ticket::from([4, 2, 9]), &rules);
/// assert!(!outcome.is_valid());
/// assert_eq!(outcome.invalid_values(), &[4, 9]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    invalid_values: Vec<i64>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.invalid_values.is_empty()
    }

    /// Uncovered values in ticket order, duplicates kept.
    pub fn invalid_values(&self) -> &[i64] {
        &self.invalid_values
    }

    /// Sum of the uncovered values.
    ///
    /// # Errors
    ///
    /// Returns [`FieldForgeError::SumOverflow`] if the sum does not fit in `i64`.
    pub fn error_sum(&self) -> Result<i64> {
        checked_sum(&self.invalid_values)
    }

    /// Splits into `(is_valid, invalid_values)`.
    pub fn into_parts(self) -> (bool, Vec<i64>) {
        (self.invalid_values.is_empty(), self.invalid_values)
    }
}

/// Validates `ticket` against every rule in `rules`.
pub fn validate(ticket: &Ticket, rules: &RuleSet) -> Validation {
    let invalid_values = ticket
        .values()
        .iter()
        .copied()
        .filter(|&value| !rules.covers(value))
        .collect();

    Validation { invalid_values }
}

/// Tickets partitioned by validity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketScan {
    pub valid: Vec<Ticket>,
    pub invalid_values: Vec<i64>,
    pub invalid_count: usize,
}

impl TicketScan {
    /// Sum of every uncovered value across all invalid tickets.
    ///
    /// # Errors
    ///
    /// Returns [`FieldForgeError::SumOverflow`] if the sum does not fit in `i64`.
    pub fn error_rate(&self) -> Result<i64> {
        checked_sum(&self.invalid_values)
    }
}

fn checked_sum(values: &[i64]) -> Result<i64> {
    values
        .iter()
        .try_fold(0i64, |acc, &value| acc.checked_add(value))
        .ok_or(FieldForgeError::SumOverflow)
}

/// Validates each ticket, keeping the valid ones and collecting the uncovered
/// values of the rest.
pub fn scan_tickets<I>(tickets: I, rules: &RuleSet) -> TicketScan
where
    I: IntoIterator<Item = Ticket>,
{
    let mut scan = TicketScan::default();

    for ticket in tickets {
        let (valid, invalid_values) = validate(&ticket, rules).into_parts();
        if valid {
            scan.valid.push(ticket);
        } else {
            scan.invalid_count += 1;
            scan.invalid_values.extend(invalid_values);
        }
    }

    info!(
        event = "validate_end",
        valid_count = scan.valid.len() as u64,
        invalid_count = scan.invalid_count as u64,
        error_rate = scan.error_rate().ok(),
    );

    scan
}
