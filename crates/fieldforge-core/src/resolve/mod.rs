//! Field resolution by iterative elimination.
//!
//! Each pass walks the unassigned positions in order. A position whose values
//! fit exactly one remaining rule is assigned that rule, and the rule leaves
//! the remaining set at once, so later positions in the same pass already see
//! the smaller set. Passes repeat until every rule is assigned.
//!
//! Candidate counting stops at the second fitting rule: only "exactly one"
//! matters, the other candidates are never enumerated.

mod mapping;

#[cfg(test)]
mod tests;

pub use mapping::FieldMapping;

use tracing::{debug, info};

use crate::error::{FieldForgeError, Result};
use crate::rule::RuleSet;
use crate::ticket::{column, Ticket};

/// Rules that fit every value of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Candidates {
    None,
    One(usize),
    Many,
}

/// Deduces which rule describes which ticket position.
///
/// # Examples
///
/// ```
/// use fieldforge_core::{FieldRange, FieldResolver, FieldRule, RuleSet, Ticket};
///
/// let rules = RuleSet::new(vec![
///     FieldRule::new("low", [FieldRange::new(0, 10)]),
///     FieldRule::new("any", [FieldRange::new(0, 100)]),
/// ])
/// .unwrap();
/// let tickets = vec![Ticket::from([50, 5]), Ticket::from([70, 9])];
///
/// let mapping = FieldResolver::new().resolve(&tickets, &rules).unwrap();
/// assert_eq!(mapping.get(0), Some("any"));
/// assert_eq!(mapping.get(1), Some("low"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldResolver {
    max_passes: Option<usize>,
}

impl FieldResolver {
    /// Creates a resolver bounded only by progress detection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails with [`FieldForgeError::PassLimitExceeded`] after `limit` passes.
    pub fn with_max_passes(mut self, limit: usize) -> Self {
        self.max_passes = Some(limit);
        self
    }

    pub fn max_passes(&self) -> Option<usize> {
        self.max_passes
    }

    /// Resolves the position of every rule in `rules` from `tickets`.
    ///
    /// Every ticket must already be valid; a single invalid value usually
    /// leaves its position without candidates.
    ///
    /// # Errors
    ///
    /// - [`FieldForgeError::NoTickets`] when `tickets` is empty
    /// - [`FieldForgeError::TicketLength`] when ticket lengths differ
    /// - [`FieldForgeError::FieldCount`] when the rule count differs from the
    ///   ticket length
    /// - [`FieldForgeError::UnsatisfiablePosition`] when no remaining rule
    ///   fits a position
    /// - [`FieldForgeError::AmbiguousAssignment`] when a whole pass assigns
    ///   nothing
    /// - [`FieldForgeError::PassLimitExceeded`] when the pass limit is hit
    pub fn resolve(&self, tickets: &[Ticket], rules: &RuleSet) -> Result<FieldMapping> {
        let width = check_shape(tickets, rules)?;

        info!(
            event = "resolve_start",
            ticket_count = tickets.len() as u64,
            field_count = width as u64,
        );

        let mut assigned: Vec<Option<usize>> = vec![None; width];
        let mut claimed = vec![false; rules.len()];
        let mut remaining = rules.len();
        let mut pass = 0usize;

        while remaining > 0 {
            if let Some(limit) = self.max_passes {
                if pass >= limit {
                    return Err(FieldForgeError::PassLimitExceeded { limit });
                }
            }
            pass += 1;

            let mut resolved_this_pass = 0usize;

            for position in 0..width {
                if assigned[position].is_some() {
                    continue;
                }

                match candidates(tickets, rules, &claimed, position) {
                    Candidates::One(rule_idx) => {
                        assigned[position] = Some(rule_idx);
                        claimed[rule_idx] = true;
                        remaining -= 1;
                        resolved_this_pass += 1;

                        debug!(
                            event = "position_resolved",
                            pass = pass as u64,
                            position = position as u64,
                            field = rules.as_slice()[rule_idx].name(),
                        );
                    }
                    Candidates::Many => {}
                    Candidates::None => {
                        return Err(FieldForgeError::UnsatisfiablePosition { position });
                    }
                }
            }

            debug!(
                event = "resolve_pass",
                pass = pass as u64,
                resolved = resolved_this_pass as u64,
                remaining = remaining as u64,
            );

            if resolved_this_pass == 0 {
                return Err(ambiguous(rules, &assigned, &claimed));
            }
        }

        info!(
            event = "resolve_end",
            passes = pass as u64,
            field_count = width as u64,
        );

        let names = assigned
            .into_iter()
            .flatten()
            .map(|rule_idx| rules.as_slice()[rule_idx].name().to_string())
            .collect();

        Ok(FieldMapping::new(names))
    }
}

/// Resolves with a default [`FieldResolver`].
pub fn resolve(tickets: &[Ticket], rules: &RuleSet) -> Result<FieldMapping> {
    FieldResolver::new().resolve(tickets, rules)
}

// Returns the common ticket width.
fn check_shape(tickets: &[Ticket], rules: &RuleSet) -> Result<usize> {
    let width = tickets.first().ok_or(FieldForgeError::NoTickets)?.len();

    if let Some((ticket, found)) = tickets
        .iter()
        .map(Ticket::len)
        .enumerate()
        .find(|&(_, len)| len != width)
    {
        return Err(FieldForgeError::TicketLength {
            ticket,
            expected: width,
            found,
        });
    }

    if rules.len() != width {
        return Err(FieldForgeError::FieldCount {
            rules: rules.len(),
            positions: width,
        });
    }

    Ok(width)
}

fn candidates(
    tickets: &[Ticket],
    rules: &RuleSet,
    claimed: &[bool],
    position: usize,
) -> Candidates {
    let mut found = Candidates::None;

    for (rule_idx, rule) in rules.iter().enumerate() {
        if claimed[rule_idx] || !rule.satisfied_by_all(column(tickets, position)) {
            continue;
        }
        match found {
            Candidates::None => found = Candidates::One(rule_idx),
            // A second fit settles it.
            _ => return Candidates::Many,
        }
    }

    found
}

fn ambiguous(rules: &RuleSet, assigned: &[Option<usize>], claimed: &[bool]) -> FieldForgeError {
    let unresolved_positions = assigned
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.is_none())
        .map(|(position, _)| position)
        .collect();

    let remaining_rules = rules
        .iter()
        .zip(claimed)
        .filter(|&(_, &taken)| !taken)
        .map(|(rule, _)| rule.name().to_string())
        .collect();

    FieldForgeError::AmbiguousAssignment {
        unresolved_positions,
        remaining_rules,
    }
}
