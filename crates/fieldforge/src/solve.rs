//! End-to-end solving of parsed notes.

use fieldforge_config::SolveConfig;
use fieldforge_core::{scan_tickets, FieldMapping, Result, TicketScan};
use tracing::info;

use crate::notes::Notes;

/// Results of solving one set of notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Sum of every value no rule covers, across all nearby tickets.
    pub error_rate: i64,
    /// Those values, in ticket order.
    pub invalid_values: Vec<i64>,
    /// Field name at each position.
    pub mapping: FieldMapping,
    /// Product of own-ticket values at the positions whose field names start
    /// with the configured target prefix. 1 when none do.
    pub target_product: i64,
}

/// Validates the nearby tickets of `notes` without resolving fields.
pub fn scan(notes: &Notes) -> TicketScan {
    info!(
        event = "solve_start",
        rule_count = notes.rules.len() as u64,
        ticket_count = notes.nearby.len() as u64,
    );

    scan_tickets(notes.nearby.iter().cloned(), &notes.rules)
}

/// Validates nearby tickets, resolves field positions and computes the
/// target product.
///
/// # Examples
///
/// ```
/// use fieldforge::{solve, Notes, SolveConfig};
///
/// let notes: Notes = "\
/// class: 0-1 or 4-19
/// row: 0-5 or 8-19
/// seat: 0-13 or 16-19
///
/// your ticket:
/// 11,12,13
///
/// nearby tickets:
/// 3,9,18
/// 15,1,5
/// 5,14,9
/// "
/// .parse()
/// .unwrap();
///
/// let config = SolveConfig::default().with_target_prefix("seat");
/// let solution = solve(&notes, &config).unwrap();
///
/// assert_eq!(solution.error_rate, 0);
/// assert_eq!(solution.mapping.to_string(), "0: row, 1: class, 2: seat");
/// assert_eq!(solution.target_product, 13);
/// ```
pub fn solve(notes: &Notes, config: &SolveConfig) -> Result<Solution> {
    solve_scanned(notes, scan(notes), config)
}

/// Resolves field positions from an earlier [`scan`] of the same notes.
///
/// Lets callers report the error rate before resolution, which may fail.
pub fn solve_scanned(notes: &Notes, scan: TicketScan, config: &SolveConfig) -> Result<Solution> {
    let error_rate = scan.error_rate()?;
    let own_ticket = notes.own_ticket()?;

    let mut tickets = scan.valid;
    if config.include_own_ticket {
        tickets.push(own_ticket.clone());
    }

    let mapping = config.resolver().resolve(&tickets, &notes.rules)?;
    let target_product = mapping.product_with_prefix(own_ticket, &config.target_prefix)?;

    info!(event = "solve_end", error_rate, target_product);

    Ok(Solution {
        error_rate,
        invalid_values: scan.invalid_values,
        mapping,
        target_product,
    })
}
