//! Tickets: ordered rows of integer values.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// One parsed row of values.
///
/// # Examples
///
/// ```
/// use fieldforge_core::Ticket;
///
/// let ticket: Ticket = "7,3,47".parse().unwrap();
/// assert_eq!(ticket.values(), &[7, 3, 47]);
/// assert_eq!(ticket.get(2), Some(47));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ticket {
    values: Vec<i64>,
}

impl Ticket {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<i64> {
        self.values.get(position).copied()
    }
}

impl From<Vec<i64>> for Ticket {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

impl<const N: usize> From<[i64; N]> for Ticket {
    fn from(values: [i64; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.values.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl FromStr for Ticket {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .split(',')
            .map(|field| {
                field.trim().parse::<i64>().map_err(|e| {
                    ParseError::new(format!("Invalid ticket value '{}': {}", field.trim(), e))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Ticket::new)
    }
}

/// Collects the value at `position` from every ticket.
///
/// Tickets too short to have that position are skipped.
pub fn column(tickets: &[Ticket], position: usize) -> impl Iterator<Item = i64> + '_ {
    tickets.iter().filter_map(move |ticket| ticket.get(position))
}
