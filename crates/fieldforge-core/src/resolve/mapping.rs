//! Position to field name mapping produced by resolution.

use std::fmt;

use crate::error::{FieldForgeError, Result};
use crate::ticket::Ticket;

/// Field names indexed by ticket position.
///
/// # Examples
///
/// ```
/// use fieldforge_core::{FieldMapping, Ticket};
///
/// let mapping = FieldMapping::new(vec!["row".into(), "departure time".into()]);
/// assert_eq!(mapping.get(1), Some("departure time"));
/// assert_eq!(mapping.position_of("row"), Some(0));
///
/// let own = Ticket::from([11, 12]);
/// assert_eq!(mapping.product_with_prefix(&own, "departure ").unwrap(), 12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldMapping {
    names: Vec<String>,
}

impl FieldMapping {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the field at `position`.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.names.get(position).map(String::as_str)
    }

    /// Position of the field called `name`.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Iterates `(position, name)` pairs in position order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().map(String::as_str).enumerate()
    }

    /// Positions whose field names start with `prefix`.
    pub fn positions_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = usize> + 'a {
        self.iter()
            .filter(move |(_, name)| name.starts_with(prefix))
            .map(|(position, _)| position)
    }

    /// Multiplies the values of `ticket` at every position whose field name
    /// starts with `prefix`.
    ///
    /// Returns 1 when no field matches.
    ///
    /// # Errors
    ///
    /// Returns [`FieldForgeError::TicketLength`] if `ticket` is shorter than the
    /// mapping and [`FieldForgeError::ProductOverflow`] if the product does
    /// not fit in `i64`.
    pub fn product_with_prefix(&self, ticket: &Ticket, prefix: &str) -> Result<i64> {
        if ticket.len() < self.len() {
            return Err(FieldForgeError::TicketLength {
                ticket: 0,
                expected: self.len(),
                found: ticket.len(),
            });
        }

        self.positions_with_prefix(prefix)
            .filter_map(|position| ticket.get(position))
            .try_fold(1i64, |acc, value| acc.checked_mul(value))
            .ok_or(FieldForgeError::ProductOverflow)
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

impl fmt::Display for FieldMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, name) in self.iter() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", position, name)?;
        }
        Ok(())
    }
}
