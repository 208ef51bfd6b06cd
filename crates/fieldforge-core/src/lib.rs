//! FieldForge Core - Types and inference for ticket field deduction
//!
//! This crate provides the fundamental pieces of FieldForge:
//! - [`FieldRange`] and [`FieldRule`] for describing valid values
//! - [`Ticket`] rows of values
//! - [`validate`] and [`scan_tickets`] for finding uncovered values
//! - [`FieldResolver`] for deducing which rule describes which position

pub mod error;
pub mod range;
pub mod resolve;
pub mod rule;
pub mod ticket;
pub mod validate;

#[cfg(all(test, feature = "serde"))]
mod serde_tests;
#[cfg(test)]
mod test_utils;

pub use error::{FieldForgeError, ParseError, Result};
pub use range::FieldRange;
pub use resolve::{resolve, FieldMapping, FieldResolver};
pub use rule::{FieldRule, RuleSet};
pub use ticket::Ticket;
pub use validate::{scan_tickets, validate, TicketScan, Validation};
