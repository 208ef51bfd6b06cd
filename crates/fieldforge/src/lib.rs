//! FieldForge - Ticket validation and field deduction in Rust
//!
//! Parse notes, find the values no rule covers, and deduce which rule
//! describes which ticket position.
//!
//! # Example
//!
//! ```rust
//! use fieldforge::prelude::*;
//!
//! let rules = RuleSet::new(vec![
//!     FieldRule::new("class", [FieldRange::new(1, 3), FieldRange::new(5, 7)]),
//!     FieldRule::new("row", [FieldRange::new(6, 11), FieldRange::new(33, 44)]),
//! ])
//! .unwrap();
//!
//! assert_eq!(validate(&Ticket::from([40, 4]), &rules).invalid_values(), &[4]);
//! ```

pub use fieldforge_config::{ConfigError, ResolverConfig, SolveConfig};
pub use fieldforge_core::{
    resolve, scan_tickets, validate, FieldForgeError, FieldMapping, FieldRange, FieldResolver,
    FieldRule, ParseError, Result, RuleSet, Ticket, TicketScan, Validation,
};

pub mod notes;
mod solve;

pub use notes::{parse_notes, Notes, ParseMode};
pub use solve::{scan, solve, solve_scanned, Solution};

/// Console output, re-exported when the `console` feature is enabled.
#[cfg(feature = "console")]
pub use fieldforge_console as console;

pub mod prelude {
    pub use super::{
        parse_notes, resolve, scan_tickets, solve, validate, FieldMapping, FieldRange,
        FieldResolver, FieldRule, Notes, RuleSet, SolveConfig, Solution, Ticket,
    };
}
