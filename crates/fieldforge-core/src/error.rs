//! Error types for FieldForge

use thiserror::Error;

/// Error produced when a rule or ticket line cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Main error type for FieldForge operations
#[derive(Debug, Error)]
pub enum FieldForgeError {
    /// A line of the notes could not be parsed
    #[error("Parse error on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    /// A full resolution pass assigned nothing while rules were still unassigned
    #[error(
        "Ambiguous assignment: positions {unresolved_positions:?} cannot be resolved from rules {remaining_rules:?}"
    )]
    AmbiguousAssignment {
        unresolved_positions: Vec<usize>,
        remaining_rules: Vec<String>,
    },

    /// A position has no remaining rule satisfied by all of its values
    #[error("No remaining rule fits every value at position {position}")]
    UnsatisfiablePosition { position: usize },

    /// A ticket is longer or shorter than the first ticket
    #[error("Ticket {ticket} has {found} values, expected {expected}")]
    TicketLength {
        ticket: usize,
        expected: usize,
        found: usize,
    },

    /// The rule count differs from the number of ticket positions
    #[error("{rules} rules cannot be assigned to {positions} positions")]
    FieldCount { rules: usize, positions: usize },

    /// Summing invalid values overflowed
    #[error("Sum of invalid values overflows i64")]
    SumOverflow,

    /// Multiplying target values overflowed
    #[error("Product of target values overflows i64")]
    ProductOverflow,

    /// Two rules share the same name
    #[error("Duplicate rule name: {0}")]
    DuplicateRule(String),

    /// Resolution needs at least one ticket
    #[error("No tickets to resolve fields from")]
    NoTickets,

    /// The configured pass limit was reached before every position was assigned
    #[error("Resolution did not finish within {limit} passes")]
    PassLimitExceeded { limit: usize },

    /// The notes contain no "your ticket" section entry
    #[error("Notes do not contain your own ticket")]
    MissingOwnTicket,
}

/// Result type alias for FieldForge operations
pub type Result<T> = std::result::Result<T, FieldForgeError>;
