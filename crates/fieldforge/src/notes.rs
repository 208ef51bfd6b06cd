//! Parsing of ticket notes.
//!
//! Notes come in three sections: rule lines, then a `your ticket:` header
//! followed by the own ticket, then a `nearby tickets:` header followed by
//! one ticket per line. Blank lines are ignored. The parser is an explicit
//! state machine over [`ParseMode`].

use std::str::FromStr;

use fieldforge_core::{FieldForgeError, FieldRule, ParseError, Result, RuleSet, Ticket};

const OWN_TICKET_MARKER: &str = "your ticket";
const NEARBY_TICKETS_MARKER: &str = "nearby tickets";

/// Section currently being read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    #[default]
    Rules,
    OwnTicket,
    NearbyTickets,
}

impl ParseMode {
    /// Returns the mode a header line switches to, if `line` is a header.
    fn transition(line: &str) -> Option<Self> {
        if line.starts_with(OWN_TICKET_MARKER) {
            Some(Self::OwnTicket)
        } else if line.starts_with(NEARBY_TICKETS_MARKER) {
            Some(Self::NearbyTickets)
        } else {
            None
        }
    }
}

/// Parsed notes.
///
/// # Examples
///
/// ```
/// use fieldforge::Notes;
///
/// let notes: Notes = "class: 1-3 or 5-7\n\nyour ticket:\n7\n\nnearby tickets:\n3\n4\n"
///     .parse()
///     .unwrap();
///
/// assert_eq!(notes.rules.len(), 1);
/// assert_eq!(notes.own_ticket().unwrap().values(), &[7]);
/// assert_eq!(notes.nearby.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notes {
    pub rules: RuleSet,
    pub own_ticket: Option<Ticket>,
    pub nearby: Vec<Ticket>,
}

impl Notes {
    /// Returns the own ticket.
    ///
    /// # Errors
    ///
    /// Returns [`FieldForgeError::MissingOwnTicket`] if the notes had none.
    pub fn own_ticket(&self) -> Result<&Ticket> {
        self.own_ticket
            .as_ref()
            .ok_or(FieldForgeError::MissingOwnTicket)
    }
}

impl FromStr for Notes {
    type Err = FieldForgeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_notes(s)
    }
}

/// Parses notes text.
///
/// # Errors
///
/// Returns [`FieldForgeError::Parse`] with the 1-based line number for a
/// malformed line, and [`FieldForgeError::DuplicateRule`] for a repeated
/// rule name.
pub fn parse_notes(input: &str) -> Result<Notes> {
    let mut notes = Notes::default();
    let mut mode = ParseMode::default();

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end();

        if line.is_empty() {
            continue;
        }

        if let Some(next) = ParseMode::transition(line) {
            mode = next;
            continue;
        }

        let at_line = |source: ParseError| FieldForgeError::Parse {
            line: line_no,
            source,
        };

        match mode {
            ParseMode::Rules => {
                let rule = line.parse::<FieldRule>().map_err(at_line)?;
                notes.rules.push(rule)?;
            }
            ParseMode::OwnTicket => {
                if notes.own_ticket.is_some() {
                    return Err(at_line(ParseError::new("more than one own ticket")));
                }
                notes.own_ticket = Some(line.parse::<Ticket>().map_err(at_line)?);
            }
            ParseMode::NearbyTickets => {
                notes.nearby.push(line.parse::<Ticket>().map_err(at_line)?);
            }
        }
    }

    Ok(notes)
}
