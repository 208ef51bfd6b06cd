//! Shared test fixtures for FieldForge crates.
//!
//! This crate provides raw fixture data only. It does NOT depend on
//! `fieldforge-core`, so the core crate can use it as a dev-dependency
//! without pulling in a second copy of its own types.
//!
//! - [`error_rate`] - notes where three nearby tickets are invalid
//! - [`ordering`] - notes whose fields resolve to `row, class, seat`
//! - [`departure`] - a larger set with `departure` fields and a cascade
//!   of eliminations
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! fieldforge-test = { workspace = true }
//! ```

pub mod departure;
pub mod error_rate;
pub mod ordering;

/// A rule spelled as `(name, [(min, max), ...])`.
pub type RawRule = (&'static str, &'static [(i64, i64)]);

/// Renders rules and tickets into the notes text format.
pub fn render_notes(rules: &[RawRule], own: &[i64], nearby: &[&[i64]]) -> String {
    let mut out = String::new();
    for (name, ranges) in rules {
        let ranges: Vec<String> = ranges.iter().map(|(lo, hi)| format!("{lo}-{hi}")).collect();
        out.push_str(&format!("{}: {}\n", name, ranges.join(" or ")));
    }
    out.push_str("\nyour ticket:\n");
    out.push_str(&join(own));
    out.push_str("\n\nnearby tickets:\n");
    for ticket in nearby {
        out.push_str(&join(ticket));
        out.push('\n');
    }
    out
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
