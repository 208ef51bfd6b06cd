//! Six fields, two of them `departure` fields, resolved by a cascade.
//!
//! Column candidates before elimination:
//!
//! | position | candidates |
//! |---|---|
//! | 0 | arrival, departure track, zone |
//! | 1 | departure track |
//! | 2 | all six |
//! | 3 | departure date, arrival, departure track, zone |
//! | 4 | arrival, departure track |
//! | 5 | departure date, arrival, departure track, zone, price |
//!
//! The first pass resolves positions 1 and 4, the second 0, 3 and 5, the
//! third position 2. The candidates are the same with or without the own
//! ticket. The last nearby ticket holds `999`, which no rule covers.

use crate::RawRule;

pub const RULES: &[RawRule] = &[
    ("departure date", &[(0, 30), (40, 50)]),
    ("arrival", &[(0, 60)]),
    ("departure track", &[(0, 100)]),
    ("zone", &[(0, 40)]),
    ("price", &[(0, 20), (25, 35)]),
    ("wagon", &[(0, 10)]),
];

pub const OWN: &[i64] = &[37, 2, 5, 7, 11, 13];

pub const NEARBY: &[&[i64]] = &[
    &[10, 80, 3, 22, 55, 30],
    &[38, 70, 8, 28, 58, 20],
    &[12, 61, 1, 40, 52, 15],
    &[5, 999, 2, 3, 4, 5],
];

pub const MAPPING: &[&str] = &[
    "zone",
    "departure track",
    "wagon",
    "departure date",
    "arrival",
    "price",
];

pub const PASSES: usize = 3;

pub const INVALID_VALUES: &[i64] = &[999];

/// Own ticket values at `departure track` (position 1) and
/// `departure date` (position 3) multiplied: `2 * 7`.
pub const DEPARTURE_PRODUCT: i64 = 14;
