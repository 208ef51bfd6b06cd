//! Notes where three nearby tickets carry values no rule covers.
//!
//! The uncovered values are `4`, `55` and `12`, giving an error rate of `71`.

use crate::RawRule;

pub const RULES: &[RawRule] = &[
    ("class", &[(1, 3), (5, 7)]),
    ("row", &[(6, 11), (33, 44)]),
    ("seat", &[(13, 40), (45, 50)]),
];

pub const OWN: &[i64] = &[7, 1, 14];

pub const NEARBY: &[&[i64]] = &[&[7, 3, 47], &[40, 4, 50], &[55, 2, 20], &[38, 6, 12]];

pub const INVALID_VALUES: &[i64] = &[4, 55, 12];

pub const ERROR_RATE: i64 = 71;

pub const NOTES: &str = "class: 1-3 or 5-7
row: 6-11 or 33-44
seat: 13-40 or 45-50

your ticket:
7,1,14

nearby tickets:
7,3,47
40,4,50
55,2,20
38,6,12
";
