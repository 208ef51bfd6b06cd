//! Notes where every nearby ticket is valid and the fields resolve to
//! `row, class, seat`.

use crate::RawRule;

pub const RULES: &[RawRule] = &[
    ("class", &[(0, 1), (4, 19)]),
    ("row", &[(0, 5), (8, 19)]),
    ("seat", &[(0, 13), (16, 19)]),
];

pub const OWN: &[i64] = &[11, 12, 13];

pub const NEARBY: &[&[i64]] = &[&[3, 9, 18], &[15, 1, 5], &[5, 14, 9]];

pub const MAPPING: &[&str] = &["row", "class", "seat"];

pub const NOTES: &str = "class: 0-1 or 4-19
row: 0-5 or 8-19
seat: 0-13 or 16-19

your ticket:
11,12,13

nearby tickets:
3,9,18
15,1,5
5,14,9
";
