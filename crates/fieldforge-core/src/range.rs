//! Inclusive numeric intervals.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// An inclusive integer interval `[min, max]`.
///
/// # Examples
///
/// ```
/// use fieldforge_core::FieldRange;
///
/// let range = FieldRange::new(1, 3);
/// assert!(range.contains(1));
/// assert!(range.contains(3));
/// assert!(!range.contains(4));
///
/// let parsed: FieldRange = "33-44".parse().unwrap();
/// assert_eq!(parsed, FieldRange::new(33, 44));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RangeBounds"))]
pub struct FieldRange {
    min: i64,
    max: i64,
}

impl FieldRange {
    /// Creates a new range.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub const fn new(min: i64, max: i64) -> Self {
        assert!(min <= max, "FieldRange requires min <= max");
        Self { min, max }
    }

    /// Creates a range, returning `None` if `min > max`.
    pub const fn try_new(min: i64, max: i64) -> Option<Self> {
        if min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    #[inline]
    pub const fn min(&self) -> i64 {
        self.min
    }

    #[inline]
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Returns true if `value` lies within the range, bounds included.
    #[inline]
    pub const fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RangeBounds {
    min: i64,
    max: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RangeBounds> for FieldRange {
    type Error = ParseError;

    fn try_from(bounds: RangeBounds) -> Result<Self, Self::Error> {
        Self::try_new(bounds.min, bounds.max).ok_or_else(|| {
            ParseError::new(format!(
                "Invalid range '{}-{}': min exceeds max",
                bounds.min, bounds.max
            ))
        })
    }
}

impl fmt::Display for FieldRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for FieldRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Skip the first byte so a leading minus sign is not taken as the separator.
        let split_at = s
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(idx, _)| idx)
            .ok_or_else(|| ParseError::new(format!("Invalid range '{}': missing '-'", s)))?;

        let (min, max) = (&s[..split_at], &s[split_at + 1..]);
        let min = parse_bound(min, s)?;
        let max = parse_bound(max, s)?;

        Self::try_new(min, max)
            .ok_or_else(|| ParseError::new(format!("Invalid range '{}': min exceeds max", s)))
    }
}

fn parse_bound(bound: &str, range: &str) -> Result<i64, ParseError> {
    bound
        .trim()
        .parse::<i64>()
        .map_err(|e| ParseError::new(format!("Invalid range '{}': {}", range, e)))
}
