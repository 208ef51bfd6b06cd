//! Named field rules and rule sets.
//!
//! A [`FieldRule`] is satisfied by a value when any of its ranges contains
//! it. A [`RuleSet`] holds rules with unique names in input order.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::{FieldForgeError, ParseError, Result};
use crate::range::FieldRange;

/// Separator between alternative ranges in a rule line.
const RANGE_SEPARATOR: &str = " or ";

/// A named field backed by one or more inclusive ranges.
///
/// # Examples
///
/// ```
/// use fieldforge_core::{FieldRange, FieldRule};
///
/// let rule: FieldRule = "class: 1-3 or 5-7".parse().unwrap();
/// assert_eq!(rule.name(), "class");
/// assert_eq!(rule.ranges(), &[FieldRange::new(1, 3), FieldRange::new(5, 7)]);
/// assert!(rule.satisfies(7));
/// assert!(!rule.satisfies(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RuleParts"))]
pub struct FieldRule {
    name: String,
    ranges: SmallVec<[FieldRange; 2]>,
}

impl FieldRule {
    /// Creates a new rule.
    ///
    /// # Panics
    ///
    /// Panics if `ranges` is empty.
    pub fn new(name: impl Into<String>, ranges: impl IntoIterator<Item = FieldRange>) -> Self {
        let ranges: SmallVec<[FieldRange; 2]> = ranges.into_iter().collect();
        assert!(!ranges.is_empty(), "FieldRule requires at least one range");
        Self {
            name: name.into(),
            ranges,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ranges(&self) -> &[FieldRange] {
        &self.ranges
    }

    /// Returns true if any range contains `value`.
    #[inline]
    pub fn satisfies(&self, value: i64) -> bool {
        self.ranges.iter().any(|range| range.contains(value))
    }

    /// Returns true if every value satisfies this rule.
    ///
    /// Vacuously true for an empty iterator.
    pub fn satisfied_by_all<I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = i64>,
    {
        values.into_iter().all(|value| self.satisfies(value))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RuleParts {
    name: String,
    ranges: Vec<FieldRange>,
}

#[cfg(feature = "serde")]
impl TryFrom<RuleParts> for FieldRule {
    type Error = ParseError;

    fn try_from(parts: RuleParts) -> std::result::Result<Self, Self::Error> {
        if parts.name.is_empty() {
            return Err(ParseError::new("Invalid rule: empty name"));
        }
        if parts.ranges.is_empty() {
            return Err(ParseError::new(format!(
                "Invalid rule '{}': no ranges",
                parts.name
            )));
        }
        Ok(Self {
            name: parts.name,
            ranges: parts.ranges.into_iter().collect(),
        })
    }
}

impl fmt::Display for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        for (idx, range) in self.ranges.iter().enumerate() {
            if idx > 0 {
                f.write_str(RANGE_SEPARATOR)?;
            }
            write!(f, "{}", range)?;
        }
        Ok(())
    }
}

impl FromStr for FieldRule {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (name, ranges) = s
            .split_once(':')
            .ok_or_else(|| ParseError::new(format!("Invalid rule '{}': missing ':'", s)))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(ParseError::new(format!("Invalid rule '{}': empty name", s)));
        }

        let ranges = ranges
            .trim()
            .split(RANGE_SEPARATOR)
            .map(str::parse::<FieldRange>)
            .collect::<std::result::Result<SmallVec<[FieldRange; 2]>, _>>()?;

        Ok(Self {
            name: name.to_string(),
            ranges,
        })
    }
}

/// An ordered collection of rules with unique names.
///
/// # Examples
///
/// ```
/// use fieldforge_core::{FieldRange, FieldRule, RuleSet};
///
/// let rules = RuleSet::new(vec![
///     FieldRule::new("row", [FieldRange::new(6, 11)]),
///     FieldRule::new("seat", [FieldRange::new(13, 40)]),
/// ])
/// .unwrap();
///
/// assert_eq!(rules.len(), 2);
/// assert!(rules.covers(20));
/// assert!(!rules.covers(12));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<FieldRule>", into = "Vec<FieldRule>")
)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

impl RuleSet {
    /// Builds a rule set, rejecting duplicate names.
    pub fn new(rules: impl IntoIterator<Item = FieldRule>) -> Result<Self> {
        let mut set = Self::default();
        for rule in rules {
            set.push(rule)?;
        }
        Ok(set)
    }

    /// Appends a rule.
    ///
    /// # Errors
    ///
    /// Returns [`FieldForgeError::DuplicateRule`] if the name is already present.
    pub fn push(&mut self, rule: FieldRule) -> Result<()> {
        if self.get(rule.name()).is_some() {
            return Err(FieldForgeError::DuplicateRule(rule.name));
        }
        self.rules.push(rule);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldRule> {
        self.rules.iter()
    }

    pub fn as_slice(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Looks a rule up by name.
    pub fn get(&self, name: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    /// Returns true if at least one rule is satisfied by `value`.
    pub fn covers(&self, value: i64) -> bool {
        self.rules.iter().any(|rule| rule.satisfies(value))
    }
}

impl TryFrom<Vec<FieldRule>> for RuleSet {
    type Error = FieldForgeError;

    fn try_from(rules: Vec<FieldRule>) -> Result<Self> {
        Self::new(rules)
    }
}

impl From<RuleSet> for Vec<FieldRule> {
    fn from(set: RuleSet) -> Self {
        set.rules
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a FieldRule;
    type IntoIter = std::slice::Iter<'a, FieldRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
