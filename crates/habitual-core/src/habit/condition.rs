//! Comparison forms a habit criterion can express.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single comparison against a recorded value.
///
/// Serialized as a one-key table, e.g. `{ greater_than_or_equal = 5000 }`
/// or `{ range = { min = 6, max = 8, max_inclusive = false } }`.
/// A table with no key or more than one key does not deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    GreaterThan(f64),
    GreaterThanOrEqual(f64),
    LessThan(f64),
    LessThanOrEqual(f64),
    Range(Range),
    /// Time of day, `HH:MM`, exclusive
    Before(String),
    /// Time of day, `HH:MM`, exclusive
    After(String),
    Equals(bool),
}

/// Numeric interval with independently inclusive bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    #[serde(default = "default_inclusive")]
    pub min_inclusive: bool,
    #[serde(default = "default_inclusive")]
    pub max_inclusive: bool,
}

fn default_inclusive() -> bool {
    true
}

impl Range {
    /// Inclusive on both ends.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_inclusive: true,
            max_inclusive: true,
        }
    }

    pub fn with_inclusivity(mut self, min_inclusive: bool, max_inclusive: bool) -> Self {
        self.min_inclusive = min_inclusive;
        self.max_inclusive = max_inclusive;
        self
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::GreaterThan(t) => write!(f, "> {t}"),
            Condition::GreaterThanOrEqual(t) => write!(f, ">= {t}"),
            Condition::LessThan(t) => write!(f, "< {t}"),
            Condition::LessThanOrEqual(t) => write!(f, "<= {t}"),
            Condition::Range(range) => {
                let open = if range.min_inclusive { '[' } else { '(' };
                let close = if range.max_inclusive { ']' } else { ')' };
                write!(f, "in {open}{}, {}{close}", range.min, range.max)
            }
            Condition::Before(time) => write!(f, "before {time}"),
            Condition::After(time) => write!(f, "after {time}"),
            Condition::Equals(expected) => write!(f, "== {expected}"),
        }
    }
}
