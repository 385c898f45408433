//! Condition evaluation against canonical values.
//!
//! Which comparison forms apply depends on the field type:
//!
//! - numeric and duration: `>`, `>=`, `<`, `<=`, range
//! - time of day: `before` / `after`, otherwise the numeric forms on
//!   minutes since midnight
//! - boolean: `equals` only
//! - text: the four ordering forms compare the text *length*; any other
//!   form is met when the trimmed text is non-empty

use super::parse::parse_time_minutes;
use super::value::CanonicalValue;
use crate::error::ScoringError;
use crate::habit::{Condition, FieldType, Range};

/// Evaluate `condition` against an already normalized value.
pub fn evaluate(
    value: &CanonicalValue,
    condition: &Condition,
    field_type: FieldType,
) -> Result<bool, ScoringError> {
    match field_type {
        FieldType::UnsignedInt
        | FieldType::UnsignedDecimal
        | FieldType::Decimal
        | FieldType::Duration => evaluate_numeric(expect_number(value)?, condition),
        FieldType::Time => evaluate_time(expect_number(value)?, condition),
        FieldType::Boolean => evaluate_boolean(expect_bool(value)?, condition),
        FieldType::Text => Ok(evaluate_text(expect_text(value)?, condition)),
    }
}

fn expect_number(value: &CanonicalValue) -> Result<f64, ScoringError> {
    match value {
        CanonicalValue::Number(n) => Ok(*n),
        other => Err(unexpected("numeric", other)),
    }
}

fn expect_bool(value: &CanonicalValue) -> Result<bool, ScoringError> {
    match value {
        CanonicalValue::Bool(b) => Ok(*b),
        other => Err(unexpected("boolean", other)),
    }
}

fn expect_text(value: &CanonicalValue) -> Result<&str, ScoringError> {
    match value {
        CanonicalValue::Text(s) => Ok(s.as_str()),
        other => Err(unexpected("text", other)),
    }
}

fn unexpected(expected: &'static str, found: &CanonicalValue) -> ScoringError {
    ScoringError::UnexpectedValue {
        expected,
        found: found.kind_name(),
    }
}

fn evaluate_numeric(value: f64, condition: &Condition) -> Result<bool, ScoringError> {
    match condition {
        Condition::GreaterThan(t) => Ok(value > *t),
        Condition::GreaterThanOrEqual(t) => Ok(value >= *t),
        Condition::LessThan(t) => Ok(value < *t),
        Condition::LessThanOrEqual(t) => Ok(value <= *t),
        Condition::Range(range) => Ok(in_range(value, range)),
        Condition::Before(_) | Condition::After(_) | Condition::Equals(_) => {
            Err(ScoringError::NoNumericCondition)
        }
    }
}

fn in_range(value: f64, range: &Range) -> bool {
    let min_satisfied = if range.min_inclusive {
        value >= range.min
    } else {
        value > range.min
    };
    let max_satisfied = if range.max_inclusive {
        value <= range.max
    } else {
        value < range.max
    };
    min_satisfied && max_satisfied
}

fn evaluate_time(minutes: f64, condition: &Condition) -> Result<bool, ScoringError> {
    match condition {
        Condition::Before(bound) => Ok(minutes < parse_time_minutes(bound)?),
        Condition::After(bound) => Ok(minutes > parse_time_minutes(bound)?),
        other => evaluate_numeric(minutes, other),
    }
}

fn evaluate_boolean(value: bool, condition: &Condition) -> Result<bool, ScoringError> {
    match condition {
        Condition::Equals(expected) => Ok(value == *expected),
        _ => Err(ScoringError::MissingEquals),
    }
}

fn evaluate_text(text: &str, condition: &Condition) -> bool {
    let length = text.chars().count() as f64;
    match condition {
        Condition::GreaterThan(t) => length > *t,
        Condition::GreaterThanOrEqual(t) => length >= *t,
        Condition::LessThan(t) => length < *t,
        Condition::LessThanOrEqual(t) => length <= *t,
        _ => !text.trim().is_empty(),
    }
}
