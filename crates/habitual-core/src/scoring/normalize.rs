//! Value normalization: raw recorded value + field type -> canonical value.

use chrono::Timelike;

use super::parse::{parse_duration_minutes, parse_time_minutes};
use super::value::{CanonicalValue, RawValue};
use crate::error::ScoringError;
use crate::habit::FieldType;

/// Convert a raw value into the canonical representation for `field_type`.
///
/// Numeric types and durations become numbers (durations in minutes), times
/// of day become minutes since midnight, booleans stay booleans and text
/// accepts anything through its display form.
pub fn normalize(raw: &RawValue, field_type: FieldType) -> Result<CanonicalValue, ScoringError> {
    if raw.is_null() {
        return Err(ScoringError::NilValue);
    }

    let canonical = match field_type {
        FieldType::UnsignedInt | FieldType::UnsignedDecimal | FieldType::Decimal => {
            to_number(raw).map(CanonicalValue::Number)
        }
        FieldType::Duration => to_duration(raw).map(CanonicalValue::Number),
        FieldType::Time => to_time_of_day(raw).map(CanonicalValue::Number),
        FieldType::Boolean => to_bool(raw).map(CanonicalValue::Bool),
        FieldType::Text => Ok(CanonicalValue::Text(match raw {
            RawValue::Text(s) => s.clone(),
            other => other.to_string(),
        })),
    };

    canonical.map_err(|err| ScoringError::normalizing(field_type, err))
}

fn unconvertible(raw: &RawValue, expected: &'static str) -> ScoringError {
    ScoringError::Unconvertible {
        expected,
        found: raw.kind_name(),
        value: raw.to_string(),
    }
}

fn to_number(raw: &RawValue) -> Result<f64, ScoringError> {
    match raw {
        RawValue::Integer(n) => Ok(*n as f64),
        RawValue::Float(n) => Ok(*n),
        RawValue::Text(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| ScoringError::InvalidNumber(s.clone())),
        other => Err(unconvertible(other, "a number")),
    }
}

fn to_duration(raw: &RawValue) -> Result<f64, ScoringError> {
    match raw {
        RawValue::Integer(n) => Ok(*n as f64),
        RawValue::Float(n) => Ok(*n),
        RawValue::Text(s) => parse_duration_minutes(s),
        other => Err(unconvertible(other, "a duration")),
    }
}

fn to_time_of_day(raw: &RawValue) -> Result<f64, ScoringError> {
    match raw {
        RawValue::Text(s) => parse_time_minutes(s),
        RawValue::Time(t) => Ok(f64::from(t.hour() * 60 + t.minute())),
        other => Err(unconvertible(other, "a time of day")),
    }
}

fn to_bool(raw: &RawValue) -> Result<bool, ScoringError> {
    match raw {
        RawValue::Bool(b) => Ok(*b),
        RawValue::Text(s) => match s.as_str() {
            "1" | "t" | "T" | "true" | "True" | "TRUE" => Ok(true),
            "0" | "f" | "F" | "false" | "False" | "FALSE" => Ok(false),
            _ => Err(ScoringError::InvalidBoolean(s.clone())),
        },
        other => Err(unconvertible(other, "a boolean")),
    }
}
