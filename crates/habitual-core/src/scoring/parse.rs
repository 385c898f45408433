//! Duration and time-of-day text grammars.
//!
//! Durations accept three shapes, tried in order:
//!
//! | Shape              | Example      | Minutes |
//! |--------------------|--------------|---------|
//! | compound units     | `2h15m30s`   | 135.5   |
//! | plain number       | `30`         | 30      |
//! | `H:MM:SS`          | `1:30:30`    | 90.5    |
//!
//! Times of day are strictly `HH:MM` on a 24-hour clock.

use crate::error::ScoringError;

/// Parse a duration expression into minutes.
pub fn parse_duration_minutes(text: &str) -> Result<f64, ScoringError> {
    let trimmed = text.trim();

    if trimmed.contains(['h', 'm', 's']) {
        if let Some(minutes) = parse_compound_duration(trimmed) {
            return Ok(minutes);
        }
    }

    if let Ok(minutes) = trimmed.parse::<f64>() {
        if minutes.is_finite() {
            return Ok(minutes);
        }
    }

    if trimmed.matches(':').count() == 2 {
        let fields: Option<Vec<f64>> = trimmed
            .split(':')
            .map(|part| part.parse::<f64>().ok().filter(|n| n.is_finite()))
            .collect();
        if let Some([hours, minutes, seconds]) = fields.as_deref() {
            return Ok(hours * 60.0 + minutes + seconds / 60.0);
        }
    }

    Err(ScoringError::InvalidDuration(trimmed.to_string()))
}

/// Parse a sequence of `<number><unit>` pairs (units `h`, `m`, `s`).
///
/// Returns `None` on any malformed segment so the caller can fall back to
/// the other shapes.
fn parse_compound_duration(text: &str) -> Option<f64> {
    let (negative, mut rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if rest.is_empty() {
        return None;
    }

    let is_number_char = |c: char| c.is_ascii_digit() || c == '.';
    let mut total = 0.0;

    while !rest.is_empty() {
        let number_len = rest.find(|c: char| !is_number_char(c)).unwrap_or(rest.len());
        if number_len == 0 {
            return None;
        }
        let amount: f64 = rest[..number_len].parse().ok()?;
        rest = &rest[number_len..];

        let unit_len = rest.find(is_number_char).unwrap_or(rest.len());
        total += match &rest[..unit_len] {
            "h" => amount * 60.0,
            "m" => amount,
            "s" => amount / 60.0,
            _ => return None,
        };
        rest = &rest[unit_len..];
    }

    Some(if negative { -total } else { total })
}

/// Parse `HH:MM` into minutes since midnight.
pub fn parse_time_minutes(text: &str) -> Result<f64, ScoringError> {
    let trimmed = text.trim();
    let invalid = || ScoringError::InvalidTime(trimmed.to_string());

    let (hours, minutes) = trimmed.split_once(':').ok_or_else(invalid)?;
    if minutes.contains(':') {
        return Err(invalid());
    }

    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    if hours >= 24 || minutes >= 60 {
        return Err(invalid());
    }

    Ok(f64::from(hours * 60 + minutes))
}
