//! Subcommand implementations and the helpers they share.

pub mod config;
pub mod entry;
pub mod habit;
pub mod score;

use chrono::NaiveDate;
use habitual_core::{Condition, Config, FieldType, Habit, HabitSet};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Load the habit file named by the configuration.
pub fn load_habits(config: &Config) -> Result<HabitSet, Box<dyn std::error::Error>> {
    let path = config.habits_path()?;
    Ok(HabitSet::load(&path)?)
}

/// Parse `YYYY-MM-DD`, defaulting to today's local date.
pub fn parse_date(date: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| format!("invalid date '{s}' (expected YYYY-MM-DD): {e}").into()),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Render a condition for display, e.g. `>= 5000 steps` or `before 07:00`.
pub fn describe_condition(condition: &Condition, habit: &Habit, show_unit: bool) -> String {
    let base = condition.to_string();
    let unit = match (habit.field_type, habit.unit.as_deref()) {
        (_, Some(unit)) => unit,
        (FieldType::Duration, None) => "min",
        (FieldType::Text, None) => "chars",
        _ => return base,
    };
    let numeric = !matches!(
        condition,
        Condition::Before(_) | Condition::After(_) | Condition::Equals(_)
    );
    if show_unit && numeric {
        format!("{base} {unit}")
    } else {
        base
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
