//! Habit definitions.
//!
//! A habit declares how its recorded values are typed ([`FieldType`]), how
//! it is scored ([`ScoringMode`]) and what counts as achieving it: one
//! [`Criteria`] for simple habits, or up to three tiered criteria
//! (mini / midi / maxi) for elastic habits.

mod condition;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use condition::{Condition, Range};

/// Shape of a habit's achievement criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitKind {
    /// One pass/fail criterion
    Simple,
    /// Up to three independently configured tiers
    Elastic,
    /// Tracked for information only, never scored
    Informational,
}

/// Who decides the achievement level of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    #[default]
    Automatic,
    Manual,
}

/// Declared data kind of a habit's recorded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    UnsignedInt,
    UnsignedDecimal,
    Decimal,
    /// Stored as minutes
    Duration,
    /// Time of day, stored as minutes since midnight
    Time,
    Boolean,
    Text,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::UnsignedInt => "unsigned_int",
            FieldType::UnsignedDecimal => "unsigned_decimal",
            FieldType::Decimal => "decimal",
            FieldType::Duration => "duration",
            FieldType::Time => "time",
            FieldType::Boolean => "boolean",
            FieldType::Text => "text",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A human-readable description plus the condition that decides it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(default)]
    pub description: String,
    pub condition: Condition,
}

impl Criteria {
    pub fn new(description: impl Into<String>, condition: Condition) -> Self {
        Self {
            description: description.into(),
            condition,
        }
    }
}

/// A habit definition as read from the habit file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub title: String,
    pub kind: HabitKind,
    #[serde(default)]
    pub scoring: ScoringMode,
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Criterion of a simple habit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Criteria>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mini: Option<Criteria>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midi: Option<Criteria>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxi: Option<Criteria>,
}

impl Habit {
    fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: HabitKind,
        field_type: FieldType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            scoring: ScoringMode::Automatic,
            field_type,
            unit: None,
            criteria: None,
            mini: None,
            midi: None,
            maxi: None,
        }
    }

    /// Create a simple habit with a single criterion.
    pub fn simple(
        id: impl Into<String>,
        title: impl Into<String>,
        field_type: FieldType,
        criteria: Criteria,
    ) -> Self {
        let mut habit = Self::new(id, title, HabitKind::Simple, field_type);
        habit.criteria = Some(criteria);
        habit
    }

    /// Create an elastic habit with no tiers; add them with `with_mini` etc.
    pub fn elastic(id: impl Into<String>, title: impl Into<String>, field_type: FieldType) -> Self {
        Self::new(id, title, HabitKind::Elastic, field_type)
    }

    pub fn informational(
        id: impl Into<String>,
        title: impl Into<String>,
        field_type: FieldType,
    ) -> Self {
        Self::new(id, title, HabitKind::Informational, field_type)
    }

    pub fn with_mini(mut self, criteria: Criteria) -> Self {
        self.mini = Some(criteria);
        self
    }

    pub fn with_midi(mut self, criteria: Criteria) -> Self {
        self.midi = Some(criteria);
        self
    }

    pub fn with_maxi(mut self, criteria: Criteria) -> Self {
        self.maxi = Some(criteria);
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// True when the engine, not the user, decides the achievement level.
    pub fn is_auto_scored(&self) -> bool {
        self.kind != HabitKind::Informational && self.scoring == ScoringMode::Automatic
    }
}
