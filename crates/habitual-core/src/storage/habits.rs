//! Habit definition file.
//!
//! Habits live in a TOML file as an array of `[[habit]]` tables. The file is
//! trusted beyond basic shape: ids must be unique, and each condition table
//! must name exactly one comparison form.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::habit::Habit;

#[derive(Debug, Default, Serialize, Deserialize)]
struct HabitFile {
    #[serde(default, rename = "habit")]
    habits: Vec<Habit>,
}

/// All habit definitions, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HabitSet {
    habits: Vec<Habit>,
}

impl HabitSet {
    /// Build a set, rejecting duplicate ids.
    pub fn new(habits: Vec<Habit>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for habit in &habits {
            if !seen.insert(habit.id.as_str()) {
                return Err(StoreError::DuplicateHabit(habit.id.clone()));
            }
        }
        Ok(Self { habits })
    }

    /// Read habit definitions from `path`.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: HabitFile = toml::from_str(&content).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), count = file.habits.len(), "loaded habits");
        Self::new(file.habits)
    }

    /// Parse habit definitions from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, StoreError> {
        let file: HabitFile = toml::from_str(content).map_err(|source| StoreError::Parse {
            path: "<inline>".into(),
            source,
        })?;
        Self::new(file.habits)
    }

    pub fn to_toml_string(&self) -> Result<String, StoreError> {
        let file = HabitFile {
            habits: self.habits.clone(),
        };
        Ok(toml::to_string_pretty(&file)?)
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Like [`get`](Self::get), but an unknown id is an error.
    pub fn require(&self, id: &str) -> Result<&Habit, StoreError> {
        self.get(id)
            .ok_or_else(|| StoreError::UnknownHabit(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Habit> {
        self.habits.iter()
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }
}
