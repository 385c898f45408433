//! Entry log: recorded values per day and habit, with their achievement.
//!
//! Stored as TOML `[[entry]]` tables. There is at most one entry per
//! (date, habit); recording again replaces the earlier entry in place.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError, StoreError};
use crate::habit::{Habit, HabitKind, ScoringMode};
use crate::scoring::{AchievementLevel, RawValue, ScoringEngine};

/// One recorded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub date: NaiveDate,
    pub habit_id: String,
    #[serde(default)]
    pub value: RawValue,
    /// Absent for informational habits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement: Option<AchievementLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct EntryFile {
    #[serde(default, rename = "entry")]
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryLog {
    entries: Vec<Entry>,
}

impl EntryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the log from `path`; a missing file is an empty log.
    pub fn load(path: &Path) -> std::result::Result<Self, StoreError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no entry log yet");
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let file: EntryFile = toml::from_str(&content).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), count = file.entries.len(), "loaded entries");
        Ok(Self {
            entries: file.entries,
        })
    }

    /// Write the log to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> std::result::Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let file = EntryFile {
            entries: self.entries.clone(),
        };
        let content = toml::to_string_pretty(&file)?;
        std::fs::write(path, content).map_err(io_err)?;
        tracing::debug!(path = %path.display(), count = self.entries.len(), "saved entries");
        Ok(())
    }

    /// Insert an entry, replacing any entry for the same date and habit.
    pub fn record(&mut self, entry: Entry) -> &Entry {
        let existing = self
            .entries
            .iter()
            .position(|e| e.date == entry.date && e.habit_id == entry.habit_id);
        let index = match existing {
            Some(index) => {
                self.entries[index] = entry;
                index
            }
            None => {
                self.entries.push(entry);
                self.entries.len() - 1
            }
        };
        &self.entries[index]
    }

    /// Record a value for `habit`, deciding its achievement level.
    ///
    /// Automatically scored habits go through the scoring engine and the
    /// computed level is stored; nothing is recorded if scoring fails.
    /// Manually scored habits need `manual_level`. Informational habits
    /// store the value with no level.
    pub fn record_value(
        &mut self,
        engine: &ScoringEngine,
        habit: &Habit,
        date: NaiveDate,
        value: RawValue,
        manual_level: Option<AchievementLevel>,
        note: Option<String>,
    ) -> Result<&Entry> {
        if value.is_null() {
            return Err(ScoringError::NilValue.into());
        }

        let achievement = match (habit.kind, habit.scoring) {
            (HabitKind::Informational, _) => None,
            (_, ScoringMode::Manual) => Some(
                manual_level.ok_or_else(|| StoreError::MissingManualLevel(habit.id.clone()))?,
            ),
            (_, ScoringMode::Automatic) => Some(engine.score(habit, &value)?.level),
        };

        Ok(self.record(Entry {
            date,
            habit_id: habit.id.clone(),
            value,
            achievement,
            note,
        }))
    }

    pub fn get(&self, date: NaiveDate, habit_id: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.date == date && e.habit_id == habit_id)
    }

    pub fn for_date(&self, date: NaiveDate) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(move |e| e.date == date)
    }

    pub fn for_habit<'a>(&'a self, habit_id: &'a str) -> impl Iterator<Item = &'a Entry> {
        self.entries.iter().filter(move |e| e.habit_id == habit_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
