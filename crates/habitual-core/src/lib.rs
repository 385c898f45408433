//! # Habitual Core Library
//!
//! Core logic for Habitual, a personal habit tracker. Habits declare
//! criteria; recorded values are scored against them to decide how well a
//! habit was achieved on a given day.
//!
//! ## Architecture
//!
//! - **Habits**: definitions with a field type, scoring mode and either a
//!   single criterion (simple) or mini / midi / maxi tiers (elastic)
//! - **Scoring**: a pure, stateless engine that normalizes raw values and
//!   evaluates criteria against them
//! - **Storage**: TOML habit file, TOML entry log and configuration
//!
//! ## Key Components
//!
//! - [`ScoringEngine`]: simple and elastic scorers
//! - [`HabitSet`]: habit definitions loaded from disk
//! - [`EntryLog`]: recorded values with their achievement level
//! - [`Config`]: application configuration management

pub mod error;
pub mod habit;
pub mod scoring;
pub mod storage;

pub use error::{ConfigError, CoreError, Result, ScoringError, StoreError};
pub use habit::{Condition, Criteria, FieldType, Habit, HabitKind, Range, ScoringMode};
pub use scoring::{AchievementLevel, CanonicalValue, RawValue, ScoreResult, ScoringEngine};
pub use storage::{Config, Entry, EntryLog, HabitSet};
