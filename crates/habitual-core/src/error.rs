//! Core error types for habitual-core.
//!
//! The scoring engine reports failures through [`ScoringError`]; the
//! on-disk collaborators (habit file, entry log, configuration) have their
//! own enums, and [`CoreError`] ties them together for callers that touch
//! more than one layer.

use std::path::PathBuf;
use thiserror::Error;

use crate::habit::FieldType;

/// Core error type for habitual-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Scoring engine errors
    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    /// Habit file / entry log errors
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced while scoring a recorded value against a habit.
///
/// Precondition variants carry the habit id so the caller can report which
/// definition was at fault without re-entering the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// `score_simple` was called on a habit of another kind
    #[error("habit '{habit_id}' is not a simple habit")]
    NotSimple { habit_id: String },

    /// `score_elastic` was called on a habit of another kind
    #[error("habit '{habit_id}' is not an elastic habit")]
    NotElastic { habit_id: String },

    /// Informational habits carry no criteria at all
    #[error("habit '{habit_id}' is informational and cannot be scored")]
    NotScorable { habit_id: String },

    /// The habit is scored by hand
    #[error("habit '{habit_id}' does not require automatic scoring")]
    ManualScoring { habit_id: String },

    /// Simple habit without a criterion
    #[error("habit '{habit_id}' has no criteria for automatic scoring")]
    MissingCriteria { habit_id: String },

    #[error("value cannot be nil")]
    NilValue,

    /// Text that does not parse as a number
    #[error("cannot parse number: {0}")]
    InvalidNumber(String),

    #[error("cannot parse boolean: {0}")]
    InvalidBoolean(String),

    #[error("cannot parse duration: {0}")]
    InvalidDuration(String),

    #[error("cannot parse time: {0} (expected HH:MM format)")]
    InvalidTime(String),

    /// The raw value has a shape the field type never accepts
    #[error("cannot use {found} value '{value}' as {expected}")]
    Unconvertible {
        expected: &'static str,
        found: &'static str,
        value: String,
    },

    /// Type-specific normalization failure, tagged with the field type
    #[error("invalid {field_type} value: {source}")]
    Normalize {
        field_type: FieldType,
        #[source]
        source: Box<ScoringError>,
    },

    #[error("no valid numeric condition found")]
    NoNumericCondition,

    #[error("boolean condition requires 'equals'")]
    MissingEquals,

    /// A canonical value of the wrong shape reached an evaluator
    #[error("expected {expected} value for evaluation, found {found}")]
    UnexpectedValue {
        expected: &'static str,
        found: &'static str,
    },
}

impl ScoringError {
    /// Wrap a type-specific failure with the field type it occurred under.
    pub(crate) fn normalizing(field_type: FieldType, source: ScoringError) -> Self {
        ScoringError::Normalize {
            field_type,
            source: Box::new(source),
        }
    }
}

/// Habit definition file and entry log errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read or write a file
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid TOML for the expected layout
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Duplicate habit id: {0}")]
    DuplicateHabit(String),

    #[error("Unknown habit: {0}")]
    UnknownHabit(String),

    /// Manually scored habits need the level supplied by the user
    #[error("habit '{0}' is scored manually; an achievement level is required")]
    MissingManualLevel(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine or create the data directory
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
