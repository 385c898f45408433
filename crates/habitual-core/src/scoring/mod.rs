//! Achievement scoring engine.
//!
//! Takes a habit definition and a raw recorded value and decides the
//! achievement level:
//!
//! 1. [`normalize`] turns the raw value into a [`CanonicalValue`] according
//!    to the habit's field type (durations and times become minutes).
//! 2. [`evaluate`] checks one [`Condition`](crate::habit::Condition) against
//!    the canonical value.
//! 3. [`ScoringEngine`] runs the single criterion of a simple habit, or the
//!    mini / midi / maxi tiers of an elastic habit, and builds a
//!    [`ScoreResult`].
//!
//! Everything here is pure computation: no I/O, no logging, no state kept
//! between calls.

mod condition;
mod engine;
mod normalize;
mod parse;
mod value;

pub use condition::evaluate;
pub use engine::{AchievementLevel, ScoreResult, ScoringEngine};
pub use normalize::normalize;
pub use parse::{parse_duration_minutes, parse_time_minutes};
pub use value::{CanonicalValue, RawValue};
