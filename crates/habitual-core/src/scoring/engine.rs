//! Simple and elastic scorers.
//!
//! The engine is stateless: every call normalizes the raw value once and
//! evaluates each configured criterion against it. Tiers of an elastic
//! habit are evaluated mini -> midi -> maxi and the reported level is the
//! highest tier whose own criterion is met. Lower tiers are not required to
//! be met as well, so non-monotonic thresholds can produce e.g.
//! `level = midi` with `met_mini = false`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::condition::evaluate;
use super::normalize::normalize;
use super::value::RawValue;
use crate::error::ScoringError;
use crate::habit::{Criteria, Habit, HabitKind, ScoringMode};

/// Ordered outcome of scoring one entry.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AchievementLevel {
    #[default]
    None,
    Mini,
    Midi,
    Maxi,
}

impl AchievementLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementLevel::None => "none",
            AchievementLevel::Mini => "mini",
            AchievementLevel::Midi => "midi",
            AchievementLevel::Maxi => "maxi",
        }
    }
}

impl fmt::Display for AchievementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AchievementLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(AchievementLevel::None),
            "mini" => Ok(AchievementLevel::Mini),
            "midi" => Ok(AchievementLevel::Midi),
            "maxi" => Ok(AchievementLevel::Maxi),
            other => Err(format!(
                "unknown achievement level '{other}' (expected none, mini, midi or maxi)"
            )),
        }
    }
}

/// Achievement level plus per-tier satisfaction flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub level: AchievementLevel,
    pub met_mini: bool,
    pub met_midi: bool,
    pub met_maxi: bool,
}

impl ScoreResult {
    fn record(&mut self, tier: AchievementLevel, met: bool) {
        match tier {
            AchievementLevel::Mini => self.met_mini = met,
            AchievementLevel::Midi => self.met_midi = met,
            AchievementLevel::Maxi => self.met_maxi = met,
            AchievementLevel::None => {}
        }
        if met {
            self.level = tier;
        }
    }
}

/// Stateless achievement scorer.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score a value for any automatically scored habit, dispatching on kind.
    pub fn score(&self, habit: &Habit, value: &RawValue) -> Result<ScoreResult, ScoringError> {
        match habit.kind {
            HabitKind::Simple => self.score_simple(habit, value),
            HabitKind::Elastic => self.score_elastic(habit, value),
            HabitKind::Informational => Err(ScoringError::NotScorable {
                habit_id: habit.id.clone(),
            }),
        }
    }

    /// Score a simple habit: `mini` when its single criterion is met,
    /// `none` otherwise. `met_midi` and `met_maxi` are always false.
    pub fn score_simple(&self, habit: &Habit, value: &RawValue) -> Result<ScoreResult, ScoringError> {
        if habit.kind != HabitKind::Simple {
            return Err(ScoringError::NotSimple {
                habit_id: habit.id.clone(),
            });
        }
        ensure_automatic(habit)?;
        let criteria = habit
            .criteria
            .as_ref()
            .ok_or_else(|| ScoringError::MissingCriteria {
                habit_id: habit.id.clone(),
            })?;

        let canonical = normalize(value, habit.field_type)?;
        let mut result = ScoreResult::default();
        if evaluate(&canonical, &criteria.condition, habit.field_type)? {
            result.record(AchievementLevel::Mini, true);
        }
        Ok(result)
    }

    /// Score an elastic habit against each configured tier.
    ///
    /// Absent tiers are skipped and leave their flag false.
    pub fn score_elastic(
        &self,
        habit: &Habit,
        value: &RawValue,
    ) -> Result<ScoreResult, ScoringError> {
        if habit.kind != HabitKind::Elastic {
            return Err(ScoringError::NotElastic {
                habit_id: habit.id.clone(),
            });
        }
        ensure_automatic(habit)?;
        if value.is_null() {
            return Err(ScoringError::NilValue);
        }

        let canonical = normalize(value, habit.field_type)?;
        let mut result = ScoreResult::default();
        for (tier, criteria) in tiers(habit) {
            let Some(criteria) = criteria else {
                continue;
            };
            let met = evaluate(&canonical, &criteria.condition, habit.field_type)?;
            result.record(tier, met);
        }
        Ok(result)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self
    }
}

fn ensure_automatic(habit: &Habit) -> Result<(), ScoringError> {
    match habit.scoring {
        ScoringMode::Automatic => Ok(()),
        ScoringMode::Manual => Err(ScoringError::ManualScoring {
            habit_id: habit.id.clone(),
        }),
    }
}

// Order matters: a later met tier overwrites the level set by an earlier one.
fn tiers(habit: &Habit) -> [(AchievementLevel, Option<&Criteria>); 3] {
    [
        (AchievementLevel::Mini, habit.mini.as_ref()),
        (AchievementLevel::Midi, habit.midi.as_ref()),
        (AchievementLevel::Maxi, habit.maxi.as_ref()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::{Condition, FieldType};

    fn gte(threshold: f64) -> Criteria {
        Criteria::new(format!("at least {threshold}"), Condition::GreaterThanOrEqual(threshold))
    }

    fn steps_habit() -> Habit {
        Habit::elastic("steps", "Daily steps", FieldType::UnsignedInt)
            .with_mini(gte(5000.0))
            .with_midi(gte(10000.0))
            .with_maxi(gte(15000.0))
    }

    fn result(level: AchievementLevel, mini: bool, midi: bool, maxi: bool) -> ScoreResult {
        ScoreResult {
            level,
            met_mini: mini,
            met_midi: midi,
            met_maxi: maxi,
        }
    }

    #[test]
    fn elastic_monotonic_thresholds() {
        use AchievementLevel as L;
        let engine = ScoringEngine::new();
        let habit = steps_habit();

        let cases = [
            (3000, result(L::None, false, false, false)),
            (5000, result(L::Mini, true, false, false)),
            (7500, result(L::Mini, true, false, false)),
            (10000, result(L::Midi, true, true, false)),
            (15000, result(L::Maxi, true, true, true)),
            (20000, result(L::Maxi, true, true, true)),
        ];
        for (steps, expected) in cases {
            assert_eq!(
                engine.score_elastic(&habit, &steps.into()).unwrap(),
                expected,
                "steps = {steps}"
            );
        }
    }

    #[test]
    fn elastic_non_monotonic_reports_highest_met_tier() {
        let engine = ScoringEngine::new();
        let habit = Habit::elastic("odd", "Odd tiers", FieldType::Decimal)
            .with_mini(gte(100.0))
            .with_midi(gte(10.0));

        let scored = engine.score_elastic(&habit, &50.into()).unwrap();
        assert_eq!(scored, result(AchievementLevel::Midi, false, true, false));
    }

    #[test]
    fn elastic_skips_absent_tiers() {
        let engine = ScoringEngine::new();
        let habit = Habit::elastic("water", "Water", FieldType::UnsignedInt).with_maxi(gte(8.0));

        assert_eq!(
            engine.score_elastic(&habit, &9.into()).unwrap(),
            result(AchievementLevel::Maxi, false, false, true)
        );
        assert_eq!(
            engine.score_elastic(&habit, &2.into()).unwrap(),
            ScoreResult::default()
        );
    }

    #[test]
    fn simple_strict_threshold() {
        let engine = ScoringEngine::new();
        let habit = Habit::simple(
            "pushups",
            "Push-ups",
            FieldType::UnsignedInt,
            Criteria::new("more than 10", Condition::GreaterThan(10.0)),
        );

        let none = ScoreResult::default();
        let mini = result(AchievementLevel::Mini, true, false, false);
        assert_eq!(engine.score_simple(&habit, &5.into()).unwrap(), none);
        assert_eq!(engine.score_simple(&habit, &10.into()).unwrap(), none);
        assert_eq!(engine.score_simple(&habit, &15.into()).unwrap(), mini);
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let engine = ScoringEngine::new();
        let simple = Habit::simple(
            "s",
            "S",
            FieldType::Boolean,
            Criteria::new("", Condition::Equals(true)),
        );
        let err = engine.score_elastic(&simple, &true.into()).unwrap_err();
        assert!(err.to_string().contains("is not an elastic habit"));

        let err = engine.score_simple(&steps_habit(), &1.into()).unwrap_err();
        assert!(err.to_string().contains("is not a simple habit"));
    }

    #[test]
    fn manual_scoring_is_rejected_by_both_scorers() {
        let engine = ScoringEngine::new();
        let elastic = steps_habit().with_scoring(ScoringMode::Manual);
        let simple = Habit::simple(
            "s",
            "S",
            FieldType::Boolean,
            Criteria::new("", Condition::Equals(true)),
        )
        .with_scoring(ScoringMode::Manual);

        for err in [
            engine.score_elastic(&elastic, &1.into()).unwrap_err(),
            engine.score_simple(&simple, &true.into()).unwrap_err(),
        ] {
            assert!(err.to_string().contains("does not require automatic scoring"));
        }
    }

    #[test]
    fn simple_without_criteria_is_rejected() {
        let engine = ScoringEngine::new();
        let mut habit = Habit::simple(
            "s",
            "S",
            FieldType::Boolean,
            Criteria::new("", Condition::Equals(true)),
        );
        habit.criteria = None;
        let err = engine.score_simple(&habit, &true.into()).unwrap_err();
        assert_eq!(
            err,
            ScoringError::MissingCriteria {
                habit_id: "s".into()
            }
        );
        assert!(err.to_string().contains("has no criteria for automatic scoring"));
    }

    #[test]
    fn nil_value_is_rejected() {
        let engine = ScoringEngine::new();
        let err = engine
            .score_elastic(&steps_habit(), &RawValue::Null)
            .unwrap_err();
        assert_eq!(err.to_string(), "value cannot be nil");
    }

    #[test]
    fn manual_check_precedes_nil_check() {
        let engine = ScoringEngine::new();
        let habit = steps_habit().with_scoring(ScoringMode::Manual);
        let err = engine.score_elastic(&habit, &RawValue::Null).unwrap_err();
        assert!(matches!(err, ScoringError::ManualScoring { .. }));
    }

    #[test]
    fn dispatcher_rejects_informational() {
        let engine = ScoringEngine::new();
        let habit = Habit::informational("weight", "Weight", FieldType::Decimal);
        assert!(matches!(
            engine.score(&habit, &70.into()),
            Err(ScoringError::NotScorable { .. })
        ));
        assert_eq!(
            engine.score(&steps_habit(), &12000.into()).unwrap().level,
            AchievementLevel::Midi
        );
    }

    #[test]
    fn level_ordering_and_parsing() {
        assert!(AchievementLevel::None < AchievementLevel::Mini);
        assert!(AchievementLevel::Midi < AchievementLevel::Maxi);
        assert_eq!("MIDI".parse::<AchievementLevel>(), Ok(AchievementLevel::Midi));
        assert!("mega".parse::<AchievementLevel>().is_err());
        assert_eq!(AchievementLevel::Maxi.to_string(), "maxi");
    }
}
