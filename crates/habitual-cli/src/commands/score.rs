use clap::Args;
use habitual_core::{Config, HabitKind, RawValue, ScoreResult, ScoringEngine};
use serde::Serialize;

use super::{load_habits, yes_no, CommandResult};

#[derive(Args)]
pub struct ScoreArgs {
    /// Habit id
    habit_id: String,
    /// Value to score (number, duration like 1h30m, time like 07:15, true/false or text)
    value: String,
    /// Print JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ScoreOutput<'a> {
    habit_id: &'a str,
    #[serde(flatten)]
    result: ScoreResult,
}

pub fn run(args: ScoreArgs) -> CommandResult {
    let config = Config::load()?;
    let habits = load_habits(&config)?;
    let habit = habits.require(&args.habit_id)?;

    let value = RawValue::Text(args.value);
    let result = ScoringEngine::new().score(habit, &value)?;
    tracing::debug!(habit = %habit.id, %value, level = %result.level, "scored");

    if args.json || config.display.json {
        let output = ScoreOutput {
            habit_id: &habit.id,
            result,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match habit.kind {
        HabitKind::Elastic => println!(
            "{}: {} (mini: {}, midi: {}, maxi: {})",
            habit.id,
            result.level,
            yes_no(result.met_mini),
            yes_no(result.met_midi),
            yes_no(result.met_maxi),
        ),
        _ => println!("{}: {}", habit.id, result.level),
    }
    Ok(())
}
