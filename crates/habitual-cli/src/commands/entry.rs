use clap::Subcommand;
use habitual_core::{AchievementLevel, Config, Entry, EntryLog, RawValue, ScoringEngine};

use super::{load_habits, parse_date, CommandResult};

#[derive(Subcommand)]
pub enum EntryAction {
    /// Record a value for a habit (scored automatically unless the habit is manual)
    Add {
        /// Habit id
        habit_id: String,
        /// Recorded value
        value: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Achievement level for manually scored habits (none, mini, midi, maxi)
        #[arg(long)]
        level: Option<AchievementLevel>,
        /// Free-form note
        #[arg(long)]
        note: Option<String>,
    },
    /// List entries for a day
    List {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: EntryAction) -> CommandResult {
    let config = Config::load()?;
    let habits = load_habits(&config)?;
    let path = config.entries_path()?;
    let mut log = EntryLog::load(&path)?;

    match action {
        EntryAction::Add {
            habit_id,
            value,
            date,
            level,
            note,
        } => {
            let habit = habits.require(&habit_id)?;
            let date = parse_date(date.as_deref())?;
            let entry = log.record_value(
                &ScoringEngine::new(),
                habit,
                date,
                RawValue::Text(value),
                level,
                note,
            )?;
            println!("recorded {} on {}: {}", entry.habit_id, entry.date, describe(entry));
            log.save(&path)?;
        }
        EntryAction::List { date, json } => {
            let date = parse_date(date.as_deref())?;
            let entries: Vec<&Entry> = log.for_date(date).collect();
            if json || config.display.json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
                return Ok(());
            }
            if entries.is_empty() {
                println!("no entries for {date}");
            }
            for entry in entries {
                let title = match habits.get(&entry.habit_id) {
                    Some(habit) => habit.title.as_str(),
                    None => {
                        tracing::warn!(habit = %entry.habit_id, "entry references unknown habit");
                        "?"
                    }
                };
                println!(
                    "{:<16} {:<24} {:<6} {}",
                    entry.habit_id,
                    title,
                    entry.achievement.map(|l| l.to_string()).unwrap_or_else(|| "-".into()),
                    entry.value
                );
            }
        }
    }
    Ok(())
}

fn describe(entry: &Entry) -> String {
    match entry.achievement {
        Some(level) => level.to_string(),
        None => format!("{} (not scored)", entry.value),
    }
}
