use clap::Subcommand;
use habitual_core::{Config, Habit, HabitKind};

use super::{describe_condition, load_habits, CommandResult};

#[derive(Subcommand)]
pub enum HabitAction {
    /// List habit definitions
    List {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one habit with its criteria
    Show {
        /// Habit id
        id: String,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: HabitAction) -> CommandResult {
    let config = Config::load()?;
    let habits = load_habits(&config)?;

    match action {
        HabitAction::List { json } => {
            if json || config.display.json {
                let all: Vec<&Habit> = habits.iter().collect();
                println!("{}", serde_json::to_string_pretty(&all)?);
            } else if habits.is_empty() {
                println!("no habits defined");
            } else {
                for habit in habits.iter() {
                    println!(
                        "{:<16} {:<14} {:<16} {}",
                        habit.id,
                        kind_label(habit),
                        habit.field_type,
                        habit.title
                    );
                }
            }
        }
        HabitAction::Show { id, json } => {
            let habit = habits.require(&id)?;
            if json || config.display.json {
                println!("{}", serde_json::to_string_pretty(habit)?);
            } else {
                print_habit(habit, config.display.show_unit);
            }
        }
    }
    Ok(())
}

fn kind_label(habit: &Habit) -> String {
    let kind = match habit.kind {
        HabitKind::Simple => "simple",
        HabitKind::Elastic => "elastic",
        HabitKind::Informational => "informational",
    };
    if habit.is_auto_scored() || habit.kind == HabitKind::Informational {
        kind.to_string()
    } else {
        format!("{kind}/manual")
    }
}

fn print_habit(habit: &Habit, show_unit: bool) {
    println!("{} ({})", habit.title, habit.id);
    println!("  kind:       {}", kind_label(habit));
    println!("  field type: {}", habit.field_type);
    if let Some(unit) = &habit.unit {
        println!("  unit:       {unit}");
    }

    let tiers = [
        ("criteria", habit.criteria.as_ref()),
        ("mini", habit.mini.as_ref()),
        ("midi", habit.midi.as_ref()),
        ("maxi", habit.maxi.as_ref()),
    ];
    for (name, criteria) in tiers {
        let Some(criteria) = criteria else { continue };
        let rendered = describe_condition(&criteria.condition, habit, show_unit);
        if criteria.description.is_empty() {
            println!("  {name}: {rendered}");
        } else {
            println!("  {name}: {rendered}  ({})", criteria.description);
        }
    }
}
