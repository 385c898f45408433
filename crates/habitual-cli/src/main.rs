use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "habitual", version, about = "Habitual habit tracker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a value against a habit without recording it
    Score(commands::score::ScoreArgs),
    /// Habit definitions
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Recorded entries
    Entry {
        #[command(subcommand)]
        action: commands::entry::EntryAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("HABITUAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Score(args) => commands::score::run(args),
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Entry { action } => commands::entry::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
