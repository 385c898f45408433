use clap::Subcommand;
use habitual_core::{Config, ConfigError};

use super::CommandResult;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one setting
    Get {
        /// Dotted key, e.g. "files.habits" or "display.json"
        key: String,
    },
    /// Change one setting and save
    Set {
        key: String,
        value: String,
    },
    /// Print every setting as `key = value`
    List {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Overwrite the config file with defaults
    Reset,
}

pub fn run(action: ConfigAction) -> CommandResult {
    match action {
        ConfigAction::Get { key } => {
            let value = Config::load()?
                .get(&key)
                .ok_or(ConfigError::UnknownKey(key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            tracing::debug!(%key, %value, "config updated");
            println!("{key} = {}", config.get(&key).unwrap_or(value));
        }
        ConfigAction::List { json } => {
            let config = Config::load()?;
            let tree = serde_json::to_value(&config)?;
            if json || config.display.json {
                println!("{}", serde_json::to_string_pretty(&tree)?);
            } else {
                for (key, value) in flatten(&tree) {
                    println!("{key} = {value}");
                }
            }
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}

/// Dotted `(key, value)` pairs for every leaf of the settings tree.
fn flatten(tree: &serde_json::Value) -> Vec<(String, String)> {
    let mut out = Vec::new();
    collect(tree, String::new(), &mut out);
    out
}

fn collect(node: &serde_json::Value, prefix: String, out: &mut Vec<(String, String)>) {
    match node {
        serde_json::Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                collect(child, key, out);
            }
        }
        serde_json::Value::String(s) => out.push((prefix, s.clone())),
        other => out.push((prefix, other.to_string())),
    }
}
