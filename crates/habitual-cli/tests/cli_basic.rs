//! Basic CLI E2E tests.
//!
//! Each test runs the built binary with HOME pointed at a fresh temp dir
//! holding its own habit file.

use std::path::Path;
use std::process::Command;

const HABITS: &str = r#"
[[habit]]
id = "steps"
title = "Daily steps"
kind = "elastic"
field_type = "unsigned_int"
unit = "steps"

[habit.mini]
description = "A short walk"
condition = { greater_than_or_equal = 5000 }

[habit.midi]
condition = { greater_than_or_equal = 10000 }

[habit.maxi]
condition = { greater_than_or_equal = 15000 }

[[habit]]
id = "bedtime"
title = "Bedtime"
kind = "simple"
field_type = "time"

[habit.criteria]
condition = { before = "23:00" }

[[habit]]
id = "flag"
title = "Flossed"
kind = "elastic"
field_type = "boolean"

[habit.mini]
condition = { equals = true }

[[habit]]
id = "word"
title = "Word of the day"
kind = "simple"
field_type = "text"

[habit.criteria]
condition = { greater_than_or_equal = 5 }

[[habit]]
id = "mood"
title = "Mood"
kind = "elastic"
scoring = "manual"
field_type = "unsigned_int"
"#;

fn setup() -> tempfile::TempDir {
    let home = tempfile::tempdir().unwrap();
    let data = home.path().join(".config").join("habitual");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("habits.toml"), HABITS).unwrap();
    home
}

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_habitual"))
        .args(args)
        .env("HOME", home)
        .env_remove("HABITUAL_ENV")
        .env_remove("HABITUAL_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_score_elastic_text() {
    let home = setup();
    let (stdout, _, code) = run_cli(home.path(), &["score", "steps", "12000"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "steps: midi (mini: yes, midi: yes, maxi: no)");
}

#[test]
fn test_score_json() {
    let home = setup();
    let (stdout, _, code) = run_cli(home.path(), &["score", "bedtime", "22:30", "--json"]);
    assert_eq!(code, 0);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["habit_id"], "bedtime");
    assert_eq!(parsed["level"], "mini");
    assert_eq!(parsed["met_mini"], true);
    assert_eq!(parsed["met_maxi"], false);
}

#[test]
fn test_score_boolean_digit_tokens() {
    let home = setup();
    let (stdout, stderr, code) = run_cli(home.path(), &["score", "flag", "1"]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.starts_with("flag: mini"), "stdout: {stdout}");

    let (stdout, _, code) = run_cli(home.path(), &["score", "flag", "0"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("flag: none"), "stdout: {stdout}");
}

#[test]
fn test_score_text_keeps_input_verbatim() {
    let home = setup();
    let (stdout, _, code) = run_cli(home.path(), &["score", "word", "00000"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "word: mini");

    let (stdout, _, code) = run_cli(home.path(), &["score", "word", "0"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "word: none");
}

#[test]
fn test_entry_add_stores_value_as_typed() {
    let home = setup();
    let (_, _, code) = run_cli(
        home.path(),
        &["entry", "add", "word", "00000", "--date", "2026-10-02"],
    );
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(
        home.path(),
        &["entry", "list", "--date", "2026-10-02", "--json"],
    );
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[0]["value"], "00000");
    assert_eq!(parsed[0]["achievement"], "mini");
}

#[test]
fn test_score_errors_exit_nonzero() {
    let home = setup();

    let (_, stderr, code) = run_cli(home.path(), &["score", "steps", "lots"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"), "stderr: {stderr}");

    let (_, stderr, code) = run_cli(home.path(), &["score", "mood", "4"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("does not require automatic scoring"));

    let (_, stderr, code) = run_cli(home.path(), &["score", "unknown", "1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown"));
}

#[test]
fn test_entry_add_and_list() {
    let home = setup();

    let (stdout, _, code) = run_cli(
        home.path(),
        &["entry", "add", "steps", "15500", "--date", "2026-10-01"],
    );
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "recorded steps on 2026-10-01: maxi");

    let (stdout, _, code) = run_cli(
        home.path(),
        &["entry", "add", "mood", "4", "--date", "2026-10-01", "--level", "midi"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("midi"));

    let (stdout, _, code) = run_cli(
        home.path(),
        &["entry", "list", "--date", "2026-10-01", "--json"],
    );
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["habit_id"], "steps");
    assert_eq!(entries[0]["achievement"], "maxi");
    assert_eq!(entries[1]["achievement"], "midi");
}

#[test]
fn test_manual_entry_without_level_fails() {
    let home = setup();
    let (_, stderr, code) = run_cli(home.path(), &["entry", "add", "mood", "3"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));

    let (stdout, _, code) = run_cli(home.path(), &["entry", "list", "--json"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "[]");
}

#[test]
fn test_habit_show() {
    let home = setup();
    let (stdout, _, code) = run_cli(home.path(), &["habit", "show", "steps"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Daily steps (steps)"));
    assert!(stdout.contains(">= 5000 steps"));
    assert!(stdout.contains("A short walk"));

    let (stdout, _, code) = run_cli(home.path(), &["habit", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("bedtime"));
    assert!(stdout.contains("elastic/manual"));
}

#[test]
fn test_config_get_set() {
    let home = setup();

    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "files.habits"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "habits.toml");

    let (_, _, code) = run_cli(home.path(), &["config", "set", "display.show_unit", "false"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(home.path(), &["config", "get", "display.show_unit"]);
    assert_eq!(stdout.trim(), "false");

    let (stdout, _, code) = run_cli(home.path(), &["config", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("files.entries = entries.toml"));
    assert!(stdout.contains("display.show_unit = false"));

    let (stdout, _, code) = run_cli(home.path(), &["config", "list", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["display"]["show_unit"], false);

    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "display.colour", "red"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown config key"));
}

#[test]
fn test_unreadable_config_is_not_replaced() {
    let home = setup();
    let config = home.path().join(".config").join("habitual").join("config.toml");
    let original = b"[display]\njson = true\n# caf\xe9\n";
    std::fs::write(&config, original).unwrap();

    let (_, stderr, code) = run_cli(home.path(), &["config", "get", "display.json"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Failed to load configuration"), "stderr: {stderr}");
    assert_eq!(std::fs::read(&config).unwrap(), original);
}
