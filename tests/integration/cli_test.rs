//! Integration tests for the readalong binary

use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

use super::helpers::{fixture, readalong};

/// Run readalong and capture stdout, stderr and the exit code.
fn run(args: &[&str]) -> (String, String, i32) {
    let config_dir = TempDir::new().unwrap();
    let output = readalong(&config_dir)
        .args(args)
        .output()
        .expect("Failed to execute readalong");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn story() -> String {
    fixture("story.json").display().to_string()
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let config_dir = TempDir::new().unwrap();
    readalong(&config_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("segments"))
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_prints_version() {
    let (stdout, _stderr, exit_code) = run(&["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("readalong "));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Segments
// ============================================================================

#[test]
fn snapshot_segments_listing() {
    let (stdout, stderr, exit_code) = run(&["segments", &story()]);
    let output = format!(
        "=== readalong segments story.json ===\nExit code: {}\n\n--- stdout ---\n{}\n--- stderr ---\n{}",
        exit_code, stdout, stderr
    );
    insta::assert_snapshot!("segments_listing", output);
}

#[test]
fn segments_json_reports_shadowed_segment() {
    let (stdout, _stderr, exit_code) = run(&["segments", "--json", &story()]);
    assert_eq!(exit_code, 0);

    let listing: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(listing["duration"], 9.0);
    assert_eq!(listing["slots"], 4);
    assert_eq!(listing["shadowed"], serde_json::json!([3]));
    assert_eq!(listing["segments"][3]["slot"], 4.0);
    assert_eq!(listing["segments"][3]["shadowed_by"], 2);
    assert_eq!(listing["segments"][5]["slot"], Value::Null);
}

#[test]
fn segments_reads_custom_time_attribute() {
    let bare = fixture("bare.json").display().to_string();
    let config_dir = TempDir::new().unwrap();
    readalong(&config_dir)
        .args(["segments", "--time-attribute", "begin", &bare])
        .assert()
        .success()
        .stdout(predicate::str::contains("   0.5  #0          0.50  First line"))
        .stdout(predicate::str::contains("2 segments, 2 slots, 0 shadowed"));
}

#[test]
fn segments_uses_time_attribute_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[sync]\ntime_attribute = \"start\"\n").unwrap();
    let transcript = dir.path().join("starts.json");
    std::fs::write(&transcript, r#"[{"start": 0.0, "text": "a"}, {"start": 2.0, "text": "b"}]"#).unwrap();

    let output = readalong(&dir)
        .args(["segments", "--json", transcript.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let listing: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listing["slots"], 2);
    assert_eq!(listing["segments"][1]["start"], 2.0);
    assert_eq!(listing["segments"][1]["slot"], 2.0);
}

#[test]
fn segments_flag_overrides_config_attribute() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[sync]\ntime_attribute = \"start\"\n").unwrap();
    let bare = fixture("bare.json").display().to_string();

    readalong(&dir)
        .args(["segments", "--time-attribute", "begin", &bare])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 segments, 2 slots, 0 shadowed"));
}

#[test]
fn segments_missing_file_fails_with_path() {
    let (_stdout, stderr, exit_code) = run(&["segments", "nonexistent.json"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to load transcript"));
    assert!(stderr.contains("nonexistent.json"));
}

#[test]
fn segments_rejects_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    readalong(&dir)
        .args(["segments", path.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("broken.json"));
}

// ============================================================================
// Simulate
// ============================================================================

fn simulate(extra: &[&str]) -> Vec<Value> {
    let story = story();
    let mut args = vec!["simulate", story.as_str()];
    args.extend_from_slice(extra);
    let (stdout, stderr, exit_code) = run(&args);
    assert_eq!(exit_code, 0, "stderr: {stderr}");

    stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect()
}

#[test]
fn simulate_prints_one_event_per_line() {
    let events = simulate(&["--positions", "0.2,1.0,2.0,2.3,4.1,5.0", "--clip-end", "5"]);

    let names: Vec<&str> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec![
            "play_state_changed",
            "highlight_changed",
            "highlight_changed",
            "highlight_changed",
            "play_state_changed",
        ]
    );

    let highlighted: Vec<&Value> = events[1..4].iter().map(|e| &e["state"]["highlighted"]).collect();
    assert_eq!(highlighted, vec![&Value::from(0), &Value::from(1), &Value::from(2)]);
    assert_eq!(events[2]["state"]["current"], 2.0);
    assert_eq!(events[3]["state"]["previous"], 1);

    let last = &events[4]["state"];
    assert_eq!(last["play_state"], "stopped");
    assert_eq!(last["highlighted"], Value::Null);
    assert_eq!(last["current"], 0.0);
    assert_eq!(last["clip_end"], 5.0);
}

#[test]
fn simulate_seek_with_stop_after_current() {
    let events = simulate(&[
        "--seek",
        "2.1",
        "--stop-after-current",
        "--positions",
        "3.0,4.0",
    ]);

    assert_eq!(events[0]["state"]["stop_at"], 4.0);
    assert_eq!(events[1]["state"]["highlighted"], 1);
    let last = &events[events.len() - 1]["state"];
    assert_eq!(last["play_state"], "stopped");
    assert_eq!(last["stop_at"], Value::Null);
}

#[test]
fn simulate_rejects_invalid_rate() {
    let (_stdout, stderr, exit_code) =
        run(&["simulate", &story(), "--positions", "1", "--rate", "0"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("playback rate must be positive"));
}

#[test]
fn simulate_requires_positions() {
    let (_stdout, stderr, exit_code) = run(&["simulate", &story()]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("--positions"));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn completions_generate_for_bash() {
    let config_dir = TempDir::new().unwrap();
    readalong(&config_dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_readalong()"));
}
