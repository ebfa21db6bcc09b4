//! Integration tests for configuration loading and the config subcommands

use predicates::prelude::*;
use tempfile::TempDir;

use readalong::config::{Config, ConfigError};
use readalong::scheduler::SchedulerKind;

use super::helpers::{fixture, readalong};

#[test]
fn partial_config_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[sync]\nplayback_rate = 1.5\nhighlight_marker = \"reading\"\n\n[scheduler]\nkind = \"interval\"\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.sync.playback_rate, 1.5);
    assert_eq!(config.sync.highlight_marker, "reading");
    assert!(config.sync.touch_to_seek);
    assert_eq!(config.scheduler.kind, SchedulerKind::Interval);
    assert_eq!(config.scheduler.interval_ms, 250);
}

#[test]
fn invalid_config_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[sync]\nplayback_rate = \"fast\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn zero_interval_in_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[scheduler]\ninterval_ms = 0\n").unwrap();

    assert!(matches!(
        Config::load_from(&dir.path().join("config.toml")),
        Err(ConfigError::ZeroInterval { .. })
    ));

    readalong(&dir)
        .args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("interval_ms must be at least 1"));
}

#[test]
fn config_path_follows_environment() {
    let dir = TempDir::new().unwrap();
    let expected = dir.path().join("config.toml");

    readalong(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn config_init_writes_defaults_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    readalong(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());

    readalong(&dir)
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--force"));

    readalong(&dir)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_prints_effective_values() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[sync]\nstop_after_current = true\n",
    )
    .unwrap();

    readalong(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[sync]"))
        .stdout(predicate::str::contains("stop_after_current = true"))
        .stdout(predicate::str::contains("[scheduler]"));
}

#[test]
fn config_values_reach_simulate() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[sync]\nplayback_rate = 2.0\nclip_end = 3.0\n",
    )
    .unwrap();

    let output = readalong(&dir)
        .args(["simulate", fixture("story.json").to_str().unwrap(), "--positions", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let first: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(first["state"]["playback_rate"], 2.0);
    assert_eq!(first["state"]["clip_end"], 3.0);
}

#[test]
fn command_line_overrides_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[sync]\nplayback_rate = 2.0\n").unwrap();

    let output = readalong(&dir)
        .args([
            "simulate",
            fixture("story.json").to_str().unwrap(),
            "--positions",
            "1",
            "--rate",
            "0.5",
        ])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let first: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(first["state"]["playback_rate"], 0.5);
}
