use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn drawpad_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("drawpad").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

fn write_script(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("script.json");
    std::fs::write(&path, json).unwrap();
    path
}

const ONE_STROKE: &str = r##"[
    {"type": "color", "spec": "#FF0000"},
    {"type": "down", "x": 10, "y": 10},
    {"type": "move", "x": 50, "y": 50},
    {"type": "up"}
]"##;

#[test]
fn drawpad_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    drawpad_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gesture scripts"));
}

#[test]
fn script_argument_is_required() {
    let temp = TempDir::new().unwrap();
    drawpad_cmd(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn replay_reports_undo_availability() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), ONE_STROKE);

    drawpad_cmd(temp.path())
        .args(["--width", "64", "--height", "64", "--no-export", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "strokes: 1, discarded: 0, undo available: yes",
        ));
}

#[test]
fn export_writes_timestamped_png() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("cache");
    let script = write_script(temp.path(), ONE_STROKE);

    let assert = drawpad_cmd(temp.path())
        .args(["--width", "64", "--height", "64", "--no-notify", "--script"])
        .arg(&script)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("DrawingApp_"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let saved = PathBuf::from(stdout.lines().last().unwrap().trim());
    assert!(saved.is_absolute());
    assert!(saved.extension().is_some_and(|ext| ext == "png"));
    let bytes = std::fs::read(&saved).unwrap();
    assert_eq!(&bytes[..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
}

#[test]
fn invalid_color_in_script_fails() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        temp.path(),
        r#"[{"type": "color", "spec": "not-a-color"}]"#,
    );

    drawpad_cmd(temp.path())
        .args(["--width", "16", "--height", "16", "--no-export", "--script"])
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unknown color specification 'not-a-color'",
        ));
}

#[test]
fn malformed_script_fails() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), "[{\"type\": \"down\"");

    drawpad_cmd(temp.path())
        .args(["--no-export", "--script"])
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse script"));
}
