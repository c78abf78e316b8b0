use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const RUNS: &str = r#"[
  {"id": 1, "date": "2024-01-01", "distance": 20.0, "moving_time": 12000, "workout_type": "Long Run"},
  {"id": 2, "date": "2024-01-08", "distance": 6.0, "moving_time": 3000}
]"#;

fn planner() -> Command {
  let mut cmd = Command::cargo_bin("marathon-planner").unwrap();
  for var in ["MARATHON_PLAN_WEEKS", "MARATHON_GOAL_TIME", "MARATHON_ACTIVITY_TYPE", "MARATHON_DAYS_BACK"] {
    cmd.env_remove(var);
  }
  cmd
}

fn json_file(contents: &str) -> NamedTempFile {
  let mut file = NamedTempFile::new().unwrap();
  file.write_all(contents.as_bytes()).unwrap();
  file
}

#[test]
fn test_help_command() {
  planner()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("analyze"))
    .stdout(predicate::str::contains("plan"));
}

#[test]
fn test_analyze_command() {
  let runs = json_file(RUNS);

  planner()
    .args(["analyze", "--input"])
    .arg(runs.path())
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""weekly_mileage": 26.0"#))
    .stdout(predicate::str::contains(r#""Long Run": 1"#))
    .stdout(predicate::str::contains(r#""Easy": 1"#));
}

#[test]
fn test_plan_command_with_goal_time() {
  let runs = json_file(RUNS);

  planner()
    .args(["plan", "--weeks", "16", "--goal-time", "3:45:00", "--input"])
    .arg(runs.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("fitness_analysis"))
    .stdout(predicate::str::contains(r#""goal_marathon_pace": 8.59"#))
    .stdout(predicate::str::contains(r#""week": 16"#))
    .stdout(predicate::str::contains(r#""week": 17"#).not());
}

#[test]
fn test_plan_command_from_profile() {
  let profile = json_file(r#"{"weekly_mileage": 35, "fitness_level": "Intermediate", "longest_run": {"distance": 14}}"#);

  planner()
    .args(["plan", "--weeks", "8", "--profile"])
    .arg(profile.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("fitness_analysis").not())
    .stdout(predicate::str::contains(r#""timeline_weeks": 8"#));
}

#[test]
fn test_weeks_from_environment() {
  let profile = json_file("{}");

  planner()
    .env("MARATHON_PLAN_WEEKS", "4")
    .args(["plan", "--profile"])
    .arg(profile.path())
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""timeline_weeks": 4"#));
}

#[test]
fn test_malformed_goal_time_fails() {
  let runs = json_file(RUNS);

  planner()
    .args(["plan", "--goal-time", "abc", "--input"])
    .arg(runs.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("Malformed goal time"));
}

#[test]
fn test_empty_run_history_fails() {
  let runs = json_file("[]");

  planner()
    .args(["analyze", "--input"])
    .arg(runs.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("No valid running data available"));
}

#[test]
fn test_plan_requires_a_source() {
  planner().arg("plan").assert().failure();
}

#[test]
fn test_zero_weeks_rejected() {
  let profile = json_file("{}");

  planner()
    .args(["plan", "--weeks", "0", "--profile"])
    .arg(profile.path())
    .assert()
    .failure();
}
