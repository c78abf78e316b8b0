pub mod analyze;
pub mod plan;

use chrono::{Duration, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::config::PlannerConfig;
use crate::error::CliError;
use crate::models::RunRecord;
use crate::strava;

pub use analyze::AnalyzeCommand;
pub use plan::{PlanCommand, PlanReport};

#[derive(Parser)]
#[command(name = "marathon-planner")]
#[command(about = "Fitness profiling and marathon training plans from run history", long_about = None)]
#[command(version)]
pub struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Enable debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
  /// Analyze run history and print the fitness profile
  Analyze(AnalyzeCommand),

  /// Generate a marathon training plan
  Plan(PlanCommand),
}

impl Cli {
  pub fn execute(&self, config: &PlannerConfig) -> Result<(), CliError> {
    match &self.command {
      Commands::Analyze(cmd) => print_json(&cmd.execute(config)?),
      Commands::Plan(cmd) => print_json(&cmd.execute(config)?),
    }
  }
}

/// How run history files are interpreted
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
  /// Input is a Strava activity export rather than normalized run records
  #[arg(long)]
  pub strava: bool,

  /// Only use runs from the last N days
  #[arg(long)]
  pub days_back: Option<u32>,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

pub(crate) fn read_file(path: &Path) -> Result<String, CliError> {
  fs::read_to_string(path).map_err(|source| CliError::Io {
    path: path.display().to_string(),
    source,
  })
}

fn window_start(days_back: Option<u32>) -> Option<NaiveDate> {
  days_back.map(|days| Utc::now().date_naive() - Duration::days(days as i64))
}

/// Load run history from a JSON file, dropping records the analyzer cannot use
pub fn load_runs(path: &Path, source: &SourceArgs, config: &PlannerConfig) -> Result<Vec<RunRecord>, CliError> {
  let contents = read_file(path)?;
  let since = window_start(source.days_back.or(config.days_back));

  let runs = if source.strava {
    let activities = strava::parse_activities(&contents)?;
    strava::runs_from_activities(&activities, &config.activity_type, since)
  } else {
    let records: Vec<RunRecord> = serde_json::from_str(&contents)?;
    let total = records.len();
    let runs: Vec<RunRecord> = records
      .into_iter()
      .filter(|r| since.map_or(true, |s| r.date >= s))
      .filter(|r| r.distance > 0.0 && r.moving_time > 0)
      .collect();

    if runs.len() < total {
      tracing::warn!(dropped = total - runs.len(), "Dropped run records outside window or without distance/time");
    }
    runs
  };

  tracing::info!(runs = runs.len(), path = %path.display(), "Loaded run history");
  Ok(runs)
}
