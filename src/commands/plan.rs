//! `plan`: run history (or a saved profile) -> training plan

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use super::{load_runs, read_file, SourceArgs};
use crate::analysis::analyze;
use crate::config::PlannerConfig;
use crate::error::CliError;
use crate::models::{FitnessProfile, TrainingPlan};
use crate::plan::generate;

#[derive(Args, Debug)]
pub struct PlanCommand {
  /// JSON file with run history
  #[arg(short, long, required_unless_present = "profile", conflicts_with = "profile")]
  pub input: Option<PathBuf>,

  /// JSON file with a fitness profile (missing fields use defaults)
  #[arg(long)]
  pub profile: Option<PathBuf>,

  #[command(flatten)]
  pub source: SourceArgs,

  /// Weeks until race day [default: MARATHON_PLAN_WEEKS or 16]
  #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
  pub weeks: Option<u32>,

  /// Goal finish time, H:MM:SS [default: MARATHON_GOAL_TIME]
  #[arg(short, long)]
  pub goal_time: Option<String>,
}

/// Output of the plan command
#[derive(Debug, Serialize)]
pub struct PlanReport {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub fitness_analysis: Option<FitnessProfile>,
  pub training_plan: TrainingPlan,
}

impl PlanCommand {
  pub fn execute(&self, config: &PlannerConfig) -> Result<PlanReport, CliError> {
    let (profile, analyzed) = match (&self.profile, &self.input) {
      (Some(path), _) => {
        let profile: FitnessProfile = serde_json::from_str(&read_file(path)?)?;
        (profile, false)
      }
      (None, Some(path)) => (analyze(&load_runs(path, &self.source, config)?)?, true),
      // clap enforces one of the two
      (None, None) => (FitnessProfile::default(), false),
    };

    let weeks = self.weeks.unwrap_or(config.plan_weeks);
    let goal_time = self.goal_time.as_deref().or(config.goal_time.as_deref());
    let plan = generate(weeks, &profile, goal_time)?;

    tracing::info!(
      weeks,
      level = %plan.fitness_level,
      peak = plan.peak_weekly_mileage,
      goal = goal_time.unwrap_or("none"),
      "Generated training plan"
    );

    Ok(PlanReport {
      fitness_analysis: analyzed.then_some(profile),
      training_plan: plan,
    })
  }
}
