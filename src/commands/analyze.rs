//! `analyze`: run history -> fitness profile

use clap::Args;
use std::path::PathBuf;

use super::{load_runs, SourceArgs};
use crate::analysis::analyze;
use crate::config::PlannerConfig;
use crate::error::CliError;
use crate::models::FitnessProfile;

#[derive(Args, Debug)]
pub struct AnalyzeCommand {
  /// JSON file with run history
  #[arg(short, long)]
  pub input: PathBuf,

  #[command(flatten)]
  pub source: SourceArgs,
}

impl AnalyzeCommand {
  pub fn execute(&self, config: &PlannerConfig) -> Result<FitnessProfile, CliError> {
    let runs = load_runs(&self.input, &self.source, config)?;
    let profile = analyze(&runs)?;

    tracing::info!(
      runs = profile.total_runs,
      weekly_mileage = profile.weekly_mileage,
      level = %profile.fitness_level,
      consistency = %profile.consistency_score,
      "Analyzed run history"
    );

    Ok(profile)
  }
}
