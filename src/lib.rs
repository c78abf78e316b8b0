pub mod analysis;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod plan;
pub mod progression;
pub mod strava;

#[cfg(test)]
mod test_utils;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::Cli;
use config::PlannerConfig;
use error::CliError;

pub use analysis::analyze;
pub use plan::generate;

pub fn run() -> Result<(), CliError> {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let cli = Cli::parse();

  let default_filter = if cli.verbose {
    "marathon_planner_lib=debug"
  } else {
    "marathon_planner_lib=info"
  };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
    .with_writer(std::io::stderr)
    .init();

  let config = PlannerConfig::from_env()?;
  cli.execute(&config)
}
