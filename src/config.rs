use std::env;

use crate::error::ConfigError;
use crate::strava::DEFAULT_ACTIVITY_TYPE;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

const ENV_PLAN_WEEKS: &str = "MARATHON_PLAN_WEEKS";
const ENV_GOAL_TIME: &str = "MARATHON_GOAL_TIME";
const ENV_ACTIVITY_TYPE: &str = "MARATHON_ACTIVITY_TYPE";
const ENV_DAYS_BACK: &str = "MARATHON_DAYS_BACK";

pub const DEFAULT_PLAN_WEEKS: u32 = 16;

/// Defaults for the command-line layer, read from the environment (and `.env`)
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
  pub plan_weeks: u32,
  pub goal_time: Option<String>,
  pub activity_type: String,
  pub days_back: Option<u32>,
}

impl Default for PlannerConfig {
  fn default() -> Self {
    Self {
      plan_weeks: DEFAULT_PLAN_WEEKS,
      goal_time: None,
      activity_type: DEFAULT_ACTIVITY_TYPE.to_string(),
      days_back: None,
    }
  }
}

impl PlannerConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    let defaults = Self::default();

    Ok(Self {
      plan_weeks: parse_var(ENV_PLAN_WEEKS)?
        .filter(|w| *w > 0)
        .unwrap_or(defaults.plan_weeks),
      goal_time: non_empty_var(ENV_GOAL_TIME),
      activity_type: non_empty_var(ENV_ACTIVITY_TYPE).unwrap_or(defaults.activity_type),
      days_back: parse_var(ENV_DAYS_BACK)?,
    })
  }
}

fn non_empty_var(var: &str) -> Option<String> {
  env::var(var)
    .ok()
    .map(|v| v.trim().to_string())
    .filter(|v| !v.is_empty())
}

fn parse_var(var: &'static str) -> Result<Option<u32>, ConfigError> {
  match non_empty_var(var) {
    Some(value) => value
      .parse()
      .map(Some)
      .map_err(|_| ConfigError::Invalid { var, value }),
    None => Ok(None),
  }
}
