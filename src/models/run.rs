use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single run, already normalized to imperial units by the activity source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
  pub id: i64,
  #[serde(default)]
  pub name: Option<String>,
  pub date: NaiveDate,
  /// Miles
  pub distance: f64,
  /// Seconds
  pub moving_time: i64,
  /// min/mile as reported by the source, computed from distance when absent
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pace: Option<f64>,
  /// Feet
  #[serde(default)]
  pub elevation_gain: f64,
  #[serde(default)]
  pub average_heartrate: Option<f64>,
  #[serde(default)]
  pub max_heartrate: Option<f64>,
  #[serde(default)]
  pub suffer_score: Option<f64>,
  #[serde(default)]
  pub workout_type: Option<String>,
}

impl RunRecord {
  /// Pace in min/mile, rounded to 2 decimals like the activity source reports it
  pub fn pace_per_mile(&self) -> f64 {
    if let Some(pace) = self.pace {
      return pace;
    }
    if self.distance <= 0.0 {
      return 0.0;
    }
    let pace = (self.moving_time as f64 / self.distance) / 60.0;
    (pace * 100.0).round() / 100.0
  }
}
