use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::round_to;
use crate::models::RunRecord;

/// ---------------------------------------------------------------------------
/// Unit Conversion
/// ---------------------------------------------------------------------------

const METERS_TO_MILES: f64 = 0.000621371;
const METERS_TO_FEET: f64 = 3.28084;

pub const DEFAULT_ACTIVITY_TYPE: &str = "Run";

/// ---------------------------------------------------------------------------
/// Strava Activity Summaries
/// ---------------------------------------------------------------------------

/// Activity summary as exported from the Strava API (`/athlete/activities`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StravaActivity {
  pub id: i64,
  #[serde(default)]
  pub name: String,
  /// Strava uses "type" for legacy and "sport_type" for newer activities
  #[serde(rename = "type", default)]
  pub activity_type: String,
  pub start_date: DateTime<Utc>,
  #[serde(default)]
  pub moving_time: i64,
  /// Meters
  #[serde(default)]
  pub distance: Option<f64>,
  /// Meters
  #[serde(default)]
  pub total_elevation_gain: Option<f64>,
  #[serde(default)]
  pub average_heartrate: Option<f64>,
  #[serde(default)]
  pub max_heartrate: Option<f64>,
  #[serde(default)]
  pub suffer_score: Option<f64>,
  /// 0 default, 1 race, 2 long run, 3 workout
  #[serde(default)]
  pub workout_type: Option<i64>,
}

/// Label for a Strava run `workout_type` code
pub fn workout_type_label(code: Option<i64>) -> Option<String> {
  match code {
    Some(1) => Some("Race".to_string()),
    Some(2) => Some("Long Run".to_string()),
    Some(3) => Some("Workout".to_string()),
    _ => None,
  }
}

impl StravaActivity {
  /// Convert to a run record; None when distance or moving time is not positive
  pub fn to_run_record(&self) -> Option<RunRecord> {
    let distance_miles = self.distance.unwrap_or(0.0) * METERS_TO_MILES;
    if distance_miles <= 0.0 || self.moving_time <= 0 {
      return None;
    }

    Some(RunRecord {
      id: self.id,
      name: Some(self.name.clone()).filter(|n| !n.is_empty()),
      date: self.start_date.date_naive(),
      distance: round_to(distance_miles, 2),
      moving_time: self.moving_time,
      pace: Some(round_to(self.moving_time as f64 / 60.0 / distance_miles, 2)),
      elevation_gain: self.total_elevation_gain.unwrap_or(0.0) * METERS_TO_FEET,
      average_heartrate: self.average_heartrate,
      max_heartrate: self.max_heartrate,
      suffer_score: self.suffer_score,
      workout_type: workout_type_label(self.workout_type),
    })
  }
}

/// Parse a JSON array of activity summaries
pub fn parse_activities(json: &str) -> Result<Vec<StravaActivity>, serde_json::Error> {
  serde_json::from_str(json).map_err(|e| {
    tracing::error!(
      error = %e,
      preview = %json.chars().take(500).collect::<String>(),
      "Failed to parse Strava activities"
    );
    e
  })
}

/// Keep activities of the given type on or after `since`, normalized to run records
pub fn runs_from_activities(
  activities: &[StravaActivity],
  activity_type: &str,
  since: Option<NaiveDate>,
) -> Vec<RunRecord> {
  let runs: Vec<RunRecord> = activities
    .iter()
    .filter(|a| a.activity_type == activity_type)
    .filter(|a| since.map_or(true, |s| a.start_date.date_naive() >= s))
    .filter_map(|a| {
      let run = a.to_run_record();
      if run.is_none() {
        tracing::warn!(id = a.id, "Skipping activity without distance or moving time");
      }
      run
    })
    .collect();

  tracing::info!(
    activities = activities.len(),
    runs = runs.len(),
    activity_type,
    "Normalized Strava activities"
  );

  runs
}
