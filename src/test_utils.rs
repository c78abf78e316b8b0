//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Mock data factories
//! - Date helpers
//! - Helper assertions

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::{FitnessLevel, FitnessProfile, LongestRun, RunRecord};
use crate::strava::StravaActivity;

/// ---------------------------------------------------------------------------
/// Date Helpers
/// ---------------------------------------------------------------------------

/// Parse a `YYYY-MM-DD` date
pub fn date(s: &str) -> NaiveDate {
  NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("Invalid test date")
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Create a run with no optional fields
pub fn mock_run(id: i64, day: &str, distance: f64, moving_time: i64) -> RunRecord {
  RunRecord {
    id,
    name: None,
    date: date(day),
    distance,
    moving_time,
    pace: None,
    elevation_gain: 0.0,
    average_heartrate: None,
    max_heartrate: None,
    suffer_score: None,
    workout_type: None,
  }
}

/// Create `count` runs at 9:00 min/mile, spaced `gap_days` apart
pub fn mock_runs_every_n_days(start: &str, count: usize, gap_days: i64, distance: f64) -> Vec<RunRecord> {
  let first = date(start);
  (0..count)
    .map(|i| {
      let mut run = mock_run(i as i64 + 1, start, distance, (distance * 540.0) as i64);
      run.date = first + Duration::days(i as i64 * gap_days);
      run
    })
    .collect()
}

/// Create a profile carrying only what plan generation reads
pub fn mock_profile(weekly_mileage: f64, fitness_level: FitnessLevel, longest_run: f64) -> FitnessProfile {
  FitnessProfile {
    weekly_mileage,
    fitness_level,
    longest_run: LongestRun {
      distance: longest_run,
      ..LongestRun::default()
    },
    ..FitnessProfile::default()
  }
}

/// Create a mock Strava activity (10 km run) for testing
pub fn mock_strava_activity(id: i64, start_date: &str) -> StravaActivity {
  StravaActivity {
    id,
    name: "Morning Run".to_string(),
    activity_type: "Run".to_string(),
    start_date: start_date
      .parse::<DateTime<Utc>>()
      .expect("Invalid test timestamp"),
    moving_time: 3600,
    distance: Some(10000.0),
    total_elevation_gain: Some(100.0),
    average_heartrate: Some(145.0),
    max_heartrate: Some(165.0),
    suffer_score: Some(50.0),
    workout_type: None,
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mock_factories_create_valid_data() {
    let run = mock_run(1, "2024-01-01", 5.0, 2700);
    assert_eq!(run.pace_per_mile(), 9.0);

    let runs = mock_runs_every_n_days("2024-01-30", 3, 2, 4.0);
    assert_eq!(runs[2].date, date("2024-02-03"));
    assert_eq!(runs[1].pace_per_mile(), 9.0);

    let profile = mock_profile(35.0, FitnessLevel::Intermediate, 14.0);
    assert_eq!(profile.longest_run.distance, 14.0);
    assert_eq!(profile.average_pace, 9.0);

    let activity = mock_strava_activity(9, "2024-04-02T07:15:00Z");
    assert_eq!(activity.activity_type, "Run");
    assert_eq!(activity.distance, Some(10000.0));
  }
}
