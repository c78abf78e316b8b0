//! Deterministic fitness analysis over run history
//!
//! This module reduces a list of runs into a fitness profile.
//! Plan generation consumes the profile rather than the raw runs.

use chrono::Datelike;
use std::collections::{BTreeMap, HashSet};

use crate::error::AnalysisError;
use crate::models::{ConsistencyScore, FitnessLevel, FitnessProfile, LongestRun, RunRecord};

/// Runs considered for the recent pace trend
const RECENT_RUN_WINDOW: usize = 10;

/// Label used when a run carries no workout type
const DEFAULT_WORKOUT_LABEL: &str = "Easy";

/// Round to a fixed number of decimal places
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
  let factor = 10f64.powi(places);
  (value * factor).round() / factor
}

/// ---------------------------------------------------------------------------
/// Fitness Profile
/// ---------------------------------------------------------------------------

/// Build a fitness profile from run history
pub fn analyze(runs: &[RunRecord]) -> Result<FitnessProfile, AnalysisError> {
  if runs.is_empty() {
    return Err(AnalysisError::InsufficientData);
  }

  let total_runs = runs.len();
  let total_distance: f64 = runs.iter().map(|r| r.distance).sum();
  let average_pace = runs.iter().map(RunRecord::pace_per_mile).sum::<f64>() / total_runs as f64;

  // Coarse approximation: one "week" per distinct calendar month
  let weeks_of_data = distinct_months(runs).max(1);
  let weekly_mileage = total_distance / weeks_of_data as f64;

  let longest = longest_run(runs);
  let recent_pace = recent_pace_trend(runs);

  let mut dates: Vec<_> = runs.iter().map(|r| r.date).collect();
  dates.sort();
  let avg_gap = average_gap_days(&dates);
  let data_period_days = match (dates.first(), dates.last()) {
    (Some(first), Some(last)) => (*last - *first).num_days(),
    _ => 0,
  };

  let fitness_level = determine_fitness_level(weekly_mileage, longest.distance, average_pace);

  tracing::debug!(
    total_runs,
    weeks_of_data,
    weekly_mileage,
    average_pace,
    avg_gap,
    %fitness_level,
    "Computed fitness profile"
  );

  Ok(FitnessProfile {
    data_period_days,
    total_runs,
    total_distance: round_to(total_distance, 1),
    weekly_mileage: round_to(weekly_mileage, 1),
    average_pace: round_to(average_pace, 2),
    recent_pace_trend: round_to(recent_pace, 2),
    longest_run: LongestRun {
      distance: longest.distance,
      pace: longest.pace_per_mile(),
      date: Some(longest.date),
    },
    fitness_level,
    consistency_score: ConsistencyScore::from_avg_gap(avg_gap),
    workout_distribution: workout_distribution(runs),
    average_heartrate: average_heartrate(runs).map(|hr| round_to(hr, 0)),
    training_recommendations: training_recommendations(weekly_mileage, longest.distance, avg_gap),
  })
}

fn distinct_months(runs: &[RunRecord]) -> usize {
  runs
    .iter()
    .map(|r| (r.date.year(), r.date.month()))
    .collect::<HashSet<_>>()
    .len()
}

/// Longest run by distance; ties keep the first in input order
fn longest_run(runs: &[RunRecord]) -> &RunRecord {
  let mut longest = &runs[0];
  for run in &runs[1..] {
    if run.distance > longest.distance {
      longest = run;
    }
  }
  longest
}

/// Mean pace of the most recent runs by date
fn recent_pace_trend(runs: &[RunRecord]) -> f64 {
  let mut recent: Vec<&RunRecord> = runs.iter().collect();
  recent.sort_by(|a, b| b.date.cmp(&a.date));
  recent.truncate(RECENT_RUN_WINDOW);

  let sum: f64 = recent.iter().map(|r| r.pace_per_mile()).sum();
  sum / recent.len() as f64
}

fn workout_distribution(runs: &[RunRecord]) -> BTreeMap<String, usize> {
  let mut distribution = BTreeMap::new();
  for run in runs {
    let label = run.workout_type.as_deref().unwrap_or(DEFAULT_WORKOUT_LABEL);
    *distribution.entry(label.to_string()).or_insert(0) += 1;
  }
  distribution
}

/// Mean of reported average heart rates, None if no run reports one
fn average_heartrate(runs: &[RunRecord]) -> Option<f64> {
  let reported: Vec<f64> = runs
    .iter()
    .filter_map(|r| r.average_heartrate)
    .filter(|hr| *hr > 0.0)
    .collect();

  if reported.is_empty() {
    None
  } else {
    Some(reported.iter().sum::<f64>() / reported.len() as f64)
  }
}

/// Average day gap between consecutive dates (expects ascending order)
fn average_gap_days(sorted_dates: &[chrono::NaiveDate]) -> f64 {
  if sorted_dates.len() < 2 {
    return 0.0;
  }

  let gaps: Vec<i64> = sorted_dates
    .windows(2)
    .map(|pair| (pair[1] - pair[0]).num_days())
    .collect();

  gaps.iter().sum::<i64>() as f64 / gaps.len() as f64
}

/// ---------------------------------------------------------------------------
/// Fitness Level Tiering
/// ---------------------------------------------------------------------------

/// Base tier from volume and long-run distance; first matching row wins
fn base_fitness_level(weekly_mileage: f64, longest_run: f64) -> FitnessLevel {
  match (weekly_mileage, longest_run) {
    (w, l) if w >= 50.0 && l >= 20.0 => FitnessLevel::Advanced,
    (w, l) if w >= 35.0 && l >= 16.0 => FitnessLevel::IntermediatePlus,
    (w, l) if w >= 25.0 && l >= 12.0 => FitnessLevel::Intermediate,
    (w, l) if w >= 15.0 && l >= 8.0 => FitnessLevel::BeginnerPlus,
    _ => FitnessLevel::Beginner,
  }
}

/// Tier a runner from weekly mileage, longest run and average pace (min/mile)
pub fn determine_fitness_level(weekly_mileage: f64, longest_run: f64, avg_pace: f64) -> FitnessLevel {
  let base = base_fitness_level(weekly_mileage, longest_run);

  let adjusted = match base {
    // Sub-7 minute miles
    FitnessLevel::Beginner | FitnessLevel::BeginnerPlus if avg_pace < 7.0 => FitnessLevel::Intermediate,
    // Slower than 10 min/mile
    FitnessLevel::Advanced | FitnessLevel::IntermediatePlus if avg_pace > 10.0 => FitnessLevel::Intermediate,
    other => other,
  };

  if adjusted != base {
    tracing::debug!(%base, %adjusted, avg_pace, "Pace adjusted fitness level");
  }

  adjusted
}

/// ---------------------------------------------------------------------------
/// Recommendations
/// ---------------------------------------------------------------------------

pub const REC_BUILD_BASE: &str = "Focus on building base mileage gradually (10% rule)";
pub const REC_LONG_RUN: &str = "Gradually increase long run distance";
pub const REC_CONSISTENCY: &str = "Improve consistency - aim for at least 4 runs per week";
pub const REC_VOLUME_MISMATCH: &str = "Add more long runs to match your weekly volume";

pub fn training_recommendations(weekly_mileage: f64, longest_run: f64, avg_gap: f64) -> Vec<String> {
  let mut recommendations = Vec::new();

  if weekly_mileage < 20.0 {
    recommendations.push(REC_BUILD_BASE.to_string());
  }

  if longest_run < 10.0 {
    recommendations.push(REC_LONG_RUN.to_string());
  }

  if avg_gap > 3.0 {
    recommendations.push(REC_CONSISTENCY.to_string());
  }

  if weekly_mileage > 50.0 && longest_run < 16.0 {
    recommendations.push(REC_VOLUME_MISMATCH.to_string());
  }

  recommendations
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
