use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// ---------------------------------------------------------------------------
/// Fitness Level
/// ---------------------------------------------------------------------------

/// Ordered from least to most trained, so tiers compare with `<`/`>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
#[derive(Default)]
pub enum FitnessLevel {
  #[default]
  Beginner,
  BeginnerPlus,
  Intermediate,
  IntermediatePlus,
  Advanced,
}

impl FitnessLevel {
  pub const ALL: [FitnessLevel; 5] = [
    FitnessLevel::Beginner,
    FitnessLevel::BeginnerPlus,
    FitnessLevel::Intermediate,
    FitnessLevel::IntermediatePlus,
    FitnessLevel::Advanced,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      FitnessLevel::Beginner => "Beginner",
      FitnessLevel::BeginnerPlus => "Beginner+",
      FitnessLevel::Intermediate => "Intermediate",
      FitnessLevel::IntermediatePlus => "Intermediate+",
      FitnessLevel::Advanced => "Advanced",
    }
  }

  /// Lenient parse used for externally supplied profiles: unknown labels are Beginner
  pub fn from_label(label: &str) -> Self {
    label.parse().unwrap_or_else(|_| {
      tracing::warn!(label, "Unknown fitness level, falling back to Beginner");
      FitnessLevel::Beginner
    })
  }
}

impl std::fmt::Display for FitnessLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for FitnessLevel {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    FitnessLevel::ALL
      .into_iter()
      .find(|level| level.as_str() == s)
      .ok_or_else(|| format!("Unknown fitness level: {}", s))
  }
}

impl From<String> for FitnessLevel {
  fn from(label: String) -> Self {
    FitnessLevel::from_label(&label)
  }
}

impl From<FitnessLevel> for String {
  fn from(level: FitnessLevel) -> Self {
    level.as_str().to_string()
  }
}

/// ---------------------------------------------------------------------------
/// Consistency Score
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConsistencyScore {
  #[serde(rename = "Excellent (Daily runner)")]
  Excellent,
  #[serde(rename = "Very Good (5-6 runs/week)")]
  VeryGood,
  #[serde(rename = "Good (4-5 runs/week)")]
  Good,
  #[serde(rename = "Fair (3-4 runs/week)")]
  Fair,
  #[serde(rename = "Needs Improvement (Inconsistent)")]
  NeedsImprovement,
}

impl ConsistencyScore {
  /// Map the average day-gap between consecutive runs to a label
  pub fn from_avg_gap(avg_gap_days: f64) -> Self {
    match avg_gap_days {
      g if g <= 1.5 => ConsistencyScore::Excellent,
      g if g <= 2.5 => ConsistencyScore::VeryGood,
      g if g <= 3.5 => ConsistencyScore::Good,
      g if g <= 5.0 => ConsistencyScore::Fair,
      _ => ConsistencyScore::NeedsImprovement,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      ConsistencyScore::Excellent => "Excellent (Daily runner)",
      ConsistencyScore::VeryGood => "Very Good (5-6 runs/week)",
      ConsistencyScore::Good => "Good (4-5 runs/week)",
      ConsistencyScore::Fair => "Fair (3-4 runs/week)",
      ConsistencyScore::NeedsImprovement => "Needs Improvement (Inconsistent)",
    }
  }
}

impl std::fmt::Display for ConsistencyScore {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// ---------------------------------------------------------------------------
/// Fitness Profile
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LongestRun {
  pub distance: f64,
  pub pace: f64,
  pub date: Option<NaiveDate>,
}

impl Default for LongestRun {
  fn default() -> Self {
    Self {
      distance: 8.0,
      pace: 0.0,
      date: None,
    }
  }
}

/// Aggregate view of a runner's history.
///
/// Missing fields in a deserialized profile take the defaults a plan needs
/// (20 mi/week, Beginner, 8 mi long run, 9:00 min/mile).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessProfile {
  pub data_period_days: i64,
  pub total_runs: usize,
  pub total_distance: f64,
  pub weekly_mileage: f64,
  /// min/mile
  pub average_pace: f64,
  /// Average pace of the 10 most recent runs
  pub recent_pace_trend: f64,
  pub longest_run: LongestRun,
  pub fitness_level: FitnessLevel,
  pub consistency_score: ConsistencyScore,
  pub workout_distribution: BTreeMap<String, usize>,
  pub average_heartrate: Option<f64>,
  pub training_recommendations: Vec<String>,
}

impl Default for FitnessProfile {
  fn default() -> Self {
    Self {
      data_period_days: 0,
      total_runs: 0,
      total_distance: 0.0,
      weekly_mileage: 20.0,
      average_pace: 9.0,
      recent_pace_trend: 9.0,
      longest_run: LongestRun::default(),
      fitness_level: FitnessLevel::Beginner,
      consistency_score: ConsistencyScore::NeedsImprovement,
      workout_distribution: BTreeMap::new(),
      average_heartrate: None,
      training_recommendations: Vec::new(),
    }
  }
}
