use serde::{Deserialize, Serialize};

use super::profile::FitnessLevel;

/// ---------------------------------------------------------------------------
/// Training Phases
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseName {
  #[serde(rename = "Base Building")]
  BaseBuilding,
  #[serde(rename = "Build Up")]
  BuildUp,
  Peak,
  Taper,
  Maintain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPhase {
  pub phase: PhaseName,
  /// Week range label, e.g. "1-6"
  pub weeks: String,
  pub focus: String,
  /// Weekly mileage label, e.g. "35-46"
  pub mileage_range: String,
}

/// ---------------------------------------------------------------------------
/// Weekly Structure
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionType {
  #[serde(rename = "Easy Run")]
  EasyRun,
  Rest,
  #[serde(rename = "Tempo/Speed")]
  TempoOrSpeed,
  #[serde(rename = "Speed Work")]
  SpeedWork,
  #[serde(rename = "Tempo Run")]
  TempoRun,
  #[serde(rename = "Recovery Run")]
  RecoveryRun,
  #[serde(rename = "Long Run")]
  LongRun,
}

impl SessionType {
  pub fn is_run(&self) -> bool {
    !matches!(self, SessionType::Rest)
  }
}

/// Seven-day template, Monday first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyStructure {
  pub runs_per_week: u8,
  pub structure: [SessionType; 7],
}

/// ---------------------------------------------------------------------------
/// Key Workouts
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum KeyWorkout {
  #[serde(rename = "Long Runs")]
  LongRuns { progression: Vec<f64>, notes: String },
  #[serde(rename = "Speed Work")]
  SpeedWork { examples: Vec<String>, notes: String },
}

/// ---------------------------------------------------------------------------
/// Pace Targets (min/mile)
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceTargets {
  pub current_average_pace: f64,
  pub goal_marathon_pace: f64,
  pub easy_pace: f64,
  pub tempo_pace: f64,
  pub interval_pace: f64,
  pub long_run_pace: f64,
}

/// ---------------------------------------------------------------------------
/// Weekly Schedule
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekFocus {
  #[serde(rename = "Base building")]
  BaseBuilding,
  #[serde(rename = "Speed & strength")]
  SpeedAndStrength,
  #[serde(rename = "Race pace")]
  RacePace,
  #[serde(rename = "Taper & recovery")]
  TaperAndRecovery,
  #[serde(rename = "Maintain fitness")]
  MaintainFitness,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleWeek {
  pub week: u32,
  pub total_miles: f64,
  pub focus: WeekFocus,
  pub key_workout: String,
}

/// ---------------------------------------------------------------------------
/// Training Plan
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
  pub timeline_weeks: u32,
  pub fitness_level: FitnessLevel,
  pub current_weekly_mileage: f64,
  pub peak_weekly_mileage: f64,
  pub goal_marathon_time: Option<String>,
  pub training_phases: Vec<TrainingPhase>,
  pub weekly_structure: WeeklyStructure,
  pub key_workouts: Vec<KeyWorkout>,
  pub pace_targets: PaceTargets,
  pub weekly_schedule: Vec<ScheduleWeek>,
}

impl TrainingPlan {
  /// Highest scheduled week
  pub fn max_scheduled_miles(&self) -> f64 {
    self
      .weekly_schedule
      .iter()
      .map(|w| w.total_miles)
      .fold(0.0, f64::max)
  }
}
