//! Marathon training plan generation
//!
//! Turns a fitness profile plus a timeline (and optional goal time) into a
//! week-by-week plan. All tables here are fixed lookups keyed by timeline
//! shape or fitness level.

use std::str::FromStr;

use crate::analysis::round_to;
use crate::error::PlanError;
use crate::models::{
  FitnessLevel, FitnessProfile, KeyWorkout, PaceTargets, PhaseName, ScheduleWeek, SessionType,
  TrainingPhase, TrainingPlan, WeekFocus, WeeklyStructure,
};
use crate::progression::{
  is_long_timeline, long_run_progression, mileage_progression, peak_weekly_mileage, Timeline,
};

pub const MARATHON_MILES: f64 = 26.2;

/// Assumed improvement over current pace when no goal time is given
const DEFAULT_GOAL_PACE_FACTOR: f64 = 0.95;

const EASY_PACE_FACTOR: f64 = 1.15;
const TEMPO_PACE_FACTOR: f64 = 0.92;
const INTERVAL_PACE_FACTOR: f64 = 0.85;
const LONG_RUN_PACE_FACTOR: f64 = 1.10;

/// Weeks before this are always base building on long timelines
const BASE_BUILDING_WEEKS: u32 = 6;

const EASY_WEEK_WORKOUT: &str = "Easy pace runs only";

/// ---------------------------------------------------------------------------
/// Goal Time
/// ---------------------------------------------------------------------------

/// Marathon goal finish time in `H:MM:SS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalTime {
  pub hours: u32,
  pub minutes: u32,
  pub seconds: u32,
}

impl GoalTime {
  pub fn total_hours(&self) -> f64 {
    self.hours as f64 + self.minutes as f64 / 60.0 + self.seconds as f64 / 3600.0
  }

  /// Marathon pace in min/mile
  pub fn marathon_pace(&self) -> f64 {
    self.total_hours() * 60.0 / MARATHON_MILES
  }
}

impl FromStr for GoalTime {
  type Err = PlanError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let malformed = || PlanError::MalformedGoalTime(s.to_string());

    let parts: Vec<u32> = s
      .trim()
      .split(':')
      .map(|part| part.parse::<u32>().map_err(|_| malformed()))
      .collect::<Result<_, _>>()?;

    let goal = match parts.as_slice() {
      [hours, minutes, seconds] if *minutes < 60 && *seconds < 60 => GoalTime {
        hours: *hours,
        minutes: *minutes,
        seconds: *seconds,
      },
      _ => return Err(malformed()),
    };

    if goal.total_hours() <= 0.0 {
      return Err(malformed());
    }

    Ok(goal)
  }
}

/// ---------------------------------------------------------------------------
/// Plan Generation
/// ---------------------------------------------------------------------------

/// Generate a training plan for `weeks` weeks from a fitness profile
pub fn generate(
  weeks: u32,
  profile: &FitnessProfile,
  goal_time: Option<&str>,
) -> Result<TrainingPlan, PlanError> {
  let goal = goal_time.map(str::parse::<GoalTime>).transpose()?;

  let base = profile.weekly_mileage;
  let level = profile.fitness_level;
  let peak = peak_weekly_mileage(weeks, base, level);

  tracing::debug!(
    weeks,
    base,
    peak,
    %level,
    phase_shape = %Timeline::phase_shape(weeks),
    "Generating training plan"
  );

  Ok(TrainingPlan {
    timeline_weeks: weeks,
    fitness_level: level,
    current_weekly_mileage: base,
    peak_weekly_mileage: round_to(peak, 1),
    goal_marathon_time: goal_time.map(|g| g.trim().to_string()),
    training_phases: training_phases(weeks, base, peak),
    weekly_structure: weekly_structure(level),
    key_workouts: key_workouts(weeks, level, profile.longest_run.distance),
    pace_targets: pace_targets(profile.average_pace, goal.as_ref()),
    weekly_schedule: weekly_schedule(weeks, base, peak, level),
  })
}

/// ---------------------------------------------------------------------------
/// Training Phases
/// ---------------------------------------------------------------------------

fn phase(name: PhaseName, weeks: &str, focus: &str, mileage_range: String) -> TrainingPhase {
  TrainingPhase {
    phase: name,
    weeks: weeks.to_string(),
    focus: focus.to_string(),
    mileage_range,
  }
}

fn miles_range(low: f64, high: f64) -> String {
  format!("{:.0}-{:.0}", low, high)
}

/// Phase breakdown. Only 16, 12 and 8 weeks have their own table; every
/// other timeline gets the 4-week shape, even when its labels do not cover
/// all of its weeks.
pub fn training_phases(weeks: u32, base: f64, peak: f64) -> Vec<TrainingPhase> {
  use PhaseName::*;

  match Timeline::phase_shape(weeks) {
    Timeline::SixteenWeek => vec![
      phase(BaseBuilding, "1-6", "Aerobic development", miles_range(base, base * 1.3)),
      phase(BuildUp, "7-12", "Speed & strength", miles_range(base * 1.3, peak)),
      phase(Peak, "13-14", "Race pace practice", format!("{:.0}", peak)),
      phase(Taper, "15-16", "Recovery & race prep", miles_range(base * 0.6, base * 0.8)),
    ],
    Timeline::TwelveWeek => vec![
      phase(BaseBuilding, "1-4", "Aerobic development", miles_range(base, base * 1.2)),
      phase(BuildUp, "5-9", "Speed & strength", miles_range(base * 1.2, peak)),
      phase(Peak, "10", "Race pace practice", format!("{:.0}", peak)),
      phase(Taper, "11-12", "Recovery & race prep", miles_range(base * 0.7, base * 0.8)),
    ],
    Timeline::EightWeek => vec![
      phase(BuildUp, "1-5", "Maintain & improve", miles_range(base, peak)),
      phase(Peak, "6", "Race pace practice", format!("{:.0}", peak)),
      phase(Taper, "7-8", "Recovery & race prep", format!("{:.0}", base * 0.8)),
    ],
    Timeline::FourWeek => vec![
      phase(Maintain, "1-2", "Maintain fitness", format!("{:.0}", base)),
      phase(Taper, "3-4", "Recovery & race prep", format!("{:.0}", base * 0.7)),
    ],
  }
}

/// ---------------------------------------------------------------------------
/// Weekly Structure
/// ---------------------------------------------------------------------------

pub fn weekly_structure(level: FitnessLevel) -> WeeklyStructure {
  use SessionType::*;

  match level {
    FitnessLevel::Beginner => WeeklyStructure {
      runs_per_week: 4,
      structure: [EasyRun, Rest, EasyRun, Rest, TempoOrSpeed, Rest, LongRun],
    },
    FitnessLevel::BeginnerPlus => WeeklyStructure {
      runs_per_week: 5,
      structure: [EasyRun, TempoOrSpeed, EasyRun, Rest, EasyRun, Rest, LongRun],
    },
    FitnessLevel::Intermediate => WeeklyStructure {
      runs_per_week: 5,
      structure: [EasyRun, SpeedWork, EasyRun, TempoRun, EasyRun, Rest, LongRun],
    },
    FitnessLevel::IntermediatePlus | FitnessLevel::Advanced => WeeklyStructure {
      runs_per_week: 6,
      structure: [EasyRun, SpeedWork, EasyRun, TempoRun, EasyRun, RecoveryRun, LongRun],
    },
  }
}

/// ---------------------------------------------------------------------------
/// Key Workouts
/// ---------------------------------------------------------------------------

/// Interval catalog tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedTier {
  Novice,
  Developing,
  Experienced,
}

impl SpeedTier {
  pub fn for_level(level: FitnessLevel) -> Self {
    match level {
      FitnessLevel::Beginner => SpeedTier::Novice,
      FitnessLevel::BeginnerPlus | FitnessLevel::Intermediate => SpeedTier::Developing,
      FitnessLevel::IntermediatePlus | FitnessLevel::Advanced => SpeedTier::Experienced,
    }
  }

  pub fn sessions(&self) -> &'static [&'static str] {
    match self {
      SpeedTier::Novice => &[
        "4x400m @ 5K pace",
        "3x800m @ 5K pace",
        "6x400m @ 5K pace",
        "4x800m @ 5K pace",
      ],
      SpeedTier::Developing => &[
        "4x800m @ 5K pace",
        "6x800m @ 5K pace",
        "3x1600m @ 10K pace",
        "5x1000m @ 5K pace",
        "8x400m @ Mile pace",
      ],
      SpeedTier::Experienced => &[
        "6x800m @ 5K pace",
        "4x1200m @ 5K pace",
        "3x1600m @ 10K pace",
        "8x400m @ Mile pace",
        "5x1000m @ 5K pace",
        "2x3200m @ 10K pace",
      ],
    }
  }
}

pub fn key_workouts(weeks: u32, level: FitnessLevel, current_longest: f64) -> Vec<KeyWorkout> {
  vec![
    KeyWorkout::LongRuns {
      progression: long_run_progression(weeks, current_longest),
      notes: "Build endurance gradually, practice race nutrition".to_string(),
    },
    KeyWorkout::SpeedWork {
      examples: SpeedTier::for_level(level)
        .sessions()
        .iter()
        .map(|s| s.to_string())
        .collect(),
      notes: "Improve VO2 max and running economy".to_string(),
    },
  ]
}

/// ---------------------------------------------------------------------------
/// Pace Targets
/// ---------------------------------------------------------------------------

pub fn pace_targets(current_pace: f64, goal: Option<&GoalTime>) -> PaceTargets {
  let goal_pace = match goal {
    Some(goal) => goal.marathon_pace(),
    None => current_pace * DEFAULT_GOAL_PACE_FACTOR,
  };

  PaceTargets {
    current_average_pace: current_pace,
    goal_marathon_pace: round_to(goal_pace, 2),
    easy_pace: round_to(goal_pace * EASY_PACE_FACTOR, 2),
    tempo_pace: round_to(goal_pace * TEMPO_PACE_FACTOR, 2),
    interval_pace: round_to(goal_pace * INTERVAL_PACE_FACTOR, 2),
    long_run_pace: round_to(goal_pace * LONG_RUN_PACE_FACTOR, 2),
  }
}

/// ---------------------------------------------------------------------------
/// Weekly Schedule
/// ---------------------------------------------------------------------------

pub fn weekly_schedule(weeks: u32, base: f64, peak: f64, level: FitnessLevel) -> Vec<ScheduleWeek> {
  let progression = mileage_progression(weeks, base, peak);

  (1..=weeks)
    .map(|week| ScheduleWeek {
      week,
      total_miles: progression.get(week as usize - 1).copied().unwrap_or(base),
      focus: week_focus(week, weeks),
      key_workout: key_workout_label(week, weeks, level).to_string(),
    })
    .collect()
}

pub fn week_focus(week: u32, total_weeks: u32) -> WeekFocus {
  if is_long_timeline(total_weeks) {
    if week <= BASE_BUILDING_WEEKS {
      WeekFocus::BaseBuilding
    } else if week <= total_weeks - 4 {
      WeekFocus::SpeedAndStrength
    } else if week <= total_weeks - 2 {
      WeekFocus::RacePace
    } else {
      WeekFocus::TaperAndRecovery
    }
  } else if week <= total_weeks.saturating_sub(2) {
    WeekFocus::MaintainFitness
  } else {
    WeekFocus::TaperAndRecovery
  }
}

pub fn key_workout_label(week: u32, total_weeks: u32, level: FitnessLevel) -> &'static str {
  if week > total_weeks.saturating_sub(2) {
    return EASY_WEEK_WORKOUT;
  }

  let cycle: [&str; 3] = match level {
    FitnessLevel::Beginner => ["Tempo run", "Fartlek", "Hill repeats"],
    _ => ["Interval training", "Tempo run", "Long run with pickups"],
  };

  cycle[((week - 1) % 3) as usize]
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
