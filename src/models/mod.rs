pub mod plan;
pub mod profile;
pub mod run;

pub use plan::{
  KeyWorkout, PaceTargets, PhaseName, ScheduleWeek, SessionType, TrainingPhase, TrainingPlan,
  WeekFocus, WeeklyStructure,
};
pub use profile::{ConsistencyScore, FitnessLevel, FitnessProfile, LongestRun};
pub use run::RunRecord;
