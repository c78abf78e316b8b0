//! Volume progressions for a marathon build
//!
//! Weekly mileage and long-run distances over a timeline of N weeks:
//! - long timelines (12+ weeks) ramp linearly from current volume to peak,
//!   then taper over 4 weeks
//! - short timelines hold current volume, then taper over 2 weeks
//!
//! Key principles:
//! - Peak volume is a multiple of current volume, capped at 70 mi/week
//! - Newer runners get a lower cap regardless of timeline
//! - Taper weeks always sit below the peak week

use serde::{Deserialize, Serialize};

use crate::analysis::round_to;
use crate::models::FitnessLevel;

/// Absolute ceiling on weekly mileage
pub const MAX_WEEKLY_MILEAGE: f64 = 70.0;

/// Multiplier used when the timeline is not one of the standard lengths
pub const DEFAULT_PEAK_MULTIPLIER: f64 = 1.5;

/// Weeks at or above this get a ramp and a 4-week taper
pub const LONG_TIMELINE_WEEKS: u32 = 12;

/// Fractions of peak mileage for the 4 taper weeks of a long timeline
const LONG_TAPER_FACTORS: [f64; 4] = [0.8, 0.6, 0.4, 0.3];

/// Fractions of base mileage for the 2 taper weeks of a short timeline
const SHORT_TAPER_FACTORS: [f64; 2] = [0.7, 0.5];

/// Long-run distances for the final weeks
const LONG_RUN_TAPER: [f64; 4] = [18.0, 12.0, 8.0, 6.0];
const SHORT_LONG_RUN_TAPER: [f64; 2] = [12.0, 8.0];

/// Long runs start at least here
const MIN_LONG_RUN_START: f64 = 8.0;
/// Long runs stop growing once they reach this
const LONG_RUN_BUILD_LIMIT: f64 = 20.0;
const LONG_RUN_CAP: f64 = 22.0;
const LONG_RUN_STEP: f64 = 2.0;
/// Short timelines add at most this many miles on top of the starting long run
const SHORT_LONG_RUN_SPAN: u32 = 6;

// ---------------------------------------------------------------------------
/// Timeline: standard plan lengths
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    SixteenWeek,
    TwelveWeek,
    EightWeek,
    FourWeek,
}

impl Timeline {
    /// Exact match on the standard lengths, None otherwise
    pub fn from_weeks(weeks: u32) -> Option<Self> {
        match weeks {
            16 => Some(Self::SixteenWeek),
            12 => Some(Self::TwelveWeek),
            8 => Some(Self::EightWeek),
            4 => Some(Self::FourWeek),
            _ => None,
        }
    }

    /// Shape used for phase tables: anything non-standard uses the 4-week shape
    pub fn phase_shape(weeks: u32) -> Self {
        Self::from_weeks(weeks).unwrap_or(Self::FourWeek)
    }

    pub fn peak_multiplier(&self) -> f64 {
        match self {
            Self::SixteenWeek => 1.8,
            Self::TwelveWeek => 1.6,
            Self::EightWeek => 1.4,
            Self::FourWeek => 1.2,
        }
    }
}

impl std::fmt::Display for Timeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SixteenWeek => write!(f, "16_week"),
            Self::TwelveWeek => write!(f, "12_week"),
            Self::EightWeek => write!(f, "8_week"),
            Self::FourWeek => write!(f, "4_week"),
        }
    }
}

pub fn is_long_timeline(weeks: u32) -> bool {
    weeks >= LONG_TIMELINE_WEEKS
}

/// Number of taper weeks at the end of a timeline
pub fn taper_weeks(weeks: u32) -> u32 {
    if is_long_timeline(weeks) {
        LONG_TAPER_FACTORS.len() as u32
    } else {
        SHORT_TAPER_FACTORS.len() as u32
    }
}

// ---------------------------------------------------------------------------
/// Peak Mileage
// ---------------------------------------------------------------------------

/// Safe peak weekly mileage for a timeline, current volume and fitness tier
pub fn peak_weekly_mileage(weeks: u32, current_weekly_mileage: f64, level: FitnessLevel) -> f64 {
    let multiplier = Timeline::from_weeks(weeks)
        .map(|t| t.peak_multiplier())
        .unwrap_or(DEFAULT_PEAK_MULTIPLIER);

    let peak = (current_weekly_mileage * multiplier).min(MAX_WEEKLY_MILEAGE);

    let clamped = match level {
        FitnessLevel::Beginner => peak.min(40.0),
        FitnessLevel::BeginnerPlus => peak.min(50.0),
        _ => peak,
    };

    if clamped < peak {
        tracing::debug!(%level, peak, clamped, "Clamped peak mileage by fitness level");
    }

    clamped
}

// ---------------------------------------------------------------------------
/// Weekly Mileage Progression
// ---------------------------------------------------------------------------

/// Target miles for each week of the plan
pub fn mileage_progression(weeks: u32, base: f64, peak: f64) -> Vec<f64> {
    let mut progression = Vec::with_capacity(weeks as usize);

    if is_long_timeline(weeks) {
        let build_weeks = weeks - LONG_TAPER_FACTORS.len() as u32;
        let increment = (peak - base) / build_weeks as f64;

        for week in 0..build_weeks {
            progression.push(round_to(base + increment * week as f64, 1));
        }
        progression.extend(LONG_TAPER_FACTORS.iter().map(|f| round_to(peak * f, 1)));
    } else {
        let hold_weeks = weeks.saturating_sub(SHORT_TAPER_FACTORS.len() as u32);
        progression.extend(std::iter::repeat(base).take(hold_weeks as usize));
        progression.extend(SHORT_TAPER_FACTORS.iter().map(|f| round_to(base * f, 1)));
    }

    progression
}

// ---------------------------------------------------------------------------
/// Long Run Progression
// ---------------------------------------------------------------------------

/// Long-run distance per week, starting from the current longest run.
///
/// Long timelines add 2 miles every other week until 20, then taper.
/// Short timelines step up at most 6 miles before a 2-week taper, so the
/// sequence can be shorter than the timeline.
pub fn long_run_progression(weeks: u32, current_longest: f64) -> Vec<f64> {
    let start = current_longest.max(MIN_LONG_RUN_START);
    let mut long_runs = Vec::new();

    if is_long_timeline(weeks) {
        let mut current = start;
        for i in 0..weeks - LONG_RUN_TAPER.len() as u32 {
            if i % 2 == 0 && current < LONG_RUN_BUILD_LIMIT {
                current += LONG_RUN_STEP;
            }
            long_runs.push(current.min(LONG_RUN_CAP));
        }
        long_runs.extend(LONG_RUN_TAPER);
    } else {
        let span = weeks.saturating_sub(2).min(SHORT_LONG_RUN_SPAN);
        long_runs.extend((0..span).step_by(2).map(|offset| start + offset as f64));
        long_runs.extend(SHORT_LONG_RUN_TAPER);
    }

    long_runs.truncate(weeks as usize);
    long_runs
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_lookup() {
        assert_eq!(Timeline::from_weeks(16), Some(Timeline::SixteenWeek));
        assert_eq!(Timeline::from_weeks(10), None);
        assert_eq!(Timeline::phase_shape(10), Timeline::FourWeek);
        assert_eq!(Timeline::phase_shape(20), Timeline::FourWeek);
        assert_eq!(Timeline::phase_shape(8), Timeline::EightWeek);
    }

    #[test]
    fn test_peak_mileage_multipliers() {
        let level = FitnessLevel::Intermediate;
        assert!((peak_weekly_mileage(16, 30.0, level) - 54.0).abs() < 1e-9);
        assert!((peak_weekly_mileage(12, 30.0, level) - 48.0).abs() < 1e-9);
        assert!((peak_weekly_mileage(8, 30.0, level) - 42.0).abs() < 1e-9);
        assert!((peak_weekly_mileage(4, 30.0, level) - 36.0).abs() < 1e-9);
        // Non-standard timeline uses 1.5
        assert!((peak_weekly_mileage(10, 30.0, level) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_peak_mileage_caps() {
        assert_eq!(peak_weekly_mileage(16, 50.0, FitnessLevel::Advanced), 70.0);
        assert_eq!(peak_weekly_mileage(16, 30.0, FitnessLevel::Beginner), 40.0);
        assert_eq!(peak_weekly_mileage(16, 30.0, FitnessLevel::BeginnerPlus), 50.0);
        assert!((peak_weekly_mileage(16, 20.0, FitnessLevel::Beginner) - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_long_timeline_mileage() {
        let progression = mileage_progression(16, 30.0, 54.0);

        assert_eq!(progression.len(), 16);
        assert_eq!(progression[0], 30.0);
        // increment = 24 / 12 = 2
        assert_eq!(progression[1], 32.0);
        assert_eq!(progression[11], 52.0);
        assert_eq!(&progression[12..], &[43.2, 32.4, 21.6, 16.2]);
    }

    #[test]
    fn test_short_timeline_mileage() {
        let progression = mileage_progression(8, 30.0, 42.0);

        assert_eq!(progression.len(), 8);
        assert!(progression[..6].iter().all(|m| *m == 30.0));
        assert_eq!(&progression[6..], &[21.0, 15.0]);
    }

    #[test]
    fn test_tiny_timelines_do_not_underflow() {
        assert_eq!(mileage_progression(1, 20.0, 24.0), vec![14.0, 10.0]);
        assert_eq!(mileage_progression(2, 20.0, 24.0), vec![14.0, 10.0]);
        assert_eq!(long_run_progression(1, 10.0), vec![12.0]);
        assert!(long_run_progression(0, 10.0).is_empty());
    }

    #[test]
    fn test_long_run_progression_sixteen_weeks() {
        let long_runs = long_run_progression(16, 14.0);

        assert_eq!(
            long_runs,
            vec![16.0, 16.0, 18.0, 18.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 18.0, 12.0, 8.0, 6.0]
        );
    }

    #[test]
    fn test_long_run_progression_starts_at_eight() {
        let long_runs = long_run_progression(12, 5.0);

        assert_eq!(long_runs.len(), 12);
        assert_eq!(long_runs[0], 10.0);
        assert_eq!(&long_runs[8..], &[18.0, 12.0, 8.0, 6.0]);
    }

    #[test]
    fn test_long_run_progression_is_capped() {
        // Already past the build limit: no increments, capped at 22
        let long_runs = long_run_progression(12, 24.0);
        assert!(long_runs[..8].iter().all(|d| *d == 22.0));
    }

    #[test]
    fn test_short_long_run_progression() {
        assert_eq!(long_run_progression(8, 10.0), vec![10.0, 12.0, 14.0, 12.0, 8.0]);
        assert_eq!(long_run_progression(4, 10.0), vec![10.0, 12.0, 8.0]);
        assert_eq!(long_run_progression(10, 9.0), vec![9.0, 11.0, 13.0, 12.0, 8.0]);
    }

    #[test]
    fn test_tiny_base_taper_rounds_up_to_base() {
        // 0.07 and 0.05 both round to 0.1
        let miles = mileage_progression(8, 0.1, 0.15);
        assert_eq!(miles, vec![0.1; 8]);

        let miles = mileage_progression(8, 1.0, 1.4);
        assert_eq!(&miles[6..], &[0.7, 0.5]);
    }

    #[test]
    fn test_taper_weeks() {
        assert_eq!(taper_weeks(16), 4);
        assert_eq!(taper_weeks(12), 4);
        assert_eq!(taper_weeks(11), 2);
    }
}
