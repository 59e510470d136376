//! Data models for the workout tracker
//!
//! `WorkoutEntry` is the only persisted record; everything else is derived
//! fresh from the entry log on each query.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::achievements::AchievementDef;

/// One recorded set: a rep count and the instant it was logged.
///
/// Entries are immutable once created and are never individually deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub count: u32,
    pub timestamp: DateTime<Utc>,
}

impl WorkoutEntry {
    /// The local calendar date this entry falls on.
    pub fn local_day(&self) -> NaiveDate {
        self.timestamp.with_timezone(&Local).date_naive()
    }
}

/// Aggregates derived from the full entry log at a point in time.
///
/// Never persisted; a pure function of the log and a reference "now".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateSnapshot {
    /// Sum of all rep counts.
    pub total_all_time: u64,
    /// Sum of counts on today's local calendar date.
    pub total_today: u64,
    /// Sum of counts in the rolling 7x24h window ending now.
    pub total_this_week: u64,
    /// Number of entries (not reps) in the current local month.
    pub sessions_this_month: usize,
    /// Largest single-entry count, 0 for an empty log.
    pub max_single_session: u32,
    /// Sum of counts logged on Saturdays and Sundays.
    pub total_weekend: u64,
    /// Total number of entries.
    pub session_count: usize,
}

/// Consecutive-day streaks over the distinct local dates with activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakRecord {
    pub current: u32,
    pub best: u32,
}

/// Level derived from the all-time rep total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelInfo {
    pub level: u32,
    /// Reps into the current level, 0..100.
    pub progress: u32,
    /// All-time total at which the next level starts.
    pub next_milestone: u64,
}

/// One catalog entry together with its current unlock state.
#[derive(Debug, Clone, Copy)]
pub struct AchievementStatus {
    pub def: &'static AchievementDef,
    pub unlocked: bool,
}

/// Everything the presentation layer needs for one render cycle.
#[derive(Debug, Clone)]
pub struct TrackerView {
    pub snapshot: AggregateSnapshot,
    pub streak: StreakRecord,
    pub level: LevelInfo,
    pub achievements: Vec<AchievementStatus>,
    /// Most recent entries, newest first.
    pub recent: Vec<WorkoutEntry>,
}

impl TrackerView {
    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }
}
