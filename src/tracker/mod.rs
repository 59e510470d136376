//! Workout tracking module
//!
//! Records rep entries in a local key-value store and derives every
//! motivational statistic from the full log on demand: daily streaks,
//! levels, and a fixed achievement catalog.
//!
//! # Usage
//!
//! ```ignore
//! let mut tracker = Tracker::open(Box::new(SqliteStore::open_default()?));
//! let startup = tracker.check_unlocks();
//!
//! let outcome = tracker.log_reps(25)?;
//! let view = tracker.view();
//! ```

mod engine;
mod levels;
mod models;
mod repository;
mod streaks;

pub mod achievements;

pub use engine::compute_snapshot;
pub use levels::level_for_total;
pub use models::{
    AchievementStatus, AggregateSnapshot, LevelInfo, StreakRecord, TrackerView, WorkoutEntry,
};
pub use repository::{ValidationError, WorkoutLog};
pub use streaks::compute_streaks;

use chrono::{DateTime, Local, Utc};

use crate::store::{EntryStore, LOG_RECORD, SHOWN_RECORD};
use achievements::{ACHIEVEMENTS, AchievementDef, ShownAchievements, take_new_unlocks};

/// How many entries the render view includes.
const RECENT_LIMIT: usize = 10;

/// Result of a successful append.
#[derive(Debug, Clone)]
pub struct LogOutcome {
    pub entry: WorkoutEntry,
    /// Achievements that became unlocked in this pass, catalog order.
    pub new_unlocks: Vec<&'static AchievementDef>,
    /// False when the store write failed; the entry still lives in memory
    /// for the rest of the session.
    pub persisted: bool,
}

/// Central controller owning the store, the entry log and the shown set.
///
/// All mutation goes through here, and every mutation is followed by a
/// synchronous persist. Single-threaded by design: one instance per process.
pub struct Tracker {
    store: Box<dyn EntryStore>,
    log: WorkoutLog,
    shown: ShownAchievements,
}

impl Tracker {
    /// Load both records from the store. Absent, unreadable or unparsable
    /// data yields an empty state; opening never fails.
    pub fn open(store: Box<dyn EntryStore>) -> Self {
        let log = match store.load(LOG_RECORD) {
            Ok(Some(raw)) => WorkoutLog::from_json(&raw),
            Ok(None) => WorkoutLog::default(),
            Err(err) => {
                tracing::warn!("failed to read the workout log, starting empty: {err:#}");
                WorkoutLog::default()
            }
        };
        let shown = match store.load(SHOWN_RECORD) {
            Ok(Some(raw)) => ShownAchievements::from_json(&raw),
            Ok(None) => ShownAchievements::default(),
            Err(err) => {
                tracing::warn!("failed to read shown achievements, starting empty: {err:#}");
                ShownAchievements::default()
            }
        };
        tracing::debug!(entries = log.len(), "tracker loaded");
        Self { store, log, shown }
    }

    /// Append a set and run the unlock pass.
    pub fn log_reps(&mut self, count: u32) -> Result<LogOutcome, ValidationError> {
        self.log_reps_at(count, Local::now())
    }

    /// `log_reps` with an injected clock.
    pub fn log_reps_at(
        &mut self,
        count: u32,
        now: DateTime<Local>,
    ) -> Result<LogOutcome, ValidationError> {
        let entry = self.log.append(count, now.with_timezone(&Utc))?;
        let persisted = match self.store.save(LOG_RECORD, &self.log.to_json()) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(
                    "could not persist the workout log; keeping this session in memory: {err:#}"
                );
                false
            }
        };
        let new_unlocks = self.refresh_unlocks(now);
        Ok(LogOutcome { entry, new_unlocks, persisted })
    }

    /// The startup unlock pass: report anything unlocked but never shown.
    pub fn check_unlocks(&mut self) -> Vec<&'static AchievementDef> {
        self.check_unlocks_at(Local::now())
    }

    /// `check_unlocks` with an injected clock.
    pub fn check_unlocks_at(&mut self, now: DateTime<Local>) -> Vec<&'static AchievementDef> {
        self.refresh_unlocks(now)
    }

    fn refresh_unlocks(&mut self, now: DateTime<Local>) -> Vec<&'static AchievementDef> {
        let snapshot = engine::compute_snapshot(self.log.entries(), now);
        let streak = streaks::compute_streaks(self.log.entries(), now.date_naive());
        let newly = take_new_unlocks(&mut self.shown, &snapshot, &streak);
        if !newly.is_empty() {
            if let Err(err) = self.store.save(SHOWN_RECORD, &self.shown.to_json()) {
                tracing::warn!("could not persist shown achievements: {err:#}");
            }
        }
        newly
    }

    /// Everything the presentation layer renders in one cycle.
    pub fn view(&self) -> TrackerView {
        self.view_at(Local::now())
    }

    /// `view` with an injected clock.
    pub fn view_at(&self, now: DateTime<Local>) -> TrackerView {
        let snapshot = engine::compute_snapshot(self.log.entries(), now);
        let streak = streaks::compute_streaks(self.log.entries(), now.date_naive());
        let level = levels::level_for_total(snapshot.total_all_time);
        let achievements = ACHIEVEMENTS
            .iter()
            .map(|def| AchievementStatus {
                def,
                unlocked: def.unlocked(&snapshot, &streak),
            })
            .collect();
        let recent = self
            .log
            .entries()
            .iter()
            .take(RECENT_LIMIT)
            .cloned()
            .collect();
        TrackerView { snapshot, streak, level, achievements, recent }
    }

    /// The full entry sequence, newest first.
    pub fn entries(&self) -> &[WorkoutEntry] {
        self.log.entries()
    }
}
