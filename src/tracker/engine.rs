//! Aggregate computation over the entry log
//!
//! Everything here is recomputed from scratch on each call. Log sizes are
//! personal-scale, and keeping the derivation a pure function of
//! (log, now) means no field can drift from the log.

use chrono::{DateTime, Datelike, Duration, Local, Utc, Weekday};

use super::models::{AggregateSnapshot, WorkoutEntry};

/// Derive the full aggregate snapshot for the log at the instant `now`.
///
/// Calendar buckets (today, month, weekend) use local time; the week window
/// is a rolling 7x24h comparison on instants.
pub fn compute_snapshot(entries: &[WorkoutEntry], now: DateTime<Local>) -> AggregateSnapshot {
    let today = now.date_naive();
    let week_cutoff = now.with_timezone(&Utc) - Duration::days(7);

    let mut snap = AggregateSnapshot {
        session_count: entries.len(),
        ..Default::default()
    };

    for entry in entries {
        let local = entry.timestamp.with_timezone(&Local);
        let count = u64::from(entry.count);

        snap.total_all_time += count;
        snap.max_single_session = snap.max_single_session.max(entry.count);

        if local.date_naive() == today {
            snap.total_today += count;
        }
        if entry.timestamp >= week_cutoff {
            snap.total_this_week += count;
        }
        if local.month() == now.month() && local.year() == now.year() {
            snap.sessions_this_month += 1;
        }
        if matches!(local.weekday(), Weekday::Sat | Weekday::Sun) {
            snap.total_weekend += count;
        }
    }

    snap
}
