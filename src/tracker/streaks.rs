//! Daily streak computation
//!
//! Streaks run over the distinct local calendar dates that have at least one
//! entry. The current streak stays alive if the most recent active day is
//! today or yesterday; two full inactive days break it.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use super::models::{StreakRecord, WorkoutEntry};

/// Compute current and best streaks for the given log.
///
/// `today` is injected so callers can evaluate the log at any reference date.
pub fn compute_streaks(entries: &[WorkoutEntry], today: NaiveDate) -> StreakRecord {
    let days: BTreeSet<NaiveDate> = entries.iter().map(|e| e.local_day()).collect();
    if days.is_empty() {
        return StreakRecord::default();
    }
    // Newest first.
    let days: Vec<NaiveDate> = days.into_iter().rev().collect();

    let yesterday = today.pred_opt();
    let mut current = 0u32;
    if days[0] == today || Some(days[0]) == yesterday {
        current = 1;
        for pair in days.windows(2) {
            if (pair[0] - pair[1]).num_days() == 1 {
                current += 1;
            } else {
                break;
            }
        }
    }

    // Best streak: one scan over all runs, floored at 1 since the log is
    // non-empty.
    let mut best = 1u32;
    let mut run = 1u32;
    for pair in days.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            run += 1;
        } else {
            run = 1;
        }
        best = best.max(run);
    }

    StreakRecord { current, best }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Local, TimeZone, Utc};

    fn noon(date: NaiveDate) -> DateTime<Utc> {
        Local
            .from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
            .earliest()
            .unwrap()
            .with_timezone(&Utc)
    }

    fn entry_on(date: NaiveDate) -> WorkoutEntry {
        WorkoutEntry { count: 10, timestamp: noon(date) }
    }

    fn days_back(today: NaiveDate, offsets: &[i64]) -> Vec<WorkoutEntry> {
        offsets
            .iter()
            .map(|&off| entry_on(today - Duration::days(off)))
            .collect()
    }

    #[test]
    fn test_empty_log_has_no_streaks() {
        let today = Local::now().date_naive();
        assert_eq!(compute_streaks(&[], today), StreakRecord::default());
    }

    #[test]
    fn test_single_day_today() {
        let today = Local::now().date_naive();
        let entries = days_back(today, &[0]);
        assert_eq!(compute_streaks(&entries, today), StreakRecord { current: 1, best: 1 });
    }

    #[test]
    fn test_consecutive_days_ending_today() {
        let today = Local::now().date_naive();
        let entries = days_back(today, &[0, 1, 2, 3, 4]);
        assert_eq!(compute_streaks(&entries, today), StreakRecord { current: 5, best: 5 });
    }

    #[test]
    fn test_yesterday_keeps_current_streak_alive() {
        let today = Local::now().date_naive();
        let entries = days_back(today, &[1, 2, 3]);
        assert_eq!(compute_streaks(&entries, today), StreakRecord { current: 3, best: 3 });
    }

    #[test]
    fn test_two_inactive_days_break_current() {
        let today = Local::now().date_naive();
        let entries = days_back(today, &[2, 3, 4]);
        let streak = compute_streaks(&entries, today);
        assert_eq!(streak.current, 0);
        assert_eq!(streak.best, 3);
    }

    #[test]
    fn test_gap_resets_run_and_best_takes_maximum() {
        let today = Local::now().date_naive();
        // Two runs: [8..6] back (3 days) and [1..0] back (2 days).
        let entries = days_back(today, &[0, 1, 6, 7, 8]);
        let streak = compute_streaks(&entries, today);
        assert_eq!(streak.current, 2);
        assert_eq!(streak.best, 3);
    }

    #[test]
    fn test_isolated_days_with_gap() {
        // Activity on Jan 1 and Jan 3 only, evaluated later in the month.
        let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let entries = vec![entry_on(jan(1)), entry_on(jan(3))];
        let streak = compute_streaks(&entries, jan(10));
        assert_eq!(streak.current, 0);
        assert_eq!(streak.best, 1);
    }

    #[test]
    fn test_multiple_entries_per_day_count_once() {
        let today = Local::now().date_naive();
        let mut entries = days_back(today, &[0, 0, 0, 1]);
        entries.push(entry_on(today - Duration::days(1)));
        assert_eq!(compute_streaks(&entries, today), StreakRecord { current: 2, best: 2 });
    }
}
