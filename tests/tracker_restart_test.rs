//! Integration tests for tracker state across restarts

use chrono::{DateTime, Local, TimeZone};
use std::path::Path;
use tempfile::tempdir;

use replog::store::{EntryStore, LOG_RECORD, SqliteStore};
use replog::tracker::Tracker;

fn noon_today() -> DateTime<Local> {
    Local
        .from_local_datetime(&Local::now().date_naive().and_hms_opt(12, 0, 0).unwrap())
        .earliest()
        .unwrap()
}

fn open_tracker(path: &Path) -> Tracker {
    let store = SqliteStore::open(path).expect("store should open");
    Tracker::open(Box::new(store))
}

#[test]
fn test_log_survives_restart() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("replog.db");
    let now = noon_today();

    {
        let mut tracker = open_tracker(&db);
        tracker.log_reps_at(120, now).unwrap();
    }

    let tracker = open_tracker(&db);
    let view = tracker.view_at(now);
    assert_eq!(view.snapshot.total_all_time, 120, "log must survive a restart");
    assert_eq!(view.snapshot.session_count, 1);
    assert_eq!(view.snapshot.max_single_session, 120);
}

#[test]
fn test_unlocks_are_not_repeated_after_restart() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("replog.db");
    let now = noon_today();

    let first_unlocks = {
        let mut tracker = open_tracker(&db);
        tracker.log_reps_at(120, now).unwrap().new_unlocks
    };
    let names: Vec<&str> = first_unlocks.iter().map(|d| d.name).collect();
    assert!(names.contains(&"First Steps"));
    assert!(names.contains(&"50 Club"));
    assert!(names.contains(&"Century Breaker"));
    assert!(names.contains(&"Century Club"));

    let mut tracker = open_tracker(&db);
    assert!(
        tracker.check_unlocks_at(now).is_empty(),
        "shown achievements must persist, so nothing is announced twice"
    );

    // Still reported as unlocked in the view.
    let view = tracker.view_at(now);
    assert!(view.unlocked_count() >= first_unlocks.len());
}

#[test]
fn test_corrupt_log_record_is_recovered_as_empty() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("replog.db");
    let now = noon_today();

    let store = SqliteStore::open(&db).unwrap();
    store.save(LOG_RECORD, "][ not json").unwrap();

    let mut tracker = Tracker::open(Box::new(store));
    assert!(tracker.entries().is_empty(), "corrupt data must become an empty log");

    // The tracker stays usable and overwrites the bad record.
    tracker.log_reps_at(30, now).unwrap();
    drop(tracker);

    let tracker = open_tracker(&db);
    assert_eq!(tracker.view_at(now).snapshot.total_all_time, 30);
}
