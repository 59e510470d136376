//! Log command implementation

use anyhow::Result;
use chrono::Local;
use std::path::Path;

use super::{open_tracker, print_unlocks};

/// Append a set and report the updated totals.
pub fn log_command(db: Option<&Path>, count: u32) -> Result<()> {
    let mut tracker = open_tracker(db)?;
    let outcome = tracker.log_reps(count)?;
    let view = tracker.view();

    println!(
        "Logged {} reps at {}",
        outcome.entry.count,
        outcome.entry.timestamp.with_timezone(&Local).format("%H:%M")
    );
    println!(
        "Today: {}  |  All time: {}",
        view.snapshot.total_today, view.snapshot.total_all_time
    );

    if !outcome.persisted {
        eprintln!("Warning: could not save to disk; this entry lives only in this session.");
    }

    print_unlocks(&outcome.new_unlocks);
    Ok(())
}
