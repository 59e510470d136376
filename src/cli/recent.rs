//! Recent command implementation

use anyhow::Result;
use chrono::Local;
use std::path::Path;

use super::{open_tracker, print_unlocks};

/// Show the most recent entries, newest first.
pub fn recent_command(db: Option<&Path>, limit: usize) -> Result<()> {
    let mut tracker = open_tracker(db)?;
    let pending = tracker.check_unlocks();
    print_unlocks(&pending);

    let entries = tracker.entries();
    if entries.is_empty() {
        println!("No reps logged yet. Start your journey!");
        return Ok(());
    }

    println!("Recent activity:\n");
    for entry in entries.iter().take(limit) {
        let local = entry.timestamp.with_timezone(&Local);
        println!(
            "  {:>5} reps  {}",
            entry.count,
            local.format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}
