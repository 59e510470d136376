//! Achievements command implementation

use anyhow::Result;
use std::path::Path;

use super::{open_tracker, print_unlocks};

/// List the full catalog with unlock markers.
pub fn achievements_command(db: Option<&Path>) -> Result<()> {
    let mut tracker = open_tracker(db)?;
    let pending = tracker.check_unlocks();
    print_unlocks(&pending);

    let view = tracker.view();
    println!(
        "Achievements ({}/{}):\n",
        view.unlocked_count(),
        view.achievements.len()
    );

    for status in &view.achievements {
        let marker = if status.unlocked { "x" } else { " " };
        println!(
            "  [{}] {} {} - {}",
            marker, status.def.icon, status.def.name, status.def.description
        );
    }

    Ok(())
}
