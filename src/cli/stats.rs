//! Stats command implementation

use anyhow::Result;
use std::path::Path;

use super::{open_tracker, print_unlocks};

/// Show totals, streaks and level progress.
pub fn stats_command(db: Option<&Path>) -> Result<()> {
    let mut tracker = open_tracker(db)?;
    let pending = tracker.check_unlocks();
    print_unlocks(&pending);

    let view = tracker.view();
    if view.snapshot.session_count == 0 {
        println!("No reps logged yet. Start your journey!");
        return Ok(());
    }

    println!("Today           {:>8}", view.snapshot.total_today);
    println!("This week       {:>8}", view.snapshot.total_this_week);
    println!("This month      {:>8} sessions", view.snapshot.sessions_this_month);
    println!("All time        {:>8}", view.snapshot.total_all_time);
    println!("Best session    {:>8}", view.snapshot.max_single_session);
    println!();
    println!(
        "Current streak  {:>8} days    Best streak {:>5} days",
        view.streak.current, view.streak.best
    );
    println!();

    let filled = (view.level.progress as usize) / 10;
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(10 - filled));
    println!(
        "Level {}  [{}] {}/100 to next level (next milestone: {} reps)",
        view.level.level, bar, view.level.progress, view.level.next_milestone
    );

    Ok(())
}
