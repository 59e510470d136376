//! CLI command implementations

pub mod achievements;
pub mod log;
pub mod recent;
pub mod stats;

use std::path::Path;

use anyhow::Result;

use replog::store::SqliteStore;
use replog::tracker::Tracker;
use replog::tracker::achievements::AchievementDef;

/// Open the tracker over the given database path, or the default location.
pub fn open_tracker(db: Option<&Path>) -> Result<Tracker> {
    let store = match db {
        Some(path) => SqliteStore::open(path)?,
        None => SqliteStore::open_default()?,
    };
    Ok(Tracker::open(Box::new(store)))
}

/// Print one banner per newly unlocked achievement.
pub fn print_unlocks(unlocks: &[&AchievementDef]) {
    for def in unlocks {
        println!();
        println!("  {} ACHIEVEMENT UNLOCKED: {}", def.icon, def.name);
        println!("     {}", def.description);
    }
}
