//! Level system
//!
//! Maps the all-time rep total onto a level and progress toward the next
//! 100-rep milestone.

use super::models::LevelInfo;

/// Reps per level.
const LEVEL_SIZE: u64 = 100;

/// Calculate level, in-level progress and the next milestone for a total.
///
/// At an exact multiple of 100 the total counts toward the tier just
/// entered: progress resets to 0 and the milestone moves 100 reps out.
pub fn level_for_total(total: u64) -> LevelInfo {
    let level = (total / LEVEL_SIZE + 1) as u32;
    LevelInfo {
        level,
        progress: (total % LEVEL_SIZE) as u32,
        next_milestone: u64::from(level) * LEVEL_SIZE,
    }
}
