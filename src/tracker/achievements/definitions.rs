//! Achievement definitions and metadata
//!
//! The catalog is fixed at compile time; only the evaluated unlock state
//! changes as the log grows. Unlock checks are independent pure predicates
//! over the current aggregates.

use crate::tracker::models::{AggregateSnapshot, StreakRecord};

/// What an achievement requires. Streak thresholds compare against the
/// best streak, so an achievement never re-locks when a streak breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// All-time rep total reaches the threshold.
    LifetimeReps(u64),
    /// A single entry reaches the threshold.
    SingleSession(u32),
    /// Best daily streak reaches the threshold, in days.
    BestStreak(u32),
    /// Cumulative weekend reps reach the threshold.
    WeekendReps(u64),
    /// Total number of logged sessions reaches the threshold.
    Sessions(usize),
}

impl Requirement {
    pub fn met(&self, snapshot: &AggregateSnapshot, streak: &StreakRecord) -> bool {
        match self {
            Self::LifetimeReps(n) => snapshot.total_all_time >= *n,
            Self::SingleSession(n) => snapshot.max_single_session >= *n,
            Self::BestStreak(n) => streak.best >= *n,
            Self::WeekendReps(n) => snapshot.total_weekend >= *n,
            Self::Sessions(n) => snapshot.session_count >= *n,
        }
    }
}

/// Achievement definition with all metadata
#[derive(Debug)]
pub struct AchievementDef {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub requirement: Requirement,
}

impl AchievementDef {
    /// Whether this achievement is unlocked for the given aggregates.
    pub fn unlocked(&self, snapshot: &AggregateSnapshot, streak: &StreakRecord) -> bool {
        self.requirement.met(snapshot, streak)
    }

    /// Look up a definition by id.
    pub fn get(id: u32) -> Option<&'static AchievementDef> {
        ACHIEVEMENTS.iter().find(|a| a.id == id)
    }

    /// Get total number of achievements
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }
}

/// All achievement definitions, in presentation order.
pub static ACHIEVEMENTS: &[AchievementDef] = &[
    // === STARTER ===
    AchievementDef {
        id: 1,
        name: "First Steps",
        description: "Log your first set",
        icon: "🎯",
        requirement: Requirement::LifetimeReps(1),
    },
    AchievementDef {
        id: 2,
        name: "50 Club",
        description: "50 reps in one session",
        icon: "⭐",
        requirement: Requirement::SingleSession(50),
    },
    AchievementDef {
        id: 3,
        name: "Century Breaker",
        description: "100 reps in one go",
        icon: "💯",
        requirement: Requirement::SingleSession(100),
    },
    AchievementDef {
        id: 4,
        name: "200 Club",
        description: "200 reps in one session",
        icon: "🔥",
        requirement: Requirement::SingleSession(200),
    },
    // === STREAK ===
    AchievementDef {
        id: 5,
        name: "Dedicated",
        description: "3 day streak",
        icon: "🔥",
        requirement: Requirement::BestStreak(3),
    },
    AchievementDef {
        id: 6,
        name: "Week Warrior",
        description: "7 day streak",
        icon: "⚡",
        requirement: Requirement::BestStreak(7),
    },
    AchievementDef {
        id: 7,
        name: "Hot Streak",
        description: "30-day streak",
        icon: "🔥",
        requirement: Requirement::BestStreak(30),
    },
    AchievementDef {
        id: 8,
        name: "Inferno",
        description: "100-day streak",
        icon: "🌋",
        requirement: Requirement::BestStreak(100),
    },
    AchievementDef {
        id: 9,
        name: "Unbreakable",
        description: "365-day streak (full year!)",
        icon: "💎",
        requirement: Requirement::BestStreak(365),
    },
    AchievementDef {
        id: 10,
        name: "Every Day Counts",
        description: "30 days in a row",
        icon: "💪",
        requirement: Requirement::BestStreak(30),
    },
    AchievementDef {
        id: 11,
        name: "Streak Master",
        description: "Achieve any 14-day streak",
        icon: "🏅",
        requirement: Requirement::BestStreak(14),
    },
    // === LIFETIME VOLUME ===
    AchievementDef {
        id: 12,
        name: "Century Club",
        description: "100 total reps",
        icon: "🎖️",
        requirement: Requirement::LifetimeReps(100),
    },
    AchievementDef {
        id: 13,
        name: "Beast Mode",
        description: "500 total reps",
        icon: "🦁",
        requirement: Requirement::LifetimeReps(500),
    },
    AchievementDef {
        id: 14,
        name: "Thousand Rep Titan",
        description: "1,000 lifetime reps",
        icon: "👑",
        requirement: Requirement::LifetimeReps(1000),
    },
    AchievementDef {
        id: 15,
        name: "2.5K Crusher",
        description: "2,500 lifetime reps",
        icon: "💥",
        requirement: Requirement::LifetimeReps(2500),
    },
    AchievementDef {
        id: 16,
        name: "5K Warrior",
        description: "5,000 lifetime reps",
        icon: "⚔️",
        requirement: Requirement::LifetimeReps(5000),
    },
    AchievementDef {
        id: 17,
        name: "10K Grinder",
        description: "10,000 lifetime reps",
        icon: "💪",
        requirement: Requirement::LifetimeReps(10_000),
    },
    AchievementDef {
        id: 18,
        name: "20K Legend",
        description: "20,000 lifetime reps",
        icon: "🌟",
        requirement: Requirement::LifetimeReps(20_000),
    },
    AchievementDef {
        id: 19,
        name: "Marathon Maniac",
        description: "50,000+ lifetime reps",
        icon: "🏆",
        requirement: Requirement::LifetimeReps(50_000),
    },
    AchievementDef {
        id: 20,
        name: "100K Ultimate",
        description: "100,000 lifetime reps",
        icon: "👹",
        requirement: Requirement::LifetimeReps(100_000),
    },
    // === CONSISTENCY ===
    AchievementDef {
        id: 21,
        name: "Weekend Warrior",
        description: "100 reps on weekends",
        icon: "🎮",
        requirement: Requirement::WeekendReps(100),
    },
    AchievementDef {
        id: 22,
        name: "Floor Kisser",
        description: "Log 10+ sessions",
        icon: "😤",
        requirement: Requirement::Sessions(10),
    },
    AchievementDef {
        id: 23,
        name: "Daily Dominator",
        description: "Log 50+ sessions",
        icon: "⚡",
        requirement: Requirement::Sessions(50),
    },
    AchievementDef {
        id: 24,
        name: "Gravity Hater",
        description: "500 total reps",
        icon: "🚀",
        requirement: Requirement::LifetimeReps(500),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique_and_complete() {
        let ids: HashSet<u32> = ACHIEVEMENTS.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), ACHIEVEMENTS.len());
        assert_eq!(AchievementDef::total_count(), 24);
        for def in ACHIEVEMENTS {
            assert!(AchievementDef::get(def.id).is_some());
        }
        assert!(AchievementDef::get(0).is_none());
    }

    #[test]
    fn test_session_thresholds() {
        let snapshot = AggregateSnapshot {
            total_all_time: 110,
            max_single_session: 60,
            ..Default::default()
        };
        let streak = StreakRecord::default();

        let by_name = |name: &str| {
            ACHIEVEMENTS
                .iter()
                .find(|a| a.name == name)
                .unwrap()
                .unlocked(&snapshot, &streak)
        };
        assert!(by_name("First Steps"));
        assert!(by_name("50 Club"));
        assert!(by_name("Century Club"));
        assert!(!by_name("Century Breaker"));
        assert!(!by_name("200 Club"));
    }

    #[test]
    fn test_streak_requirements_use_best_not_current() {
        let snapshot = AggregateSnapshot::default();
        let streak = StreakRecord { current: 0, best: 7 };
        let week_warrior = AchievementDef::get(6).unwrap();
        let hot_streak = AchievementDef::get(7).unwrap();
        assert!(week_warrior.unlocked(&snapshot, &streak));
        assert!(!hot_streak.unlocked(&snapshot, &streak));
    }

    #[test]
    fn test_behavioral_requirements() {
        let snapshot = AggregateSnapshot {
            total_weekend: 120,
            session_count: 10,
            ..Default::default()
        };
        let streak = StreakRecord::default();
        assert!(AchievementDef::get(21).unwrap().unlocked(&snapshot, &streak));
        assert!(AchievementDef::get(22).unwrap().unlocked(&snapshot, &streak));
        assert!(!AchievementDef::get(23).unwrap().unlocked(&snapshot, &streak));
    }
}
