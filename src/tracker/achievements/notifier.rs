//! Unlock notification bookkeeping
//!
//! Tracks which achievement ids have already been surfaced to the user so
//! each unlock is announced exactly once, including across restarts. The set
//! only ever grows; an id is recorded in the same pass that reports it.

use std::collections::BTreeSet;

use crate::tracker::models::{AggregateSnapshot, StreakRecord};

use super::definitions::{ACHIEVEMENTS, AchievementDef};

/// Persisted set of achievement ids already shown to the user.
#[derive(Debug, Clone, Default)]
pub struct ShownAchievements {
    ids: BTreeSet<u32>,
}

impl ShownAchievements {
    /// Parse the persisted representation (a JSON array of ids).
    /// Unreadable data is discarded and treated as empty.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Vec<u32>>(raw) {
            Ok(ids) => Self { ids: ids.into_iter().collect() },
            Err(err) => {
                tracing::warn!("discarding unreadable shown-achievement data: {err}");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        let ids: Vec<u32> = self.ids.iter().copied().collect();
        serde_json::to_string(&ids).expect("id list serializes")
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn record(&mut self, id: u32) {
        self.ids.insert(id);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Diff the currently unlocked achievements against the shown set.
///
/// Returns the newly unlocked definitions in catalog order and records each
/// of them as shown. Calling again with unchanged aggregates yields nothing.
pub fn take_new_unlocks(
    shown: &mut ShownAchievements,
    snapshot: &AggregateSnapshot,
    streak: &StreakRecord,
) -> Vec<&'static AchievementDef> {
    let mut newly = Vec::new();
    for def in ACHIEVEMENTS {
        if def.unlocked(snapshot, streak) && !shown.contains(def.id) {
            shown.record(def.id);
            newly.push(def);
        }
    }
    newly
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_total(total: u64) -> AggregateSnapshot {
        AggregateSnapshot {
            total_all_time: total,
            max_single_session: total.min(u64::from(u32::MAX)) as u32,
            session_count: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_unlocks_emitted_once_in_catalog_order() {
        let mut shown = ShownAchievements::default();
        let snapshot = snapshot_with_total(60);
        let streak = StreakRecord { current: 1, best: 1 };

        let newly = take_new_unlocks(&mut shown, &snapshot, &streak);
        let ids: Vec<u32> = newly.iter().map(|d| d.id).collect();
        // First Steps then 50 Club.
        assert_eq!(ids, vec![1, 2]);

        let again = take_new_unlocks(&mut shown, &snapshot, &streak);
        assert!(again.is_empty(), "second pass with no change must emit nothing");
    }

    #[test]
    fn test_previously_shown_ids_are_skipped() {
        let mut shown = ShownAchievements::default();
        shown.record(1);
        let newly = take_new_unlocks(
            &mut shown,
            &snapshot_with_total(10),
            &StreakRecord::default(),
        );
        assert!(newly.is_empty());
        assert_eq!(shown.len(), 1);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut shown = ShownAchievements::default();
        shown.record(12);
        shown.record(1);
        let restored = ShownAchievements::from_json(&shown.to_json());
        assert!(restored.contains(1));
        assert!(restored.contains(12));
        assert_eq!(restored.len(), 2);
    }

    #[test]
    fn test_corrupt_json_becomes_empty() {
        let shown = ShownAchievements::from_json("definitely not json");
        assert!(shown.is_empty());
    }
}
