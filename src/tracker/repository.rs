//! Workout log repository
//!
//! Owns the ordered entry sequence (newest first) and its JSON
//! representation. Entries are append-only: there is no edit or delete.

use chrono::{DateTime, Utc};

use super::models::WorkoutEntry;

/// Rejected append input. No state changes when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("rep count must be at least 1")]
    CountNotPositive,
}

/// In-memory entry log, newest first.
#[derive(Debug, Clone, Default)]
pub struct WorkoutLog {
    entries: Vec<WorkoutEntry>,
}

impl WorkoutLog {
    /// Parse the persisted representation (a JSON array of entries).
    /// Unreadable data is discarded and treated as an empty log.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Vec<WorkoutEntry>>(raw) {
            Ok(entries) => Self { entries },
            Err(err) => {
                tracing::warn!("discarding unreadable workout log data: {err}");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).expect("entry list serializes")
    }

    /// Validate and prepend a new entry stamped with `at`.
    pub fn append(&mut self, count: u32, at: DateTime<Utc>) -> Result<WorkoutEntry, ValidationError> {
        if count == 0 {
            return Err(ValidationError::CountNotPositive);
        }
        let entry = WorkoutEntry { count, timestamp: at };
        self.entries.insert(0, entry.clone());
        Ok(entry)
    }

    /// The full ordered sequence, newest first.
    pub fn entries(&self) -> &[WorkoutEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
