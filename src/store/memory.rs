//! In-memory entry store for tests and ephemeral sessions

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;

use super::EntryStore;

/// Volatile store backed by a map. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.lock().expect("lock").get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.records
            .lock()
            .expect("lock")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
