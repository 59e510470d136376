//! Entry store abstraction
//!
//! The tracker persists exactly two named records - the workout log and the
//! shown-achievements set - as strings in a key-value store. The trait keeps
//! the core independent of the storage technology; `SqliteStore` is the
//! durable implementation and `MemoryStore` the injectable test stub.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use anyhow::Result;

/// Record key for the serialized workout log.
pub const LOG_RECORD: &str = "workout_log";
/// Record key for the serialized shown-achievements set.
pub const SHOWN_RECORD: &str = "shown_achievements";

/// Durable string-keyed record storage.
pub trait EntryStore {
    /// Read a record, `None` if it was never written.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write a record, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<()>;
}
