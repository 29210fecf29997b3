pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use thiserror::Error;
use tracing::warn;

use crate::progress::UserProgress;

/// Fixed key under which the whole progress record is persisted.
pub const PROGRESS_KEY: &str = "ecoscan_progress";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("failed to encode progress record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The persistence boundary: a string key-value collaborator. Local sqlite
/// and the in-memory test store both implement it; a remote document store
/// would be another implementation of the same trait.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Adapter between the scoring engine and a key-value backend.
///
/// `load` never raises: absent, unreadable, or malformed payloads all yield
/// a fresh default record. Writes surface their failures so a caller never
/// silently loses a scan.
pub struct ProgressStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> ProgressStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn load(&self) -> UserProgress {
        match self.backend.get(PROGRESS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(progress) => progress,
                Err(err) => {
                    // Corrupt data is treated as no data.
                    warn!(%err, "stored progress failed to parse, starting fresh");
                    UserProgress::default()
                }
            },
            Ok(None) => UserProgress::default(),
            Err(err) => {
                warn!(%err, "progress read failed, starting fresh");
                UserProgress::default()
            }
        }
    }

    /// Serializes and overwrites the full record.
    pub fn save(&mut self, progress: &UserProgress) -> Result<(), StoreError> {
        let raw = serde_json::to_string(progress)?;
        self.backend.set(PROGRESS_KEY, &raw)
    }

    /// Removes the persisted record; the next `load` yields a fresh default.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.backend.delete(PROGRESS_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_record_loads_as_default() {
        let store = ProgressStore::new(MemoryStore::default());
        assert_eq!(store.load(), UserProgress::default());
    }

    #[test]
    fn corrupt_payload_loads_as_default() {
        let mut backend = MemoryStore::default();
        backend
            .set(PROGRESS_KEY, "{not json at all")
            .expect("memory set");
        let store = ProgressStore::new(backend);
        assert_eq!(store.load(), UserProgress::default());
    }

    #[test]
    fn save_is_visible_to_subsequent_loads() {
        let mut store = ProgressStore::new(MemoryStore::default());
        let mut progress = UserProgress::default();
        progress.eco_points = 77;
        progress.total_scans = 3;
        store.save(&progress).expect("save");
        assert_eq!(store.load(), progress);
    }

    #[test]
    fn clear_removes_the_record() {
        let mut store = ProgressStore::new(MemoryStore::default());
        let mut progress = UserProgress::default();
        progress.eco_points = 12;
        store.save(&progress).expect("save");
        store.clear().expect("clear");
        assert_eq!(store.load(), UserProgress::default());
    }
}
