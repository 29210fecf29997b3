use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::store::{KeyValueStore, StoreError};

const KV_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv_store (
  key TEXT PRIMARY KEY,
  value TEXT NOT NULL
);
"#;

/// Sqlite-backed key-value store, one row per key.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(KV_SCHEMA)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(KV_SCHEMA)?;
        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::UserProgress;
    use crate::store::{ProgressStore, PROGRESS_KEY};

    #[test]
    fn kv_round_trip() {
        let mut store = SqliteStore::open_in_memory().expect("open");
        assert_eq!(store.get("a").expect("get"), None);
        store.set("a", "1").expect("set");
        store.set("a", "2").expect("overwrite");
        assert_eq!(store.get("a").expect("get"), Some("2".to_string()));
        store.delete("a").expect("delete");
        assert_eq!(store.get("a").expect("get"), None);
    }

    #[test]
    fn progress_record_survives_a_sqlite_round_trip() {
        let mut store = ProgressStore::new(SqliteStore::open_in_memory().expect("open"));
        let mut progress = UserProgress::default();
        progress.eco_points = 260;
        progress.daily_streak = 4;
        store.save(&progress).expect("save");
        assert_eq!(store.load(), progress);
    }

    #[test]
    fn corrupt_sqlite_payload_falls_back_to_default() {
        let mut backend = SqliteStore::open_in_memory().expect("open");
        backend.set(PROGRESS_KEY, "\"not a record\"").expect("set");
        let store = ProgressStore::new(backend);
        assert_eq!(store.load(), UserProgress::default());
    }
}
