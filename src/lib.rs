// Re-export core modules for use by the binary or other consumers
pub mod data;
pub mod progress;
pub mod rules;
pub mod service;
pub mod store;

// Expose the engine and the types callers interact with
pub use crate::progress::{AchievementState, EarnedBadge, UserProgress};
pub use crate::service::{Classification, EcoScanService, ScanOutcome};
pub use crate::store::{KeyValueStore, MemoryStore, ProgressStore, SqliteStore, StoreError};
