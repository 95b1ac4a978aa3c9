use std::sync::{Arc, Mutex};

use exam_core::AggregateStats;
use thiserror::Error;

/// Errors surfaced by stats stores.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable home for the single aggregate-stats record.
///
/// The record is one value, not a table, and the persistence model is
/// last-write-wins with no locking, so the contract is deliberately small
/// and synchronous.
pub trait StatsRepository: Send + Sync {
    /// Read the stored record, `Ok(None)` when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record exists but cannot be read or
    /// parsed.
    fn load(&self) -> Result<Option<AggregateStats>, StorageError>;

    /// Overwrite the stored record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be written.
    fn save(&self, stats: &AggregateStats) -> Result<(), StorageError>;

    /// Remove the stored record entirely. Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on failures other than the record missing.
    fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory store for tests and for wiring the app without a disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStatsStore {
    record: Arc<Mutex<Option<AggregateStats>>>,
}

impl MemoryStatsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsRepository for MemoryStatsStore {
    fn load(&self) -> Result<Option<AggregateStats>, StorageError> {
        let guard = self.record.lock().expect("stats store lock poisoned");
        Ok(guard.clone())
    }

    fn save(&self, stats: &AggregateStats) -> Result<(), StorageError> {
        let mut guard = self.record.lock().expect("stats store lock poisoned");
        *guard = Some(stats.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self.record.lock().expect("stats store lock poisoned");
        *guard = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_the_record() {
        let store = MemoryStatsStore::new();
        assert!(store.load().unwrap().is_none());

        let mut stats = AggregateStats::new();
        stats.xp = 60;
        store.save(&stats).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, stats);

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn clones_share_the_same_record() {
        let store = MemoryStatsStore::new();
        let other = store.clone();

        store.save(&AggregateStats::new()).unwrap();
        assert!(other.load().unwrap().is_some());
    }
}
