use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use exam_core::AggregateStats;

use crate::repository::{StatsRepository, StorageError};

/// Fixed storage key for the aggregate-stats record.
///
/// Carried over from the browser build of the app, where the same record
/// lives in local storage under this key. Changing it orphans every
/// existing profile.
pub const STORAGE_KEY: &str = "cpacc_stats_v_shadcn";

/// File-backed store: one JSON document per profile directory.
///
/// The write path is plain overwrite, last write wins, matching the
/// local-storage semantics of the original. Concurrent writers are out of
/// scope.
#[derive(Debug, Clone)]
pub struct JsonStatsStore {
    path: PathBuf,
}

impl JsonStatsStore {
    /// Store rooted at `dir`, writing `<dir>/cpacc_stats_v_shadcn.json`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(format!("{STORAGE_KEY}.json")),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsRepository for JsonStatsStore {
    fn load(&self) -> Result<Option<AggregateStats>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let stats = serde_json::from_str(&raw)?;
        Ok(Some(stats))
    }

    fn save(&self, stats: &AggregateStats) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(stats)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
