#![forbid(unsafe_code)]

pub mod json_store;
pub mod repository;

pub use json_store::{JsonStatsStore, STORAGE_KEY};
pub use repository::{MemoryStatsStore, StatsRepository, StorageError};
