//! JSON file storage backend.

pub mod snapshot_repository;

pub use snapshot_repository::{JsonSnapshotRepository, STORAGE_FILE};
