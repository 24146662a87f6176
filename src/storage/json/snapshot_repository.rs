//! # JSON Snapshot Repository
//!
//! File-based snapshot storage: the full state graph lives in a single JSON
//! document under a fixed file name in the data directory.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! └── kid_rewards.json    ← This module manages this file
//! ```
//!
//! ## Features
//!
//! - One document holding `kids`, `tasks`, `ledger`, `assistant`,
//!   `activeKid`, `activeTab`
//! - Missing or corrupt blobs fall back to defaults instead of failing
//! - Atomic file writes with temp files

use anyhow::Result;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::models::{Snapshot, SnapshotPatch};
use crate::storage::traits::SnapshotStorage;

/// Fixed storage key: the file name of the persisted blob.
pub const STORAGE_FILE: &str = "kid_rewards.json";

/// JSON-file-backed implementation of [`SnapshotStorage`].
#[derive(Debug, Clone)]
pub struct JsonSnapshotRepository {
    base_directory: PathBuf,
}

impl JsonSnapshotRepository {
    /// Create a repository rooted at `base_directory`, creating the
    /// directory if needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        if !base_directory.exists() {
            fs::create_dir_all(&base_directory)?;
            info!("Created data directory: {:?}", base_directory);
        }
        Ok(Self { base_directory })
    }

    /// Full path of the persisted blob.
    pub fn snapshot_path(&self) -> PathBuf {
        self.base_directory.join(STORAGE_FILE)
    }
}

impl SnapshotStorage for JsonSnapshotRepository {
    fn load(&self) -> Result<Option<SnapshotPatch>> {
        let path = self.snapshot_path();
        if !path.exists() {
            debug!("No stored snapshot at {:?}", path);
            return Ok(None);
        }

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Failed to read stored snapshot, using defaults: {}", err);
                return Ok(None);
            }
        };

        match serde_json::from_str::<SnapshotPatch>(&raw) {
            Ok(patch) => {
                debug!("Loaded stored snapshot from {:?}", path);
                Ok(Some(patch))
            }
            Err(err) => {
                warn!("Stored snapshot failed to parse, using defaults: {}", err);
                Ok(None)
            }
        }
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let path = self.snapshot_path();
        let json = serde_json::to_string_pretty(snapshot)?;

        // Atomic write pattern: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &path)?;

        debug!("Saved snapshot to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_repo() -> (JsonSnapshotRepository, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = JsonSnapshotRepository::new(temp_dir.path()).expect("Failed to create repo");
        (repo, temp_dir)
    }

    #[test]
    fn load_returns_none_when_nothing_stored() {
        let (repo, _temp_dir) = setup_test_repo();
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (repo, _temp_dir) = setup_test_repo();

        let mut snapshot = Snapshot::default();
        snapshot.active_view = "ledger".to_string();
        snapshot.kids[0].balance = 42.25;
        repo.save(&snapshot).unwrap();

        let loaded = repo.load().unwrap().unwrap().into_snapshot();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn save_is_idempotent() {
        let (repo, _temp_dir) = setup_test_repo();

        let snapshot = Snapshot::default();
        repo.save(&snapshot).unwrap();
        repo.save(&snapshot).unwrap();

        let loaded = repo.load().unwrap().unwrap().into_snapshot();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn corrupt_blob_falls_back_to_none() {
        let (repo, _temp_dir) = setup_test_repo();

        fs::write(repo.snapshot_path(), "{ not json").unwrap();
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn partial_blob_merges_onto_defaults() {
        let (repo, _temp_dir) = setup_test_repo();

        fs::write(
            repo.snapshot_path(),
            r#"{"kids": [{"id": "kid-9", "name": "Sam", "balance": 1.0,
                "allowance": {"amount": 2.0, "cadence": "Monthly",
                              "day": "Friday", "time": "5:00 PM"}}]}"#,
        )
        .unwrap();

        let snapshot = repo.load().unwrap().unwrap().into_snapshot();
        assert_eq!(snapshot.kids.len(), 1);
        assert_eq!(snapshot.kids[0].name, "Sam");
        assert_eq!(snapshot.tasks, Snapshot::default().tasks);
        assert_eq!(snapshot.assistant, Snapshot::default().assistant);
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.save(&Snapshot::default()).unwrap();
        assert!(!repo.snapshot_path().with_extension("tmp").exists());
        assert!(repo.snapshot_path().exists());
    }
}
