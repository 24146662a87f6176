//! Storage abstraction for the snapshot codec.
//!
//! The domain layer only ever sees this trait, so alternative backends can
//! be swapped in without touching session or service code.

use anyhow::Result;

use crate::domain::models::{Snapshot, SnapshotPatch};

/// Durable round-trip for the full state graph.
pub trait SnapshotStorage: Send + Sync {
    /// Read the stored blob, if any.
    ///
    /// A missing blob and an unparseable blob are treated identically: both
    /// yield `Ok(None)` and the caller falls back to built-in defaults. A
    /// parseable blob comes back as a [`SnapshotPatch`] so that each present
    /// top-level field overrides the corresponding default independently.
    fn load(&self) -> Result<Option<SnapshotPatch>>;

    /// Durably record the complete current snapshot. Idempotent.
    fn save(&self, snapshot: &Snapshot) -> Result<()>;
}
