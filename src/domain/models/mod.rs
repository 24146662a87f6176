//! Serde-backed domain models shared across the core.

use std::time::{SystemTime, UNIX_EPOCH};

pub mod assistant;
pub mod kid;
pub mod ledger;
pub mod snapshot;
pub mod task;

pub use assistant::{AssistantConfig, ReminderOffsets};
pub use kid::{AllowanceSchedule, Cadence, Kid};
pub use ledger::{EntryKind, LedgerEntry};
pub use snapshot::{Snapshot, SnapshotPatch};
pub use task::{Task, TaskDraft, TaskStatus};

/// Generate a short random hex suffix for entity IDs, so that two entities
/// created within the same millisecond still get distinct IDs.
pub(crate) fn random_suffix(len: usize) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_nanos();
    format!("{:x}", now % (16_u128.pow(len as u32)))
        .chars()
        .take(len)
        .collect()
}
