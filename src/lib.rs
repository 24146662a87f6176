//! # Kid Rewards Core
//!
//! Domain state engine for an offline-first family chore and allowance
//! tracker: kids with cached balances, an append-only ledger of
//! balance-affecting events, recurring tasks with checkpoint statuses, and a
//! manually-triggered allowance schedule per kid.
//!
//! The [`Session`] owns the full state graph, write-throughs every mutation
//! to a [`SnapshotStorage`] backend, and exposes the read views the
//! presentation layer consumes. Nothing here is time-driven: allowance runs
//! and check-ins are explicit calls, and the schedule fields are display
//! metadata only.

pub mod domain;
pub mod storage;

pub use domain::models::{
    AllowanceSchedule, AssistantConfig, Cadence, EntryKind, Kid, LedgerEntry, ReminderOffsets,
    Snapshot, SnapshotPatch, Task, TaskDraft, TaskStatus,
};
pub use domain::{CheckInItem, LedgerError, Session};
pub use storage::{JsonSnapshotRepository, SnapshotStorage};
