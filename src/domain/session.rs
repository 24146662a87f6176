//! State session: owns the snapshot and coordinates every mutation.
//!
//! The session is the single writer. It loads once at open, merges stored
//! state onto the built-in defaults, and writes the full snapshot through to
//! storage after every mutating operation. There is no batching and no
//! debouncing; each operation runs to completion before the next begins.

use anyhow::Result;
use chrono::Utc;
use log::{debug, warn};

use crate::domain::models::{
    AllowanceSchedule, EntryKind, Kid, LedgerEntry, Snapshot, Task, TaskDraft, TaskStatus,
};
use crate::domain::{allowance, ledger, reminder, task_board};
use crate::storage::SnapshotStorage;

/// Display-oriented projection of one task for the daily check-in view.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckInItem {
    pub id: String,
    pub label: String,
    /// Combined schedule string, e.g. "Once a day · 7:00 AM - 8:00 AM".
    pub schedule: String,
    pub status: TaskStatus,
}

/// Process-local session over one snapshot and one storage backend.
pub struct Session<S: SnapshotStorage> {
    store: S,
    snapshot: Snapshot,
    /// State as it stood when the session opened; the balance audit measures
    /// drift against this.
    opening: Snapshot,
}

impl<S: SnapshotStorage> Session<S> {
    /// Open a session: load stored state, merge it onto defaults, and
    /// normalize the active kid so it always resolves.
    pub fn open(store: S) -> Result<Self> {
        let mut snapshot = match store.load()? {
            Some(patch) => patch.into_snapshot(),
            None => Snapshot::default(),
        };

        if snapshot.kid(&snapshot.active_kid).is_none() {
            if let Some(first) = snapshot.kids.first() {
                warn!(
                    "Active kid {} does not exist, falling back to {}",
                    snapshot.active_kid, first.id
                );
                snapshot.active_kid = first.id.clone();
            }
        }

        Ok(Self {
            store,
            opening: snapshot.clone(),
            snapshot,
        })
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.snapshot)
    }

    // --- mutating operations (write-through) ---

    /// Create a task from a draft. A blank title is silently rejected and
    /// nothing is persisted.
    pub fn create_task(&mut self, draft: TaskDraft) -> Result<Option<Task>> {
        let created = task_board::create_task(&mut self.snapshot, draft);
        if created.is_some() {
            self.persist()?;
        }
        Ok(created)
    }

    /// Replace a task's checkpoint status. Unknown ids are a no-op.
    pub fn set_task_status(&mut self, task_id: &str, status: TaskStatus) -> Result<Option<Task>> {
        let updated = task_board::set_status(&mut self.snapshot, task_id, status);
        if updated.is_some() {
            self.persist()?;
        }
        Ok(updated)
    }

    /// Apply a fully-formed ledger entry. Structural violations (unknown
    /// kid, duplicate id) fail hard without partial application.
    pub fn apply_entry(&mut self, entry: LedgerEntry) -> Result<()> {
        ledger::apply_entry(&mut self.snapshot, entry)?;
        self.persist()
    }

    /// Record a balance-affecting event for a kid. Spend amounts are
    /// normalized to be non-positive. A blank label or non-finite amount is
    /// silently rejected.
    pub fn record_entry(
        &mut self,
        kid_id: &str,
        label: &str,
        amount: f64,
        kind: EntryKind,
    ) -> Result<Option<LedgerEntry>> {
        let label = label.trim();
        if label.is_empty() || !amount.is_finite() {
            debug!("Ignoring ledger entry with blank label or invalid amount");
            return Ok(None);
        }

        let amount = match kind {
            EntryKind::Spend => -amount.abs(),
            _ => amount,
        };
        let entry = LedgerEntry {
            id: LedgerEntry::generate_id(Utc::now().timestamp_millis() as u64),
            kid_id: kid_id.to_string(),
            label: label.to_string(),
            amount,
            kind,
            time: "Just now".to_string(),
        };

        ledger::apply_entry(&mut self.snapshot, entry.clone())?;
        self.persist()?;
        Ok(Some(entry))
    }

    /// Convenience: record a spend for a kid.
    pub fn log_spend(
        &mut self,
        kid_id: &str,
        label: &str,
        amount: f64,
    ) -> Result<Option<LedgerEntry>> {
        self.record_entry(kid_id, label, amount, EntryKind::Spend)
    }

    /// Execute one allowance run for a kid. Manual only.
    pub fn run_allowance(&mut self, kid_id: &str) -> Result<LedgerEntry> {
        let entry = allowance::run(&mut self.snapshot, kid_id)?;
        self.persist()?;
        Ok(entry)
    }

    /// Replace a kid's allowance schedule wholesale.
    pub fn update_schedule(&mut self, kid_id: &str, schedule: AllowanceSchedule) -> Result<()> {
        allowance::update_schedule(&mut self.snapshot, kid_id, schedule)?;
        self.persist()
    }

    /// Make a kid the active one. Selecting an unknown id is a silent no-op
    /// so the active kid always resolves.
    pub fn select_kid(&mut self, kid_id: &str) -> Result<()> {
        if self.snapshot.kid(kid_id).is_none() {
            warn!("Ignoring selection of unknown kid {}", kid_id);
            return Ok(());
        }
        self.snapshot.active_kid = kid_id.to_string();
        self.persist()
    }

    /// Switch the active view label.
    pub fn switch_view(&mut self, view: &str) -> Result<()> {
        self.snapshot.active_view = view.to_string();
        self.persist()
    }

    // --- read views (recomputed lazily from the current snapshot) ---

    /// The currently selected kid. Resolves whenever any kids exist.
    pub fn selected_kid(&self) -> Option<&Kid> {
        self.snapshot.kid(&self.snapshot.active_kid)
    }

    /// Ledger entries for the active kid, newest-first.
    pub fn kid_ledger(&self) -> Vec<&LedgerEntry> {
        ledger::entries_for(&self.snapshot, &self.snapshot.active_kid)
    }

    /// Flattened reminder strings over all tasks.
    pub fn reminders(&self) -> Vec<String> {
        reminder::reminders(&self.snapshot.tasks, &self.snapshot.assistant)
    }

    /// Check-in summaries for every task.
    pub fn check_in_items(&self) -> Vec<CheckInItem> {
        self.snapshot
            .tasks
            .iter()
            .map(|task| CheckInItem {
                id: task.id.clone(),
                label: task.title.clone(),
                schedule: format!("{} · {} - {}", task.checkpoint, task.start, task.end),
                status: task.status,
            })
            .collect()
    }

    /// Recompute balances from the log and compare against the cached
    /// values. Empty result means the balance invariant holds.
    pub fn audit_balances(&self) -> Vec<String> {
        ledger::audit_balances(&self.opening, &self.snapshot)
    }
}
