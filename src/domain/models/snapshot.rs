//! The full persisted state tuple for a session.

use serde::{Deserialize, Serialize};

use super::assistant::{AssistantConfig, ReminderOffsets};
use super::kid::{AllowanceSchedule, Cadence, Kid};
use super::ledger::{EntryKind, LedgerEntry};
use super::task::{Task, TaskStatus};

/// The complete state graph: the unit of persistence.
///
/// `active_kid` must reference an existing kid whenever the snapshot is
/// considered valid for use; the session normalizes it on load rather than
/// crashing on a dangling reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub kids: Vec<Kid>,
    pub tasks: Vec<Task>,
    /// Append-only event log, newest-first.
    pub ledger: Vec<LedgerEntry>,
    pub assistant: AssistantConfig,
    #[serde(rename = "activeKid")]
    pub active_kid: String,
    #[serde(rename = "activeTab")]
    pub active_view: String,
}

impl Default for Snapshot {
    /// The built-in starter state used when no prior state exists.
    fn default() -> Self {
        Self {
            kids: vec![
                Kid {
                    id: "kid-1".to_string(),
                    name: "Mia".to_string(),
                    balance: 18.5,
                    allowance: AllowanceSchedule {
                        amount: 5.0,
                        cadence: Cadence::Weekly,
                        day: "Saturday".to_string(),
                        time: "9:00 AM".to_string(),
                    },
                },
                Kid {
                    id: "kid-2".to_string(),
                    name: "Leo".to_string(),
                    balance: 12.0,
                    allowance: AllowanceSchedule {
                        amount: 4.0,
                        cadence: Cadence::Weekly,
                        day: "Sunday".to_string(),
                        time: "10:00 AM".to_string(),
                    },
                },
            ],
            tasks: vec![
                Task {
                    id: "task-1".to_string(),
                    title: "Morning routine".to_string(),
                    checkpoint: "Once a day".to_string(),
                    start: "7:00 AM".to_string(),
                    end: "8:00 AM".to_string(),
                    status: TaskStatus::InProgress,
                },
                Task {
                    id: "task-2".to_string(),
                    title: "Math practice".to_string(),
                    checkpoint: "Twice a week".to_string(),
                    start: "4:00 PM".to_string(),
                    end: "5:00 PM".to_string(),
                    status: TaskStatus::NextCheckpoint,
                },
            ],
            ledger: vec![
                LedgerEntry {
                    id: "entry-1".to_string(),
                    kid_id: "kid-1".to_string(),
                    label: "Weekly allowance".to_string(),
                    amount: 5.0,
                    kind: EntryKind::Allowance,
                    time: "Sat, 9:00 AM".to_string(),
                },
                LedgerEntry {
                    id: "entry-2".to_string(),
                    kid_id: "kid-1".to_string(),
                    label: "Snack spending".to_string(),
                    amount: -2.5,
                    kind: EntryKind::Spend,
                    time: "Fri, 4:30 PM".to_string(),
                },
                LedgerEntry {
                    id: "entry-3".to_string(),
                    kid_id: "kid-2".to_string(),
                    label: "Homework reward".to_string(),
                    amount: 3.0,
                    kind: EntryKind::Reward,
                    time: "Thu, 6:10 PM".to_string(),
                },
            ],
            assistant: AssistantConfig {
                check_in_time: "7:30 PM".to_string(),
                reminder_offsets: ReminderOffsets {
                    before_start: "15 min".to_string(),
                    after_end: "30 min".to_string(),
                },
            },
            active_kid: "kid-1".to_string(),
            active_view: "overview".to_string(),
        }
    }
}

impl Snapshot {
    /// Look up a kid by id.
    pub fn kid(&self, kid_id: &str) -> Option<&Kid> {
        self.kids.iter().find(|kid| kid.id == kid_id)
    }

    pub(crate) fn kid_mut(&mut self, kid_id: &str) -> Option<&mut Kid> {
        self.kids.iter_mut().find(|kid| kid.id == kid_id)
    }
}

/// Partial snapshot as read back from storage.
///
/// A stored blob may predate fields added later, so every top-level field is
/// optional and each present field overrides the corresponding default
/// independently. This is a field-wise merge, not an all-or-nothing replace.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotPatch {
    pub kids: Option<Vec<Kid>>,
    pub tasks: Option<Vec<Task>>,
    pub ledger: Option<Vec<LedgerEntry>>,
    pub assistant: Option<AssistantConfig>,
    #[serde(rename = "activeKid")]
    pub active_kid: Option<String>,
    #[serde(rename = "activeTab")]
    pub active_view: Option<String>,
}

impl SnapshotPatch {
    /// Merge the stored fields onto the built-in defaults.
    pub fn into_snapshot(self) -> Snapshot {
        let mut snapshot = Snapshot::default();
        if let Some(kids) = self.kids {
            snapshot.kids = kids;
        }
        if let Some(tasks) = self.tasks {
            snapshot.tasks = tasks;
        }
        if let Some(ledger) = self.ledger {
            snapshot.ledger = ledger;
        }
        if let Some(assistant) = self.assistant {
            snapshot.assistant = assistant;
        }
        if let Some(active_kid) = self.active_kid {
            snapshot.active_kid = active_kid;
        }
        if let Some(active_view) = self.active_view {
            snapshot.active_view = active_view;
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_internally_consistent() {
        let snapshot = Snapshot::default();
        assert_eq!(snapshot.kids.len(), 2);
        assert_eq!(snapshot.tasks.len(), 2);
        assert_eq!(snapshot.ledger.len(), 3);
        assert!(snapshot.kid(&snapshot.active_kid).is_some());
        assert_eq!(snapshot.kid("kid-1").unwrap().balance, 18.5);
    }

    #[test]
    fn patch_with_only_kids_keeps_other_defaults() {
        let patch: SnapshotPatch =
            serde_json::from_str(r#"{"kids": []}"#).unwrap();
        let snapshot = patch.into_snapshot();
        assert!(snapshot.kids.is_empty());
        assert_eq!(snapshot.tasks, Snapshot::default().tasks);
        assert_eq!(snapshot.ledger, Snapshot::default().ledger);
        assert_eq!(snapshot.active_kid, "kid-1");
        assert_eq!(snapshot.active_view, "overview");
    }

    #[test]
    fn full_blob_round_trips_through_patch() {
        let mut snapshot = Snapshot::default();
        snapshot.active_view = "ledger".to_string();
        let json = serde_json::to_string(&snapshot).unwrap();
        let patch: SnapshotPatch = serde_json::from_str(&json).unwrap();
        assert_eq!(patch.into_snapshot(), snapshot);
    }

    #[test]
    fn snapshot_uses_wire_field_names() {
        let json = serde_json::to_value(Snapshot::default()).unwrap();
        assert_eq!(json["activeKid"], "kid-1");
        assert_eq!(json["activeTab"], "overview");
        assert_eq!(json["ledger"][0]["type"], "allowance");
    }
}
