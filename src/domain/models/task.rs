//! Domain model for a recurring task and its checkpoint status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Checkpoint status of a task.
///
/// The persisted form uses the human-readable labels the UI shows, so the
/// variants serialize to those labels rather than Rust identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Scheduled,
    #[serde(rename = "In progress")]
    InProgress,
    #[serde(rename = "Next checkpoint")]
    NextCheckpoint,
    Done,
    #[serde(rename = "Needs follow-up")]
    NeedsFollowUp,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskStatus::Scheduled => "Scheduled",
            TaskStatus::InProgress => "In progress",
            TaskStatus::NextCheckpoint => "Next checkpoint",
            TaskStatus::Done => "Done",
            TaskStatus::NeedsFollowUp => "Needs follow-up",
        };
        write!(f, "{}", label)
    }
}

/// A recurring task with a completion checkpoint.
///
/// Status is the only field that changes after creation; tasks are never
/// deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    /// Recurrence descriptor shown to the user, e.g. "Once a day".
    pub checkpoint: String,
    /// Start time label, e.g. "7:00 AM". Display only.
    pub start: String,
    /// End time label, e.g. "8:00 AM". Display only.
    pub end: String,
    pub status: TaskStatus,
}

impl Task {
    /// Generate a unique task ID from the current timestamp.
    /// Format: `task-<epoch_millis>-<4 hex>`.
    pub fn generate_id(timestamp_ms: u64) -> String {
        format!("task-{}-{}", timestamp_ms, super::random_suffix(4))
    }
}

/// Input for creating a task. Missing fields fall back to board defaults.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub checkpoint: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl TaskDraft {
    /// Draft with just a title, all other fields defaulted.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_to_ui_labels() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::NeedsFollowUp).unwrap(),
            "\"Needs follow-up\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"In progress\""
        );
        let back: TaskStatus = serde_json::from_str("\"Next checkpoint\"").unwrap();
        assert_eq!(back, TaskStatus::NextCheckpoint);
    }

    #[test]
    fn status_rejects_free_text() {
        let result: Result<TaskStatus, _> = serde_json::from_str("\"Half done\"");
        assert!(result.is_err());
    }
}
