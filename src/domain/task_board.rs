//! Task board: task definitions and their checkpoint status.

use chrono::Utc;
use log::{debug, info};

use crate::domain::models::{Snapshot, Task, TaskDraft, TaskStatus};

/// Default recurrence descriptor for a new task.
pub const DEFAULT_CHECKPOINT: &str = "Once a day";
/// Default start time label for a new task.
pub const DEFAULT_START: &str = "8:00 AM";
/// Default end time label for a new task.
pub const DEFAULT_END: &str = "9:00 AM";

/// Create a task from a draft and prepend it to the task sequence.
///
/// The title is whitespace-trimmed; a title that is empty after trimming is a
/// documented silent rejection: no task is created, nothing mutates, and no
/// error surfaces. Missing draft fields fall back to the board defaults.
pub fn create_task(snapshot: &mut Snapshot, draft: TaskDraft) -> Option<Task> {
    let title = draft.title.trim();
    if title.is_empty() {
        debug!("Ignoring task draft with blank title");
        return None;
    }

    let timestamp_ms = Utc::now().timestamp_millis() as u64;
    let task = Task {
        id: Task::generate_id(timestamp_ms),
        title: title.to_string(),
        checkpoint: draft
            .checkpoint
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CHECKPOINT.to_string()),
        start: draft
            .start
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_START.to_string()),
        end: draft
            .end
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_END.to_string()),
        status: TaskStatus::Scheduled,
    };

    info!("Created task {}: {}", task.id, task.title);
    snapshot.tasks.insert(0, task.clone());
    Some(task)
}

/// Replace the status of a task, leaving every other field untouched.
///
/// Setting the same status twice is a no-op in effect. An unknown task id
/// returns `None` without mutating anything.
pub fn set_status(snapshot: &mut Snapshot, task_id: &str, status: TaskStatus) -> Option<Task> {
    let task = snapshot.tasks.iter_mut().find(|task| task.id == task_id)?;
    if task.status != status {
        info!("Task {} status: {} -> {}", task_id, task.status, status);
        task.status = status;
    }
    Some(task.clone())
}
