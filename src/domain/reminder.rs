//! Reminder builder: derives reminder strings from tasks and the assistant
//! configuration. Pure and stateless.

use crate::domain::models::{AssistantConfig, Task};

/// Build the reminder pair for one task.
pub fn build(task: &Task, assistant: &AssistantConfig) -> (String, String) {
    (
        format!(
            "Reminder: {} before {}",
            assistant.reminder_offsets.before_start, task.start
        ),
        format!(
            "Follow-up: {} after {}",
            assistant.reminder_offsets.after_end, task.end
        ),
    )
}

/// Flattened reminder sequence over all tasks, in task order.
///
/// Consumers may truncate; the reference display shows at most the first
/// four.
pub fn reminders(tasks: &[Task], assistant: &AssistantConfig) -> Vec<String> {
    tasks
        .iter()
        .flat_map(|task| {
            let (reminder, follow_up) = build(task, assistant);
            [reminder, follow_up]
        })
        .collect()
}
