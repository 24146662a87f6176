//! Domain model for the check-in assistant configuration.

use serde::{Deserialize, Serialize};

/// Offsets applied around a task's start and end when deriving reminders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderOffsets {
    /// Lead time label before a task starts, e.g. "15 min".
    pub before_start: String,
    /// Follow-up delay label after a task ends, e.g. "30 min".
    pub after_end: String,
}

/// Singleton assistant configuration, replaceable wholesale.
///
/// `check_in_time` is shown to the user; nothing fires at that time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantConfig {
    pub check_in_time: String,
    pub reminder_offsets: ReminderOffsets,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assistant_uses_camel_case_wire_names() {
        let config = AssistantConfig {
            check_in_time: "7:30 PM".to_string(),
            reminder_offsets: ReminderOffsets {
                before_start: "15 min".to_string(),
                after_end: "30 min".to_string(),
            },
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["checkInTime"], "7:30 PM");
        assert_eq!(json["reminderOffsets"]["beforeStart"], "15 min");
        assert_eq!(json["reminderOffsets"]["afterEnd"], "30 min");
    }
}
