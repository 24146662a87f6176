//! Domain model for a ledger entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of balance-affecting event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money spent (amount is non-positive).
    Spend,
    /// One-off reward credited by a parent.
    Reward,
    /// Scheduled allowance credited by an explicit run.
    Allowance,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Spend => "spend",
            EntryKind::Reward => "reward",
            EntryKind::Allowance => "allowance",
        };
        write!(f, "{}", label)
    }
}

/// One immutable, signed, balance-affecting event.
///
/// The ledger is append-only: once applied, an entry is never edited or
/// removed. Entries are kept newest-first; that ordering is presentational
/// and carries no semantic weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: String,
    /// ID of the kid this entry belongs to.
    #[serde(rename = "kidId")]
    pub kid_id: String,
    /// Short human description, e.g. "Snack spending".
    pub label: String,
    /// Signed amount. `spend` entries carry a non-positive amount; credits
    /// are conventionally positive.
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Display label such as "Just now" or "Fri, 4:30 PM". Never parsed.
    pub time: String,
}

impl LedgerEntry {
    /// Generate a unique entry ID from the current timestamp.
    /// Format: `entry-<epoch_millis>-<4 hex>`.
    pub fn generate_id(timestamp_ms: u64) -> String {
        format!("entry-{}-{}", timestamp_ms, super::random_suffix(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_uses_wire_field_names() {
        let entry = LedgerEntry {
            id: "entry-1".to_string(),
            kid_id: "kid-1".to_string(),
            label: "Snack spending".to_string(),
            amount: -2.5,
            kind: EntryKind::Spend,
            time: "Fri, 4:30 PM".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kidId"], "kid-1");
        assert_eq!(json["type"], "spend");
        assert_eq!(json["amount"], -2.5);
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = LedgerEntry::generate_id(1_700_000_000_000);
        std::thread::sleep(std::time::Duration::from_millis(1));
        let b = LedgerEntry::generate_id(1_700_000_000_001);
        assert!(a.starts_with("entry-"));
        assert_ne!(a, b);
    }
}
