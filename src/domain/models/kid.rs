//! Domain model for a kid and their allowance schedule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How often an allowance is meant to recur.
///
/// The cadence (together with [`AllowanceSchedule::day`] and
/// [`AllowanceSchedule::time`]) is descriptive metadata shown to the user.
/// Nothing in the core consults it to decide *when* an allowance runs;
/// allowance runs are explicit, manual actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cadence {
    Weekly,
    #[serde(rename = "Bi-weekly")]
    BiWeekly,
    Monthly,
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Cadence::Weekly => "Weekly",
            Cadence::BiWeekly => "Bi-weekly",
            Cadence::Monthly => "Monthly",
        };
        write!(f, "{}", label)
    }
}

/// Recurring allowance settings for a single kid.
///
/// Owned by exactly one [`Kid`] and replaced wholesale on edit. Editing a
/// schedule never touches past ledger entries or the kid's balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowanceSchedule {
    /// Amount credited per run (conventionally positive, not enforced).
    pub amount: f64,
    pub cadence: Cadence,
    /// Weekday label, e.g. "Saturday". Display only, never parsed.
    pub day: String,
    /// Time label, e.g. "9:00 AM". Display only, never parsed.
    pub time: String,
}

/// A tracked child with a cached balance and an allowance schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kid {
    pub id: String,
    pub name: String,
    /// Cached running balance. Always equals the sum of this kid's ledger
    /// entry amounts from the point the kid was created; the ledger store is
    /// the only writer.
    pub balance: f64,
    pub allowance: AllowanceSchedule,
}
