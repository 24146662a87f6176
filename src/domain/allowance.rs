//! Allowance runner: turns a kid's schedule into a ledger entry on demand.
//!
//! The schedule's `day`/`time` fields are descriptive metadata only. Nothing
//! consults them to decide when to run; running happens exactly once per
//! explicit invocation, regardless of cadence.

use anyhow::{anyhow, Result};
use chrono::Utc;
use log::info;

use crate::domain::ledger;
use crate::domain::models::{AllowanceSchedule, EntryKind, LedgerEntry, Snapshot};

/// Execute one allowance run for a kid.
///
/// Builds an `allowance` entry from the kid's current schedule and hands it
/// to the ledger store. Returns the applied entry. An unknown kid is a
/// structural failure.
pub fn run(snapshot: &mut Snapshot, kid_id: &str) -> Result<LedgerEntry> {
    let kid = snapshot
        .kid(kid_id)
        .ok_or_else(|| anyhow!("Cannot run allowance: unknown kid {}", kid_id))?;
    let schedule = kid.allowance.clone();

    let timestamp_ms = Utc::now().timestamp_millis() as u64;
    let entry = LedgerEntry {
        id: LedgerEntry::generate_id(timestamp_ms),
        kid_id: kid.id.clone(),
        label: format!("{} allowance", schedule.cadence),
        amount: schedule.amount,
        kind: EntryKind::Allowance,
        time: "Just now".to_string(),
    };

    info!(
        "Running {} allowance for kid {}: amount={:.2}",
        schedule.cadence, kid_id, schedule.amount
    );
    ledger::apply_entry(snapshot, entry.clone())?;
    Ok(entry)
}

/// Replace a kid's allowance schedule wholesale.
///
/// Never touches past ledger entries or the kid's balance.
pub fn update_schedule(
    snapshot: &mut Snapshot,
    kid_id: &str,
    schedule: AllowanceSchedule,
) -> Result<()> {
    let kid = snapshot
        .kid_mut(kid_id)
        .ok_or_else(|| anyhow!("Cannot update schedule: unknown kid {}", kid_id))?;

    info!(
        "Updating allowance schedule for kid {}: {} {:.2} on {} at {}",
        kid_id, schedule.cadence, schedule.amount, schedule.day, schedule.time
    );
    kid.allowance = schedule;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Cadence;

    #[test]
    fn run_builds_entry_from_schedule() {
        let mut snapshot = Snapshot::default();
        let before = snapshot.kid("kid-1").unwrap().balance;

        let entry = run(&mut snapshot, "kid-1").unwrap();

        assert_eq!(entry.label, "Weekly allowance");
        assert_eq!(entry.amount, 5.0);
        assert_eq!(entry.kind, EntryKind::Allowance);
        assert_eq!(entry.time, "Just now");
        assert_eq!(snapshot.kid("kid-1").unwrap().balance, before + 5.0);
        assert_eq!(snapshot.ledger[0].id, entry.id);
    }

    #[test]
    fn two_runs_produce_two_independent_entries() {
        let mut snapshot = Snapshot::default();
        let before = snapshot.kid("kid-1").unwrap().balance;

        let first = run(&mut snapshot, "kid-1").unwrap();
        let second = run(&mut snapshot, "kid-1").unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(snapshot.kid("kid-1").unwrap().balance, before + 10.0);
        assert_eq!(
            snapshot
                .ledger
                .iter()
                .filter(|e| e.kind == EntryKind::Allowance && e.time == "Just now")
                .count(),
            2
        );
    }

    #[test]
    fn run_for_unknown_kid_fails() {
        let mut snapshot = Snapshot::default();
        let before = snapshot.clone();

        assert!(run(&mut snapshot, "kid-99").is_err());
        assert_eq!(snapshot, before);
    }

    #[test]
    fn update_schedule_replaces_wholesale_without_touching_ledger() {
        let mut snapshot = Snapshot::default();
        let ledger_before = snapshot.ledger.clone();
        let balance_before = snapshot.kid("kid-1").unwrap().balance;

        let schedule = AllowanceSchedule {
            amount: 7.5,
            cadence: Cadence::Monthly,
            day: "Friday".to_string(),
            time: "6:00 PM".to_string(),
        };
        update_schedule(&mut snapshot, "kid-1", schedule.clone()).unwrap();

        assert_eq!(snapshot.kid("kid-1").unwrap().allowance, schedule);
        assert_eq!(snapshot.kid("kid-1").unwrap().balance, balance_before);
        assert_eq!(snapshot.ledger, ledger_before);
    }

    #[test]
    fn next_run_uses_updated_schedule() {
        let mut snapshot = Snapshot::default();
        let schedule = AllowanceSchedule {
            amount: 2.0,
            cadence: Cadence::BiWeekly,
            day: "Monday".to_string(),
            time: "8:00 AM".to_string(),
        };
        update_schedule(&mut snapshot, "kid-2", schedule).unwrap();

        let entry = run(&mut snapshot, "kid-2").unwrap();
        assert_eq!(entry.label, "Bi-weekly allowance");
        assert_eq!(entry.amount, 2.0);
    }

    #[test]
    fn update_schedule_for_unknown_kid_fails() {
        let mut snapshot = Snapshot::default();
        let schedule = snapshot.kid("kid-1").unwrap().allowance.clone();
        assert!(update_schedule(&mut snapshot, "kid-99", schedule).is_err());
    }
}
