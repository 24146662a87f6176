//! Ledger store: the append-only event log and the only writer of balances.
//!
//! Applying an entry prepends it to the log and moves the referenced kid's
//! balance in one step, so the cached balance and the log can never disagree
//! between operations. Entries are never rejected for business reasons
//! (overdraft is allowed); only structural preconditions are enforced.

use log::{info, warn};
use thiserror::Error;

use crate::domain::models::{LedgerEntry, Snapshot};

/// Structural precondition failures when applying a ledger entry.
///
/// These signal a programming or data error in the caller, not a user
/// mistake, so they surface as hard failures instead of being swallowed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("ledger entry references unknown kid: {0}")]
    UnknownKid(String),
    #[error("duplicate ledger entry id: {0}")]
    DuplicateEntry(String),
}

/// Apply a ledger entry: prepend it to the log and credit the referenced
/// kid's balance as a single atomic step.
///
/// Preconditions: `entry.kid_id` must resolve to an existing kid and
/// `entry.id` must be unused. Both are checked before anything mutates.
pub fn apply_entry(snapshot: &mut Snapshot, entry: LedgerEntry) -> Result<(), LedgerError> {
    if snapshot.ledger.iter().any(|existing| existing.id == entry.id) {
        warn!("Rejecting ledger entry with duplicate id: {}", entry.id);
        return Err(LedgerError::DuplicateEntry(entry.id));
    }

    let kid = match snapshot.kid_mut(&entry.kid_id) {
        Some(kid) => kid,
        None => {
            warn!("Rejecting ledger entry for unknown kid: {}", entry.kid_id);
            return Err(LedgerError::UnknownKid(entry.kid_id));
        }
    };

    kid.balance += entry.amount;
    info!(
        "Applied {} entry {} for kid {}: amount={:.2}, new balance={:.2}",
        entry.kind, entry.id, entry.kid_id, entry.amount, kid.balance
    );
    snapshot.ledger.insert(0, entry);
    Ok(())
}

/// All entries for one kid, in storage order (newest-first).
pub fn entries_for<'a>(snapshot: &'a Snapshot, kid_id: &str) -> Vec<&'a LedgerEntry> {
    snapshot
        .ledger
        .iter()
        .filter(|entry| entry.kid_id == kid_id)
        .collect()
}

/// Consistency check: recompute each kid's balance from the entries applied
/// since `baseline` and compare against the cached balance. Also flags
/// ledger entries that reference no known kid.
///
/// Returns one message per discrepancy; an empty result means the cached
/// balances are the single source of truth they claim to be.
pub fn audit_balances(baseline: &Snapshot, current: &Snapshot) -> Vec<String> {
    let mut errors = Vec::new();

    for kid in &current.kids {
        let opening = baseline.kid(&kid.id).map(|k| k.balance).unwrap_or(0.0);
        let baseline_sum: f64 = entries_for(baseline, &kid.id)
            .iter()
            .map(|entry| entry.amount)
            .sum();
        let current_sum: f64 = entries_for(current, &kid.id)
            .iter()
            .map(|entry| entry.amount)
            .sum();
        let expected = opening + (current_sum - baseline_sum);

        // Small epsilon for float comparison
        if (kid.balance - expected).abs() > 0.001 {
            errors.push(format!(
                "Kid {} has inconsistent balance: expected {:.2}, cached {:.2}",
                kid.id, expected, kid.balance
            ));
        }
    }

    for entry in &current.ledger {
        if current.kid(&entry.kid_id).is_none() {
            errors.push(format!(
                "Ledger entry {} references unknown kid {}",
                entry.id, entry.kid_id
            ));
        }
    }

    if errors.is_empty() {
        info!("Balance audit passed for {} kids", current.kids.len());
    } else {
        warn!("Balance audit found {} discrepancies", errors.len());
    }

    errors
}
