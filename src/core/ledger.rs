//! Reward ledger computation - the accounting core of the waste bank.
//!
//! Every total here is a pure function of the full deposit and withdrawal
//! history, recomputed on every read. There is no stored running balance for
//! the bottle/trashbag regime, so the ledger cannot drift from the records
//! that back it.
//!
//! Per-deposit rule, in priority order:
//! 1. Effective bottles = `bottle_count` when present and positive, else 0.
//!    A legacy weight-only row contributes no bottles.
//! 2. Effective trashbags = stored `trashbag_reward` when present and
//!    positive (a frozen ledger entry, immune to later rate edits), else
//!    `floor(bottles / trashbags_per_bottle)` at the current rate. A deposit
//!    whose waste type no longer resolves derives zero trashbags, but its
//!    bottles still count.

use crate::{
    entities::{Deposit, TrashbagWithdrawal, deposit, trashbag_withdrawal, waste_type},
    errors::Result,
};
use sea_orm::{DatabaseConnection, prelude::*};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Per-waste-type subtotals within a ledger breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WasteSubtotal {
    /// Bottles collected of this waste type
    pub bottles: i64,
    /// Trashbags earned from this waste type
    pub trashbags: i64,
}

/// Aggregated deposit statistics for one student (or the whole school).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LedgerStats {
    /// Total bottle-equivalent units across all deposits
    pub total_bottles: i64,
    /// Total trashbags earned across all deposits
    pub total_trashbags: i64,
    /// Subtotals keyed by waste-type name; deposits whose waste type no
    /// longer exists cannot be named and are absent here
    pub waste_breakdown: BTreeMap<String, WasteSubtotal>,
}

/// The ledger view exposed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    /// Total bottles collected
    pub total_bottles: i64,
    /// Total trashbags earned (gross, before withdrawals)
    pub total_trashbags_earned: i64,
    /// Trashbags still available: earned minus approved withdrawals
    pub available_trashbags: i64,
    /// Per-waste-type subtotals
    pub waste_breakdown: BTreeMap<String, WasteSubtotal>,
}

/// Returns the bottle contribution of a single deposit: the recorded
/// `bottle_count` when present and positive, else zero. There is no
/// alternate derivation path; legacy weight rows yield zero.
#[must_use]
pub fn effective_bottle_count(deposit: &deposit::Model) -> i64 {
    match deposit.bottle_count {
        Some(count) if count > 0 => count,
        _ => 0,
    }
}

/// Derives trashbags from a bottle count at the given conversion rate.
/// A rate below one cannot award anything.
#[must_use]
pub fn derive_trashbags(bottles: i64, trashbags_per_bottle: i64) -> i64 {
    if trashbags_per_bottle >= 1 {
        bottles / trashbags_per_bottle
    } else {
        0
    }
}

/// Returns the trashbag contribution of a single deposit.
///
/// A stored positive `trashbag_reward` wins unconditionally: it was frozen
/// when the deposit was recorded and must not change when the waste type's
/// rate is edited later. Otherwise the reward is derived from the effective
/// bottle count at the current rate, and an unresolvable waste type derives
/// zero.
#[must_use]
pub fn effective_trashbag_count(
    deposit: &deposit::Model,
    waste_type: Option<&waste_type::Model>,
) -> i64 {
    if let Some(reward) = deposit.trashbag_reward {
        if reward > 0 {
            return reward;
        }
    }
    match waste_type {
        Some(wt) => derive_trashbags(effective_bottle_count(deposit), wt.trashbags_per_bottle),
        None => 0,
    }
}

/// Bottles still needed toward the next trashbag at the current rate.
/// Informational only; never feeds back into earned totals.
#[must_use]
pub fn bottles_toward_next_trashbag(bottle_count: i64, trashbags_per_bottle: i64) -> i64 {
    if trashbags_per_bottle >= 1 {
        bottle_count % trashbags_per_bottle
    } else {
        0
    }
}

/// Computes ledger statistics over a set of deposits against a waste-type
/// catalog. Pure function of its inputs: the same deposit set always
/// produces the same totals.
#[must_use]
pub fn compute_stats(deposits: &[deposit::Model], waste_types: &[waste_type::Model]) -> LedgerStats {
    let catalog: HashMap<i64, &waste_type::Model> =
        waste_types.iter().map(|wt| (wt.id, wt)).collect();

    let mut stats = LedgerStats::default();
    for dep in deposits {
        let waste_type = catalog.get(&dep.waste_type_id).copied();
        let bottles = effective_bottle_count(dep);
        let trashbags = effective_trashbag_count(dep, waste_type);

        stats.total_bottles += bottles;
        stats.total_trashbags += trashbags;

        if let Some(wt) = waste_type {
            let entry = stats.waste_breakdown.entry(wt.name.clone()).or_default();
            entry.bottles += bottles;
            entry.trashbags += trashbags;
        }
    }
    stats
}

/// Computes a student's ledger statistics from their full deposit history.
pub async fn get_student_ledger_stats(
    db: &DatabaseConnection,
    student_id: i64,
) -> Result<LedgerStats> {
    let deposits = Deposit::find()
        .filter(deposit::Column::StudentId.eq(student_id))
        .all(db)
        .await?;
    let waste_types = crate::entities::WasteType::find().all(db).await?;
    Ok(compute_stats(&deposits, &waste_types))
}

/// Sum of a student's approved trashbag withdrawals. Pending and rejected
/// requests never reduce availability.
pub async fn approved_withdrawal_total(db: &DatabaseConnection, student_id: i64) -> Result<i64> {
    let approved = TrashbagWithdrawal::find()
        .filter(trashbag_withdrawal::Column::StudentId.eq(student_id))
        .filter(
            trashbag_withdrawal::Column::Status
                .eq(crate::core::withdrawal::WithdrawalStatus::Approved.as_str()),
        )
        .all(db)
        .await?;
    Ok(approved.iter().map(|w| w.amount).sum())
}

/// Trashbags currently available to a student: earned minus approved
/// withdrawals, recomputed fresh from the full history on every call.
/// Can go negative when sequential approvals overdraw the ledger (the
/// approval path performs no re-check).
pub async fn available_trashbags(db: &DatabaseConnection, student_id: i64) -> Result<i64> {
    let stats = get_student_ledger_stats(db, student_id).await?;
    let withdrawn = approved_withdrawal_total(db, student_id).await?;
    Ok(stats.total_trashbags - withdrawn)
}

/// Builds the full ledger summary served to the presentation layer.
pub async fn get_student_ledger_summary(
    db: &DatabaseConnection,
    student_id: i64,
) -> Result<LedgerSummary> {
    let stats = get_student_ledger_stats(db, student_id).await?;
    let withdrawn = approved_withdrawal_total(db, student_id).await?;
    Ok(LedgerSummary {
        total_bottles: stats.total_bottles,
        total_trashbags_earned: stats.total_trashbags,
        available_trashbags: stats.total_trashbags - withdrawn,
        waste_breakdown: stats.waste_breakdown,
    })
}
