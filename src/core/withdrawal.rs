//! Trashbag withdrawal workflow - the approval state machine for redeeming
//! earned rewards.
//!
//! A request starts `pending` and is moved exactly once by an admin to
//! `approved` or `rejected`. The availability gate runs only at submission;
//! the transition path intentionally performs no re-check, matching the
//! reference behavior (sequential approvals can overdraw the derived
//! balance). Approval has no direct ledger side effect: availability is
//! always recomputed from history at read time.

use crate::{
    entities::{TrashbagWithdrawal, trashbag_withdrawal},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use std::fmt;

/// Lifecycle states of a withdrawal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalStatus {
    /// Awaiting admin review (initial state)
    Pending,
    /// Granted by an admin (terminal)
    Approved,
    /// Declined by an admin (terminal)
    Rejected,
}

impl WithdrawalStatus {
    /// The storage representation of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a stored status string.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Whether this status ends the request lifecycle.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl fmt::Display for WithdrawalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides whether a status change may proceed.
///
/// Returns `Ok(true)` when the update should be applied, `Ok(false)` when the
/// request is already in the target state (idempotent no-op), and an error
/// for a transition back to `pending` or between the two different terminal
/// states.
pub(crate) fn check_transition(
    current: WithdrawalStatus,
    target: WithdrawalStatus,
) -> Result<bool> {
    if current == target {
        return Ok(false);
    }
    if target == WithdrawalStatus::Pending || current.is_terminal() {
        return Err(Error::InvalidTransition {
            from: current.to_string(),
            to: target.to_string(),
        });
    }
    Ok(true)
}

/// Submits a new trashbag withdrawal request for a student.
///
/// Preconditions, checked in order: the amount is a positive integer, the
/// amount does not exceed the trashbags available at submission time, and the
/// description is non-empty after trimming. Any violation aborts with a
/// specific validation error and writes nothing. On success the request is
/// inserted in `pending` state with no effect on the ledger.
pub async fn submit_withdrawal(
    db: &DatabaseConnection,
    student_id: i64,
    amount: i64,
    description: String,
) -> Result<trashbag_withdrawal::Model> {
    if amount < 1 {
        return Err(Error::InvalidWithdrawalAmount { amount });
    }

    let available = crate::core::ledger::available_trashbags(db, student_id).await?;
    if amount > available {
        return Err(Error::InsufficientTrashbags {
            available,
            requested: amount,
        });
    }

    let description = description.trim().to_string();
    if description.is_empty() {
        return Err(Error::EmptyDescription);
    }

    let request = trashbag_withdrawal::ActiveModel {
        student_id: Set(student_id),
        amount: Set(amount),
        description: Set(description),
        status: Set(WithdrawalStatus::Pending.as_str().to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = request.insert(db).await?;
    Ok(result)
}

/// Admin transition of a request to `approved` or `rejected`.
///
/// The amount is not re-validated against current availability. Setting the
/// status a request already has returns the row unchanged.
pub async fn set_withdrawal_status(
    db: &DatabaseConnection,
    withdrawal_id: i64,
    new_status: WithdrawalStatus,
) -> Result<trashbag_withdrawal::Model> {
    let request = TrashbagWithdrawal::find_by_id(withdrawal_id)
        .one(db)
        .await?
        .ok_or(Error::WithdrawalNotFound { id: withdrawal_id })?;

    let current =
        WithdrawalStatus::parse(&request.status).ok_or_else(|| Error::InvalidTransition {
            from: request.status.clone(),
            to: new_status.to_string(),
        })?;

    if !check_transition(current, new_status)? {
        return Ok(request);
    }

    let mut active: trashbag_withdrawal::ActiveModel = request.into();
    active.status = Set(new_status.as_str().to_string());
    active.update(db).await.map_err(Into::into)
}

/// Admin correction of a request's amount and description, permitted in any
/// status. Enforces the data invariants (positive amount, non-empty
/// description) but never re-runs the submission-time availability gate.
pub async fn edit_withdrawal(
    db: &DatabaseConnection,
    withdrawal_id: i64,
    amount: i64,
    description: String,
) -> Result<trashbag_withdrawal::Model> {
    if amount < 1 {
        return Err(Error::InvalidWithdrawalAmount { amount });
    }
    let description = description.trim().to_string();
    if description.is_empty() {
        return Err(Error::EmptyDescription);
    }

    let request = TrashbagWithdrawal::find_by_id(withdrawal_id)
        .one(db)
        .await?
        .ok_or(Error::WithdrawalNotFound { id: withdrawal_id })?;

    let mut active: trashbag_withdrawal::ActiveModel = request.into();
    active.amount = Set(amount);
    active.description = Set(description);
    active.update(db).await.map_err(Into::into)
}

/// Admin removal of a request, permitted in any status.
pub async fn delete_withdrawal(db: &DatabaseConnection, withdrawal_id: i64) -> Result<()> {
    let request = TrashbagWithdrawal::find_by_id(withdrawal_id)
        .one(db)
        .await?
        .ok_or(Error::WithdrawalNotFound { id: withdrawal_id })?;

    request.delete(db).await?;
    Ok(())
}

/// All of a student's requests, newest first.
pub async fn get_withdrawals_for_student(
    db: &DatabaseConnection,
    student_id: i64,
) -> Result<Vec<trashbag_withdrawal::Model>> {
    TrashbagWithdrawal::find()
        .filter(trashbag_withdrawal::Column::StudentId.eq(student_id))
        .order_by_desc(trashbag_withdrawal::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Every request in the system, newest first (admin review listing).
pub async fn get_all_withdrawals(
    db: &DatabaseConnection,
) -> Result<Vec<trashbag_withdrawal::Model>> {
    TrashbagWithdrawal::find()
        .order_by_desc(trashbag_withdrawal::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}
