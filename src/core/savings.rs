//! Legacy value ledger - the deprecated weight x price Rupiah savings.
//!
//! Unlike the trashbag ledger, this regime keeps a stored per-student
//! balance: legacy deposits credit it at write time and approved Rupiah
//! withdrawals debit it. Balance updates always go through a single atomic
//! `UPDATE ... SET balance = balance + ?` so concurrent credits cannot lose
//! writes. The withdrawal lifecycle reuses the same transition rules as the
//! trashbag workflow.

use crate::{
    core::withdrawal::{WithdrawalStatus, check_transition},
    entities::{Savings, Withdrawal, savings, withdrawal},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Finds a student's savings row, if any.
pub async fn get_savings<C>(db: &C, student_id: i64) -> Result<Option<savings::Model>>
where
    C: ConnectionTrait,
{
    Savings::find()
        .filter(savings::Column::StudentId.eq(student_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// A student's current Rupiah balance; zero when no savings row exists.
pub async fn get_savings_balance(db: &DatabaseConnection, student_id: i64) -> Result<f64> {
    Ok(get_savings(db, student_id).await?.map_or(0.0, |s| s.balance))
}

/// Adjusts a student's savings balance by `amount` (negative to debit).
///
/// Creates the savings row on first credit. Existing rows are updated with an
/// atomic database-level add rather than read-modify-write.
pub async fn credit_savings<C>(db: &C, student_id: i64, amount: f64) -> Result<savings::Model>
where
    C: ConnectionTrait,
{
    use sea_orm::sea_query::Expr;

    let now = chrono::Utc::now();

    let Some(existing) = get_savings(db, student_id).await? else {
        let row = savings::ActiveModel {
            student_id: Set(student_id),
            balance: Set(amount),
            updated_at: Set(now),
            ..Default::default()
        };
        return row.insert(db).await.map_err(Into::into);
    };

    Savings::update_many()
        .col_expr(
            savings::Column::Balance,
            Expr::col(savings::Column::Balance).add(amount),
        )
        .col_expr(savings::Column::UpdatedAt, Expr::value(now))
        .filter(savings::Column::Id.eq(existing.id))
        .exec(db)
        .await?;

    Savings::find_by_id(existing.id)
        .one(db)
        .await?
        .ok_or_else(|| Error::StudentNotFound {
            id: student_id.to_string(),
        })
}

/// Submits a Rupiah withdrawal request against the legacy savings balance.
///
/// Same gate shape as the trashbag workflow: positive amount, amount within
/// the balance at submission time, non-empty description. Inserts a
/// `pending` row; the balance is only debited at approval.
pub async fn submit_value_withdrawal(
    db: &DatabaseConnection,
    student_id: i64,
    amount: f64,
    description: String,
) -> Result<withdrawal::Model> {
    if amount <= 0.0 || !amount.is_finite() {
        return Err(Error::InvalidAmount { amount });
    }

    let balance = get_savings_balance(db, student_id).await?;
    if amount > balance {
        return Err(Error::InsufficientBalance {
            balance,
            requested: amount,
        });
    }

    let description = description.trim().to_string();
    if description.is_empty() {
        return Err(Error::EmptyDescription);
    }

    let request = withdrawal::ActiveModel {
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

/// Admin transition of a legacy withdrawal to `approved` or `rejected`.
///
/// Approval debits the savings balance in the same database transaction as
/// the status update; rejection leaves the balance untouched. Transition
/// rules are shared with the trashbag workflow.
pub async fn set_value_withdrawal_status(
    db: &DatabaseConnection,
    withdrawal_id: i64,
    new_status: WithdrawalStatus,
) -> Result<withdrawal::Model> {
    let request = Withdrawal::find_by_id(withdrawal_id)
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

    let txn = db.begin().await?;

    let student_id = request.student_id;
    let amount = request.amount;

    let mut active: withdrawal::ActiveModel = request.into();
    active.status = Set(new_status.as_str().to_string());
    let updated = active.update(&txn).await?;

    if new_status == WithdrawalStatus::Approved {
        credit_savings(&txn, student_id, -amount).await?;
    }

    txn.commit().await?;
    Ok(updated)
}

/// All of a student's legacy withdrawal requests, newest first.
pub async fn get_value_withdrawals_for_student(
    db: &DatabaseConnection,
    student_id: i64,
) -> Result<Vec<withdrawal::Model>> {
    Withdrawal::find()
        .filter(withdrawal::Column::StudentId.eq(student_id))
        .order_by_desc(withdrawal::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}
