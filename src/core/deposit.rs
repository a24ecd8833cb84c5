//! Deposit recording - the write path of the deposit log.
//!
//! Bottle deposits compute their trashbag reward at write time and store it
//! on the row; that stored value is a frozen ledger entry that later rate
//! edits never touch. Legacy weight deposits value the waste at the type's
//! Rupiah price and credit the student's savings balance in the same
//! database transaction.

use crate::{
    entities::{Deposit, Student, WasteType, deposit},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Records a bottle deposit for a student.
///
/// The waste type must exist at write time (the admin picks it from the live
/// catalog); only read-time aggregation tolerates dangling references. The
/// reward `floor(bottle_count / trashbags_per_bottle)` is computed here and
/// frozen on the row.
pub async fn create_deposit(
    db: &DatabaseConnection,
    student_id: i64,
    waste_type_id: i64,
    bottle_count: i64,
) -> Result<deposit::Model> {
    if bottle_count < 1 {
        return Err(Error::InvalidBottleCount {
            count: bottle_count,
        });
    }

    Student::find_by_id(student_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::StudentNotFound {
            id: student_id.to_string(),
        })?;

    let waste_type = WasteType::find_by_id(waste_type_id)
        .one(db)
        .await?
        .ok_or(Error::WasteTypeNotFound { id: waste_type_id })?;

    let reward =
        crate::core::ledger::derive_trashbags(bottle_count, waste_type.trashbags_per_bottle);

    let row = deposit::ActiveModel {
        student_id: Set(student_id),
        waste_type_id: Set(waste_type_id),
        bottle_count: Set(Some(bottle_count)),
        trashbag_reward: Set(Some(reward)),
        weight: Set(None),
        total_value: Set(None),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = row.insert(db).await?;
    Ok(result)
}

/// Records a legacy weight deposit and credits the student's Rupiah savings.
///
/// The deposit row and the savings credit are committed atomically: a failed
/// insert leaves the balance untouched.
pub async fn create_legacy_deposit(
    db: &DatabaseConnection,
    student_id: i64,
    waste_type_id: i64,
    weight: f64,
) -> Result<deposit::Model> {
    if weight <= 0.0 || !weight.is_finite() {
        return Err(Error::InvalidAmount { amount: weight });
    }

    let txn = db.begin().await?;

    Student::find_by_id(student_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::StudentNotFound {
            id: student_id.to_string(),
        })?;

    let waste_type = WasteType::find_by_id(waste_type_id)
        .one(&txn)
        .await?
        .ok_or(Error::WasteTypeNotFound { id: waste_type_id })?;

    let price = waste_type.price_per_kg.ok_or_else(|| Error::MissingPrice {
        waste_type: waste_type.name.clone(),
    })?;
    let total_value = weight * price;

    let row = deposit::ActiveModel {
        student_id: Set(student_id),
        waste_type_id: Set(waste_type_id),
        bottle_count: Set(None),
        trashbag_reward: Set(None),
        weight: Set(Some(weight)),
        total_value: Set(Some(total_value)),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = row.insert(&txn).await?;

    crate::core::savings::credit_savings(&txn, student_id, total_value).await?;

    txn.commit().await?;
    Ok(result)
}

/// All deposits of one student, newest first.
pub async fn get_deposits_for_student(
    db: &DatabaseConnection,
    student_id: i64,
) -> Result<Vec<deposit::Model>> {
    Deposit::find()
        .filter(deposit::Column::StudentId.eq(student_id))
        .order_by_desc(deposit::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Every deposit in the system, newest first (admin listing).
pub async fn get_all_deposits(db: &DatabaseConnection) -> Result<Vec<deposit::Model>> {
    Deposit::find()
        .order_by_desc(deposit::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}
