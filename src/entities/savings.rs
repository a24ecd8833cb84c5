//! Savings entity - The deprecated per-student Rupiah balance.
//!
//! This is the one stored (non-derived) balance in the system: legacy weight
//! deposits credit it at write time and approved Rupiah withdrawals debit it.
//! The bottle/trashbag ledger deliberately has no such counter.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Savings database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "savings")]
pub struct Model {
    /// Unique identifier for the savings row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the owning student, one row per student
    #[sea_orm(unique)]
    pub student_id: i64,
    /// Current Rupiah balance
    pub balance: f64,
    /// When the balance was last changed
    pub updated_at: DateTimeUtc,
}

/// References are by id; no enforced relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
