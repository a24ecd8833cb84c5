//! Legacy withdrawal entity - Rupiah withdrawal requests against the
//! deprecated savings ledger. Same status lifecycle as trashbag withdrawals
//! but the amount is a currency value, and approval debits the stored
//! savings balance.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Legacy Rupiah withdrawal database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "withdrawals")]
pub struct Model {
    /// Unique identifier for the request
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the requesting student
    pub student_id: i64,
    /// Rupiah amount requested, always positive
    pub amount: f64,
    /// Purpose of the withdrawal, required non-empty
    pub description: String,
    /// Request status: `"pending"`, `"approved"`, or `"rejected"`
    pub status: String,
    /// When the request was submitted
    pub created_at: DateTimeUtc,
}

/// References are by id; no enforced relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
