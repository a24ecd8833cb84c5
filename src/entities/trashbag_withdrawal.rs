//! Trashbag withdrawal entity - A student's request to redeem earned rewards.
//!
//! `status` is one of `"pending"`, `"approved"`, `"rejected"`; the typed
//! state machine lives in [`crate::core::withdrawal`]. Only approved rows
//! reduce a student's available trashbags.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Trashbag withdrawal database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trashbag_withdrawals")]
pub struct Model {
    /// Unique identifier for the request
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the requesting student
    pub student_id: i64,
    /// Trashbags requested, always >= 1
    pub amount: i64,
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
