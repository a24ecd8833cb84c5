//! Student entity - Represents a student account in the waste bank.
//!
//! Students log in with their `nis` (student registration number) and own
//! deposit records, trashbag withdrawal requests, and the legacy savings row.
//! Ownership is by id reference only; no database-level foreign keys are
//! declared so that dangling references degrade softly at read time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Student database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    /// Unique identifier for the student
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Student registration number, the unique login key
    #[sea_orm(unique)]
    pub nis: String,
    /// Full name of the student
    pub name: String,
    /// Class label (e.g., "7A")
    pub class: String,
    /// When the student record was created
    pub created_at: DateTimeUtc,
}

/// Rows reference students by id; no enforced relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
