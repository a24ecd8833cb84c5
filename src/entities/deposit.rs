//! Deposit entity - Append-only log of waste deposit events.
//!
//! One flat record type covers both data regimes. Current rows carry
//! `bottle_count` and a `trashbag_reward` frozen at write time; legacy rows
//! predate the bottle model and carry only `weight`/`total_value`, which feed
//! the deprecated savings ledger. The ledger reads whichever fields are
//! present and never rewrites a stored reward. Student and waste-type
//! references are plain ids so rows survive the deletion of what they point
//! at.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Deposit database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "deposits")]
pub struct Model {
    /// Unique identifier for the deposit
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the student who made the deposit
    pub student_id: i64,
    /// ID of the waste type deposited
    pub waste_type_id: i64,
    /// Bottle-equivalent units deposited; None on legacy weight-based rows
    pub bottle_count: Option<i64>,
    /// Trashbag reward earned by this deposit, computed and frozen at write
    /// time; None on rows that never had the reward persisted
    pub trashbag_reward: Option<i64>,
    /// Legacy weight in kilograms, None on bottle-based rows
    pub weight: Option<f64>,
    /// Legacy Rupiah value (weight x price_per_kg), None on bottle-based rows
    pub total_value: Option<f64>,
    /// When the deposit was recorded
    pub created_at: DateTimeUtc,
}

/// References are by id; no enforced relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
