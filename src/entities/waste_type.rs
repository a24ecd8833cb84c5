//! Waste type entity - Reference data for the reward conversion rates.
//!
//! `trashbags_per_bottle` is the number of bottles a student must collect to
//! earn one trashbag of this waste type. `price_per_kg` is only read by the
//! deprecated weight/Rupiah ledger and is absent on newer rows. Deposits
//! reference waste types by id without an enforced foreign key: a deleted
//! type leaves dangling references the ledger tolerates at read time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Waste type database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "waste_types")]
pub struct Model {
    /// Unique identifier for the waste type
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Plastik", "Kertas")
    pub name: String,
    /// Bottles required to earn one trashbag, always >= 1
    pub trashbags_per_bottle: i64,
    /// Legacy Rupiah rate per kilogram, None on rows created after the
    /// bottle/trashbag migration
    pub price_per_kg: Option<f64>,
    /// When the waste type was created
    pub created_at: DateTimeUtc,
}

/// Deposits reference waste types by id; no enforced relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
