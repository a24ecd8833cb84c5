//! Class entity - A school class with its homeroom teacher.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Class database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    /// Unique identifier for the class
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Class name (e.g., "7A")
    pub name: String,
    /// Homeroom teacher's name
    pub teacher: String,
    /// When the class record was created
    pub created_at: DateTimeUtc,
}

/// Class has no owning relationships; students carry the class label as text
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
