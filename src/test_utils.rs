//! Shared test utilities for `BankSampah`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{catalog, deposit, student},
    entities,
    errors::Result,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test student with sensible defaults.
///
/// # Defaults
/// * `class`: "7A"
pub async fn create_test_student(
    db: &DatabaseConnection,
    nis: &str,
    name: &str,
) -> Result<entities::student::Model> {
    student::create_student(db, nis.to_string(), name.to_string(), "7A".to_string()).await
}

/// Creates a test waste type with the given conversion rate and no legacy
/// price.
pub async fn create_test_waste_type(
    db: &DatabaseConnection,
    name: &str,
    trashbags_per_bottle: i64,
) -> Result<entities::waste_type::Model> {
    catalog::create_waste_type(db, name.to_string(), trashbags_per_bottle, None).await
}

/// Creates a test waste type carrying a legacy Rupiah price per kg.
pub async fn create_legacy_waste_type(
    db: &DatabaseConnection,
    name: &str,
    trashbags_per_bottle: i64,
    price_per_kg: f64,
) -> Result<entities::waste_type::Model> {
    catalog::create_waste_type(db, name.to_string(), trashbags_per_bottle, Some(price_per_kg)).await
}

/// Creates a bottle deposit through the production write path (reward is
/// computed and frozen at write time).
pub async fn create_test_deposit(
    db: &DatabaseConnection,
    student_id: i64,
    waste_type_id: i64,
    bottle_count: i64,
) -> Result<entities::deposit::Model> {
    deposit::create_deposit(db, student_id, waste_type_id, bottle_count).await
}

/// Inserts a deposit row directly, bypassing write-path validation and reward
/// computation. Used to reproduce legacy rows and pre-frozen rewards.
pub async fn insert_deposit_raw(
    db: &DatabaseConnection,
    student_id: i64,
    waste_type_id: i64,
    bottle_count: Option<i64>,
    trashbag_reward: Option<i64>,
) -> Result<entities::deposit::Model> {
    let row = entities::deposit::ActiveModel {
        student_id: Set(student_id),
        waste_type_id: Set(waste_type_id),
        bottle_count: Set(bottle_count),
        trashbag_reward: Set(trashbag_reward),
        weight: Set(None),
        total_value: Set(None),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    row.insert(db).await.map_err(Into::into)
}

/// Sets up a complete test environment with one student.
/// Returns (db, student) for common test scenarios.
pub async fn setup_with_student() -> Result<(DatabaseConnection, entities::student::Model)> {
    let db = setup_test_db().await?;
    let student = create_test_student(&db, "12345", "Test Student").await?;
    Ok((db, student))
}

/// Sets up a complete test environment with one student and one waste type
/// at the default conversion rate of 20 bottles per trashbag.
/// Returns (db, student, waste_type).
pub async fn setup_with_catalog() -> Result<(
    DatabaseConnection,
    entities::student::Model,
    entities::waste_type::Model,
)> {
    let db = setup_test_db().await?;
    let student = create_test_student(&db, "12345", "Test Student").await?;
    let waste_type = create_test_waste_type(&db, "Plastik", 20).await?;
    Ok((db, student, waste_type))
}
