//! Database configuration module.
//!
//! Handles `SQLite` connection and table creation using `SeaORM`. Tables are
//! generated from the entity definitions via `Schema::create_table_from_entity`,
//! so the database schema always matches the Rust struct definitions without
//! manual SQL.

use crate::entities::{
    Class, Deposit, Savings, Student, TrashbagWithdrawal, WasteType, Withdrawal,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the environment or returns the default local
/// `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/bank_sampah.sqlite".to_string())
}

/// Establishes a connection to the database using `DATABASE_URL`, falling
/// back to a local `SQLite` file.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(&get_database_url()).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let student_table = schema.create_table_from_entity(Student);
    let class_table = schema.create_table_from_entity(Class);
    let waste_type_table = schema.create_table_from_entity(WasteType);
    let deposit_table = schema.create_table_from_entity(Deposit);
    let trashbag_withdrawal_table = schema.create_table_from_entity(TrashbagWithdrawal);
    let withdrawal_table = schema.create_table_from_entity(Withdrawal);
    let savings_table = schema.create_table_from_entity(Savings);

    db.execute(builder.build(&student_table)).await?;
    db.execute(builder.build(&class_table)).await?;
    db.execute(builder.build(&waste_type_table)).await?;
    db.execute(builder.build(&deposit_table)).await?;
    db.execute(builder.build(&trashbag_withdrawal_table)).await?;
    db.execute(builder.build(&withdrawal_table)).await?;
    db.execute(builder.build(&savings_table)).await?;

    Ok(())
}
