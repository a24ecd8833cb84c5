//! Class roster management.

use crate::{
    entities::{Class, class},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a class with its homeroom teacher.
pub async fn create_class(
    db: &DatabaseConnection,
    name: String,
    teacher: String,
) -> Result<class::Model> {
    if name.trim().is_empty() {
        return Err(Error::EmptyField {
            field: "name".to_string(),
        });
    }
    if teacher.trim().is_empty() {
        return Err(Error::EmptyField {
            field: "teacher".to_string(),
        });
    }

    let row = class::ActiveModel {
        name: Set(name.trim().to_string()),
        teacher: Set(teacher.trim().to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = row.insert(db).await?;
    Ok(result)
}

/// All classes, ordered alphabetically by name.
pub async fn get_all_classes(db: &DatabaseConnection) -> Result<Vec<class::Model>> {
    Class::find()
        .order_by_asc(class::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes a class record.
pub async fn delete_class(db: &DatabaseConnection, class_id: i64) -> Result<()> {
    let existing = Class::find_by_id(class_id)
        .one(db)
        .await?
        .ok_or(Error::ClassNotFound { id: class_id })?;

    existing.delete(db).await?;
    Ok(())
}
