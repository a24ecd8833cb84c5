//! Student account management.
//!
//! Provides CRUD over student records. The `nis` (registration number) is
//! the unique human-facing key students log in with; uniqueness is checked
//! here before insert so callers get a specific error instead of a raw
//! constraint violation.

use crate::{
    entities::{Student, student},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Finds a student by their registration number.
pub async fn get_student_by_nis(
    db: &DatabaseConnection,
    nis: &str,
) -> Result<Option<student::Model>> {
    Student::find()
        .filter(student::Column::Nis.eq(nis))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a student by their unique ID.
pub async fn get_student_by_id(
    db: &DatabaseConnection,
    student_id: i64,
) -> Result<Option<student::Model>> {
    Student::find_by_id(student_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// All students, ordered alphabetically by name.
pub async fn get_all_students(db: &DatabaseConnection) -> Result<Vec<student::Model>> {
    Student::find()
        .order_by_asc(student::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new student after validating the fields and NIS uniqueness.
pub async fn create_student(
    db: &DatabaseConnection,
    nis: String,
    name: String,
    class: String,
) -> Result<student::Model> {
    let nis = nis.trim().to_string();
    if nis.is_empty() {
        return Err(Error::EmptyField {
            field: "nis".to_string(),
        });
    }
    if name.trim().is_empty() {
        return Err(Error::EmptyField {
            field: "name".to_string(),
        });
    }

    if get_student_by_nis(db, &nis).await?.is_some() {
        return Err(Error::DuplicateStudent { nis });
    }

    let row = student::ActiveModel {
        nis: Set(nis),
        name: Set(name.trim().to_string()),
        class: Set(class.trim().to_string()),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = row.insert(db).await?;
    Ok(result)
}

/// Updates a student's record; the new NIS must not collide with another
/// student's.
pub async fn update_student(
    db: &DatabaseConnection,
    student_id: i64,
    nis: String,
    name: String,
    class: String,
) -> Result<student::Model> {
    let nis = nis.trim().to_string();
    if nis.is_empty() {
        return Err(Error::EmptyField {
            field: "nis".to_string(),
        });
    }
    if name.trim().is_empty() {
        return Err(Error::EmptyField {
            field: "name".to_string(),
        });
    }

    let existing = Student::find_by_id(student_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::StudentNotFound {
            id: student_id.to_string(),
        })?;

    if let Some(other) = get_student_by_nis(db, &nis).await? {
        if other.id != student_id {
            return Err(Error::DuplicateStudent { nis });
        }
    }

    let mut active: student::ActiveModel = existing.into();
    active.nis = Set(nis);
    active.name = Set(name.trim().to_string());
    active.class = Set(class.trim().to_string());
    active.update(db).await.map_err(Into::into)
}

/// Deletes a student record.
pub async fn delete_student(db: &DatabaseConnection, student_id: i64) -> Result<()> {
    let existing = Student::find_by_id(student_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::StudentNotFound {
            id: student_id.to_string(),
        })?;

    existing.delete(db).await?;
    Ok(())
}
