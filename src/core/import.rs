//! Tabular import - validation and normalization of spreadsheet rows.
//!
//! The external spreadsheet layer hands over plain records (one string map
//! per row). Header names are normalized so English and Indonesian column
//! titles resolve to the same logical field. Validation is all-or-nothing: a
//! bad row aborts the whole batch with a row-numbered error and nothing is
//! written.

use crate::{
    entities::{class, student},
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, QueryFilter, Set, TransactionTrait, prelude::*};
use std::collections::{HashMap, HashSet};
use tracing::info;

/// One uploaded spreadsheet row: column header -> cell value.
pub type ImportRow = HashMap<String, String>;

const NIS_ALIASES: &[&str] = &["nis", "NIS"];
const STUDENT_NAME_ALIASES: &[&str] = &["name", "nama", "Nama"];
const STUDENT_CLASS_ALIASES: &[&str] = &["class", "kelas", "Kelas"];
const CLASS_NAME_ALIASES: &[&str] = &["name", "Nama Kelas", "nama"];
const CLASS_TEACHER_ALIASES: &[&str] = &["teacher", "Wali Kelas", "wali kelas"];

/// A validated student import row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentImportRow {
    /// Registration number (numeric string, unique within the batch)
    pub nis: String,
    /// Full name
    pub name: String,
    /// Class label, empty when the column is absent
    pub class: String,
}

/// A validated class import row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassImportRow {
    /// Class name
    pub name: String,
    /// Homeroom teacher
    pub teacher: String,
}

fn pick<'a>(row: &'a ImportRow, aliases: &[&str]) -> Option<&'a str> {
    aliases.iter().find_map(|key| row.get(*key).map(String::as_str))
}

fn require_column(rows: &[ImportRow], aliases: &[&str], logical: &str) -> Result<()> {
    let Some(first) = rows.first() else {
        return Ok(());
    };
    if aliases.iter().any(|key| first.contains_key(*key)) {
        return Ok(());
    }
    Err(Error::MissingColumn {
        column: logical.to_string(),
    })
}

/// Validates and normalizes uploaded student rows.
///
/// Requires `nis` and `name` columns (either header language). Rows whose
/// required cells are empty are skipped, matching the reference importer.
/// A non-numeric or batch-duplicated NIS aborts the whole batch with the
/// 1-based row number.
pub fn normalize_student_rows(rows: &[ImportRow]) -> Result<Vec<StudentImportRow>> {
    require_column(rows, NIS_ALIASES, "nis")?;
    require_column(rows, STUDENT_NAME_ALIASES, "name")?;

    let mut seen = HashSet::new();
    let mut parsed = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let row_number = index + 1;
        let nis = pick(row, NIS_ALIASES).unwrap_or("").trim();
        let name = pick(row, STUDENT_NAME_ALIASES).unwrap_or("").trim();

        if nis.is_empty() || name.is_empty() {
            continue;
        }

        if !nis.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::InvalidNis {
                row: row_number,
                nis: nis.to_string(),
            });
        }

        if !seen.insert(nis.to_string()) {
            return Err(Error::DuplicateNis {
                row: row_number,
                nis: nis.to_string(),
            });
        }

        let class = pick(row, STUDENT_CLASS_ALIASES).unwrap_or("").trim();
        parsed.push(StudentImportRow {
            nis: nis.to_string(),
            name: name.to_string(),
            class: class.to_string(),
        });
    }

    Ok(parsed)
}

/// Imports a batch of student rows in a single transaction.
///
/// Validation failures and NIS collisions with existing students abort the
/// batch; no partial write survives. Returns the number of students created.
pub async fn import_students(db: &DatabaseConnection, rows: &[ImportRow]) -> Result<usize> {
    let parsed = normalize_student_rows(rows)?;

    let txn = db.begin().await?;

    for entry in &parsed {
        let existing = crate::entities::Student::find()
            .filter(student::Column::Nis.eq(entry.nis.as_str()))
            .one(&txn)
            .await?;
        if existing.is_some() {
            return Err(Error::DuplicateStudent {
                nis: entry.nis.clone(),
            });
        }

        let row = student::ActiveModel {
            nis: Set(entry.nis.clone()),
            name: Set(entry.name.clone()),
            class: Set(entry.class.clone()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };
        row.insert(&txn).await?;
    }

    txn.commit().await?;
    info!(count = parsed.len(), "imported students");
    Ok(parsed.len())
}

/// Validates and normalizes uploaded class rows.
///
/// Requires `name` and `teacher` columns (either header language); rows with
/// empty cells are filtered out, matching the reference importer.
pub fn normalize_class_rows(rows: &[ImportRow]) -> Result<Vec<ClassImportRow>> {
    require_column(rows, CLASS_NAME_ALIASES, "name")?;
    require_column(rows, CLASS_TEACHER_ALIASES, "teacher")?;

    Ok(rows
        .iter()
        .filter_map(|row| {
            let name = pick(row, CLASS_NAME_ALIASES).unwrap_or("").trim();
            let teacher = pick(row, CLASS_TEACHER_ALIASES).unwrap_or("").trim();
            if name.is_empty() || teacher.is_empty() {
                return None;
            }
            Some(ClassImportRow {
                name: name.to_string(),
                teacher: teacher.to_string(),
            })
        })
        .collect())
}

/// Imports a batch of class rows in a single transaction.
/// Returns the number of classes created.
pub async fn import_classes(db: &DatabaseConnection, rows: &[ImportRow]) -> Result<usize> {
    let parsed = normalize_class_rows(rows)?;

    let txn = db.begin().await?;

    for entry in &parsed {
        let row = class::ActiveModel {
            name: Set(entry.name.clone()),
            teacher: Set(entry.teacher.clone()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };
        row.insert(&txn).await?;
    }

    txn.commit().await?;
    info!(count = parsed.len(), "imported classes");
    Ok(parsed.len())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    fn row(pairs: &[(&str, &str)]) -> ImportRow {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_normalize_students_happy_path() {
        let rows = vec![
            row(&[("nis", "12345"), ("name", "Budi"), ("class", "7A")]),
            row(&[("nis", "67890"), ("name", "Siti"), ("class", "7B")]),
        ];

        let parsed = normalize_student_rows(&rows).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].nis, "12345");
        assert_eq!(parsed[0].name, "Budi");
        assert_eq!(parsed[0].class, "7A");
    }

    #[test]
    fn test_normalize_students_localized_headers() {
        let rows = vec![row(&[("NIS", "12345"), ("nama", "Budi"), ("kelas", "7A")])];

        let parsed = normalize_student_rows(&rows).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].nis, "12345");
        assert_eq!(parsed[0].name, "Budi");
        assert_eq!(parsed[0].class, "7A");
    }

    #[test]
    fn test_normalize_students_missing_column() {
        let rows = vec![row(&[("name", "Budi")])];
        let result = normalize_student_rows(&rows);
        assert!(matches!(result.unwrap_err(), Error::MissingColumn { column } if column == "nis"));

        let rows = vec![row(&[("nis", "12345")])];
        let result = normalize_student_rows(&rows);
        assert!(matches!(result.unwrap_err(), Error::MissingColumn { column } if column == "name"));
    }

    #[test]
    fn test_normalize_students_non_numeric_nis() {
        let rows = vec![
            row(&[("nis", "12345"), ("name", "Budi")]),
            row(&[("nis", "12a45"), ("name", "Siti")]),
        ];

        let result = normalize_student_rows(&rows);
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidNis { row: 2, .. }
        ));
    }

    #[test]
    fn test_normalize_students_duplicate_nis_in_batch() {
        let rows = vec![
            row(&[("nis", "12345"), ("name", "Budi")]),
            row(&[("nis", "12345"), ("name", "Siti")]),
        ];

        let result = normalize_student_rows(&rows);
        assert!(matches!(
            result.unwrap_err(),
            Error::DuplicateNis { row: 2, .. }
        ));
    }

    #[test]
    fn test_normalize_students_skips_incomplete_rows() {
        let rows = vec![
            row(&[("nis", "12345"), ("name", "Budi")]),
            row(&[("nis", ""), ("name", "Siti")]),
            row(&[("nis", "67890"), ("name", "  ")]),
        ];

        let parsed = normalize_student_rows(&rows).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_normalize_students_empty_batch() {
        let parsed = normalize_student_rows(&[]).unwrap();
        assert!(parsed.is_empty());
    }

    #[tokio::test]
    async fn test_import_students_writes_rows() -> Result<()> {
        let db = setup_test_db().await?;

        let rows = vec![
            row(&[("nis", "12345"), ("name", "Budi"), ("class", "7A")]),
            row(&[("nis", "67890"), ("name", "Siti"), ("class", "7B")]),
        ];

        assert_eq!(import_students(&db, &rows).await?, 2);

        let students = crate::core::student::get_all_students(&db).await?;
        assert_eq!(students.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_import_students_no_partial_write() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_student(&db, "67890", "Siti").await?;

        // Second row collides with an existing student
        let rows = vec![
            row(&[("nis", "12345"), ("name", "Budi")]),
            row(&[("nis", "67890"), ("name", "Siti Dua")]),
        ];

        let result = import_students(&db, &rows).await;
        assert!(matches!(result.unwrap_err(), Error::DuplicateStudent { .. }));

        // The valid first row must not have been written either
        let students = crate::core::student::get_all_students(&db).await?;
        assert_eq!(students.len(), 1);

        Ok(())
    }

    #[test]
    fn test_normalize_classes_localized_headers() {
        let rows = vec![
            row(&[("Nama Kelas", "7A"), ("Wali Kelas", "Bu Rina")]),
            row(&[("Nama Kelas", "7B"), ("Wali Kelas", "")]),
        ];

        let parsed = normalize_class_rows(&rows).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "7A");
        assert_eq!(parsed[0].teacher, "Bu Rina");
    }

    #[test]
    fn test_normalize_classes_missing_column() {
        let rows = vec![row(&[("name", "7A")])];
        let result = normalize_class_rows(&rows);
        assert!(
            matches!(result.unwrap_err(), Error::MissingColumn { column } if column == "teacher")
        );
    }

    #[tokio::test]
    async fn test_import_classes_writes_rows() -> Result<()> {
        let db = setup_test_db().await?;

        let rows = vec![
            row(&[("name", "7A"), ("teacher", "Bu Rina")]),
            row(&[("name", "7B"), ("teacher", "Pak Andi")]),
        ];

        assert_eq!(import_classes(&db, &rows).await?, 2);
        assert_eq!(crate::core::class::get_all_classes(&db).await?.len(), 2);

        Ok(())
    }
}
