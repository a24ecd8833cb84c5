//! Credential check - resolves a login identifier to a role.
//!
//! Students log in with their NIS; admins with the configured access code.
//! A failed lookup is a normal outcome (`Ok(None)`), not an error: only
//! infrastructure failures propagate.

use crate::{entities::student, errors::Result};
use sea_orm::DatabaseConnection;

/// The authenticated identity returned by a successful credential check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Administrator session; not tied to a student record
    Admin,
    /// Student session with the matched student record
    Student(student::Model),
}

/// Checks a login identifier.
///
/// With `admin_flow` set the identifier is compared against the configured
/// admin access code; otherwise it is treated as a NIS and looked up in the
/// student table.
pub async fn authenticate(
    db: &DatabaseConnection,
    identifier: &str,
    admin_flow: bool,
) -> Result<Option<AuthOutcome>> {
    if admin_flow {
        if identifier == crate::config::app::admin_access_code() {
            return Ok(Some(AuthOutcome::Admin));
        }
        return Ok(None);
    }

    let student = crate::core::student::get_student_by_nis(db, identifier).await?;
    Ok(student.map(AuthOutcome::Student))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_student_login_by_nis() -> Result<()> {
        let (db, student) = setup_with_student().await?;

        let outcome = authenticate(&db, "12345", false).await?;
        match outcome {
            Some(AuthOutcome::Student(matched)) => assert_eq!(matched.id, student.id),
            other => panic!("expected student outcome, got {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_nis_fails_softly() -> Result<()> {
        let db = setup_test_db().await?;

        let outcome = authenticate(&db, "00000", false).await?;
        assert!(outcome.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_access_code() -> Result<()> {
        let db = setup_test_db().await?;

        let outcome = authenticate(&db, &crate::config::app::admin_access_code(), true).await?;
        assert_eq!(outcome, Some(AuthOutcome::Admin));

        let outcome = authenticate(&db, "wrong-code", true).await?;
        assert!(outcome.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_student_nis_does_not_grant_admin() -> Result<()> {
        let (db, _student) = setup_with_student().await?;

        let outcome = authenticate(&db, "12345", true).await?;
        assert!(outcome.is_none());

        Ok(())
    }
}
