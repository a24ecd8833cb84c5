//! Reporting - school-wide dashboard aggregates and export records.
//!
//! Like every other total in the system, dashboard numbers are derived fresh
//! from the full record set per call. Export functions produce plain tabular
//! records for the external spreadsheet layer; they never touch file formats
//! themselves.

use crate::{
    core::{ledger, withdrawal::WithdrawalStatus},
    entities::{
        Deposit, Savings, Student, TrashbagWithdrawal, WasteType, student, trashbag_withdrawal,
        waste_type,
    },
    errors::Result,
};
use sea_orm::{DatabaseConnection, PaginatorTrait, QueryOrder, prelude::*};
use serde::Serialize;
use std::collections::HashMap;

/// Per-waste-type collection totals for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WasteTypeTotal {
    /// Waste type name
    pub name: String,
    /// Bottles collected school-wide
    pub bottles: i64,
    /// Trashbags earned school-wide
    pub trashbags: i64,
}

/// School-wide statistics for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Number of registered students
    pub total_students: u64,
    /// Bottles collected across all students
    pub total_bottles: i64,
    /// Trashbags earned across all students (gross of withdrawals)
    pub total_trashbags: i64,
    /// Sum of all legacy Rupiah savings balances
    pub total_savings: f64,
    /// Trashbag withdrawal requests awaiting review
    pub pending_withdrawals: u64,
    /// Collection totals per waste type, largest bottle count first
    pub waste_by_type: Vec<WasteTypeTotal>,
}

/// One row of the deposit export, ready for the external spreadsheet layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepositExportRow {
    /// Deposit date, `YYYY-MM-DD`
    pub date: String,
    /// Student name, `-` when the student no longer exists
    pub student_name: String,
    /// Student class label
    pub class: String,
    /// Waste type name, `-` when the type no longer exists
    pub waste_type: String,
    /// Recorded bottle count (zero on legacy rows)
    pub bottles: i64,
    /// Stored trashbag reward (zero when never persisted)
    pub trashbags: i64,
}

/// Computes the admin dashboard statistics from the full record set.
pub async fn generate_dashboard_stats(db: &DatabaseConnection) -> Result<DashboardStats> {
    let total_students = Student::find().count(db).await?;

    let deposits = Deposit::find().all(db).await?;
    let waste_types = WasteType::find().all(db).await?;
    let stats = ledger::compute_stats(&deposits, &waste_types);

    let total_savings = Savings::find()
        .all(db)
        .await?
        .iter()
        .map(|s| s.balance)
        .sum();

    let pending_withdrawals = TrashbagWithdrawal::find()
        .filter(trashbag_withdrawal::Column::Status.eq(WithdrawalStatus::Pending.as_str()))
        .count(db)
        .await?;

    let mut waste_by_type: Vec<WasteTypeTotal> = stats
        .waste_breakdown
        .into_iter()
        .map(|(name, subtotal)| WasteTypeTotal {
            name,
            bottles: subtotal.bottles,
            trashbags: subtotal.trashbags,
        })
        .collect();
    waste_by_type.sort_by(|a, b| b.bottles.cmp(&a.bottles).then(a.name.cmp(&b.name)));

    Ok(DashboardStats {
        total_students,
        total_bottles: stats.total_bottles,
        total_trashbags: stats.total_trashbags,
        total_savings,
        pending_withdrawals,
        waste_by_type,
    })
}

/// Builds the deposit export, newest deposits first. Stored field values are
/// exported as-is (zero when absent), mirroring the reference report.
pub async fn deposit_export_rows(db: &DatabaseConnection) -> Result<Vec<DepositExportRow>> {
    let deposits = Deposit::find()
        .order_by_desc(crate::entities::deposit::Column::CreatedAt)
        .all(db)
        .await?;

    let students: HashMap<i64, student::Model> = Student::find()
        .all(db)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();
    let waste_types: HashMap<i64, waste_type::Model> = WasteType::find()
        .all(db)
        .await?
        .into_iter()
        .map(|wt| (wt.id, wt))
        .collect();

    Ok(deposits
        .into_iter()
        .map(|dep| {
            let student = students.get(&dep.student_id);
            let waste_type = waste_types.get(&dep.waste_type_id);
            DepositExportRow {
                date: dep.created_at.format("%Y-%m-%d").to_string(),
                student_name: student.map_or_else(|| "-".to_string(), |s| s.name.clone()),
                class: student.map_or_else(String::new, |s| s.class.clone()),
                waste_type: waste_type.map_or_else(|| "-".to_string(), |wt| wt.name.clone()),
                bottles: dep.bottle_count.unwrap_or(0),
                trashbags: dep.trashbag_reward.unwrap_or(0),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::{savings, withdrawal};
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_dashboard_stats_empty_school() -> Result<()> {
        let db = setup_test_db().await?;

        let stats = generate_dashboard_stats(&db).await?;
        assert_eq!(stats.total_students, 0);
        assert_eq!(stats.total_bottles, 0);
        assert_eq!(stats.total_trashbags, 0);
        assert_eq!(stats.total_savings, 0.0);
        assert_eq!(stats.pending_withdrawals, 0);
        assert!(stats.waste_by_type.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_dashboard_stats_aggregates_all_students() -> Result<()> {
        let (db, budi, plastik) = setup_with_catalog().await?;
        let siti = create_test_student(&db, "67890", "Siti").await?;
        let kertas = create_test_waste_type(&db, "Kertas", 25).await?;

        create_test_deposit(&db, budi.id, plastik.id, 40).await?; // 2 trashbags
        create_test_deposit(&db, siti.id, plastik.id, 20).await?; // 1 trashbag
        create_test_deposit(&db, siti.id, kertas.id, 25).await?; // 1 trashbag

        savings::credit_savings(&db, budi.id, 5000.0).await?;
        savings::credit_savings(&db, siti.id, 2500.0).await?;

        withdrawal::submit_withdrawal(&db, budi.id, 1, "tas".to_string()).await?;

        let stats = generate_dashboard_stats(&db).await?;
        assert_eq!(stats.total_students, 2);
        assert_eq!(stats.total_bottles, 85);
        assert_eq!(stats.total_trashbags, 4);
        assert_eq!(stats.total_savings, 7500.0);
        assert_eq!(stats.pending_withdrawals, 1);

        // Largest bottle count first
        assert_eq!(stats.waste_by_type.len(), 2);
        assert_eq!(stats.waste_by_type[0].name, "Plastik");
        assert_eq!(stats.waste_by_type[0].bottles, 60);
        assert_eq!(stats.waste_by_type[1].name, "Kertas");

        Ok(())
    }

    #[tokio::test]
    async fn test_deposit_export_rows() -> Result<()> {
        let (db, student, waste_type) = setup_with_catalog().await?;

        create_test_deposit(&db, student.id, waste_type.id, 45).await?;
        insert_deposit_raw(&db, student.id, 999, Some(10), None).await?;

        let rows = deposit_export_rows(&db).await?;
        assert_eq!(rows.len(), 2);

        // Newest first: the raw row against the missing type
        assert_eq!(rows[0].waste_type, "-");
        assert_eq!(rows[0].bottles, 10);
        assert_eq!(rows[0].trashbags, 0);

        assert_eq!(rows[1].student_name, "Test Student");
        assert_eq!(rows[1].class, "7A");
        assert_eq!(rows[1].waste_type, "Plastik");
        assert_eq!(rows[1].bottles, 45);
        assert_eq!(rows[1].trashbags, 2);

        Ok(())
    }
}
