//! Waste-type catalog - reference data for reward conversion.
//!
//! Provides lookups and admin CRUD for waste types, plus first-run seeding
//! from `config.toml`. Editing a type's rate only affects rewards derived
//! from that point on; rewards already frozen on deposit rows are never
//! recomputed. Deleting a type leaves dangling deposit references, which the
//! ledger tolerates at read time.

use crate::{
    config::waste_types::SeedConfig,
    entities::{WasteType, waste_type},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};
use tracing::info;

/// Finds a waste type by its unique ID. Pure lookup; a miss is `None`, not
/// an error.
pub async fn get_waste_type_by_id(
    db: &DatabaseConnection,
    waste_type_id: i64,
) -> Result<Option<waste_type::Model>> {
    WasteType::find_by_id(waste_type_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// All waste types, ordered alphabetically by name.
pub async fn get_all_waste_types(db: &DatabaseConnection) -> Result<Vec<waste_type::Model>> {
    WasteType::find()
        .order_by_asc(waste_type::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new waste type after validating the name and conversion rate.
pub async fn create_waste_type(
    db: &DatabaseConnection,
    name: String,
    trashbags_per_bottle: i64,
    price_per_kg: Option<f64>,
) -> Result<waste_type::Model> {
    if name.trim().is_empty() {
        return Err(Error::EmptyField {
            field: "name".to_string(),
        });
    }
    if trashbags_per_bottle < 1 {
        return Err(Error::InvalidRate {
            rate: trashbags_per_bottle,
        });
    }

    let row = waste_type::ActiveModel {
        name: Set(name.trim().to_string()),
        trashbags_per_bottle: Set(trashbags_per_bottle),
        price_per_kg: Set(price_per_kg),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = row.insert(db).await?;
    Ok(result)
}

/// Updates a waste type's name, rate, and legacy price. Deposit rows that
/// already carry a frozen reward are unaffected by rate changes.
pub async fn update_waste_type(
    db: &DatabaseConnection,
    waste_type_id: i64,
    name: String,
    trashbags_per_bottle: i64,
    price_per_kg: Option<f64>,
) -> Result<waste_type::Model> {
    if name.trim().is_empty() {
        return Err(Error::EmptyField {
            field: "name".to_string(),
        });
    }
    if trashbags_per_bottle < 1 {
        return Err(Error::InvalidRate {
            rate: trashbags_per_bottle,
        });
    }

    let existing = WasteType::find_by_id(waste_type_id)
        .one(db)
        .await?
        .ok_or(Error::WasteTypeNotFound { id: waste_type_id })?;

    let mut active: waste_type::ActiveModel = existing.into();
    active.name = Set(name.trim().to_string());
    active.trashbags_per_bottle = Set(trashbags_per_bottle);
    active.price_per_kg = Set(price_per_kg);
    active.update(db).await.map_err(Into::into)
}

/// Deletes a waste type unconditionally. Existing deposits keep their
/// dangling reference and fall out of read-time aggregation.
pub async fn delete_waste_type(db: &DatabaseConnection, waste_type_id: i64) -> Result<()> {
    let existing = WasteType::find_by_id(waste_type_id)
        .one(db)
        .await?
        .ok_or(Error::WasteTypeNotFound { id: waste_type_id })?;

    existing.delete(db).await?;
    Ok(())
}

/// Seeds the catalog from configuration when the table is empty.
/// Returns the number of waste types inserted (zero when already seeded).
pub async fn seed_from_config(db: &DatabaseConnection, config: &SeedConfig) -> Result<usize> {
    let existing = WasteType::find().count(db).await?;
    if existing > 0 {
        return Ok(0);
    }

    for seed in &config.waste_types {
        create_waste_type(
            db,
            seed.name.clone(),
            seed.trashbags_per_bottle,
            seed.price_per_kg,
        )
        .await?;
        info!(name = %seed.name, rate = seed.trashbags_per_bottle, "seeded waste type");
    }
    Ok(config.waste_types.len())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::config::waste_types::WasteTypeSeed;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_waste_type_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_waste_type(&db, "   ".to_string(), 20, None).await;
        assert!(matches!(result.unwrap_err(), Error::EmptyField { .. }));

        let result = create_waste_type(&db, "Plastik".to_string(), 0, None).await;
        assert!(matches!(result.unwrap_err(), Error::InvalidRate { rate: 0 }));

        let result = create_waste_type(&db, "Plastik".to_string(), -5, None).await;
        assert!(matches!(result.unwrap_err(), Error::InvalidRate { rate: -5 }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_and_lookup() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_waste_type(&db, "  Plastik  ".to_string(), 20, None).await?;
        assert_eq!(created.name, "Plastik");
        assert_eq!(created.trashbags_per_bottle, 20);
        assert_eq!(created.price_per_kg, None);

        let found = get_waste_type_by_id(&db, created.id).await?;
        assert_eq!(found.unwrap().id, created.id);

        let missing = get_waste_type_by_id(&db, 999).await?;
        assert!(missing.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_listing_ordered_by_name() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_waste_type(&db, "Kertas", 25).await?;
        create_test_waste_type(&db, "Botol Kaca", 10).await?;
        create_test_waste_type(&db, "Plastik", 20).await?;

        let all = get_all_waste_types(&db).await?;
        let names: Vec<&str> = all.iter().map(|wt| wt.name.as_str()).collect();
        assert_eq!(names, vec!["Botol Kaca", "Kertas", "Plastik"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_waste_type() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_test_waste_type(&db, "Plastik", 20).await?;

        let updated =
            update_waste_type(&db, created.id, "Plastik PET".to_string(), 15, Some(3500.0))
                .await?;
        assert_eq!(updated.name, "Plastik PET");
        assert_eq!(updated.trashbags_per_bottle, 15);
        assert_eq!(updated.price_per_kg, Some(3500.0));

        let result = update_waste_type(&db, 999, "X".to_string(), 10, None).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::WasteTypeNotFound { id: 999 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_waste_type() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_test_waste_type(&db, "Plastik", 20).await?;

        delete_waste_type(&db, created.id).await?;
        assert!(get_waste_type_by_id(&db, created.id).await?.is_none());

        let result = delete_waste_type(&db, created.id).await;
        assert!(matches!(result.unwrap_err(), Error::WasteTypeNotFound { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_only_into_empty_catalog() -> Result<()> {
        let db = setup_test_db().await?;

        let config = SeedConfig {
            waste_types: vec![
                WasteTypeSeed {
                    name: "Plastik".to_string(),
                    trashbags_per_bottle: 20,
                    price_per_kg: Some(3000.0),
                },
                WasteTypeSeed {
                    name: "Kertas".to_string(),
                    trashbags_per_bottle: 25,
                    price_per_kg: None,
                },
            ],
        };

        assert_eq!(seed_from_config(&db, &config).await?, 2);
        assert_eq!(get_all_waste_types(&db).await?.len(), 2);

        // A second run is a no-op
        assert_eq!(seed_from_config(&db, &config).await?, 0);
        assert_eq!(get_all_waste_types(&db).await?.len(), 2);

        Ok(())
    }
}
