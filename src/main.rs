//! Provisioning entry point: prepares the waste-bank database.
//!
//! Initializes tracing, loads `.env`, connects to the configured database,
//! creates all tables from the entity definitions, and seeds the waste-type
//! catalog from `config.toml` when the catalog is empty.

use bank_sampah::{config, core, errors::Result};
use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Connect and create tables
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;

    config::database::create_tables(&db)
        .await
        .inspect(|()| info!("Database tables created."))
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;

    // 4. Seed the waste-type catalog on first run
    match config::waste_types::load_default_config() {
        Ok(seed_config) => {
            let seeded = core::catalog::seed_from_config(&db, &seed_config).await?;
            if seeded > 0 {
                info!(count = seeded, "Seeded waste-type catalog.");
            } else {
                info!("Waste-type catalog already populated, skipping seed.");
            }
        }
        Err(e) => warn!("No seed configuration loaded: {e}"),
    }

    info!("Database ready at {}", config::database::get_database_url());
    Ok(())
}
