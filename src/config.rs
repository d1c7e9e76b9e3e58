use std::time::Duration;

use anyhow::{Result, anyhow};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{error, info};

use crate::schemas::AppState;

/// Legacy name for `DATABASE_URL`, still honoured by older deployments.
const LEGACY_DATABASE_URL_VAR: &str = "DB_URL";

/// Pick the database URL from the CLI/`DATABASE_URL` value or the legacy
/// `DB_URL` variable, in that order.
pub fn resolve_database_url(explicit: Option<String>) -> Result<String> {
    pick_database_url(explicit, std::env::var(LEGACY_DATABASE_URL_VAR).ok())
}

fn pick_database_url(explicit: Option<String>, legacy: Option<String>) -> Result<String> {
    explicit
        .filter(|url| !url.trim().is_empty())
        .or_else(|| legacy.filter(|url| !url.trim().is_empty()))
        .ok_or_else(|| anyhow!("no database URL configured; pass --database-url or set DATABASE_URL"))
}

/// Open a pooled connection.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .min_connections(10)
        .max_connections(30)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    info!("Connecting to database");
    match Database::connect(options).await {
        Ok(db) => Ok(db),
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            Err(e.into())
        }
    }
}

/// Initialize application state for the given database
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    let db = connect(database_url).await?;
    Ok(AppState { db })
}
