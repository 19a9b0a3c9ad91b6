use app_config::AppConfig;
use app_error::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tracing::*;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: SqlitePool,
}

impl AppState {
    /// Opens the storage pool and applies migrations. Call once at startup.
    pub async fn connect(config: AppConfig) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let db = SqlitePoolOptions::new()
            .max_connections(max_connections(&config))
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        app_schema::migrate(&db).await?;
        info!("Database ready at {}", &config.database_url);
        Ok(Self { config, db })
    }

    /// Closes the storage pool. Call once after the server stops.
    pub async fn close(&self) {
        self.db.close().await;
        info!("Database connection closed");
    }
}

/// Every pooled connection to an in-memory URL opens its own database, so those get one.
fn max_connections(config: &AppConfig) -> u32 {
    let url = &config.database_url;
    if url.contains(":memory:") || url.contains("mode=memory") {
        1
    } else {
        config.db_connection.max(1)
    }
}
