#![cfg(test)]
use sea_orm::DatabaseConnection;
use configs::DatabaseConfig;
use models::db::{connect_with_config, migrate};

/// Fresh in-memory database with the schema applied. A single pooled
/// connection keeps every statement on the same SQLite memory instance.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        // never recycle the only connection, the data would go with it
        idle_timeout_secs: 3600,
        max_lifetime_secs: 3600,
        ..DatabaseConfig::default()
    };
    let db = connect_with_config(&cfg).await?;
    migrate(&db).await?;
    Ok(db)
}
