use anyhow::Result;
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

use crate::db::{connect_with_config, migrate};

/// Connection and migration tests
pub mod db_tests;

/// CRUD operations tests for both tables
pub mod crud_tests;

/// Foreign-key cascade behavior
pub mod cascade_tests;

/// Fresh in-memory database with the full schema applied.
///
/// A single pooled connection keeps every statement on the same in-memory database.
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    let db = connect_with_config(&cfg).await?;
    migrate(&db).await?;
    Ok(db)
}
