use anyhow::Result;
use configs::DatabaseConfig;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use super::setup_test_db;
use crate::db::{connect_with_config, migrate, ping};

#[tokio::test]
async fn test_ping_in_memory_database() -> Result<()> {
    let db = setup_test_db().await?;
    ping(&db).await?;
    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);
    Ok(())
}

/// Migrations create both tables and the owner index
#[tokio::test]
async fn test_schema_objects_exist() -> Result<()> {
    let db = setup_test_db().await?;
    for (kind, name) in [("table", "user_table"), ("table", "food_table"), ("index", "idx_food_table_user_id")] {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type = ? AND name = ?",
            [kind.into(), name.into()],
        );
        let row = db.query_one(stmt).await?;
        assert!(row.is_some(), "missing {kind} {name}");
    }
    Ok(())
}

/// Running the migrator twice is a no-op
#[tokio::test]
async fn test_migrate_is_idempotent() -> Result<()> {
    let db = setup_test_db().await?;
    migrate(&db).await?;
    ping(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_connect_rejects_unreachable_database() -> Result<()> {
    let cfg = DatabaseConfig {
        url: "sqlite:///nonexistent-dir/for-sure/food.db?mode=ro".into(),
        max_connections: 1,
        min_connections: 1,
        connect_timeout_secs: 1,
        acquire_timeout_secs: 1,
        ..DatabaseConfig::default()
    };
    assert!(connect_with_config(&cfg).await.is_err());
    Ok(())
}
