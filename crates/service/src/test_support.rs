#![cfg(test)]
use configs::DatabaseConfig;
use models::db::{connect_with_config, ensure_schema};
use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite database with the employee table in place.
/// A single pooled connection keeps every query on the same memory database.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    let db = connect_with_config(&cfg).await?;
    ensure_schema(&db).await?;
    Ok(db)
}
