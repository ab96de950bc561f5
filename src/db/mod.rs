//! Database module providing provisioning, connection pooling, migrations,
//! and statements.

pub mod applications;
pub mod migrations;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Upper bound on concurrent pooled store connections.
pub const POOL_MAX_CONNECTIONS: u32 = 10;

/// Provision the target database, open the pooled connection, and run the
/// schema migrations. Any failure here must keep the server from starting.
pub async fn connect_and_migrate(config: &Config) -> AppResult<DatabaseConnection> {
    ensure_database(config).await?;

    let mut options = ConnectOptions::new(config.database_url());
    options.max_connections(POOL_MAX_CONNECTIONS);

    let conn = Database::connect(options).await.map_err(|e| {
        AppError::Database(format!("Failed to connect to {}: {}", config.db_name, e))
    })?;

    migrations::run_migrations(&conn).await?;

    Ok(conn)
}

/// Create the target database when absent, via the maintenance database.
async fn ensure_database(config: &Config) -> AppResult<()> {
    let admin = Database::connect(config.admin_database_url())
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to maintenance database: {}", e))
        })?;

    let exists = admin
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "SELECT 1 FROM pg_database WHERE datname = $1",
            [config.db_name.as_str().into()],
        ))
        .await?;

    if exists.is_none() {
        info!("Creating database {}", config.db_name);
        admin
            .execute_unprepared(&format!(
                "CREATE DATABASE \"{}\"",
                config.db_name.replace('"', "\"\"")
            ))
            .await?;
    }

    admin.close().await?;

    Ok(())
}
