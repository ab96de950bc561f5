//! Database migration runner.
//!
//! Every migration is idempotent (`IF NOT EXISTS` forms only), so the whole
//! set runs on each startup with no version tracking; re-running against an
//! already-migrated database is a no-op.

use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::info;

use crate::error::{AppError, AppResult};

/// Embedded migration files, in execution order.
const MIGRATIONS: &[(&str, &str)] = &[
    (
        "001_create_applications",
        include_str!("migrations/001_create_applications.sql"),
    ),
    (
        "002_add_resume_path",
        include_str!("migrations/002_add_resume_path.sql"),
    ),
];

/// Run all migrations.
pub async fn run_migrations(conn: &DatabaseConnection) -> AppResult<()> {
    for (name, sql) in MIGRATIONS {
        conn.execute_unprepared(sql)
            .await
            .map_err(|e| AppError::Database(format!("Migration {} failed: {}", name, e)))?;
        info!("Migration {} applied", name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_ordered() {
        for (i, (name, _)) in MIGRATIONS.iter().enumerate() {
            let expected_prefix = format!("{:03}_", i + 1);
            assert!(
                name.starts_with(&expected_prefix),
                "Migration {} should start with {}",
                name,
                expected_prefix
            );
        }
    }

    #[test]
    fn test_migrations_are_idempotent_forms() {
        for (name, sql) in MIGRATIONS {
            assert!(
                sql.contains("IF NOT EXISTS"),
                "Migration {} must be re-runnable",
                name
            );
        }
    }
}
