//! Schema migration runner for the task database.
//!
//! Migrations are embedded at compile time via [`include_str!`] and
//! executed in version order, each inside its own transaction. The
//! `schema_version` table tracks applied versions; rerunning the
//! migrator is idempotent.
//!
//! A database stamped with a version newer than this build supports is
//! dropped and recreated from scratch — local, single-device storage
//! with no downgrade path.

use rusqlite::Connection;
use tracing::{debug, info, warn};

use crate::errors::{Result, StoreError};

/// A single migration with a version number and SQL to execute.
struct Migration {
    version: u32,
    description: &'static str,
    sql: &'static str,
}

/// All migrations in version order.
const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    description: "tasks table and list indexes",
    sql: include_str!("v001_schema.sql"),
}];

/// Run all pending migrations on the given connection.
///
/// Returns the number of migrations applied.
///
/// # Errors
///
/// Returns [`StoreError::Migration`] if any migration SQL fails.
pub fn run_migrations(conn: &Connection) -> Result<u32> {
    ensure_version_table(conn)?;
    let mut current = current_version(conn)?;

    if current > latest_version() {
        warn!(
            on_disk = current,
            supported = latest_version(),
            "database schema is newer than this build supports, recreating"
        );
        recreate(conn)?;
        current = 0;
    }

    let mut applied = 0;
    for migration in MIGRATIONS {
        if migration.version <= current {
            debug!(
                version = migration.version,
                description = migration.description,
                "migration already applied, skipping"
            );
            continue;
        }

        info!(
            version = migration.version,
            description = migration.description,
            "applying migration"
        );

        apply_migration(conn, migration)?;
        applied += 1;
    }

    Ok(applied)
}

/// Return the highest applied migration version, or 0 if none.
pub fn current_version(conn: &Connection) -> Result<u32> {
    let version: u32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
        .map_err(|e| StoreError::Migration {
            message: format!("failed to read schema_version: {e}"),
        })?;
    Ok(version)
}

/// Return the latest migration version defined in code.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |m| m.version)
}

// ─────────────────────────────────────────────────────────────────────────────
// Internal
// ─────────────────────────────────────────────────────────────────────────────

fn ensure_version_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
           version     INTEGER PRIMARY KEY,
           applied_at  TEXT    NOT NULL,
           description TEXT
         );",
    )
    .map_err(|e| StoreError::Migration {
        message: format!("failed to create schema_version table: {e}"),
    })
}

fn recreate(conn: &Connection) -> Result<()> {
    conn.execute_batch("DROP TABLE IF EXISTS tasks; DELETE FROM schema_version;")
        .map_err(|e| StoreError::Migration {
            message: format!("failed to recreate schema: {e}"),
        })
}

fn apply_migration(conn: &Connection, migration: &Migration) -> Result<()> {
    let run = || -> rusqlite::Result<()> {
        conn.execute_batch("BEGIN")?;
        conn.execute_batch(migration.sql)?;
        let _ = conn.execute(
            "INSERT INTO schema_version (version, applied_at, description)
             VALUES (?1, datetime('now'), ?2)",
            rusqlite::params![migration.version, migration.description],
        )?;
        conn.execute_batch("COMMIT")?;
        Ok(())
    };

    run().map_err(|e| {
        let _ = conn.execute_batch("ROLLBACK");
        StoreError::Migration {
            message: format!("migration v{} failed: {e}", migration.version),
        }
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(unused_results)]
mod tests {
    use super::*;

    fn conn() -> Connection {
        Connection::open_in_memory().unwrap()
    }

    #[test]
    fn fresh_database_applies_all_migrations() {
        let conn = conn();
        let applied = run_migrations(&conn).unwrap();
        assert_eq!(applied, MIGRATIONS.len() as u32);
        assert_eq!(current_version(&conn).unwrap(), latest_version());
    }

    #[test]
    fn rerunning_is_idempotent() {
        let conn = conn();
        run_migrations(&conn).unwrap();
        let applied = run_migrations(&conn).unwrap();
        assert_eq!(applied, 0);
    }

    #[test]
    fn newer_schema_is_recreated() {
        let conn = conn();
        run_migrations(&conn).unwrap();
        conn.execute(
            "INSERT INTO tasks (title, createdAt) VALUES ('orphan', 1)",
            [],
        )
        .unwrap();
        // Stamp a version from the future
        conn.execute(
            "INSERT INTO schema_version (version, applied_at) VALUES (999, 'x')",
            [],
        )
        .unwrap();

        run_migrations(&conn).unwrap();
        assert_eq!(current_version(&conn).unwrap(), latest_version());
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
