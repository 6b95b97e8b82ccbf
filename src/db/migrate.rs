use crate::db::log::{migration_applied, ttlog};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

const CREATED_AT_VERSION: &str = "20250301_0001_records_created_at";

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn has_column(conn: &Connection, table: &str, column: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `records` table with the modern schema (including `created_at`).
fn create_records_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp   INTEGER NOT NULL,
            date        TEXT NOT NULL,
            note        TEXT,
            created_at  INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_records_timestamp ON records(timestamp);
        CREATE INDEX IF NOT EXISTS idx_records_date ON records(date);
        "#,
    )?;
    Ok(())
}

fn create_user_settings_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS user_settings (
            id            INTEGER PRIMARY KEY CHECK (id = 1),
            age           INTEGER NOT NULL DEFAULT 25,
            lock_enabled  INTEGER NOT NULL DEFAULT 0,
            pin_hash      TEXT
        );
        "#,
    )?;
    Ok(())
}

/// Older databases stored records without `created_at`: add it, backfilled
/// from the record timestamp.
fn migrate_add_created_at(conn: &Connection) -> AppResult<()> {
    if migration_applied(conn, CREATED_AT_VERSION)? {
        return Ok(());
    }

    if !has_column(conn, "records", "created_at")? {
        warning("Adding 'created_at' column to records table...");

        conn.execute_batch(
            r#"
            BEGIN;
            ALTER TABLE records ADD COLUMN created_at INTEGER NOT NULL DEFAULT 0;
            UPDATE records SET created_at = timestamp WHERE created_at = 0;
            COMMIT;
            "#,
        )
        .map_err(|e| AppError::Migration(format!("Failed to add 'created_at' column: {e}")))?;

        success(format!(
            "Migration applied: {} → added 'created_at' to records table",
            CREATED_AT_VERSION
        ));
    }

    ttlog(
        conn,
        "migration_applied",
        CREATED_AT_VERSION,
        "Added created_at to records",
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by `db::initialize::init_db()`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    if table_exists(conn, "records")? {
        migrate_add_created_at(conn)?;
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_records_timestamp ON records(timestamp);
            CREATE INDEX IF NOT EXISTS idx_records_date ON records(date);
            "#,
        )?;
    } else {
        create_records_table(conn)?;
        ttlog(
            conn,
            "migration_applied",
            CREATED_AT_VERSION,
            "Created records table (modern schema)",
        )?;
        debug!("created records table");
    }

    if !table_exists(conn, "user_settings")? {
        create_user_settings_table(conn)?;
        debug!("created user_settings table");
    }

    Ok(())
}
