use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
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

/// Whether a migration has already been recorded in the log table.
fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Run `sql` once, then record `version` as applied.
fn apply_once(conn: &Connection, version: &str, sql: &str, message: &str) -> Result<bool> {
    if is_applied(conn, version)? {
        return Ok(false);
    }

    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![chrono::Local::now().to_rfc3339(), version, message],
    )?;
    tx.commit()?;

    tracing::info!(version, message, "migration applied");
    Ok(true)
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    apply_once(
        conn,
        "20260101_0001_log_operation_index",
        "CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation);",
        "Indexed log by operation",
    )?;

    Ok(())
}
