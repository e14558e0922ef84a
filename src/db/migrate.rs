use crate::ui::messages::success;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ensure that the `log` table exists. Migration bookkeeping lives there.
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

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_log_entries",
        description: "Created log_entries table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS log_entries (
            project_id  TEXT NOT NULL,
            hole_id     TEXT NOT NULL,
            section     TEXT NOT NULL,
            position    INTEGER NOT NULL,
            id          TEXT NOT NULL,
            depth_from  REAL NOT NULL,
            depth_to    REAL NOT NULL,
            entry_json  TEXT NOT NULL,
            PRIMARY KEY (project_id, hole_id, section, id)
        );

        CREATE INDEX IF NOT EXISTS idx_log_entries_section
            ON log_entries(project_id, hole_id, section, position);
        "#,
    },
    Migration {
        version: "20250301_0002_create_holes",
        description: "Created holes table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS holes (
            id             TEXT PRIMARY KEY,
            project_id     TEXT NOT NULL DEFAULT '',
            site_id        TEXT NOT NULL DEFAULT '',
            location       TEXT NOT NULL DEFAULT '',
            status         TEXT NOT NULL DEFAULT 'NOT DRILLED',
            planned_depth  REAL NOT NULL DEFAULT 0,
            drilled_depth  REAL NOT NULL DEFAULT 0,
            start_date     TEXT,
            end_date       TEXT,
            status_note    TEXT NOT NULL DEFAULT '',
            has_photo      INTEGER NOT NULL DEFAULT 0,
            has_litho      INTEGER NOT NULL DEFAULT 0,
            has_samples    INTEGER NOT NULL DEFAULT 0,
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_holes_location ON holes(location);
        "#,
    },
    Migration {
        version: "20250310_0003_hole_details",
        description: "Added collar and crew details to holes",
        sql: r#"
        ALTER TABLE holes ADD COLUMN country TEXT NOT NULL DEFAULT '';
        ALTER TABLE holes ADD COLUMN hole_type TEXT NOT NULL DEFAULT '';
        ALTER TABLE holes ADD COLUMN hole_size TEXT NOT NULL DEFAULT '';
        ALTER TABLE holes ADD COLUMN contractor TEXT NOT NULL DEFAULT '';
        ALTER TABLE holes ADD COLUMN logged_by TEXT NOT NULL DEFAULT '';
        ALTER TABLE holes ADD COLUMN geologist TEXT NOT NULL DEFAULT '';
        ALTER TABLE holes ADD COLUMN azimuth REAL NOT NULL DEFAULT 0;
        ALTER TABLE holes ADD COLUMN dip REAL NOT NULL DEFAULT 0;
        ALTER TABLE holes ADD COLUMN drill_purpose TEXT NOT NULL DEFAULT '';
        "#,
    },
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![Local::now().to_rfc3339(), m.version, m.description],
    )?;

    tx.commit()?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(())
}

/// Versions already recorded in the `log` table, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log
         WHERE operation = 'migration_applied'
         ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}

/// Public entry point: run all pending migrations, in order.
///
/// Invoked by `db::initialize::init_db()`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
        }
    }

    Ok(())
}
