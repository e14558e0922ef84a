//! SQLite-backed `SectionSink`.

use crate::core::persistence::SectionSink;
use crate::errors::AppResult;
use crate::models::log_entry::LogEntry;
use crate::models::section_key::SectionKey;
use rusqlite::{Connection, params};

/// Stores each section as ordered rows of `log_entries`.
pub struct SqliteSink<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteSink<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl SectionSink for SqliteSink<'_> {
    fn load(&mut self, key: &SectionKey) -> AppResult<Vec<LogEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT entry_json FROM log_entries
             WHERE project_id = ?1 AND hole_id = ?2 AND section = ?3
             ORDER BY position ASC",
        )?;

        let rows = stmt.query_map(
            params![key.project_id, key.hole_id, key.section.to_db_str()],
            |row| row.get::<_, String>(0),
        )?;

        let mut out = Vec::new();
        for json in rows {
            out.push(serde_json::from_str(&json?)?);
        }
        Ok(out)
    }

    fn commit(&mut self, key: &SectionKey, entries: &[LogEntry]) -> AppResult<()> {
        let tx = self.conn.unchecked_transaction()?;

        tx.execute(
            "DELETE FROM log_entries
             WHERE project_id = ?1 AND hole_id = ?2 AND section = ?3",
            params![key.project_id, key.hole_id, key.section.to_db_str()],
        )?;

        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO log_entries
                    (project_id, hole_id, section, position, id, depth_from, depth_to, entry_json)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;

            for (pos, e) in entries.iter().enumerate() {
                stmt.execute(params![
                    key.project_id,
                    key.hole_id,
                    key.section.to_db_str(),
                    pos as i64,
                    e.id,
                    e.depth_from,
                    e.depth_to,
                    serde_json::to_string(e)?,
                ])?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    fn autosave(&mut self, key: &SectionKey, entries: &[LogEntry]) -> AppResult<()> {
        self.commit(key, entries)
    }
}
