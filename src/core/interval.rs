//! One render cycle of the logging table against the database:
//! activate the section, apply a mutation, commit, audit.

use crate::config::Config;
use crate::core::persistence::SectionSink;
use crate::core::store::{IntervalLogStore, SaveReceipt};
use crate::db::log::ttlog;
use crate::db::sink::SqliteSink;
use crate::errors::AppResult;
use crate::models::field::{Field, FieldUpdate};
use crate::models::log_entry::LogRow;
use crate::models::section::Section;
use crate::models::section_key::SectionKey;
use crate::utils::colors::{RESET, color_for_interval, colorize_optional};
use crate::utils::table::{Column, Table};
use rusqlite::Connection;

/// How a command points at an interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRef {
    Id(String),
    /// 1-based row in the listing.
    Row(usize),
}

impl EntryRef {
    pub fn resolve<S: SectionSink>(
        &self,
        store: &IntervalLogStore<S>,
        key: &SectionKey,
    ) -> AppResult<String> {
        match self {
            EntryRef::Id(id) => Ok(id.clone()),
            EntryRef::Row(n) => store.id_at_row(key, *n),
        }
    }
}

pub struct IntervalLogic;

impl IntervalLogic {
    /// Store over `conn` with `key` activated.
    pub fn open<'c>(
        conn: &'c Connection,
        cfg: &Config,
        key: &SectionKey,
    ) -> AppResult<IntervalLogStore<SqliteSink<'c>>> {
        let mut store = IntervalLogStore::new(SqliteSink::new(conn), cfg.store_options());
        store.activate(key)?;
        Ok(store)
    }

    /// Append a continuing interval and commit. Returns the new id.
    pub fn add(conn: &Connection, cfg: &Config, key: &SectionKey) -> AppResult<(String, Vec<LogRow>)> {
        let mut store = Self::open(conn, cfg, key)?;

        let id = store.add_entry(key);
        store.save(key)?;

        ttlog(conn, "add", &key.to_string(), &format!("New interval {}", id))?;

        Ok((id, store.list_entries(key)))
    }

    /// Apply one cell edit. A rejected edit or an unknown id commits nothing.
    /// Returns whether the entry was found and the current rows.
    pub fn set(
        conn: &Connection,
        cfg: &Config,
        key: &SectionKey,
        target: &EntryRef,
        field: Field,
        raw: &str,
    ) -> AppResult<(bool, Vec<LogRow>)> {
        let mut store = Self::open(conn, cfg, key)?;

        let id = target.resolve(&store, key)?;
        let update = FieldUpdate::parse(field, raw)?;

        if !store.contains(key, &id) {
            return Ok((false, store.list_entries(key)));
        }

        store.update_field(key, &id, update)?;
        store.save(key)?;

        ttlog(
            conn,
            "set",
            &key.to_string(),
            &format!("{} {} = {}", id, field.name(), raw),
        )?;

        Ok((true, store.list_entries(key)))
    }

    /// Remove an interval. Returns whether one was removed and the remaining rows.
    pub fn del(
        conn: &Connection,
        cfg: &Config,
        key: &SectionKey,
        target: &EntryRef,
    ) -> AppResult<(bool, Vec<LogRow>)> {
        let mut store = Self::open(conn, cfg, key)?;

        let id = target.resolve(&store, key)?;
        let removed = store.delete_entry(key, &id);

        if removed {
            store.save(key)?;
            ttlog(conn, "del", &key.to_string(), &format!("Deleted interval {}", id))?;
        }

        Ok((removed, store.list_entries(key)))
    }

    /// Explicit save. An empty section is seeded with its starter interval first.
    pub fn save(conn: &Connection, cfg: &Config, key: &SectionKey) -> AppResult<SaveReceipt> {
        let mut store = IntervalLogStore::new(SqliteSink::new(conn), cfg.store_options());
        store.seed(key)?;

        let receipt = store.save(key)?;
        ttlog(conn, "save", &key.to_string(), &receipt.message())?;

        Ok(receipt)
    }

    pub fn list(conn: &Connection, cfg: &Config, key: &SectionKey) -> AppResult<Vec<LogRow>> {
        let store = Self::open(conn, cfg, key)?;
        Ok(store.list_entries(key))
    }

    /// Logging table for `section`: row number, depths, then the section's columns.
    pub fn render_table(section: Section, rows: &[LogRow]) -> String {
        let mut columns = vec![
            Column::new("#", 3),
            Column::new(Field::DepthFrom.label(), 8),
            Column::new(Field::DepthTo.label(), 8),
        ];
        columns.extend(section.columns().iter().map(|f| Column::new(f.label(), 6)));

        let mut table = Table::new(columns);

        for (i, row) in rows.iter().enumerate() {
            let color = color_for_interval(row.large_interval);
            let e = &row.entry;

            let mut cells = vec![
                (i + 1).to_string(),
                format!("{color}{}{RESET}", e.display(Field::DepthFrom)),
                format!("{color}{}{RESET}", e.display(Field::DepthTo)),
            ];
            cells.extend(
                section
                    .columns()
                    .iter()
                    .map(|f| colorize_optional(&e.display(*f))),
            );

            table.add_row(cells);
        }

        table.render()
    }
}
