//! Database operations for completed time entries.
//!
//! Entries are immutable once inserted: the timer engine appends exactly
//! one row per stop transition and later only reads them back for status
//! displays and goal aggregation. The connection is shared behind a mutex
//! because the safety monitor loop and user commands may both hold the
//! store at the same time.

use crate::db::db::Db;
use crate::libs::entry::CompletedEntry;
use crate::libs::ledger::PausePeriod;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use parking_lot::Mutex;
use rusqlite::{params, Connection};
use std::sync::Arc;

const SCHEMA_ENTRIES: &str = "CREATE TABLE IF NOT EXISTS entries (
    id INTEGER NOT NULL PRIMARY KEY,
    category_id TEXT NOT NULL,
    subcategory_id TEXT NOT NULL,
    start TIMESTAMP NOT NULL,
    end TIMESTAMP NOT NULL,
    duration INTEGER NOT NULL,
    description TEXT,
    pause_periods TEXT,
    is_pause INTEGER NOT NULL DEFAULT 0
)";

const INSERT_ENTRY: &str = "INSERT INTO entries
    (category_id, subcategory_id, start, end, duration, description, pause_periods, is_pause)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

const SELECT_DAILY_ENTRIES: &str = "SELECT category_id, subcategory_id, start, end, duration, description, pause_periods, is_pause
    FROM entries WHERE date(start) = date(?1) ORDER BY start";

const SELECT_ENTRIES_SINCE: &str = "SELECT category_id, subcategory_id, start, end, duration, description, pause_periods, is_pause
    FROM entries WHERE start >= ?1 ORDER BY start";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Store for completed entries with a thread-safe connection.
pub struct Entries {
    pub conn: Arc<Mutex<Connection>>,
}

impl Entries {
    pub fn new() -> Result<Entries> {
        let db_conn = Db::new()?.conn;
        db_conn.execute(SCHEMA_ENTRIES, [])?;

        Ok(Entries {
            conn: Arc::new(Mutex::new(db_conn)),
        })
    }

    /// Appends one completed entry.
    pub fn insert(&self, entry: &CompletedEntry) -> Result<()> {
        let conn_guard = self.conn.lock();
        conn_guard.execute(
            INSERT_ENTRY,
            params![
                entry.category_id,
                entry.subcategory_id,
                entry.start_time.format(TIMESTAMP_FORMAT).to_string(),
                entry.end_time.format(TIMESTAMP_FORMAT).to_string(),
                entry.duration,
                entry.description,
                serde_json::to_string(&entry.pause_periods)?,
                entry.is_pause as i64,
            ],
        )?;
        Ok(())
    }

    /// All entries whose start falls on the given date, in start order.
    pub fn fetch_daily(&self, date: NaiveDate) -> Result<Vec<CompletedEntry>> {
        self.fetch_with(SELECT_DAILY_ENTRIES, &date.format("%Y-%m-%d").to_string())
    }

    /// All entries starting at or after the given instant, in start order.
    ///
    /// Used by goal aggregation, which re-filters by its exact period
    /// window in memory.
    pub fn fetch_since(&self, start: NaiveDateTime) -> Result<Vec<CompletedEntry>> {
        self.fetch_with(SELECT_ENTRIES_SINCE, &start.format(TIMESTAMP_FORMAT).to_string())
    }

    fn fetch_with(&self, sql: &str, param: &str) -> Result<Vec<CompletedEntry>> {
        let conn_guard = self.conn.lock();
        let mut stmt = conn_guard.prepare(sql)?;
        let entry_iter = stmt.query_map([param], |row| {
            let start_str: String = row.get(2)?;
            let end_str: String = row.get(3)?;
            let periods_json: Option<String> = row.get(6)?;

            Ok(CompletedEntry {
                category_id: row.get(0)?,
                subcategory_id: row.get(1)?,
                start_time: NaiveDateTime::parse_from_str(&start_str, TIMESTAMP_FORMAT).unwrap(),
                end_time: NaiveDateTime::parse_from_str(&end_str, TIMESTAMP_FORMAT).unwrap(),
                duration: row.get(4)?,
                description: row.get(5)?,
                pause_periods: periods_json
                    .map(|json| serde_json::from_str::<Vec<PausePeriod>>(&json).unwrap_or_default())
                    .unwrap_or_default(),
                is_pause: row.get::<_, i64>(7)? != 0,
            })
        })?;

        let mut entries = Vec::new();
        for entry_result in entry_iter {
            entries.push(entry_result?);
        }

        Ok(entries)
    }
}
