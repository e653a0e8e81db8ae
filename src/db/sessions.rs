//! Local persistence for the at-most-one timer session.
//!
//! The session table holds a single row (`id = 1`) that is replaced on
//! every transition and deleted when the timer returns to idle. The pause
//! ledger and the optional work/break cycle are stored as JSON columns so
//! they round-trip exactly; timestamps are stored as local-time strings at
//! whole-second precision.

use crate::db::db::Db;
use crate::libs::ledger::PausePeriod;
use crate::libs::timer::{PhaseCycle, TimerSession};
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA_SESSION: &str = "CREATE TABLE IF NOT EXISTS session (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    category_id TEXT NOT NULL,
    subcategory_id TEXT NOT NULL,
    start TIMESTAMP NOT NULL,
    is_paused INTEGER NOT NULL,
    pause_start TIMESTAMP,
    pause_periods TEXT NOT NULL,
    total_paused INTEGER NOT NULL,
    cycle TEXT
)";

const UPSERT_SESSION: &str = "INSERT OR REPLACE INTO session
    (id, category_id, subcategory_id, start, is_paused, pause_start, pause_periods, total_paused, cycle)
    VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

const SELECT_SESSION: &str = "SELECT category_id, subcategory_id, start, is_paused, pause_start, pause_periods, total_paused, cycle
    FROM session WHERE id = 1";

const DELETE_SESSION: &str = "DELETE FROM session WHERE id = 1";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct Sessions {
    conn: Connection,
}

impl Sessions {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_SESSION, [])?;
        Ok(Sessions { conn: db.conn })
    }

    /// Replaces the persisted session with the given state.
    pub fn save(&self, session: &TimerSession) -> Result<()> {
        self.conn.execute(
            UPSERT_SESSION,
            params![
                session.category_id,
                session.subcategory_id,
                session.start_time.format(TIMESTAMP_FORMAT).to_string(),
                session.is_paused as i64,
                session.pause_start_time.map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
                serde_json::to_string(&session.pause_periods)?,
                session.total_paused_secs,
                session.cycle.as_ref().map(serde_json::to_string).transpose()?,
            ],
        )?;
        Ok(())
    }

    /// Fetches the persisted session, if one exists.
    pub fn fetch(&self) -> Result<Option<TimerSession>> {
        let row = self
            .conn
            .query_row(SELECT_SESSION, [], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, Option<String>>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, i64>(6)?,
                    row.get::<_, Option<String>>(7)?,
                ))
            })
            .optional()?;

        let Some((category_id, subcategory_id, start, is_paused, pause_start, periods_json, total_paused, cycle_json)) = row else {
            return Ok(None);
        };

        let pause_periods: Vec<PausePeriod> = serde_json::from_str(&periods_json)?;
        let cycle: Option<PhaseCycle> = cycle_json.as_deref().map(serde_json::from_str).transpose()?;

        Ok(Some(TimerSession {
            category_id,
            subcategory_id,
            start_time: NaiveDateTime::parse_from_str(&start, TIMESTAMP_FORMAT)?,
            is_paused: is_paused != 0,
            pause_start_time: pause_start
                .map(|s| NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT))
                .transpose()?,
            pause_periods,
            total_paused_secs: total_paused,
            cycle,
        }))
    }

    /// Deletes the persisted session, if any.
    pub fn clear(&self) -> Result<()> {
        self.conn.execute(DELETE_SESSION, [])?;
        Ok(())
    }
}
