use crate::db::db::Db;
use crate::libs::goal::{GoalTarget, PeriodKind};
use anyhow::Result;
use rusqlite::{params, Connection};

const SCHEMA_GOALS: &str = "CREATE TABLE IF NOT EXISTS goals (
    id INTEGER NOT NULL PRIMARY KEY,
    category_id TEXT NOT NULL,
    subcategory_id TEXT,
    period TEXT NOT NULL,
    target_minutes INTEGER NOT NULL
)";
const INSERT_GOAL: &str = "INSERT INTO goals (category_id, subcategory_id, period, target_minutes) VALUES (?1, ?2, ?3, ?4)";
const SELECT_GOALS: &str = "SELECT id, category_id, subcategory_id, period, target_minutes FROM goals ORDER BY id";
const DELETE_GOAL: &str = "DELETE FROM goals WHERE id = ?";

pub struct Goals {
    conn: Connection,
}

impl Goals {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_GOALS, [])?;
        Ok(Goals { conn: db.conn })
    }

    pub fn insert(&self, goal: &GoalTarget) -> Result<()> {
        self.conn.execute(
            INSERT_GOAL,
            params![goal.category_id, goal.subcategory_id, goal.period.label(), goal.target_minutes],
        )?;
        Ok(())
    }

    pub fn fetch_all(&self) -> Result<Vec<GoalTarget>> {
        let mut stmt = self.conn.prepare(SELECT_GOALS)?;
        let goal_iter = stmt.query_map([], |row| {
            let period: String = row.get(3)?;
            Ok(GoalTarget {
                id: row.get(0)?,
                category_id: row.get(1)?,
                subcategory_id: row.get(2)?,
                period: match period.as_str() {
                    "weekly" => PeriodKind::Weekly,
                    _ => PeriodKind::Daily,
                },
                target_minutes: row.get(4)?,
            })
        })?;

        let mut goals = Vec::new();
        for goal in goal_iter {
            goals.push(goal?);
        }
        Ok(goals)
    }

    /// Deletes a goal by id, returning whether a row was removed.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let deleted = self.conn.execute(DELETE_GOAL, params![id])?;
        Ok(deleted > 0)
    }
}
