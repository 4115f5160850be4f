use rusqlite::{params, Connection, OptionalExtension, Result, Row};
use serde::Serialize;

/// A single unit of work. Timestamps are Unix epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: Option<i64>,
    pub description: String,
    pub created_at: i64,
    pub is_completed: bool,
    pub completed_at: Option<i64>,
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

const COLUMNS: &str = "id, description, created_at, is_completed, completed_at";

impl Task {
    pub fn new(description: &str) -> Self {
        Self {
            id: None,
            description: description.to_string(),
            created_at: now_millis(),
            is_completed: false,
            completed_at: None,
        }
    }

    fn from_row(row: &Row<'_>) -> Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            description: row.get(1)?,
            created_at: row.get(2)?,
            is_completed: row.get::<_, i32>(3)? != 0,
            completed_at: row.get(4)?,
        })
    }

    /// Insert the task. A task that already carries an id replaces the stored row.
    pub fn save(&mut self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT OR REPLACE INTO tasks (id, description, created_at, is_completed, completed_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                self.id,
                self.description,
                self.created_at,
                i32::from(self.is_completed),
                self.completed_at,
            ],
        )?;
        if self.id.is_none() {
            self.id = Some(conn.last_insert_rowid());
        }
        Ok(())
    }

    /// The active task: the first incomplete row.
    pub fn find_current(conn: &Connection) -> Result<Option<Self>> {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM tasks WHERE is_completed = 0 ORDER BY id ASC LIMIT 1"),
            [],
            Self::from_row,
        )
        .optional()
    }

    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM tasks WHERE id = ?1"),
            [id],
            Self::from_row,
        )
        .optional()
    }

    /// Mark an incomplete task as completed at `timestamp`.
    /// Returns false if no incomplete task with that id exists.
    pub fn complete(conn: &Connection, id: i64, timestamp: i64) -> Result<bool> {
        let changed = conn.execute(
            "UPDATE tasks SET is_completed = 1, completed_at = ?1 WHERE id = ?2 AND is_completed = 0",
            params![timestamp, id],
        )?;
        Ok(changed > 0)
    }

    /// Completed tasks, most recently completed first.
    pub fn find_completed(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM tasks WHERE is_completed = 1
             ORDER BY completed_at DESC, id DESC"
        ))?;
        let rows = stmt.query_map([], Self::from_row)?;
        rows.collect()
    }

    pub fn count_completed(conn: &Connection) -> Result<i64> {
        conn.query_row(
            "SELECT COUNT(*) FROM tasks WHERE is_completed = 1",
            [],
            |row| row.get(0),
        )
    }

    /// Remove every task, completed or not. Returns the number of rows deleted.
    pub fn delete_all(conn: &Connection) -> Result<usize> {
        conn.execute("DELETE FROM tasks", [])
    }
}
