pub mod swipe;
pub mod timer;

use crate::db::Database;
use crate::error::AppError;
use crate::models::{now_millis, Task};
use log::info;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Format elapsed seconds as `MM:SS`. Minutes keep counting past an hour.
pub fn format_timer(elapsed_secs: u64) -> String {
    let minutes = elapsed_secs / 60;
    let seconds = elapsed_secs % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// View state for focus mode: the active task and a clock that starts when
/// focus mode is entered.
pub struct FocusManager {
    db: Arc<Mutex<Database>>,
    started_at: Instant,
}

impl FocusManager {
    pub fn new(db: Arc<Mutex<Database>>) -> Self {
        Self {
            db,
            started_at: Instant::now(),
        }
    }

    fn lock_db(&self) -> MutexGuard<'_, Database> {
        crate::safe_lock(&self.db, "FocusManager database")
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn timer_text(&self) -> String {
        format_timer(self.elapsed().as_secs())
    }

    pub fn current_task(&self) -> Result<Option<Task>, AppError> {
        let db = self.lock_db();
        Ok(Task::find_current(db.connection())?)
    }

    /// Mark the given task completed now and return it.
    pub fn complete_task(&self, task_id: i64) -> Result<Task, AppError> {
        let db = self.lock_db();
        let conn = db.connection();

        if !Task::complete(conn, task_id, now_millis())? {
            return Err(AppError::NotFound { entity: "Active task" });
        }
        let task = Task::find_by_id(conn, task_id)?.ok_or(AppError::NotFound { entity: "Task" })?;

        info!(
            "Completed task {task_id} after {} in focus mode",
            format_timer(self.elapsed().as_secs())
        );
        Ok(task)
    }

    pub fn complete_current(&self) -> Result<Task, AppError> {
        let id = self
            .current_task()?
            .and_then(|t| t.id)
            .ok_or(AppError::NoActiveTask)?;
        self.complete_task(id)
    }
}
