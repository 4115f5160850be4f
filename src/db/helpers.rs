// src/db/helpers.rs

use crate::db::Database;
use crate::error::AppError;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// Execute a database operation with poison-tolerant locking and error logging.
///
/// # Example
/// ```ignore
/// with_connection(&db, "load current task", |conn| {
///     Task::find_current(conn)
/// })
/// ```
pub fn with_connection<F, T>(
    db: &Arc<Mutex<Database>>,
    operation: &str,
    f: F,
) -> Result<T, AppError>
where
    F: FnOnce(&Connection) -> rusqlite::Result<T>,
{
    let db = crate::safe_lock(db, operation);

    f(db.connection()).map_err(|e| {
        log::error!("Failed to {operation}: {e}");
        AppError::Database(e)
    })
}
