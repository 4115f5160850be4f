//! Shared test utilities for Flow.
//!
//! This module provides common setup functions used across test modules.

#![cfg(test)]

use crate::db::{migrations, Database};
use crate::models::Task;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use tempfile::{tempdir, TempDir};

/// Create a temporary test database with migrations applied.
///
/// Returns a tuple of (Database, TempDir). The TempDir must be kept alive
/// for the duration of the test to prevent the database file from being deleted.
pub fn setup_test_db() -> (Database, TempDir) {
    let dir = tempdir().expect("Failed to create temp directory for test DB");
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).expect("Failed to open test database");
    migrations::run(db.connection()).expect("Failed to run migrations on test DB");
    (db, dir)
}

/// Poison the shared database lock by panicking while holding it.
pub fn poison(db: &Arc<Mutex<Database>>) {
    let shared = Arc::clone(db);
    let _ = std::thread::spawn(move || {
        let _guard = shared.lock().unwrap();
        panic!("poison the database lock");
    })
    .join();
    assert!(db.is_poisoned());
}

/// Same as [`setup_test_db`], wrapped for code that shares the database.
pub fn setup_shared_db() -> (Arc<Mutex<Database>>, TempDir) {
    let (db, dir) = setup_test_db();
    (Arc::new(Mutex::new(db)), dir)
}

/// Insert a task and immediately mark it completed at `completed_at` (epoch ms).
pub fn insert_completed(conn: &Connection, description: &str, completed_at: i64) -> Task {
    let mut task = Task::new(description);
    task.save(conn).expect("Failed to save task");
    let id = task.id.expect("saved task has an id");
    Task::complete(conn, id, completed_at).expect("Failed to complete task");
    Task::find_by_id(conn, id)
        .expect("Failed to reload task")
        .expect("completed task exists")
}
