use crate::constants::TASK_SUGGESTIONS;
use crate::db::{with_connection, Database};
use crate::error::AppError;
use crate::models::Task;
use crate::validation::validate_task_description;
use log::info;
use std::sync::{Arc, Mutex};

use super::TaskResponse;

/// Save a new task from user input.
///
/// Only one task is worked on at a time, so submission is refused while
/// another task is still incomplete.
pub fn submit_task(db: &Arc<Mutex<Database>>, text: &str) -> Result<TaskResponse, AppError> {
    let description = validate_task_description(text)?;

    let db = crate::safe_lock(db, "submit task");
    let conn = db.connection();

    if let Some(active) = Task::find_current(conn)? {
        return Err(AppError::TaskAlreadyActive {
            description: active.description,
        });
    }

    let mut task = Task::new(description);
    task.save(conn)?;
    info!("Created task {}", task.id.unwrap_or(0));

    Ok(TaskResponse::from(task))
}

/// Quick pick for a 1-based choice such as `"2"`.
pub fn suggestion(choice: &str) -> Option<&'static str> {
    let index = choice.trim().parse::<usize>().ok()?.checked_sub(1)?;
    TASK_SUGGESTIONS.get(index).copied()
}

pub fn get_current_task(db: &Arc<Mutex<Database>>) -> Result<Option<TaskResponse>, AppError> {
    let task = with_connection(db, "load current task", Task::find_current)?;
    Ok(task.map(TaskResponse::from))
}

pub fn get_completed_tasks(db: &Arc<Mutex<Database>>) -> Result<Vec<TaskResponse>, AppError> {
    let tasks = with_connection(db, "load completed tasks", Task::find_completed)?;
    Ok(tasks.into_iter().map(TaskResponse::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{poison, setup_shared_db};

    #[test]
    fn test_submit_then_current() {
        let (db, _dir) = setup_shared_db();

        let created = submit_task(&db, "  Fix the flaky test  ").unwrap();
        assert_eq!(created.description, "Fix the flaky test");
        assert!(!created.is_completed);

        let current = get_current_task(&db).unwrap().unwrap();
        assert_eq!(current, created);
    }

    #[test]
    fn test_submit_rejects_blank() {
        let (db, _dir) = setup_shared_db();
        assert!(matches!(
            submit_task(&db, "   "),
            Err(AppError::InvalidInput { field: "description", .. })
        ));
        assert!(get_current_task(&db).unwrap().is_none());
    }

    #[test]
    fn test_submit_rejects_second_active_task() {
        let (db, _dir) = setup_shared_db();
        submit_task(&db, "first").unwrap();

        let err = submit_task(&db, "second").unwrap_err();
        assert!(matches!(
            err,
            AppError::TaskAlreadyActive { ref description } if description == "first"
        ));
    }

    #[test]
    fn test_completed_tasks_listed() {
        let (db, _dir) = setup_shared_db();
        let created = submit_task(&db, "finish me").unwrap();
        {
            let guard = db.lock().unwrap();
            Task::complete(guard.connection(), created.id, 42).unwrap();
        }

        let done = get_completed_tasks(&db).unwrap();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].completed_at, Some(42));
        assert!(get_current_task(&db).unwrap().is_none());

        // With the first one done, a new task can be started.
        assert!(submit_task(&db, "next").is_ok());
    }

    #[test]
    fn test_submit_after_poisoned_lock() {
        let (db, _dir) = setup_shared_db();
        poison(&db);

        let created = submit_task(&db, "Carry on").unwrap();
        assert_eq!(get_current_task(&db).unwrap(), Some(created));
    }

    #[test]
    fn test_suggestion_by_number() {
        assert_eq!(suggestion("1"), Some("Read 5 pages"));
        assert_eq!(suggestion(" 3 "), Some("Reply to email"));
        assert_eq!(suggestion("0"), None);
        assert_eq!(suggestion("4"), None);
        assert_eq!(suggestion("Read"), None);
    }
}
