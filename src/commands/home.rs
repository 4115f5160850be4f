use crate::db::{with_connection, Database};
use crate::error::AppError;
use crate::models::Task;
use std::sync::{Arc, Mutex};

use super::{HomeState, TaskResponse};

pub const HEADLINE_ACTIVE: &str = "Ready to get back in the flow?";
pub const HEADLINE_IDLE: &str = "What is the one thing for today?";

pub fn get_home_state(db: &Arc<Mutex<Database>>) -> Result<HomeState, AppError> {
    let active = with_connection(db, "load current task", Task::find_current)?;
    Ok(HomeState {
        headline: if active.is_some() { HEADLINE_ACTIVE } else { HEADLINE_IDLE },
        active_task: active.map(TaskResponse::from),
    })
}
