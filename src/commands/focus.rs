use crate::error::AppError;
use crate::focus::FocusManager;

use super::{FocusStateResponse, TaskResponse};

pub fn get_focus_state(focus_manager: &FocusManager) -> Result<FocusStateResponse, AppError> {
    let task = focus_manager.current_task()?;
    Ok(FocusStateResponse {
        task: task.map(TaskResponse::from),
        timer_text: focus_manager.timer_text(),
        elapsed_secs: focus_manager.elapsed().as_secs(),
    })
}

pub fn complete_focus_task(focus_manager: &FocusManager) -> Result<TaskResponse, AppError> {
    let task = focus_manager.complete_current()?;
    Ok(TaskResponse::from(task))
}
