// src/commands/dtos.rs

use crate::models::Task;
use crate::preferences::Preferences;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskResponse {
    pub id: i64,
    pub description: String,
    pub created_at: i64,
    pub is_completed: bool,
    pub completed_at: Option<i64>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.unwrap_or(0),
            description: task.description,
            created_at: task.created_at,
            is_completed: task.is_completed,
            completed_at: task.completed_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeState {
    pub headline: &'static str,
    pub active_task: Option<TaskResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusStateResponse {
    pub task: Option<TaskResponse>,
    pub timer_text: String,
    pub elapsed_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsResponse {
    pub notifications_enabled: bool,
    pub onboarding_completed: bool,
    pub version: &'static str,
}

impl From<Preferences> for SettingsResponse {
    fn from(prefs: Preferences) -> Self {
        Self {
            notifications_enabled: prefs.notifications_enabled,
            onboarding_completed: prefs.onboarding_completed,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
