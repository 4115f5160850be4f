use crate::db::{with_connection, Database};
use crate::error::AppError;
use crate::models::Task;
use crate::preferences::UserPreferences;
use log::info;
use std::sync::{Arc, Mutex};

use super::SettingsResponse;

pub fn get_settings(prefs: &UserPreferences) -> SettingsResponse {
    SettingsResponse::from(prefs.snapshot())
}

/// Persist the reminder flag. Reminders themselves are not scheduled yet.
pub fn set_notifications(
    prefs: &mut UserPreferences,
    enabled: bool,
) -> Result<SettingsResponse, AppError> {
    prefs.set_notifications_enabled(enabled)?;
    info!("Notifications {}", if enabled { "enabled" } else { "disabled" });
    Ok(get_settings(prefs))
}

/// Delete all history and stats. Returns the number of tasks removed.
pub fn reset_progress(db: &Arc<Mutex<Database>>) -> Result<usize, AppError> {
    let removed = with_connection(db, "reset progress", Task::delete_all)?;
    info!("Reset progress: removed {removed} tasks");
    Ok(removed)
}
