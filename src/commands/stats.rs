use crate::db::{with_connection, Database};
use crate::error::AppError;
use crate::models::Task;
use crate::stats::{calculate_stats, StatsState};
use chrono::{Local, NaiveDate, TimeZone};
use std::sync::{Arc, Mutex};

pub fn get_stats<Tz: TimeZone>(
    db: &Arc<Mutex<Database>>,
    today: NaiveDate,
    tz: &Tz,
) -> Result<StatsState, AppError> {
    let completed = with_connection(db, "load statistics", Task::find_completed)?;
    Ok(calculate_stats(&completed, today, tz))
}

/// Statistics in the system time zone as of now.
pub fn get_stats_now(db: &Arc<Mutex<Database>>) -> Result<StatsState, AppError> {
    let today = Local::now().date_naive();
    get_stats(db, today, &Local)
}
