//! Statistics derived from completion history.
//!
//! Nothing here is stored: every figure is recomputed from the completed
//! tasks. Callers pass `today` and the time zone so calendar-day bucketing is
//! deterministic under test.

use crate::constants::WEEKLY_WINDOW_DAYS;
use crate::models::Task;
use chrono::{Datelike, Days, NaiveDate, TimeZone, Weekday};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsState {
    pub current_streak: u32,
    pub total_tasks: usize,
    pub weekly_activity: Vec<DailyActivity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyActivity {
    pub date: NaiveDate,
    /// One-letter English weekday label: M, T, W, T, F, S, S.
    pub day_name: String,
    pub count: usize,
    pub is_today: bool,
}

/// Local calendar date of an epoch-millisecond timestamp.
pub fn local_date<Tz: TimeZone>(millis: i64, tz: &Tz) -> Option<NaiveDate> {
    tz.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.date_naive())
}

/// Distinct local dates on which at least one task was completed.
pub fn completion_dates<Tz: TimeZone>(tasks: &[Task], tz: &Tz) -> BTreeSet<NaiveDate> {
    tasks
        .iter()
        .filter_map(|t| t.completed_at)
        .filter_map(|ms| local_date(ms, tz))
        .collect()
}

/// Consecutive days with a completion, counted backward from `today`.
///
/// Today counts if present. Counting then continues from yesterday, so a
/// streak that ended yesterday is still alive until today is over.
pub fn current_streak(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = u32::from(dates.contains(&today));

    let mut check = today;
    while let Some(previous) = check.checked_sub_days(Days::new(1)) {
        if !dates.contains(&previous) {
            break;
        }
        streak += 1;
        check = previous;
    }
    streak
}

/// Completions per day for the trailing week, oldest first, ending today.
pub fn weekly_activity<Tz: TimeZone>(
    tasks: &[Task],
    today: NaiveDate,
    tz: &Tz,
) -> Vec<DailyActivity> {
    let dates: Vec<NaiveDate> = tasks
        .iter()
        .filter_map(|t| t.completed_at)
        .filter_map(|ms| local_date(ms, tz))
        .collect();

    (0..WEEKLY_WINDOW_DAYS)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|date| DailyActivity {
            date,
            day_name: weekday_letter(date.weekday()).to_string(),
            count: dates.iter().filter(|d| **d == date).count(),
            is_today: date == today,
        })
        .collect()
}

pub fn calculate_stats<Tz: TimeZone>(tasks: &[Task], today: NaiveDate, tz: &Tz) -> StatsState {
    let completed: Vec<Task> = tasks.iter().filter(|t| t.is_completed).cloned().collect();
    let dates = completion_dates(&completed, tz);

    StatsState {
        current_streak: current_streak(&dates, today),
        total_tasks: completed.len(),
        weekly_activity: weekly_activity(&completed, today, tz),
    }
}

fn weekday_letter(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "M",
        Weekday::Tue | Weekday::Thu => "T",
        Weekday::Wed => "W",
        Weekday::Fri => "F",
        Weekday::Sat | Weekday::Sun => "S",
    }
}
