//! Plain-text renderings of each screen.

use crate::commands::{FocusStateResponse, HomeState, SettingsResponse, TaskResponse};
use crate::constants::TASK_SUGGESTIONS;
use crate::focus::format_timer;
use crate::focus::swipe::SwipeTrack;
use crate::stats::StatsState;
use chrono::{Local, TimeZone};
use std::fmt::Write as _;

/// Rows between the focus timer and the input prompt in [`focus`].
const FOCUS_TIMER_ROWS_ABOVE_PROMPT: u16 = 4;

/// Height of the tallest bar in the weekly chart, in rows.
const CHART_HEIGHT: usize = 5;

pub fn splash() -> String {
    String::from("\n   ~ flow ~\n")
}

pub fn onboarding() -> String {
    [
        "",
        "  Welcome to Flow",
        "  Find your focus, gently.",
        "",
        "  Press Enter to begin your journey.",
    ]
    .join("\n")
}

pub fn home(state: &HomeState) -> String {
    let mut out = format!("\n  {}\n", state.headline);
    if let Some(task) = &state.active_task {
        let _ = writeln!(out, "  Current: {}", task.description);
        out.push_str("\n  [f] focus   [s] stats   [o] settings   [q] quit\n");
    } else {
        out.push_str("\n  [n] new task   [s] stats   [o] settings   [q] quit\n");
    }
    out
}

pub fn task_input() -> String {
    let mut out = String::from("\n  What is the one thing for today?\n\n ");
    for (n, text) in (1..).zip(TASK_SUGGESTIONS) {
        let _ = write!(out, " [{n}] {text}");
    }
    out.push_str("\n  (type a task or pick a number, empty line to go back)\n");
    out
}

/// Text swipe track, e.g. `[=====>              ] Slide to Melt`.
pub fn swipe_track(track: &SwipeTrack, cells: u16) -> String {
    let cells = usize::from(cells);
    let travel = cells.saturating_sub(1);
    let filled = cell_position(track.progress(), travel);
    let mut bar = String::with_capacity(cells + 2);
    bar.push('[');
    bar.push_str(&"=".repeat(filled));
    bar.push(if track.is_completed() { '✓' } else { '>' });
    bar.push_str(&" ".repeat(travel - filled));
    bar.push(']');
    format!("{bar} Slide to Melt")
}

pub fn focus(state: &FocusStateResponse, track: &SwipeTrack, cells: u16) -> String {
    let Some(task) = &state.task else {
        return String::from("\n  Nothing to focus on. Add a task first.\n");
    };
    format!(
        "\n  {}\n\n  {}\n\n  {}\n  \
         type '>' then Enter to slide, 'done' to finish, empty line or 'b' to go back\n",
        task.description,
        state.timer_text,
        swipe_track(track, cells),
    )
}

/// Redraw only the timer row of the focus screen from the prompt line,
/// leaving the cursor and any typed input where they were.
pub fn focus_clock(elapsed_secs: u64) -> String {
    format!(
        "\x1b7\x1b[{FOCUS_TIMER_ROWS_ABOVE_PROMPT}A\r\x1b[2K  {}\x1b8",
        format_timer(elapsed_secs)
    )
}

pub fn focus_complete(task: &TaskResponse) -> String {
    format!("\n  Melted away: {}\n", task.description)
}

pub fn stats(state: &StatsState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n  Current streak: {} day(s)", state.current_streak);
    let _ = writeln!(out, "  Tasks completed: {}\n", state.total_tasks);

    let peak = state
        .weekly_activity
        .iter()
        .map(|d| d.count)
        .max()
        .unwrap_or(0)
        .max(1);

    for row in (1..=CHART_HEIGHT).rev() {
        out.push_str("  ");
        for day in &state.weekly_activity {
            let height = scaled_height(day.count, peak);
            out.push_str(if height >= row { " # " } else { "   " });
        }
        out.push('\n');
    }
    out.push_str("  ");
    for day in &state.weekly_activity {
        if day.is_today {
            let _ = write!(out, "[{}]", day.day_name);
        } else {
            let _ = write!(out, " {} ", day.day_name);
        }
    }
    out.push_str("\n  ");
    for day in &state.weekly_activity {
        let _ = write!(out, "{:^3}", day.count);
    }
    out.push('\n');
    out
}

pub fn settings(state: &SettingsResponse) -> String {
    let notifications = if state.notifications_enabled { "on" } else { "off" };
    format!(
        "\n  Settings\n\n  [n] Notifications: {notifications} (daily reminders coming soon)\n  \
         About Flow: version {}\n\n  DANGER ZONE\n  [r] Reset progress (delete all history & stats)\n\n  [b] back\n",
        state.version,
    )
}

pub fn history<Tz: TimeZone>(tasks: &[TaskResponse], tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if tasks.is_empty() {
        return String::from("  No completed tasks yet.\n");
    }
    let mut out = String::new();
    for task in tasks {
        let when = task
            .completed_at
            .and_then(|ms| tz.timestamp_millis_opt(ms).single())
            .map_or_else(|| String::from("unknown"), |dt| dt.format("%Y-%m-%d %H:%M").to_string());
        let _ = writeln!(out, "  {when}  {}", task.description);
    }
    out
}

pub fn history_local(tasks: &[TaskResponse]) -> String {
    history(tasks, &Local)
}

fn cell_position(progress: f32, travel: usize) -> usize {
    let Ok(travel_cells) = u16::try_from(travel) else {
        return 0;
    };
    let target = (progress.clamp(0.0, 1.0) * f32::from(travel_cells)).round();
    (0..=travel_cells)
        .rev()
        .find(|n| f32::from(*n) <= target)
        .map_or(0, usize::from)
}

fn scaled_height(count: usize, peak: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (count * CHART_HEIGHT).div_ceil(peak).max(1)
}
