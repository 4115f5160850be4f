// src/constants.rs

/// Number of days shown in the weekly activity chart
pub const WEEKLY_WINDOW_DAYS: u64 = 7;

/// Fraction of the swipe track the thumb must cross before release completes the task
pub const SWIPE_COMPLETION_RATIO: f32 = 0.85;

/// Quick picks offered on the task input screen, chosen by number
pub const TASK_SUGGESTIONS: [&str; 3] = ["Read 5 pages", "Drink water", "Reply to email"];

/// Swipe track width in terminal cells
pub const SWIPE_TRACK_CELLS: u16 = 20;

/// Swipe thumb width in terminal cells
pub const SWIPE_THUMB_CELLS: u16 = 1;

/// Focus timer refresh interval in milliseconds
pub const TIMER_TICK_MS: u64 = 1000;

/// Maximum task description length (characters)
pub const MAX_DESCRIPTION_LEN: usize = 280;

/// Current schema version, stored in `PRAGMA user_version`
pub const SCHEMA_VERSION: i32 = 1;

/// Database file name inside the data directory
pub const DB_FILE_NAME: &str = "flow.db";

/// Preference document file name inside the data directory
pub const PREFERENCES_FILE_NAME: &str = "settings.json";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "FLOW_DATA_DIR";

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "FLOW_LOG";
