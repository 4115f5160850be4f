pub mod app;
pub mod commands;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod focus;
pub mod models;
pub mod navigation;
pub mod preferences;
pub mod render;
pub mod stats;
#[cfg(test)]
mod test_utils;
pub mod validation;

use crate::config::FlowConfig;
use crate::db::{migrations, Database};
use crate::error::AppError;
use crate::preferences::UserPreferences;
use log::{error, info, warn};
use std::sync::{Arc, Mutex, MutexGuard};

/// Error type for Flow initialization failures
#[derive(Debug)]
pub enum InitError {
    NoProjectDirs,
    DataDirCreation(std::io::Error),
    DatabaseOpen(rusqlite::Error),
    Migration(rusqlite::Error),
    Preferences(AppError),
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitError::NoProjectDirs => write!(f, "Could not determine project directories"),
            InitError::DataDirCreation(e) => write!(f, "Could not create data directory: {e}"),
            InitError::DatabaseOpen(e) => write!(f, "Failed to open database: {e}"),
            InitError::Migration(e) => write!(f, "Failed to run database migrations: {e}"),
            InitError::Preferences(e) => write!(f, "Failed to load preferences: {e}"),
        }
    }
}

impl std::error::Error for InitError {}

/// Lock a mutex, recovering from poisoning if necessary
pub fn safe_lock<'a, T>(mutex: &'a Mutex<T>, context: &str) -> MutexGuard<'a, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("{context} mutex was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

/// The opened application: shared task store plus the preference store.
pub struct FlowApp {
    pub config: FlowConfig,
    pub db: Arc<Mutex<Database>>,
    pub prefs: UserPreferences,
}

impl FlowApp {
    pub fn open(config: FlowConfig) -> Result<Self, InitError> {
        std::fs::create_dir_all(&config.data_dir).map_err(|e| {
            error!("Could not create {}: {e}", config.data_dir.display());
            InitError::DataDirCreation(e)
        })?;

        let db = Database::open(&config.db_path()).map_err(|e| {
            error!("Failed to open database: {e}");
            InitError::DatabaseOpen(e)
        })?;

        migrations::run(db.connection()).map_err(|e| {
            error!("Failed to run migrations: {e}");
            InitError::Migration(e)
        })?;

        let prefs = UserPreferences::load(&config.preferences_path()).map_err(|e| {
            error!("Failed to load preferences: {e}");
            InitError::Preferences(e)
        })?;

        info!("Opened Flow data in {}", config.data_dir.display());
        Ok(Self {
            config,
            db: Arc::new(Mutex::new(db)),
            prefs,
        })
    }

    /// Open using the resolved data directory (flag, environment, platform default).
    pub fn open_default(override_dir: Option<&std::path::Path>) -> Result<Self, InitError> {
        let config = FlowConfig::resolve(override_dir).ok_or(InitError::NoProjectDirs)?;
        Self::open(config)
    }
}
