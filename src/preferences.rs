//! Key-value preference store.
//!
//! Holds the two user flags as a small JSON document next to the database.
//! A missing document means every flag is at its default (`false`).

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub onboarding_completed: bool,
    pub notifications_enabled: bool,
}

pub struct UserPreferences {
    path: PathBuf,
    values: Preferences,
}

impl UserPreferences {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let values = match fs::read_to_string(path) {
            Ok(raw) if raw.trim().is_empty() => Preferences::default(),
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Preferences::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    pub fn snapshot(&self) -> Preferences {
        self.values
    }

    pub fn is_onboarding_completed(&self) -> bool {
        self.values.onboarding_completed
    }

    pub fn set_onboarding_completed(&mut self, completed: bool) -> Result<(), AppError> {
        self.update(|p| p.onboarding_completed = completed)
    }

    pub fn notifications_enabled(&self) -> bool {
        self.values.notifications_enabled
    }

    pub fn set_notifications_enabled(&mut self, enabled: bool) -> Result<(), AppError> {
        self.update(|p| p.notifications_enabled = enabled)
    }

    fn update<F: FnOnce(&mut Preferences)>(&mut self, edit: F) -> Result<(), AppError> {
        let mut next = self.values;
        edit(&mut next);
        if next == self.values && self.path.exists() {
            return Ok(());
        }
        self.persist(&next)?;
        self.values = next;
        Ok(())
    }

    // Write to a sibling temp file, then rename over the original.
    fn persist(&self, values: &Preferences) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(values)?)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("Saved preferences to {}", self.path.display());
        Ok(())
    }
}
