use crate::error::AppError;
use crate::navigation::Route;
use crate::preferences::UserPreferences;
use log::info;

/// Where the splash screen hands off: straight home for returning users,
/// onboarding on first run.
pub fn start_route(prefs: &UserPreferences) -> Route {
    if prefs.is_onboarding_completed() {
        Route::Home
    } else {
        Route::Onboarding
    }
}

pub fn complete_onboarding(prefs: &mut UserPreferences) -> Result<(), AppError> {
    prefs.set_onboarding_completed(true)?;
    info!("Onboarding completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_first_run_goes_to_onboarding() {
        let dir = tempdir().unwrap();
        let prefs = UserPreferences::load(&dir.path().join("settings.json")).unwrap();
        assert_eq!(start_route(&prefs), Route::Onboarding);
    }

    #[test]
    fn test_onboarding_shown_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut prefs = UserPreferences::load(&path).unwrap();
        complete_onboarding(&mut prefs).unwrap();

        // Simulates an app restart.
        let prefs = UserPreferences::load(&path).unwrap();
        assert_eq!(start_route(&prefs), Route::Home);
    }
}
