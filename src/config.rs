use crate::constants::{DATA_DIR_ENV, DB_FILE_NAME, PREFERENCES_FILE_NAME};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Where Flow keeps its database and preference document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    pub data_dir: PathBuf,
}

impl FlowConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolve the data directory: explicit override, then `FLOW_DATA_DIR`,
    /// then the platform data directory. `None` if no home directory exists.
    pub fn resolve(override_dir: Option<&Path>) -> Option<Self> {
        Self::resolve_with(override_dir, std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
    }

    fn resolve_with(override_dir: Option<&Path>, env_dir: Option<PathBuf>) -> Option<Self> {
        if let Some(dir) = override_dir {
            return Some(Self::new(dir));
        }
        if let Some(dir) = env_dir.filter(|d| !d.as_os_str().is_empty()) {
            return Some(Self::new(dir));
        }
        ProjectDirs::from("com", "example", "Flow").map(|dirs| Self::new(dirs.data_dir()))
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(PREFERENCES_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let config = FlowConfig::resolve_with(
            Some(Path::new("/tmp/flag")),
            Some(PathBuf::from("/tmp/env")),
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/flag"));
    }

    #[test]
    fn test_env_used_without_override() {
        let config = FlowConfig::resolve_with(None, Some(PathBuf::from("/tmp/env"))).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/env"));
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let config = FlowConfig::resolve_with(None, Some(PathBuf::new()));
        if let Some(config) = config {
            assert_ne!(config.data_dir, PathBuf::new());
        }
    }

    #[test]
    fn test_file_paths() {
        let config = FlowConfig::new("/data/flow");
        assert_eq!(config.db_path(), PathBuf::from("/data/flow/flow.db"));
        assert_eq!(config.preferences_path(), PathBuf::from("/data/flow/settings.json"));
    }
}
