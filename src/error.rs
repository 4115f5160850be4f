use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("No active task")]
    NoActiveTask,

    #[error("A task is already in progress: '{description}'")]
    TaskAlreadyActive { description: String },

    #[error("Cannot navigate from '{from}' to '{to}'")]
    InvalidRoute { from: &'static str, to: &'static str },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Preferences error: {0}")]
    Preferences(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let e = AppError::InvalidInput {
            field: "description",
            reason: "cannot be empty".into(),
        };
        assert_eq!(e.to_string(), "Invalid description: cannot be empty");
    }

    #[test]
    fn test_database_error_converts() {
        let e: AppError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(e, AppError::Database(_)));
    }
}
