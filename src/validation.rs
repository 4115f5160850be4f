use crate::constants::MAX_DESCRIPTION_LEN;
use crate::error::AppError;

/// Validate a task description. Returns the trimmed text.
pub fn validate_task_description(text: &str) -> Result<&str, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::InvalidInput {
            field: "description",
            reason: "cannot be empty".into(),
        });
    }
    if text.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(AppError::InvalidInput {
            field: "description",
            reason: format!("cannot exceed {MAX_DESCRIPTION_LEN} characters"),
        });
    }
    Ok(text)
}

/// Parse an on/off style toggle.
pub fn parse_toggle(value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(AppError::InvalidInput {
            field: "toggle",
            reason: format!("expected on/off, got '{other}'"),
        }),
    }
}
