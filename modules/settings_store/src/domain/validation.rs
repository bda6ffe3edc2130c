//! Name validation for settings

use crate::contract::SettingsError;

/// Validate a setting name.
///
/// Names must contain at least one non-whitespace character; uniqueness is
/// enforced by the storage layer, not here.
pub fn validate_name(name: &str) -> Result<(), SettingsError> {
    if name.trim().is_empty() {
        return Err(SettingsError::Validation {
            message: "name cannot be empty".to_string(),
        });
    }
    Ok(())
}
