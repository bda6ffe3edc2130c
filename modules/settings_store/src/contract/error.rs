//! Contract error types
//!
//! These errors are transport-agnostic and surfaced to callers as-is.

/// Settings store errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Validation error (empty name, uniqueness violation on create)
    Validation {
        /// Validation error message
        message: String,
    },
    /// Internal error (storage failure)
    Internal,
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { message } => {
                write!(f, "Validation error: {}", message)
            }
            Self::Internal => {
                write!(f, "Internal error")
            }
        }
    }
}

impl std::error::Error for SettingsError {}
