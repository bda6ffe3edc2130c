//! Client trait for in-process consumers
//!
//! This trait defines the API other components use to interact with the
//! settings store. NO HTTP - direct function calls.

use async_trait::async_trait;

use super::{error::SettingsError, model::Setting, value::SettingValue};

/// Settings store API for in-process consumers
#[async_trait]
pub trait SettingsApi: Send + Sync {
    /// Get a setting value by name; `None` when no row exists.
    async fn get(&self, name: &str) -> Result<Option<SettingValue>, SettingsError>;

    /// Get a setting value, creating the row with `default` when absent.
    ///
    /// Never returns absent; a row for `name` exists afterwards.
    async fn get_or_set(
        &self,
        name: &str,
        default: SettingValue,
    ) -> Result<SettingValue, SettingsError>;

    /// Create or update a setting.
    async fn set(&self, name: &str, value: SettingValue) -> Result<Setting, SettingsError>;

    /// List settings page by page, ordered by name (first page is 1).
    async fn list(&self, page: u64) -> Result<Vec<Setting>, SettingsError>;
}
