//! Repository trait for settings persistence
//!
//! This trait defines the interface to the settings table.
//! The production implementation is in infra/storage/repositories.rs

use anyhow::Result;
use async_trait::async_trait;

use crate::contract::Setting;

/// Repository over the settings table
///
/// `name` is unique at this boundary: implementations back it with a unique
/// constraint, so at most one row exists per distinct name.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Find a setting row by name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Setting>>;

    /// Find the row for `name`, creating it with `raw_value` when absent.
    ///
    /// An existing row is returned unchanged.
    async fn find_or_create(&self, name: &str, raw_value: Option<String>) -> Result<Setting>;

    /// Create or update the row for `name` with `raw_value`.
    async fn upsert(&self, name: &str, raw_value: Option<String>) -> Result<Setting>;

    /// List rows ordered by name with pagination.
    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Setting>>;
}
