//! Byte cache trait for settings lookups
//!
//! A process- or cluster-wide key/value cache with get/set by string key.
//! No expiry or size bound is part of the contract; entries live until
//! overwritten. Implementations must tolerate concurrent access.

use anyhow::Result;
use async_trait::async_trait;

/// Write-through byte cache keyed by string
#[async_trait]
pub trait SettingsCache: Send + Sync {
    /// Get cached bytes for a key; `None` when the key is not cached.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store bytes under a key, overwriting any previous entry.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;
}
