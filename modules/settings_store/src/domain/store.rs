//! Domain store - the cache-coherent read/write protocol

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::StoreConfig;
use crate::contract::value;
use crate::contract::{Setting, SettingValue, SettingsApi, SettingsError};

use super::cache::SettingsCache;
use super::repository::SettingsRepository;
use super::validation;

/// Cache-coherent store over a settings repository and a byte cache.
///
/// Reads consult the cache first and fall through to the repository,
/// repopulating the cache afterwards; a miss caches a negative marker so a
/// missing name is looked up at most once. Writes persist first and then
/// overwrite the cache entry. Cache failures are logged and treated as
/// misses, never surfaced to the caller.
///
/// No lock spans the repository and the cache: two writers racing on the
/// same name can leave the table with one value and the cache with the
/// other until the next write.
pub struct SettingStore {
    repo: Arc<dyn SettingsRepository>,
    cache: Arc<dyn SettingsCache>,
    config: StoreConfig,
}

impl SettingStore {
    /// Create a new store with the default configuration.
    pub fn new(repo: Arc<dyn SettingsRepository>, cache: Arc<dyn SettingsCache>) -> Self {
        Self::with_config(repo, cache, StoreConfig::default())
    }

    /// Create a new store with an explicit configuration.
    pub fn with_config(
        repo: Arc<dyn SettingsRepository>,
        cache: Arc<dyn SettingsCache>,
        config: StoreConfig,
    ) -> Self {
        Self {
            repo,
            cache,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn cache_key(&self, name: &str) -> String {
        format!("{}{}", self.config.cache_key_prefix, name)
    }

    async fn cache_read(&self, name: &str) -> Option<Vec<u8>> {
        match self.cache.get(&self.cache_key(name)).await {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!(name, %error, "cache read failed, falling through");
                None
            }
        }
    }

    async fn cache_write(&self, name: &str, bytes: &[u8]) {
        if let Err(error) = self.cache.set(&self.cache_key(name), bytes).await {
            tracing::warn!(name, %error, "cache write failed");
        }
    }

    /// Get a setting value by name.
    ///
    /// A cached entry (including the negative marker for a known-missing
    /// name) is returned without touching the repository. On a cache miss
    /// the repository result is written back into the cache, misses
    /// included.
    pub async fn get(&self, name: &str) -> Result<Option<SettingValue>, SettingsError> {
        if let Some(bytes) = self.cache_read(name).await {
            tracing::debug!(name, "cache hit");
            return Ok(value::decode_cached(&bytes));
        }

        let setting = self
            .repo
            .find_by_name(name)
            .await
            .map_err(|error| internal(name, error))?;

        let decoded = setting.as_ref().and_then(Setting::value);
        self.cache_write(name, &value::encode_cached(decoded.as_ref()))
            .await;
        tracing::debug!(name, found = setting.is_some(), "cache miss, repopulated");
        Ok(decoded)
    }

    /// Get a setting value, creating the row with `default` when absent.
    ///
    /// Never returns absent and guarantees a row for `name` exists
    /// afterwards. A cached negative marker does not satisfy the lookup;
    /// the row is created instead.
    pub async fn get_or_set(
        &self,
        name: &str,
        default: impl Into<SettingValue>,
    ) -> Result<SettingValue, SettingsError> {
        if let Some(bytes) = self.cache_read(name).await {
            if let Some(cached) = value::decode_cached(&bytes) {
                tracing::debug!(name, "cache hit");
                return Ok(cached);
            }
        }

        validation::validate_name(name)?;

        let default = default.into();
        let setting = self
            .repo
            .find_or_create(name, Some(value::encode(&default)))
            .await
            .map_err(|error| internal(name, error))?;

        // A pre-existing row may hold an empty value; the contract still
        // guarantees a present result.
        let resolved = setting.value().unwrap_or(default);
        self.cache_write(name, &value::encode_cached(Some(&resolved)))
            .await;
        Ok(resolved)
    }

    /// Create or update a setting.
    ///
    /// The cache entry is overwritten only after the persist succeeds; a
    /// crash between the two leaves the previous cache entry in place until
    /// the next write.
    pub async fn set(
        &self,
        name: &str,
        val: impl Into<SettingValue>,
    ) -> Result<Setting, SettingsError> {
        validation::validate_name(name)?;

        let val = val.into();
        let setting = self
            .repo
            .upsert(name, Some(value::encode(&val)))
            .await
            .map_err(|error| internal(name, error))?;

        self.cache_write(name, &value::encode_cached(setting.value().as_ref()))
            .await;
        tracing::debug!(name, "setting persisted");
        Ok(setting)
    }

    /// Accessor handle bound to a single setting name.
    pub fn entry<'a>(&'a self, name: &'a str) -> SettingHandle<'a> {
        SettingHandle { store: self, name }
    }

    /// List settings page by page, `page_size` rows per page (first page 1).
    pub async fn list(&self, page: u64) -> Result<Vec<Setting>, SettingsError> {
        let limit = self.config.page_size;
        let offset = page.max(1).saturating_sub(1).saturating_mul(limit);
        self.repo
            .list(limit, offset)
            .await
            .map_err(|error| internal("<list>", error))
    }
}

fn internal(name: &str, error: anyhow::Error) -> SettingsError {
    tracing::error!(name, %error, "settings repository failure");
    SettingsError::Internal
}

/// An accessor bound to a single setting name.
///
/// Obtained from [`SettingStore::entry`], or generated per known name by
/// [`declare_settings!`](crate::declare_settings).
#[derive(Clone, Copy)]
pub struct SettingHandle<'a> {
    store: &'a SettingStore,
    name: &'a str,
}

impl SettingHandle<'_> {
    /// The setting name this handle is bound to.
    pub fn name(&self) -> &str {
        self.name
    }

    /// See [`SettingStore::get`].
    pub async fn get(&self) -> Result<Option<SettingValue>, SettingsError> {
        self.store.get(self.name).await
    }

    /// See [`SettingStore::get_or_set`].
    pub async fn get_or_set(
        &self,
        default: impl Into<SettingValue>,
    ) -> Result<SettingValue, SettingsError> {
        self.store.get_or_set(self.name, default).await
    }

    /// See [`SettingStore::set`].
    pub async fn set(&self, value: impl Into<SettingValue>) -> Result<Setting, SettingsError> {
        self.store.set(self.name, value).await
    }
}

#[async_trait]
impl SettingsApi for SettingStore {
    async fn get(&self, name: &str) -> Result<Option<SettingValue>, SettingsError> {
        SettingStore::get(self, name).await
    }

    async fn get_or_set(
        &self,
        name: &str,
        default: SettingValue,
    ) -> Result<SettingValue, SettingsError> {
        SettingStore::get_or_set(self, name, default).await
    }

    async fn set(&self, name: &str, value: SettingValue) -> Result<Setting, SettingsError> {
        SettingStore::set(self, name, value).await
    }

    async fn list(&self, page: u64) -> Result<Vec<Setting>, SettingsError> {
        SettingStore::list(self, page).await
    }
}
