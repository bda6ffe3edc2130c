//! Settings Store
//!
//! Persisted key-value settings backed by a relational table with a
//! write-through byte cache. Reads consult the cache first and fall through
//! to the table, repopulating the cache afterwards; writes persist first and
//! then overwrite the cache entry.

// Public exports
pub mod contract;
pub use contract::{client::SettingsApi, error::SettingsError, Setting, SettingValue};

pub mod domain;
pub use domain::{SettingHandle, SettingStore, SettingsCache, SettingsRepository};

pub mod config;
pub use config::StoreConfig;

pub mod infra;
pub use infra::cache::InMemoryCache;
pub use infra::storage::migrations::Migrator;
pub use infra::storage::SeaOrmSettingsRepository;

pub mod accessors;
