//! Configuration for the settings store

use serde::Deserialize;

/// Settings store configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Prefix prepended to every cache key
    #[serde(default = "default_cache_key_prefix")]
    pub cache_key_prefix: String,

    /// Number of settings per page when listing
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            cache_key_prefix: default_cache_key_prefix(),
            page_size: default_page_size(),
        }
    }
}

fn default_cache_key_prefix() -> String {
    "setting:".to_string()
}

fn default_page_size() -> u64 {
    10
}
