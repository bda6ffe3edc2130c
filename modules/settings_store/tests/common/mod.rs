//! Common test utilities: mock repository and cache doubles

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use settings_store::{InMemoryCache, Setting, SettingStore, SettingsCache, SettingsRepository};

/// Mock repository over a name-keyed map, counting lookups and creates.
#[derive(Default)]
pub struct MockSettingsRepo {
    rows: RwLock<HashMap<String, Setting>>,
    finds: AtomicUsize,
    creates: AtomicUsize,
}

impl MockSettingsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently stored.
    pub fn row_count(&self) -> usize {
        self.rows.read().len()
    }

    /// Number of lookups that reached this repository.
    pub fn find_count(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }

    /// Number of rows created by find_or_create/upsert.
    pub fn create_count(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    /// Raw stored blob for a name, for asserting on the wire form.
    pub fn raw_value(&self, name: &str) -> Option<String> {
        self.rows.read().get(name).and_then(|s| s.raw_value.clone())
    }

    fn make_row(name: &str, raw_value: Option<String>) -> Setting {
        let now = chrono::Utc::now();
        Setting {
            name: name.to_string(),
            raw_value,
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
impl SettingsRepository for MockSettingsRepo {
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Setting>> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.read().get(name).cloned())
    }

    async fn find_or_create(
        &self,
        name: &str,
        raw_value: Option<String>,
    ) -> anyhow::Result<Setting> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.write();
        if let Some(existing) = rows.get(name) {
            return Ok(existing.clone());
        }
        self.creates.fetch_add(1, Ordering::SeqCst);
        let row = Self::make_row(name, raw_value);
        rows.insert(name.to_string(), row.clone());
        Ok(row)
    }

    async fn upsert(&self, name: &str, raw_value: Option<String>) -> anyhow::Result<Setting> {
        let mut rows = self.rows.write();
        let row = match rows.get(name) {
            Some(existing) => {
                let mut updated = existing.clone();
                updated.raw_value = raw_value;
                updated.updated_at = chrono::Utc::now();
                updated
            }
            None => {
                self.creates.fetch_add(1, Ordering::SeqCst);
                Self::make_row(name, raw_value)
            }
        };
        rows.insert(name.to_string(), row.clone());
        Ok(row)
    }

    async fn list(&self, limit: u64, offset: u64) -> anyhow::Result<Vec<Setting>> {
        let mut all: Vec<Setting> = self.rows.read().values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

/// Cache double whose operations always fail.
pub struct FailingCache;

#[async_trait]
impl SettingsCache for FailingCache {
    async fn get(&self, _key: &str) -> anyhow::Result<Option<Vec<u8>>> {
        anyhow::bail!("cache backend unavailable")
    }

    async fn set(&self, _key: &str, _value: &[u8]) -> anyhow::Result<()> {
        anyhow::bail!("cache backend unavailable")
    }
}

/// Build a store over a mock repository and an in-memory cache.
pub fn create_test_store() -> (Arc<SettingStore>, Arc<MockSettingsRepo>, Arc<InMemoryCache>) {
    let repo = Arc::new(MockSettingsRepo::new());
    let cache = Arc::new(InMemoryCache::new());
    let store = Arc::new(SettingStore::new(repo.clone(), cache.clone()));
    (store, repo, cache)
}
