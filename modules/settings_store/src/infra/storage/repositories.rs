//! SeaORM repository implementation

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::contract::Setting;
use crate::domain::repository::SettingsRepository;

use super::entity;

/// Settings repository backed by SeaORM.
///
/// The unique index on `name` makes the table the authority on uniqueness;
/// this repository only ever finds-then-writes.
pub struct SeaOrmSettingsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSettingsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_model(&self, name: &str) -> Result<Option<entity::Model>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Name.eq(name))
            .one(&*self.db)
            .await?;
        Ok(model)
    }
}

#[async_trait]
impl SettingsRepository for SeaOrmSettingsRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Setting>> {
        Ok(self.find_model(name).await?.map(|model| model.into()))
    }

    async fn find_or_create(&self, name: &str, raw_value: Option<String>) -> Result<Setting> {
        if let Some(existing) = self.find_model(name).await? {
            return Ok(existing.into());
        }

        let now = chrono::Utc::now();
        let active = entity::ActiveModel {
            name: Set(name.to_string()),
            value: Set(raw_value),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let inserted = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(inserted.into())
    }

    async fn upsert(&self, name: &str, raw_value: Option<String>) -> Result<Setting> {
        let now = chrono::Utc::now();

        let result = if let Some(existing) = self.find_model(name).await? {
            let mut active = existing.into_active_model();
            active.value = Set(raw_value);
            active.updated_at = Set(now);
            entity::Entity::update(active).exec(&*self.db).await?
        } else {
            let active = entity::ActiveModel {
                name: Set(name.to_string()),
                value: Set(raw_value),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };
            entity::Entity::insert(active)
                .exec_with_returning(&*self.db)
                .await?
        };

        Ok(result.into())
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Setting>> {
        let results = entity::Entity::find()
            .order_by_asc(entity::Column::Name)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }
}
