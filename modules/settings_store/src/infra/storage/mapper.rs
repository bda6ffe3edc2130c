//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use crate::contract::Setting;

use super::entity;

impl From<entity::Model> for Setting {
    fn from(entity: entity::Model) -> Self {
        Self {
            name: entity.name,
            raw_value: entity.value,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
