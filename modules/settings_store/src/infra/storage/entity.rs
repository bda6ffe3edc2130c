//! SeaORM entity for the settings table

use sea_orm::entity::prelude::*;

/// Settings table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    /// Surrogate primary key
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Unique setting name
    #[sea_orm(unique)]
    pub name: String,

    /// Encoded value blob; NULL when the row holds no value
    #[sea_orm(column_type = "Text", nullable)]
    pub value: Option<String>,

    /// Creation timestamp
    pub created_at: DateTimeUtc,

    /// Last update timestamp
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
