//! Indicator Sorts Entity
//!
//! User-chosen display order of indicators for one (workflow level 1, level)
//! pair. `sort_array` holds raw indicator ids; ids of deleted indicators are
//! kept as they are.

use sea_orm::{entity::prelude::*, FromJsonQueryResult};
use serde::{Deserialize, Serialize};

/// Ordered indicator ids, stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct SortArray(pub Vec<i32>);

impl From<Vec<i32>> for SortArray {
    fn from(ids: Vec<i32>) -> Self { Self(ids) }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "indicator_sorts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:             i32,
    pub workflowlevel1: Option<uuid::Uuid>,
    pub level_id:       Option<i32>,
    #[sea_orm(column_type = "Json")]
    pub sort_array:     Option<SortArray>,
    pub create_date:    Option<chrono::DateTime<chrono::Utc>>,
    pub edit_date:      Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::levels::Entity",
        from = "Column::LevelId",
        to = "super::levels::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Level,
}

impl Related<super::levels::Entity> for Entity {
    fn to() -> RelationDef { Relation::Level.def() }
}

impl ActiveModelBehavior for ActiveModel {}
