//! Levels Entity
//!
//! Positions in a results framework (goal, outcome, output...). `parent_id`
//! is a plain integer where 0 marks a root level; it is not a foreign key and
//! cycles are not checked.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "levels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:             i32,
    #[sea_orm(column_type = "String(StringLen::N(135))")]
    pub name:           String,
    pub workflowlevel1: Option<uuid::Uuid>,
    pub sort:           i32,
    pub organization:   Option<uuid::Uuid>,
    pub parent_id:      i32,
    pub global_default: bool,
    #[sea_orm(column_type = "Text")]
    pub description:    String,
    #[sea_orm(column_type = "String(StringLen::N(135))")]
    pub color:          String,
    pub created_by:     Option<uuid::Uuid>,
    pub create_date:    Option<chrono::DateTime<chrono::Utc>>,
    pub edit_date:      Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::indicators::Entity")]
    Indicators,
    #[sea_orm(has_many = "super::indicator_sorts::Entity")]
    IndicatorSorts,
}

impl Related<super::indicators::Entity> for Entity {
    fn to() -> RelationDef { Relation::Indicators.def() }
}

impl Related<super::indicator_sorts::Entity> for Entity {
    fn to() -> RelationDef { Relation::IndicatorSorts.def() }
}

impl ActiveModelBehavior for ActiveModel {}
