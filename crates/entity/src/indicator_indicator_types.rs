//! Indicator to indicator type links.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "indicator_indicator_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:                i32,
    pub indicator_id:      i32,
    pub indicator_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::indicators::Entity",
        from = "Column::IndicatorId",
        to = "super::indicators::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Indicator,
    #[sea_orm(
        belongs_to = "super::indicator_types::Entity",
        from = "Column::IndicatorTypeId",
        to = "super::indicator_types::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    IndicatorType,
}

impl Related<super::indicators::Entity> for Entity {
    fn to() -> RelationDef { Relation::Indicator.def() }
}

impl Related<super::indicator_types::Entity> for Entity {
    fn to() -> RelationDef { Relation::IndicatorType.def() }
}

impl ActiveModelBehavior for ActiveModel {}
