//! Indicator to outcome links.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "indicator_outcomes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:           i32,
    pub indicator_id: i32,
    pub outcome_id:   i32,
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
        belongs_to = "super::outcomes::Entity",
        from = "Column::OutcomeId",
        to = "super::outcomes::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Outcome,
}

impl Related<super::indicators::Entity> for Entity {
    fn to() -> RelationDef { Relation::Indicator.def() }
}

impl Related<super::outcomes::Entity> for Entity {
    fn to() -> RelationDef { Relation::Outcome.def() }
}

impl ActiveModelBehavior for ActiveModel {}
