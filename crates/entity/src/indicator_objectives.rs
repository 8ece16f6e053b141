//! Indicator to objective links.
//!
//! One row per association. The auto-increment `id` records insertion order,
//! which is the order related rows are listed in.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "indicator_objectives")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:           i32,
    pub indicator_id: i32,
    pub objective_id: i32,
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
        belongs_to = "super::objectives::Entity",
        from = "Column::ObjectiveId",
        to = "super::objectives::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Objective,
}

impl Related<super::indicators::Entity> for Entity {
    fn to() -> RelationDef { Relation::Indicator.def() }
}

impl Related<super::objectives::Entity> for Entity {
    fn to() -> RelationDef { Relation::Objective.def() }
}

impl ActiveModelBehavior for ActiveModel {}
