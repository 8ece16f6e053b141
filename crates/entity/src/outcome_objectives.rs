//! Outcome to objective links.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "outcome_objectives")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:           i32,
    pub outcome_id:   i32,
    pub objective_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::outcomes::Entity",
        from = "Column::OutcomeId",
        to = "super::outcomes::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Outcome,
    #[sea_orm(
        belongs_to = "super::objectives::Entity",
        from = "Column::ObjectiveId",
        to = "super::objectives::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Objective,
}

impl Related<super::outcomes::Entity> for Entity {
    fn to() -> RelationDef { Relation::Outcome.def() }
}

impl Related<super::objectives::Entity> for Entity {
    fn to() -> RelationDef { Relation::Objective.def() }
}

impl ActiveModelBehavior for ActiveModel {}
