//! Objectives Entity
//!
//! Stated objectives of a workflow-level-1 grouping. Linked to outcomes and
//! indicators through association tables.
//!
//! CUSTOMIZATION REGION START: objectives_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "objectives")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:             i32,
    #[sea_orm(column_type = "String(StringLen::N(135))")]
    pub name:           String,
    pub workflowlevel1: Option<uuid::Uuid>,
    #[sea_orm(column_type = "Text")]
    pub description:    String,
    pub created_by:     Option<uuid::Uuid>,
    pub create_date:    Option<chrono::DateTime<chrono::Utc>>,
    pub edit_date:      Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::indicator_objectives::Entity")]
    IndicatorObjectives,
    #[sea_orm(has_many = "super::outcome_objectives::Entity")]
    OutcomeObjectives,
}

impl Related<super::indicator_objectives::Entity> for Entity {
    fn to() -> RelationDef { Relation::IndicatorObjectives.def() }
}

impl Related<super::outcome_objectives::Entity> for Entity {
    fn to() -> RelationDef { Relation::OutcomeObjectives.def() }
}

impl Related<super::indicators::Entity> for Entity {
    fn to() -> RelationDef { super::indicator_objectives::Relation::Indicator.def() }

    fn via() -> Option<RelationDef> { Some(super::indicator_objectives::Relation::Objective.def().rev()) }
}

impl Related<super::outcomes::Entity> for Entity {
    fn to() -> RelationDef { super::outcome_objectives::Relation::Outcome.def() }

    fn via() -> Option<RelationDef> { Some(super::outcome_objectives::Relation::Objective.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}
