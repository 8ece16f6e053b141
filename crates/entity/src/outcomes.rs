//! Outcomes Entity
//!
//! Hoped-for outcomes of objectives, optionally tied to the indicator that
//! measures them. The indicator reference is nulled when that indicator is deleted.
//!
//! CUSTOMIZATION REGION START: outcomes_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "outcomes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:               i32,
    pub name:             String,
    pub indicator_id:     Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((20, 4)))")]
    pub achieved_percent: Option<Decimal>,
    #[sea_orm(column_type = "Text")]
    pub description:      String,
    pub created_by:       Option<uuid::Uuid>,
    pub create_date:      Option<chrono::DateTime<chrono::Utc>>,
    pub edit_date:        Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::indicators::Entity",
        from = "Column::IndicatorId",
        to = "super::indicators::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Indicator,
    #[sea_orm(has_many = "super::outcome_objectives::Entity")]
    OutcomeObjectives,
    #[sea_orm(has_many = "super::indicator_outcomes::Entity")]
    IndicatorOutcomes,
}

impl Related<super::indicators::Entity> for Entity {
    fn to() -> RelationDef { Relation::Indicator.def() }
}

impl Related<super::outcome_objectives::Entity> for Entity {
    fn to() -> RelationDef { Relation::OutcomeObjectives.def() }
}

impl Related<super::indicator_outcomes::Entity> for Entity {
    fn to() -> RelationDef { Relation::IndicatorOutcomes.def() }
}

impl Related<super::objectives::Entity> for Entity {
    fn to() -> RelationDef { super::outcome_objectives::Relation::Objective.def() }

    fn via() -> Option<RelationDef> { Some(super::outcome_objectives::Relation::Outcome.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

// CUSTOMIZATION REGION START: outcomes_entity_methods
// Add custom methods and trait implementations here
// CUSTOMIZATION REGION END
