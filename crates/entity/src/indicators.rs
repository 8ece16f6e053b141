//! Indicators Entity
//!
//! The central record of the KPI model: a named measurement with a direction,
//! an aggregation formula and a running actual value. Indicator types,
//! objectives and outcomes are linked through association tables; the level
//! is an optional foreign key that is nulled when the level is deleted.
//!
//! CUSTOMIZATION REGION START: indicators_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::{ActualFormula, Direction};

/// Minutes during which a freshly created indicator counts as "just created".
pub const JUST_CREATED_MINUTES: i64 = 5;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "indicators")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:                        i32,
    #[sea_orm(unique)]
    pub indicator_uuid:            String,
    pub level_id:                  Option<i32>,
    pub name:                      String,
    #[sea_orm(column_type = "Text", nullable)]
    pub definition:                Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments:                  Option<String>,
    pub workflowlevel1:            Option<uuid::Uuid>,
    pub key_performance_indicator: bool,
    pub direction:                 Option<Direction>,
    pub actual_formula:            Option<ActualFormula>,
    #[sea_orm(column_type = "Decimal(Some((20, 4)))", nullable)]
    pub actuals:                   Option<Decimal>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes:                     Option<String>,
    pub created_by:                Option<uuid::Uuid>,
    pub create_date:               Option<chrono::DateTime<chrono::Utc>>,
    pub edit_date:                 Option<chrono::DateTime<chrono::Utc>>,
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
    #[sea_orm(has_many = "super::periodic_targets::Entity")]
    PeriodicTargets,
    #[sea_orm(has_many = "super::indicator_indicator_types::Entity")]
    IndicatorIndicatorTypes,
    #[sea_orm(has_many = "super::indicator_objectives::Entity")]
    IndicatorObjectives,
    #[sea_orm(has_many = "super::indicator_outcomes::Entity")]
    IndicatorOutcomes,
}

impl Related<super::levels::Entity> for Entity {
    fn to() -> RelationDef { Relation::Level.def() }
}

impl Related<super::periodic_targets::Entity> for Entity {
    fn to() -> RelationDef { Relation::PeriodicTargets.def() }
}

impl Related<super::indicator_indicator_types::Entity> for Entity {
    fn to() -> RelationDef { Relation::IndicatorIndicatorTypes.def() }
}

impl Related<super::indicator_objectives::Entity> for Entity {
    fn to() -> RelationDef { Relation::IndicatorObjectives.def() }
}

impl Related<super::indicator_outcomes::Entity> for Entity {
    fn to() -> RelationDef { Relation::IndicatorOutcomes.def() }
}

impl Related<super::indicator_types::Entity> for Entity {
    fn to() -> RelationDef { super::indicator_indicator_types::Relation::IndicatorType.def() }

    fn via() -> Option<RelationDef> { Some(super::indicator_indicator_types::Relation::Indicator.def().rev()) }
}

impl Related<super::objectives::Entity> for Entity {
    fn to() -> RelationDef { super::indicator_objectives::Relation::Objective.def() }

    fn via() -> Option<RelationDef> { Some(super::indicator_objectives::Relation::Indicator.def().rev()) }
}

impl Related<super::outcomes::Entity> for Entity {
    fn to() -> RelationDef { super::indicator_outcomes::Relation::Outcome.def() }

    fn via() -> Option<RelationDef> { Some(super::indicator_outcomes::Relation::Indicator.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

// CUSTOMIZATION REGION START: indicators_entity_methods
impl Model {
    /// True while `create_date` lies within the last five minutes of `now`.
    ///
    /// An indicator that was never persisted has no `create_date` and is not
    /// considered just created.
    pub fn just_created(&self, now: DateTime<Utc>) -> bool {
        self.create_date
            .is_some_and(|created| created >= now - Duration::minutes(JUST_CREATED_MINUTES))
    }
}

/// An indicator together with the rows it is linked to, loaded on request.
///
/// Related rows keep association order. The display accessors are recomputed
/// on every call.
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorWithAssociations {
    pub indicator:       Model,
    pub level:           Option<super::levels::Model>,
    pub indicator_types: Vec<super::indicator_types::Model>,
    pub objectives:      Vec<super::objectives::Model>,
    pub outcomes:        Vec<super::outcomes::Model>,
}

impl IndicatorWithAssociations {
    /// Names of the linked objectives joined by `", "`.
    pub fn objectives_list(&self) -> String {
        self.objectives
            .iter()
            .map(|o| o.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Labels of the linked indicator types joined by `", "`.
    pub fn indicator_types(&self) -> String {
        self.indicator_types
            .iter()
            .map(|t| t.indicator_type.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Name of the indicator's level, if it has one.
    pub fn levels(&self) -> Option<&str> { self.level.as_ref().map(|l| l.name.as_str()) }

    pub fn just_created(&self, now: DateTime<Utc>) -> bool { self.indicator.just_created(now) }
}
// CUSTOMIZATION REGION END
