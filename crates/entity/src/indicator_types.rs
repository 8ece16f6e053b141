//! Indicator Types Entity
//!
//! Classification labels attached to indicators, optionally owned by an organization.
//!
//! CUSTOMIZATION REGION START: indicator_types_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "indicator_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:             i32,
    #[sea_orm(column_type = "String(StringLen::N(135))")]
    pub indicator_type: String,
    #[sea_orm(column_type = "Text")]
    pub description:    String,
    pub default_global: bool,
    pub organization:   Option<uuid::Uuid>,
    pub create_date:    Option<chrono::DateTime<chrono::Utc>>,
    pub edit_date:      Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::indicator_indicator_types::Entity")]
    IndicatorIndicatorTypes,
}

impl Related<super::indicator_indicator_types::Entity> for Entity {
    fn to() -> RelationDef { Relation::IndicatorIndicatorTypes.def() }
}

impl Related<super::indicators::Entity> for Entity {
    fn to() -> RelationDef { super::indicator_indicator_types::Relation::Indicator.def() }

    fn via() -> Option<RelationDef> { Some(super::indicator_indicator_types::Relation::IndicatorType.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

// CUSTOMIZATION REGION START: indicator_types_entity_methods
// Add custom methods and trait implementations here
// CUSTOMIZATION REGION END
