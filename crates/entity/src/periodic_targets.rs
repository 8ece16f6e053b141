//! Periodic Targets Entity
//!
//! Target value of an indicator for a named period, ordered by a manual sort key.
//!
//! CUSTOMIZATION REGION START: periodic_targets_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "periodic_targets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:           i32,
    pub indicator_id: Option<i32>,
    pub period:       Option<String>,
    #[sea_orm(column_type = "Decimal(Some((20, 4)))")]
    pub target:       Decimal,
    pub customsort:   Option<i32>,
    pub create_date:  Option<chrono::DateTime<chrono::Utc>>,
    pub edit_date:    Option<chrono::DateTime<chrono::Utc>>,
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
}

impl Related<super::indicators::Entity> for Entity {
    fn to() -> RelationDef { Relation::Indicator.def() }
}

impl ActiveModelBehavior for ActiveModel {}

// CUSTOMIZATION REGION START: periodic_targets_entity_methods
// Add custom methods and trait implementations here
// CUSTOMIZATION REGION END
