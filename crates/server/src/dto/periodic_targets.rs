//! # Periodic Target Data Transfer Objects

use chrono::{DateTime, Utc};
use entity::periodic_targets;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{fixed4, validate_decimal, ListParams};

/// Request to create or replace a periodic target
///
/// `indicator_id` must be supplied on every write even though the stored
/// reference becomes null once the indicator is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PeriodicTargetRequest {
    #[serde(default)]
    #[validate(required(message = "This field is required."))]
    pub indicator_id: Option<i32>,
    #[serde(default)]
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub period:       Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_decimal"))]
    pub target:       Decimal,
    /// Manual sort key
    #[serde(default)]
    pub customsort:   Option<i32>,
}

/// Response for a single periodic target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodicTargetResponse {
    pub id:           i32,
    pub indicator_id: Option<i32>,
    pub period:       Option<String>,
    pub target:       Decimal,
    pub customsort:   Option<i32>,
    pub create_date:  Option<DateTime<Utc>>,
    pub edit_date:    Option<DateTime<Utc>>,
}

impl From<periodic_targets::Model> for PeriodicTargetResponse {
    fn from(model: periodic_targets::Model) -> Self {
        Self {
            id:           model.id,
            indicator_id: model.indicator_id,
            period:       model.period,
            target:       fixed4(model.target),
            customsort:   model.customsort,
            create_date:  model.create_date,
            edit_date:    model.edit_date,
        }
    }
}

/// Response for periodic target list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodicTargetListResponse {
    pub success:          bool,
    pub periodic_targets: Vec<PeriodicTargetResponse>,
    pub pagination:       error::PaginationMeta,
}

/// Query parameters for periodic target list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PeriodicTargetListQuery {
    pub page:         Option<u64>,
    pub per_page:     Option<u64>,
    pub indicator_id: Option<i32>,
}

impl ListParams for PeriodicTargetListQuery {
    fn raw_paging(&self) -> (Option<u64>, Option<u64>) { (self.page, self.per_page) }
}
