//! # Outcome Data Transfer Objects

use chrono::{DateTime, Utc};
use entity::outcomes;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{fixed4, validate_decimal, ListParams};

/// Request to create or replace an outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct OutcomeRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub name:             String,
    /// Objectives this outcome serves, in display order
    #[serde(default)]
    pub objective_ids:    Vec<i32>,
    /// Indicator measuring this outcome
    #[serde(default)]
    pub indicator_id:     Option<i32>,
    #[serde(default)]
    #[validate(custom(function = "validate_decimal"))]
    pub achieved_percent: Option<Decimal>,
    #[serde(default)]
    #[validate(length(max = 765, message = "Ensure this field has no more than 765 characters."))]
    pub description:      String,
    #[serde(default)]
    pub created_by:       Option<Uuid>,
}

/// Response for a single outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeResponse {
    pub id:               i32,
    pub name:             String,
    pub objective_ids:    Vec<i32>,
    pub indicator_id:     Option<i32>,
    pub achieved_percent: Option<Decimal>,
    pub description:      String,
    pub created_by:       Option<Uuid>,
    pub create_date:      Option<DateTime<Utc>>,
    pub edit_date:        Option<DateTime<Utc>>,
}

impl OutcomeResponse {
    /// Build a response from the stored row and its objective links.
    pub fn new(model: outcomes::Model, objective_ids: Vec<i32>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            objective_ids,
            indicator_id: model.indicator_id,
            achieved_percent: model.achieved_percent.map(fixed4),
            description: model.description,
            created_by: model.created_by,
            create_date: model.create_date,
            edit_date: model.edit_date,
        }
    }
}

/// Response for outcome list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeListResponse {
    pub success:    bool,
    pub outcomes:   Vec<OutcomeResponse>,
    pub pagination: error::PaginationMeta,
}

/// Query parameters for outcome list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutcomeListQuery {
    pub page:         Option<u64>,
    pub per_page:     Option<u64>,
    pub indicator_id: Option<i32>,
}

impl ListParams for OutcomeListQuery {
    fn raw_paging(&self) -> (Option<u64>, Option<u64>) { (self.page, self.per_page) }
}
