//! # Indicator Type Data Transfer Objects

use chrono::{DateTime, Utc};
use entity::indicator_types;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::ListParams;

/// Request to create or replace an indicator type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct IndicatorTypeRequest {
    /// Label shown for the type
    #[serde(default)]
    #[validate(length(max = 135, message = "Ensure this field has no more than 135 characters."))]
    pub indicator_type: String,
    #[serde(default)]
    #[validate(length(max = 765, message = "Ensure this field has no more than 765 characters."))]
    pub description:    String,
    /// Offered to every organization
    #[serde(default)]
    pub default_global: bool,
    /// Owning organization
    #[serde(default)]
    pub organization:   Option<Uuid>,
}

/// Response for a single indicator type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorTypeResponse {
    pub id:             i32,
    pub indicator_type: String,
    pub description:    String,
    pub default_global: bool,
    pub organization:   Option<Uuid>,
    pub create_date:    Option<DateTime<Utc>>,
    pub edit_date:      Option<DateTime<Utc>>,
}

impl From<indicator_types::Model> for IndicatorTypeResponse {
    fn from(model: indicator_types::Model) -> Self {
        Self {
            id:             model.id,
            indicator_type: model.indicator_type,
            description:    model.description,
            default_global: model.default_global,
            organization:   model.organization,
            create_date:    model.create_date,
            edit_date:      model.edit_date,
        }
    }
}

/// Response for indicator type list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorTypeListResponse {
    pub success:         bool,
    pub indicator_types: Vec<IndicatorTypeResponse>,
    pub pagination:      error::PaginationMeta,
}

/// Query parameters for indicator type list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndicatorTypeListQuery {
    pub page:         Option<u64>,
    pub per_page:     Option<u64>,
    /// Only types owned by this organization
    pub organization: Option<Uuid>,
}

impl ListParams for IndicatorTypeListQuery {
    fn raw_paging(&self) -> (Option<u64>, Option<u64>) { (self.page, self.per_page) }
}
