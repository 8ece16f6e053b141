//! # Indicator Sort Data Transfer Objects

use chrono::{DateTime, Utc};
use entity::indicator_sorts;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::ListParams;

/// Request to create or replace an indicator sort
///
/// `sort_array` is stored as given; ids are not checked against live indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct IndicatorSortRequest {
    #[serde(default)]
    pub workflowlevel1: Option<Uuid>,
    #[serde(default)]
    pub level_id:       Option<i32>,
    #[serde(default)]
    pub sort_array:     Option<Vec<i32>>,
}

/// Response for a single indicator sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSortResponse {
    pub id:             i32,
    pub workflowlevel1: Option<Uuid>,
    pub level_id:       Option<i32>,
    pub sort_array:     Option<Vec<i32>>,
    pub create_date:    Option<DateTime<Utc>>,
    pub edit_date:      Option<DateTime<Utc>>,
}

impl From<indicator_sorts::Model> for IndicatorSortResponse {
    fn from(model: indicator_sorts::Model) -> Self {
        Self {
            id:             model.id,
            workflowlevel1: model.workflowlevel1,
            level_id:       model.level_id,
            sort_array:     model.sort_array.map(|ids| ids.0),
            create_date:    model.create_date,
            edit_date:      model.edit_date,
        }
    }
}

/// Response for indicator sort list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSortListResponse {
    pub success:         bool,
    pub indicator_sorts: Vec<IndicatorSortResponse>,
    pub pagination:      error::PaginationMeta,
}

/// Query parameters for indicator sort list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndicatorSortListQuery {
    pub page:           Option<u64>,
    pub per_page:       Option<u64>,
    pub workflowlevel1: Option<Uuid>,
    pub level_id:       Option<i32>,
}

impl ListParams for IndicatorSortListQuery {
    fn raw_paging(&self) -> (Option<u64>, Option<u64>) { (self.page, self.per_page) }
}
