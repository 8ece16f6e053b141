//! # Objective Data Transfer Objects

use chrono::{DateTime, Utc};
use entity::objectives;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::ListParams;

/// Request to create or replace an objective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ObjectiveRequest {
    #[serde(default)]
    #[validate(length(max = 135, message = "Ensure this field has no more than 135 characters."))]
    pub name:           String,
    #[serde(default)]
    pub workflowlevel1: Option<Uuid>,
    #[serde(default)]
    #[validate(length(max = 765, message = "Ensure this field has no more than 765 characters."))]
    pub description:    String,
    #[serde(default)]
    pub created_by:     Option<Uuid>,
}

/// Response for a single objective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveResponse {
    pub id:             i32,
    pub name:           String,
    pub workflowlevel1: Option<Uuid>,
    pub description:    String,
    pub created_by:     Option<Uuid>,
    pub create_date:    Option<DateTime<Utc>>,
    pub edit_date:      Option<DateTime<Utc>>,
}

impl From<objectives::Model> for ObjectiveResponse {
    fn from(model: objectives::Model) -> Self {
        Self {
            id:             model.id,
            name:           model.name,
            workflowlevel1: model.workflowlevel1,
            description:    model.description,
            created_by:     model.created_by,
            create_date:    model.create_date,
            edit_date:      model.edit_date,
        }
    }
}

/// Response for objective list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveListResponse {
    pub success:    bool,
    pub objectives: Vec<ObjectiveResponse>,
    pub pagination: error::PaginationMeta,
}

/// Query parameters for objective list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectiveListQuery {
    pub page:           Option<u64>,
    pub per_page:       Option<u64>,
    pub workflowlevel1: Option<Uuid>,
}

impl ListParams for ObjectiveListQuery {
    fn raw_paging(&self) -> (Option<u64>, Option<u64>) { (self.page, self.per_page) }
}
