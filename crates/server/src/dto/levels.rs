//! # Level Data Transfer Objects

use chrono::{DateTime, Utc};
use entity::levels;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::ListParams;

/// Request to create or replace a level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LevelRequest {
    #[serde(default)]
    #[validate(length(max = 135, message = "Ensure this field has no more than 135 characters."))]
    pub name:           String,
    #[serde(default)]
    pub workflowlevel1: Option<Uuid>,
    /// Position among sibling levels
    #[serde(default)]
    pub sort:           i32,
    #[serde(default)]
    pub organization:   Option<Uuid>,
    /// Id of the parent level, 0 for a root level
    #[serde(default)]
    pub parent_id:      i32,
    #[serde(default)]
    pub global_default: bool,
    #[serde(default)]
    #[validate(length(max = 765, message = "Ensure this field has no more than 765 characters."))]
    pub description:    String,
    #[serde(default)]
    #[validate(length(max = 135, message = "Ensure this field has no more than 135 characters."))]
    pub color:          String,
    #[serde(default)]
    pub created_by:     Option<Uuid>,
}

/// Response for a single level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelResponse {
    pub id:             i32,
    pub name:           String,
    pub workflowlevel1: Option<Uuid>,
    pub sort:           i32,
    pub organization:   Option<Uuid>,
    pub parent_id:      i32,
    pub global_default: bool,
    pub description:    String,
    pub color:          String,
    pub created_by:     Option<Uuid>,
    pub create_date:    Option<DateTime<Utc>>,
    pub edit_date:      Option<DateTime<Utc>>,
}

impl From<levels::Model> for LevelResponse {
    fn from(model: levels::Model) -> Self {
        Self {
            id:             model.id,
            name:           model.name,
            workflowlevel1: model.workflowlevel1,
            sort:           model.sort,
            organization:   model.organization,
            parent_id:      model.parent_id,
            global_default: model.global_default,
            description:    model.description,
            color:          model.color,
            created_by:     model.created_by,
            create_date:    model.create_date,
            edit_date:      model.edit_date,
        }
    }
}

/// Response for level list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelListResponse {
    pub success:    bool,
    pub levels:     Vec<LevelResponse>,
    pub pagination: error::PaginationMeta,
}

/// Query parameters for level list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LevelListQuery {
    pub page:           Option<u64>,
    pub per_page:       Option<u64>,
    pub organization:   Option<Uuid>,
    pub workflowlevel1: Option<Uuid>,
}

impl ListParams for LevelListQuery {
    fn raw_paging(&self) -> (Option<u64>, Option<u64>) { (self.page, self.per_page) }
}
