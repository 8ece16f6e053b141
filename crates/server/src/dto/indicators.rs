//! # Indicator Data Transfer Objects
//!
//! Relationships travel as id lists. `display` is only present when the
//! caller asked for associations to be loaded.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use entity::{
    indicators::{self, IndicatorWithAssociations},
    sea_orm_active_enums::{ActualFormula, Direction},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::{fixed4, validate_decimal, ListParams};

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("This field may not be blank."));
        return Err(err);
    }
    Ok(())
}

/// Request to create or replace an indicator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct IndicatorRequest {
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    pub name:                      String,
    #[serde(default)]
    pub level_id:                  Option<i32>,
    #[serde(default)]
    pub definition:                Option<String>,
    #[serde(default)]
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub comments:                  Option<String>,
    #[serde(default)]
    pub workflowlevel1:            Option<Uuid>,
    #[serde(default)]
    pub key_performance_indicator: bool,
    #[serde(default)]
    pub direction:                 Option<Direction>,
    #[serde(default)]
    pub actual_formula:            Option<ActualFormula>,
    #[serde(default)]
    #[validate(custom(function = "validate_decimal"))]
    pub actuals:                   Option<Decimal>,
    #[serde(default)]
    #[validate(length(max = 500, message = "Ensure this field has no more than 500 characters."))]
    pub notes:                     Option<String>,
    #[serde(default)]
    pub created_by:                Option<Uuid>,
    #[serde(default)]
    pub indicator_type_ids:        Vec<i32>,
    #[serde(default)]
    pub objective_ids:             Vec<i32>,
    #[serde(default)]
    pub outcome_ids:               Vec<i32>,
}

/// Derived display values of an indicator loaded with its associations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorDisplay {
    pub just_created:    bool,
    pub objectives_list: String,
    pub indicator_types: String,
    pub levels:          Option<String>,
}

impl IndicatorDisplay {
    pub fn new(loaded: &IndicatorWithAssociations, now: DateTime<Utc>) -> Self {
        Self {
            just_created:    loaded.just_created(now),
            objectives_list: loaded.objectives_list(),
            indicator_types: loaded.indicator_types(),
            levels:          loaded.levels().map(str::to_owned),
        }
    }
}

/// Response for a single indicator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorResponse {
    pub id:                        i32,
    pub indicator_uuid:            String,
    pub name:                      String,
    pub level_id:                  Option<i32>,
    pub definition:                Option<String>,
    pub comments:                  Option<String>,
    pub workflowlevel1:            Option<Uuid>,
    pub key_performance_indicator: bool,
    pub direction:                 Option<Direction>,
    pub actual_formula:            Option<ActualFormula>,
    pub actuals:                   Option<Decimal>,
    pub notes:                     Option<String>,
    pub created_by:                Option<Uuid>,
    pub indicator_type_ids:        Vec<i32>,
    pub objective_ids:             Vec<i32>,
    pub outcome_ids:               Vec<i32>,
    pub create_date:               Option<DateTime<Utc>>,
    pub edit_date:                 Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display:                   Option<IndicatorDisplay>,
}

/// Ids of the rows linked to one indicator, in association order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndicatorLinks {
    pub indicator_type_ids: Vec<i32>,
    pub objective_ids:      Vec<i32>,
    pub outcome_ids:        Vec<i32>,
}

impl IndicatorResponse {
    pub fn new(model: indicators::Model, links: IndicatorLinks) -> Self {
        Self {
            id: model.id,
            indicator_uuid: model.indicator_uuid,
            name: model.name,
            level_id: model.level_id,
            definition: model.definition,
            comments: model.comments,
            workflowlevel1: model.workflowlevel1,
            key_performance_indicator: model.key_performance_indicator,
            direction: model.direction,
            actual_formula: model.actual_formula,
            actuals: model.actuals.map(fixed4),
            notes: model.notes,
            created_by: model.created_by,
            indicator_type_ids: links.indicator_type_ids,
            objective_ids: links.objective_ids,
            outcome_ids: links.outcome_ids,
            create_date: model.create_date,
            edit_date: model.edit_date,
            display: None,
        }
    }

    #[must_use]
    pub fn with_display(mut self, display: IndicatorDisplay) -> Self {
        self.display = Some(display);
        self
    }
}

/// Response for indicator list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorListResponse {
    pub success:    bool,
    pub indicators: Vec<IndicatorResponse>,
    pub pagination: error::PaginationMeta,
}

/// Query parameters for indicator list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndicatorListQuery {
    pub page:              Option<u64>,
    pub per_page:          Option<u64>,
    pub workflowlevel1:    Option<Uuid>,
    pub level_id:          Option<i32>,
    #[serde(default)]
    pub with_associations: bool,
}

impl ListParams for IndicatorListQuery {
    fn raw_paging(&self) -> (Option<u64>, Option<u64>) { (self.page, self.per_page) }
}

/// Query parameters for indicator retrieve
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct IndicatorRetrieveQuery {
    #[serde(default)]
    pub with_associations: bool,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_defaults() {
        let req: IndicatorRequest = serde_json::from_value(json!({ "name": "Literacy Rate" })).unwrap();
        assert!(!req.key_performance_indicator);
        assert!(req.objective_ids.is_empty());
        assert_eq!(req.actuals, None);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_request_rejects_blank_name() {
        let req: IndicatorRequest = serde_json::from_value(json!({ "name": "  " })).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_request_rejects_long_notes() {
        let req: IndicatorRequest = serde_json::from_value(json!({
            "name": "Literacy Rate",
            "notes": "x".repeat(501),
        }))
        .unwrap();
        assert!(req.validate().unwrap_err().field_errors().contains_key("notes"));
    }

    #[test]
    fn test_request_rejects_unknown_direction() {
        let result = serde_json::from_value::<IndicatorRequest>(json!({
            "name": "Literacy Rate",
            "direction": "sideways",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_request_ignores_read_only_fields() {
        let req: IndicatorRequest = serde_json::from_value(json!({
            "id": 99,
            "indicator_uuid": "not-a-uuid",
            "name": "Literacy Rate",
            "create_date": "2024-01-01T00:00:00Z",
        }))
        .unwrap();
        assert_eq!(req.name, "Literacy Rate");
    }

    #[test]
    fn test_display_omitted_when_not_loaded() {
        let response = IndicatorResponse {
            id: 1,
            indicator_uuid: Uuid::new_v4().to_string(),
            name: "Literacy Rate".into(),
            level_id: None,
            definition: None,
            comments: None,
            workflowlevel1: None,
            key_performance_indicator: false,
            direction: Some(Direction::Increasing),
            actual_formula: None,
            actuals: Some(fixed4(Decimal::new(105, 1))),
            notes: None,
            created_by: None,
            indicator_type_ids: vec![],
            objective_ids: vec![],
            outcome_ids: vec![],
            create_date: None,
            edit_date: None,
            display: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("display").is_none());
        assert_eq!(json["actuals"], "10.5000");
        assert_eq!(json["direction"], "increasing");
    }
}
