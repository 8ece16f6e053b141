//! Enumerations stored as short string columns.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Whether progress on an indicator means the value goes up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(15))")]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[sea_orm(string_value = "increasing")]
    Increasing,
    #[sea_orm(string_value = "decreasing")]
    Decreasing,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Increasing => write!(f, "increasing"),
            Direction::Decreasing => write!(f, "decreasing"),
        }
    }
}

/// How collected values roll up into an indicator's actuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(15))")]
#[serde(rename_all = "snake_case")]
pub enum ActualFormula {
    #[sea_orm(string_value = "average")]
    Average,
    #[sea_orm(string_value = "user_defined")]
    UserDefined,
}

impl std::fmt::Display for ActualFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActualFormula::Average => write!(f, "average"),
            ActualFormula::UserDefined => write!(f, "user_defined"),
        }
    }
}
