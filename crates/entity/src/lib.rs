//! Entity definitions for the KPI indicator data model
//!
//! This crate contains Sea-ORM entity definitions for the database models,
//! the timestamp policy shared by every persisted record and the derived
//! display views of an indicator.

pub mod sea_orm_active_enums;
pub mod timestamps;

pub mod indicator_types;
pub use indicator_types::Entity as IndicatorTypes;
pub mod objectives;
pub use objectives::Entity as Objectives;
pub mod outcomes;
pub use outcomes::Entity as Outcomes;
pub mod levels;
pub use levels::Entity as Levels;
pub mod indicators;
pub use indicators::Entity as Indicators;
pub mod periodic_targets;
pub use periodic_targets::Entity as PeriodicTargets;
pub mod indicator_sorts;
pub use indicator_sorts::Entity as IndicatorSorts;

pub mod indicator_indicator_types;
pub use indicator_indicator_types::Entity as IndicatorIndicatorTypes;
pub mod indicator_objectives;
pub use indicator_objectives::Entity as IndicatorObjectives;
pub mod indicator_outcomes;
pub use indicator_outcomes::Entity as IndicatorOutcomes;
pub mod outcome_objectives;
pub use outcome_objectives::Entity as OutcomeObjectives;
