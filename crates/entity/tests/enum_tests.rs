//! Simple enum tests for entity crate

use entity::sea_orm_active_enums::{ActualFormula, Direction};
use sea_orm::{ActiveEnum, Iterable};

/// Test Direction enum values
#[test]
fn test_direction_values() {
    assert_eq!(format!("{}", Direction::Increasing), "increasing");
    assert_eq!(format!("{}", Direction::Decreasing), "decreasing");
}

/// Test ActualFormula enum values
#[test]
fn test_actual_formula_values() {
    assert_eq!(format!("{}", ActualFormula::Average), "average");
    assert_eq!(format!("{}", ActualFormula::UserDefined), "user_defined");
}

/// Stored values match the displayed ones
#[test]
fn test_stored_values_match_display() {
    for direction in Direction::iter() {
        assert_eq!(direction.to_value(), direction.to_string());
    }
    for formula in ActualFormula::iter() {
        assert_eq!(formula.to_value(), formula.to_string());
    }
}

/// Unknown stored values are rejected
#[test]
fn test_try_from_value() {
    assert_eq!(
        Direction::try_from_value(&"decreasing".to_string()).unwrap(),
        Direction::Decreasing
    );
    assert!(Direction::try_from_value(&"sideways".to_string()).is_err());
}

/// Test serde representation
#[test]
fn test_enum_serde() {
    assert_eq!(
        serde_json::to_value(ActualFormula::UserDefined).unwrap(),
        "user_defined"
    );
    let direction: Direction = serde_json::from_str("\"increasing\"").unwrap();
    assert_eq!(direction, Direction::Increasing);
    assert!(serde_json::from_str::<Direction>("\"Increasing\"").is_err());
}
