//! Timestamp policy
//!
//! KPI records carry nullable `create_date` and `edit_date` columns. For
//! every record type except periodic targets, the persistence layer calls
//! [`Timestamped::touch`] before each insert or update with the current time
//! from a [`Clock`]: the first write fills `create_date`, every write
//! refreshes `edit_date`.

use std::{
    fmt,
    sync::{Arc, Mutex},
};

use chrono::{DateTime, Duration, Utc};
use sea_orm::ActiveValue;

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Real system clock. Use this in production code.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> { Utc::now() }
}

/// Mock clock for deterministic tests.
///
/// Clones share the same instant, so a clone handed to the server can be
/// advanced from the test body.
///
/// ```
/// use chrono::Duration;
/// use entity::timestamps::{Clock, MockClock};
///
/// let clock = MockClock::new();
/// let start = clock.now();
/// clock.advance(Duration::minutes(6));
/// assert_eq!(clock.now() - start, Duration::minutes(6));
/// ```
#[derive(Debug, Clone)]
pub struct MockClock {
    current: Arc<Mutex<DateTime<Utc>>>,
}

impl MockClock {
    /// Start at the current real time.
    pub fn new() -> Self { Self::at(Utc::now()) }

    /// Start at a fixed instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            current: Arc::new(Mutex::new(instant)),
        }
    }

    /// Simulate time passing.
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += by;
    }

    /// Jump to an absolute instant.
    pub fn set(&self, instant: DateTime<Utc>) { *self.current.lock().unwrap_or_else(|e| e.into_inner()) = instant; }
}

impl Default for MockClock {
    fn default() -> Self { Self::new() }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> { *self.current.lock().unwrap_or_else(|e| e.into_inner()) }
}

/// Records that maintain `create_date` / `edit_date`.
pub trait Timestamped {
    /// Fill `create_date` if it is still unset and set `edit_date` to `now`.
    fn touch(&mut self, now: DateTime<Utc>);
}

fn has_date(value: &ActiveValue<Option<DateTime<Utc>>>) -> bool {
    matches!(
        value,
        ActiveValue::Set(Some(_)) | ActiveValue::Unchanged(Some(_))
    )
}

macro_rules! impl_timestamped {
    ($($module:ident),+ $(,)?) => {
        $(
            impl Timestamped for crate::$module::ActiveModel {
                fn touch(&mut self, now: DateTime<Utc>) {
                    if !has_date(&self.create_date) {
                        self.create_date = ActiveValue::Set(Some(now));
                    }
                    self.edit_date = ActiveValue::Set(Some(now));
                }
            }
        )+
    };
}

impl_timestamped!(
    indicator_types,
    objectives,
    outcomes,
    levels,
    indicators,
    indicator_sorts,
);

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use sea_orm::{ActiveModelTrait, IntoActiveModel};

    use super::*;
    use crate::levels;

    fn t0() -> DateTime<Utc> { Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap() }

    #[test]
    fn test_touch_new_record_sets_both_dates() {
        let mut level = levels::ActiveModel {
            name: ActiveValue::Set("Goal".to_string()),
            ..Default::default()
        };
        level.touch(t0());

        assert_eq!(level.create_date, ActiveValue::Set(Some(t0())));
        assert_eq!(level.edit_date, ActiveValue::Set(Some(t0())));
    }

    #[test]
    fn test_touch_existing_record_keeps_create_date() {
        let stored = levels::Model {
            id:             1,
            name:           "Goal".to_string(),
            workflowlevel1: None,
            sort:           0,
            organization:   None,
            parent_id:      0,
            global_default: false,
            description:    String::new(),
            color:          String::new(),
            created_by:     None,
            create_date:    Some(t0()),
            edit_date:      Some(t0()),
        };
        let later = t0() + Duration::hours(2);

        let mut active = stored.into_active_model();
        active.touch(later);

        assert_eq!(active.create_date, ActiveValue::Unchanged(Some(t0())));
        assert_eq!(active.edit_date, ActiveValue::Set(Some(later)));
        assert!(active.is_changed());
    }

    #[test]
    fn test_touch_fills_missing_create_date_on_update() {
        let mut active = levels::ActiveModel {
            id: ActiveValue::Unchanged(4),
            create_date: ActiveValue::Unchanged(None),
            ..Default::default()
        };
        active.touch(t0());
        assert_eq!(active.create_date, ActiveValue::Set(Some(t0())));
    }

    #[test]
    fn test_mock_clock_clones_share_time() {
        let clock = MockClock::at(t0());
        let shared = clock.clone();
        shared.advance(Duration::minutes(5));
        assert_eq!(clock.now(), t0() + Duration::minutes(5));

        clock.set(t0());
        assert_eq!(shared.now(), t0());
    }
}
