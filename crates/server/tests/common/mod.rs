//! # Common Test Utilities
//!
//! Shared test infrastructure: an in-memory SQLite database migrated with the
//! real migrator, application state driven by a mock clock, and request
//! fixtures.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use chrono::{DateTime, TimeZone, Utc};
use entity::{indicators, sea_orm_active_enums::Direction, timestamps::MockClock};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DbConn};
use server::{
    dto::{indicators::IndicatorRequest, levels::LevelRequest, objectives::ObjectiveRequest},
    AppState,
    HistoryAction,
    IndicatorHistory,
};

/// Initialize test logging (run once per test session)
static INIT: Once = Once::new();

/// Initialize test environment including structured logging
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Fixed starting instant of every test clock.
pub fn t0() -> DateTime<Utc> { Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap() }

/// Open a fresh in-memory database and apply all migrations.
///
/// The pool is pinned to a single connection because every SQLite
/// `:memory:` connection is its own database.
pub async fn test_db() -> DbConn {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

/// Keeps entries in memory, in the order they were recorded.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Mutex<Vec<(HistoryAction, indicators::Model)>>,
}

impl MemoryHistory {
    /// Entries recorded for one indicator, oldest first.
    pub fn entries_for(&self, indicator_id: i32) -> Vec<(HistoryAction, indicators::Model)> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|(_, model)| model.id == indicator_id)
            .cloned()
            .collect()
    }
}

impl IndicatorHistory for MemoryHistory {
    fn record(&self, action: HistoryAction, snapshot: &indicators::Model) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((action, snapshot.clone()));
    }
}

/// Application state plus handles to the test doubles it was built with
pub struct TestContext {
    pub state:   AppState,
    pub clock:   MockClock,
    pub history: Arc<MemoryHistory>,
}

impl TestContext {
    pub async fn new() -> Self {
        init_test_env();

        let clock = MockClock::at(t0());
        let history = Arc::new(MemoryHistory::default());
        let state = AppState::new(test_db().await)
            .with_clock(Arc::new(clock.clone()))
            .with_history(history.clone());

        Self {
            state,
            clock,
            history,
        }
    }
}

pub fn indicator_request(name: &str) -> IndicatorRequest {
    IndicatorRequest {
        name:                      name.to_string(),
        level_id:                  None,
        definition:                None,
        comments:                  None,
        workflowlevel1:            None,
        key_performance_indicator: false,
        direction:                 Some(Direction::Increasing),
        actual_formula:            None,
        actuals:                   None,
        notes:                     None,
        created_by:                None,
        indicator_type_ids:        vec![],
        objective_ids:             vec![],
        outcome_ids:               vec![],
    }
}

pub fn level_request(name: &str) -> LevelRequest {
    LevelRequest {
        name:           name.to_string(),
        workflowlevel1: None,
        sort:           0,
        organization:   None,
        parent_id:      0,
        global_default: false,
        description:    String::new(),
        color:          String::new(),
        created_by:     None,
    }
}

pub fn objective_request(name: &str) -> ObjectiveRequest {
    ObjectiveRequest {
        name:           name.to_string(),
        workflowlevel1: None,
        description:    String::new(),
        created_by:     None,
    }
}
