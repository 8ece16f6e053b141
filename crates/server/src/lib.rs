//! # KPI API Server
//!
//! Axum-based HTTP API over the KPI indicator data model.
//!
//! ## Modules
//!
//! - [`dto`]: Request/response data transfer objects
//! - [`kpi`]: Create, read, update, list and delete operations per resource
//! - [`history`]: Audit trail recorder for indicator changes
//! - [`middleware`]: HTTP middleware (access log)
//! - [`router`]: API route configuration

use std::sync::Arc;

use entity::timestamps::{Clock, SystemClock};

pub mod dto;
pub mod history;
pub mod kpi;
pub mod middleware;
pub mod router;

pub use history::{HistoryAction, IndicatorHistory, TracingHistory};
pub use router::create_app_router;

/// Application state shared across request handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db:         sea_orm::DbConn,
    /// Time source for `create_date` / `edit_date`
    pub clock:      Arc<dyn Clock>,
    /// Receives every indicator change
    pub history:    Arc<dyn IndicatorHistory>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// State backed by the system clock and the tracing history recorder.
    pub fn new(db: sea_orm::DbConn) -> Self {
        Self {
            db,
            clock: Arc::new(SystemClock),
            history: Arc::new(TracingHistory),
            start_time: std::time::Instant::now(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_history(mut self, history: Arc<dyn IndicatorHistory>) -> Self {
        self.history = history;
        self
    }
}
