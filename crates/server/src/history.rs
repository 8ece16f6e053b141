//! # Indicator History
//!
//! Every create, update and delete of an indicator is handed to an
//! [`IndicatorHistory`] recorder after the write commits. Recorders are
//! append-only and keyed by indicator id; how they store entries is their own
//! business.

use std::fmt;

use entity::indicators;

/// Kind of change being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    Created,
    Updated,
    Deleted,
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryAction::Created => write!(f, "created"),
            HistoryAction::Updated => write!(f, "updated"),
            HistoryAction::Deleted => write!(f, "deleted"),
        }
    }
}

/// Audit trail recorder for indicator changes.
pub trait IndicatorHistory: Send + Sync + fmt::Debug {
    /// Record `snapshot` as the state of the indicator after `action`.
    fn record(&self, action: HistoryAction, snapshot: &indicators::Model);
}

/// Emits each change as a structured event on the `indicator_history` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHistory;

impl IndicatorHistory for TracingHistory {
    fn record(&self, action: HistoryAction, snapshot: &indicators::Model) {
        let snapshot_json = serde_json::to_string(snapshot).unwrap_or_default();
        logging::log_history_event!(action, snapshot.id, snapshot_json);
    }
}
