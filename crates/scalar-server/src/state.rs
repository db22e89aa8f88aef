//! Application state.
//!
//! Shared state for all request handlers.

use std::time::{SystemTime, UNIX_EPOCH};

use scalar_settings::DocumentSettings;
use scalar_ui::ScalarUi;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Page renderer.
    pub(crate) ui: ScalarUi,
    /// API document served next to the page.
    pub(crate) document: Option<DocumentSettings>,
    /// Hot reload token: process start time in Unix seconds.
    pub(crate) started_at: u64,
}

impl AppState {
    pub(crate) fn new(ui: ScalarUi, document: Option<DocumentSettings>) -> Self {
        let started_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self {
            ui,
            document,
            started_at,
        }
    }
}
