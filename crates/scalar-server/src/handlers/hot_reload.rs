//! Hot reload token.
//!
//! Open pages poll this route and reload once the value changes, which
//! happens when the server restarts.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::state::AppState;

/// Handle GET {hot_reload.route}.
pub(crate) async fn get_token(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        state.started_at.to_string(),
    )
}
