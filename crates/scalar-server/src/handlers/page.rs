//! API reference page.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /.
pub(crate) async fn get_page(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    let html = state.ui.render()?;
    Ok(Html(html))
}
