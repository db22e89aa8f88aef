//! Raw API document.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET {document.route}.
///
/// The file is read on every request so edits show up on the next reload.
pub(crate) async fn get_document(
    State(state): State<Arc<AppState>>,
) -> Result<Response, ServerError> {
    let Some(document) = &state.document else {
        return Err(ServerError::DocumentNotFound(PathBuf::new()));
    };

    let content = tokio::fs::read(&document.path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ServerError::DocumentNotFound(document.path.clone())
        } else {
            ServerError::Io(e)
        }
    })?;
    let mime = scalar_assets::mime_for(&document.path.to_string_lossy()).into_owned();

    Ok((
        [
            (header::CONTENT_TYPE, mime),
            (header::CACHE_CONTROL, "no-cache".to_owned()),
        ],
        content,
    )
        .into_response())
}
