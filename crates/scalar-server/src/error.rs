//! Error types for the HTTP server.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The page could not be rendered.
    #[error("Render error: {0}")]
    Render(#[from] scalar_ui::RenderError),

    /// The configured API document does not exist.
    #[error("Document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    /// Plain text responses; details stay in the log.
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Render(e) => {
                tracing::error!(error = %e, "Failed to render page");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error rendering UI")
            }
            Self::DocumentNotFound(path) => {
                tracing::warn!(path = %path.display(), "API document not found");
                (StatusCode::NOT_FOUND, "Document not found")
            }
            Self::Io(e) => {
                tracing::error!(error = %e, "I/O error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, body).into_response()
    }
}
