//! Cross-origin access for the page and the API document.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Allow any origin without credentials.
///
/// Browsers reject a wildcard origin combined with credentials, so
/// `Access-Control-Allow-Credentials` is never sent.
pub(crate) fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
