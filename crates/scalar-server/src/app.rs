//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use scalar_ui::ScalarUi;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::ServerConfig;
use crate::handlers;
use crate::middleware::{cors, security};
use crate::state::AppState;

/// Create the application router.
///
/// Document and hot reload routes are only mounted when configured.
pub(crate) fn create_router(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState::new(
        ScalarUi::new(config.page.clone()),
        config.document.clone(),
    ));

    let mut router = Router::new().route(scalar_settings::PAGE_ROUTE, get(handlers::page::get_page));

    if let Some(document) = &config.document {
        router = router.route(&document.route, get(handlers::document::get_document));
    }

    if let Some(route) = &config.hot_reload_route {
        router = router.route(route, get(handlers::hot_reload::get_token));
    }

    if config.cors_enabled {
        router = router.layer(cors::cors_layer());
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::content_type_options_layer()),
        )
        .with_state(state)
}
