//! HTTP server for Scalar API reference pages.
//!
//! Serves one rendered page, optionally alongside the raw API document it
//! points to and a hot reload token:
//!
//! - `GET /` - the API reference page
//! - `GET {document.route}` - the API document file
//! - `GET {hot_reload.route}` - server start time, polled by open pages
//!
//! # Quick Start
//!
//! ```ignore
//! use scalar_server::{ServerConfig, run_server};
//! use scalar_ui::Config;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         page: Config::new().with_url("https://example.com/openapi.yaml"),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use scalar_settings::{DocumentSettings, Settings};
use scalar_ui::{Config as PageConfig, ScalarUi};

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Page configuration.
    pub page: PageConfig,
    /// API document served next to the page.
    pub document: Option<DocumentSettings>,
    /// Hot reload route (`None` disables hot reload).
    pub hot_reload_route: Option<String>,
    /// Answer cross-origin requests.
    pub cors_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            page: PageConfig::default(),
            document: None,
            hot_reload_route: None,
            cors_enabled: true,
        }
    }
}

impl From<&Settings> for ServerConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            host: settings.server.host.clone(),
            port: settings.server.port,
            page: settings.page.clone(),
            document: settings.document.clone(),
            hot_reload_route: settings
                .hot_reload
                .enabled
                .then(|| settings.hot_reload.route.clone()),
            cors_enabled: settings.cors.enabled,
        }
    }
}

/// Run the server until Ctrl-C.
///
/// The page is rendered once before binding so template or configuration
/// problems are reported at startup.
///
/// # Errors
///
/// Returns an error if the page cannot be rendered or the server fails to
/// start.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    ScalarUi::new(config.page.clone()).render()?;

    let app = app::create_router(&config);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!(
        address = %addr,
        document = ?config.document.as_ref().map(|d| &d.route),
        hot_reload = config.hot_reload_route.is_some(),
        "Starting server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_server_config_from_settings() {
        let mut settings = Settings::default();
        settings.server.port = 9000;
        settings.document = Some(DocumentSettings::for_path(PathBuf::from("/api/openapi.yaml")));
        settings.cors.enabled = false;
        settings.page = PageConfig::new().with_title("Docs");

        let config = ServerConfig::from(&settings);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.page.title, "Docs");
        assert_eq!(config.document.unwrap().route, "/openapi.yaml");
        assert_eq!(config.hot_reload_route.as_deref(), Some("/hot-reload"));
        assert!(!config.cors_enabled);
    }

    #[test]
    fn test_server_config_hot_reload_disabled() {
        let mut settings = Settings::default();
        settings.hot_reload.enabled = false;
        assert!(ServerConfig::from(&settings).hot_reload_route.is_none());
    }
}
