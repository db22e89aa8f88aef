//! Configuration model and HTML rendering for Scalar API reference pages.
//!
//! This crate turns a [`Config`] into a complete HTML document that boots the
//! browser-side Scalar API reference:
//!
//! - [`Config`]: every page option, with chainable `with_*` setters
//! - [`config_payload`]: the script-safe JSON handed to the client runtime
//! - [`render_page`]: the bundled page template filled in for one config
//! - [`ScalarUi`]: a reusable instance holding one configuration
//!
//! # Quick Start
//!
//! ```
//! use scalar_ui::{Config, ScalarUi};
//!
//! let ui = ScalarUi::new(
//!     Config::new()
//!         .with_url("/openapi.yaml")
//!         .with_title("Petstore")
//!         .with_theme("purple"),
//! );
//! let html = ui.render().unwrap();
//! assert!(html.contains("<title>Petstore</title>"));
//! ```

mod config;
mod embed;
mod error;
mod template;
mod ui;

pub use config::{
    ClientHook, Config, DEFAULT_LAYOUT, DEFAULT_PROXY_URL, DEFAULT_THEME, DeveloperTools,
    DocumentSource, HiddenClients, Plugin, Server, SourceConfig,
};
pub use embed::{EmbeddedJson, config_payload, embed_json};
pub use error::{RenderError, TemplateError};
pub use template::{PageTemplate, render_page};
pub use ui::ScalarUi;
