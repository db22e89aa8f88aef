//! `scalar.toml` configuration for the Scalar API reference server.
//!
//! Parses the file with serde, auto-discovers it in the working directory
//! and its parents, and applies CLI overrides via [`CliSettings`].
//!
//! The `[page]` table is a [`scalar_ui::Config`] written with the same
//! camelCase keys the browser runtime uses.
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `document.path`
//! - `page.url`, `page.proxyUrl`, `page.baseServerURL`
//! - `page.sources[].url`

mod expand;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use scalar_ui::{Config as PageConfig, DocumentSource};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// Only `Some` values override the loaded settings.
#[derive(Debug, Default)]
pub struct CliSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Override the served API document.
    pub document: Option<PathBuf>,
    pub hot_reload_enabled: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "scalar.toml";

/// Route used for a document whose path has no usable file name.
const DEFAULT_DOCUMENT_ROUTE: &str = "/openapi.yaml";

/// Route serving the page itself.
pub const PAGE_ROUTE: &str = "/";

/// Server settings.
#[derive(Debug, Default)]
pub struct Settings {
    pub server: ServerSettings,
    /// Local API document served next to the page, if any.
    pub document: Option<DocumentSettings>,
    pub hot_reload: HotReloadSettings,
    pub cors: CorsSettings,
    /// Page configuration handed to the renderer.
    pub page: PageConfig,
    /// Path to the config file (set after loading).
    pub config_path: Option<PathBuf>,
}

/// Settings as parsed from TOML, before path resolution.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSettings {
    server: ServerSettings,
    document: Option<DocumentSettingsRaw>,
    hot_reload: HotReloadSettings,
    cors: CorsSettings,
    page: PageConfig,
}

/// Listen address.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DocumentSettingsRaw {
    path: Option<String>,
    route: Option<String>,
}

/// Resolved API document settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSettings {
    /// Absolute (or CLI-given) path of the document file.
    pub path: PathBuf,
    /// Route the document is served under.
    pub route: String,
}

impl DocumentSettings {
    /// Settings serving `path` under `/<file name>`.
    #[must_use]
    pub fn for_path(path: PathBuf) -> Self {
        let route = default_route(&path);
        Self { path, route }
    }
}

fn default_route(path: &Path) -> String {
    path.file_name()
        .and_then(OsStr::to_str)
        .map_or_else(|| DEFAULT_DOCUMENT_ROUTE.to_owned(), |name| format!("/{name}"))
}

/// Restart detection for open pages.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HotReloadSettings {
    pub enabled: bool,
    pub route: String,
}

impl Default for HotReloadSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            route: "/hot-reload".to_owned(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CorsSettings {
    pub enabled: bool,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Settings error.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Setting path (e.g., "`page.url`").
        field: String,
        /// Error message (e.g., "${`API_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), SettingsError> {
    if value.is_empty() {
        return Err(SettingsError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a route to be an absolute path.
fn require_route(route: &str, field: &str) -> Result<(), SettingsError> {
    if !route.starts_with('/') {
        return Err(SettingsError::Validation(format!(
            "{field} must start with '/'"
        )));
    }
    Ok(())
}

impl Settings {
    /// Load settings from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise, searches
    /// for `scalar.toml` in the current directory and its parents, falling
    /// back to defaults.
    ///
    /// CLI settings are applied after loading, then page defaults are derived
    /// and the result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, parsing or
    /// expansion fails, or the final settings are invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, SettingsError> {
        let mut settings = if let Some(path) = config_path {
            if !path.exists() {
                return Err(SettingsError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(cli) = cli_settings {
            settings.apply_cli_settings(cli);
        }
        settings.apply_page_defaults();
        settings.validate()?;

        Ok(settings)
    }

    /// Apply CLI settings.
    fn apply_cli_settings(&mut self, cli: &CliSettings) {
        if let Some(host) = &cli.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(path) = &cli.document {
            // A configured route survives the path override.
            let route = self
                .document
                .take()
                .map_or_else(|| default_route(path), |document| document.route);
            self.document = Some(DocumentSettings {
                path: path.clone(),
                route,
            });
        }
        if let Some(enabled) = cli.hot_reload_enabled {
            self.hot_reload.enabled = enabled;
        }
    }

    /// Point the page at the served document and the hot reload route unless
    /// `[page]` says otherwise.
    fn apply_page_defaults(&mut self) {
        if let Some(document) = &self.document
            && self.page.document_source() == DocumentSource::Missing
        {
            self.page.url.clone_from(&document.route);
        }
        if self.hot_reload.enabled && self.page.hot_reload_url.is_empty() {
            self.page.hot_reload_url.clone_from(&self.hot_reload.route);
        }
    }

    /// Load settings from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let mut raw: RawSettings = toml::from_str(&content)?;

        raw.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut settings = raw.resolve(config_dir)?;
        settings.config_path = Some(path.to_path_buf());

        Ok(settings)
    }

    /// Validate settings values.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.validate_server()?;
        self.validate_routes()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), SettingsError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 asks the OS for a random port, which is never what a config
        // file means.
        if self.server.port == 0 {
            return Err(SettingsError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Routes must be absolute and must not shadow each other or the page.
    fn validate_routes(&self) -> Result<(), SettingsError> {
        let mut routes = vec![("page", PAGE_ROUTE)];

        if let Some(document) = &self.document {
            require_route(&document.route, "document.route")?;
            routes.push(("document.route", document.route.as_str()));
        }
        if self.hot_reload.enabled {
            require_route(&self.hot_reload.route, "hot_reload.route")?;
            routes.push(("hot_reload.route", self.hot_reload.route.as_str()));
        }

        for (i, (field, route)) in routes.iter().enumerate() {
            if let Some((other, _)) = routes[..i].iter().find(|(_, r)| r == route) {
                return Err(SettingsError::Validation(format!(
                    "{field} '{route}' conflicts with {other}"
                )));
            }
        }

        Ok(())
    }
}

impl RawSettings {
    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), SettingsError> {
        expand::expand_in_place(&mut self.server.host, "server.host")?;

        if let Some(path) = self.document.as_mut().and_then(|d| d.path.as_mut()) {
            expand::expand_in_place(path, "document.path")?;
        }

        let page = &mut self.page;
        expand::expand_in_place(&mut page.url, "page.url")?;
        expand::expand_in_place(&mut page.proxy_url, "page.proxyUrl")?;
        expand::expand_in_place(&mut page.base_server_url, "page.baseServerURL")?;
        for (i, source) in page.sources.iter_mut().enumerate() {
            expand::expand_in_place(&mut source.url, &format!("page.sources[{i}].url"))?;
        }

        Ok(())
    }

    /// Resolve the document path against the config directory.
    ///
    /// A `[document]` section requires `path`.
    fn resolve(self, config_dir: &Path) -> Result<Settings, SettingsError> {
        let document = match self.document {
            Some(raw) => {
                let path = raw.path.ok_or_else(|| {
                    SettingsError::Validation("[document] section requires path to be set".to_owned())
                })?;
                let path = config_dir.join(path);
                let route = raw.route.unwrap_or_else(|| default_route(&path));
                Some(DocumentSettings { path, route })
            }
            None => None,
        };

        Ok(Settings {
            server: self.server,
            document,
            hot_reload: self.hot_reload,
            cors: self.cors,
            page: self.page,
            config_path: None,
        })
    }
}

/// Search for a config file in `start` and its parents.
fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}
