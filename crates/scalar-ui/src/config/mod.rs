//! Page configuration model.
//!
//! [`Config`] aggregates every option understood by the browser-side Scalar
//! API reference. Field order is the order of the serialized schema, and
//! every optional field is omitted from the JSON when it holds its zero value
//! so that the client keeps control of its own defaults.
//!
//! Opaque documents (`authentication`, `metaData`, `defaultHttpClient`,
//! `pathRouting`, plugin and server settings) are JSON value trees whose keys
//! serialize in ascending order.

mod builder;
mod entries;
mod hook;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use entries::{Plugin, Server, SourceConfig};
pub use hook::{ClientHook, DeveloperTools, HiddenClients};

/// Hosted CORS proxy used to fetch documents from other origins.
pub const DEFAULT_PROXY_URL: &str = "https://proxy.scalar.com";

/// Default theme name.
pub const DEFAULT_THEME: &str = "default";

/// Default layout name.
pub const DEFAULT_LAYOUT: &str = "modern";

/// Complete configuration of one API reference page.
///
/// Created with [`Config::new`] (or [`Default`]) and adjusted with the
/// chainable `with_*` setters:
///
/// ```
/// use scalar_ui::Config;
///
/// let config = Config::new()
///     .with_url("https://example.com/openapi.yaml")
///     .with_theme("moon")
///     .with_server("https://api.example.com", "Production");
/// assert_eq!(config.theme, "moon");
/// ```
///
/// Nothing here is validated. When several document sources are set, the
/// serializer keeps the first of `url`, `content`, `sources` (see
/// [`Config::document_source`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// URL of the OpenAPI/Swagger document.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Inline document (YAML or JSON text, or an already parsed object).
    /// A JSON `null` counts as unset.
    #[serde(skip_serializing_if = "is_unset")]
    pub content: Option<Value>,
    /// CORS proxy used to fetch the document.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub proxy_url: String,
    /// URL polled by the page to detect server restarts.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hot_reload_url: String,

    /// Page title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Page description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Favicon URL.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub favicon: String,

    /// Theme name (`default`, `alternate`, `moon`, `purple`, ...).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub theme: String,
    /// Layout (`modern` or `classic`).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub layout: String,
    #[serde(skip_serializing_if = "is_false")]
    pub dark_mode: bool,
    /// `dark`, `light` or `system`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub force_dark_mode_state: String,
    /// Stylesheet appended to the page as-is.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub custom_css: String,
    /// CSS custom properties declared on `:root`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_false")]
    pub with_default_fonts: bool,

    /// Always serialized: the client default is `true`, so `false` must be explicit.
    pub show_sidebar: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub hide_methods: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub hide_models: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub hide_search: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub hide_test_request_button: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub hide_client_button: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub hide_download_button: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub hide_dark_mode_toggle: bool,
    /// `yaml`, `json`, `both`, `none` or `direct`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub document_download_type: String,
    /// `summary` or `id`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub operation_title_source: String,
    #[serde(skip_serializing_if = "is_false")]
    pub order_required_properties_first: bool,
    /// `alpha`, `custom` or `preserve`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub order_schema_properties_by: String,

    #[serde(skip_serializing_if = "is_false")]
    pub expand_all_responses: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub expand_all_model_sections: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub default_open_all_tags: bool,

    pub show_developer_tools: DeveloperTools,
    /// Enables "Try it" requests. Always serialized, like `show_sidebar`.
    pub interactive: bool,

    /// Persist credentials in the browser's local storage.
    #[serde(skip_serializing_if = "is_false")]
    pub persist_auth: bool,
    /// Security scheme settings, passed through untouched.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub authentication: Map<String, Value>,
    /// Send cookies with requests.
    #[serde(skip_serializing_if = "is_false")]
    pub with_credentials: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub path_routing: Map<String, Value>,
    #[serde(rename = "baseServerURL", skip_serializing_if = "String::is_empty")]
    pub base_server_url: String,

    /// Documents offered in the document selector.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceConfig>,

    /// Page metadata (`title`, `description`, `ogImage`, ...).
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub meta_data: Map<String, Value>,

    #[serde(skip_serializing_if = "Map::is_empty")]
    pub default_http_client: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_clients: Option<HiddenClients>,

    #[serde(skip_serializing_if = "is_false")]
    pub telemetry: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_loading: bool,

    #[serde(skip_serializing_if = "ClientHook::is_absent")]
    pub on_spec_update: ClientHook,
    #[serde(skip_serializing_if = "ClientHook::is_absent")]
    pub on_loaded: ClientHook,
    #[serde(skip_serializing_if = "ClientHook::is_absent")]
    pub on_before_request: ClientHook,
    #[serde(skip_serializing_if = "ClientHook::is_absent")]
    pub on_request_sent: ClientHook,
    #[serde(skip_serializing_if = "ClientHook::is_absent")]
    pub on_document_select: ClientHook,
    #[serde(skip_serializing_if = "ClientHook::is_absent")]
    pub on_server_change: ClientHook,
    #[serde(skip_serializing_if = "ClientHook::is_absent")]
    pub on_show_more: ClientHook,
    #[serde(skip_serializing_if = "ClientHook::is_absent")]
    pub on_sidebar_click: ClientHook,

    #[serde(skip_serializing_if = "ClientHook::is_absent")]
    pub generate_heading_slug: ClientHook,
    #[serde(skip_serializing_if = "ClientHook::is_absent")]
    pub generate_model_slug: ClientHook,
    #[serde(skip_serializing_if = "ClientHook::is_absent")]
    pub generate_operation_slug: ClientHook,
    #[serde(skip_serializing_if = "ClientHook::is_absent")]
    pub generate_tag_slug: ClientHook,
    #[serde(skip_serializing_if = "ClientHook::is_absent")]
    pub generate_webhook_slug: ClientHook,

    #[serde(skip_serializing_if = "ClientHook::is_absent")]
    pub tags_sorter: ClientHook,
    #[serde(skip_serializing_if = "ClientHook::is_absent")]
    pub operations_sorter: ClientHook,

    #[serde(skip_serializing_if = "ClientHook::is_absent")]
    pub redirect: ClientHook,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<Plugin>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            content: None,
            proxy_url: DEFAULT_PROXY_URL.to_owned(),
            hot_reload_url: String::new(),
            title: String::new(),
            description: String::new(),
            favicon: String::new(),
            theme: DEFAULT_THEME.to_owned(),
            layout: DEFAULT_LAYOUT.to_owned(),
            dark_mode: false,
            force_dark_mode_state: String::new(),
            custom_css: String::new(),
            variables: BTreeMap::new(),
            with_default_fonts: false,
            show_sidebar: true,
            hide_methods: false,
            hide_models: false,
            hide_search: false,
            hide_test_request_button: false,
            hide_client_button: false,
            hide_download_button: false,
            hide_dark_mode_toggle: false,
            document_download_type: String::new(),
            operation_title_source: String::new(),
            order_required_properties_first: false,
            order_schema_properties_by: String::new(),
            expand_all_responses: false,
            expand_all_model_sections: false,
            default_open_all_tags: false,
            show_developer_tools: DeveloperTools::Always,
            interactive: true,
            persist_auth: false,
            authentication: Map::new(),
            with_credentials: false,
            servers: Vec::new(),
            path_routing: Map::new(),
            base_server_url: String::new(),
            sources: Vec::new(),
            meta_data: Map::new(),
            default_http_client: Map::new(),
            hidden_clients: None,
            telemetry: false,
            is_loading: false,
            on_spec_update: ClientHook::Absent,
            on_loaded: ClientHook::Absent,
            on_before_request: ClientHook::Absent,
            on_request_sent: ClientHook::Absent,
            on_document_select: ClientHook::Absent,
            on_server_change: ClientHook::Absent,
            on_show_more: ClientHook::Absent,
            on_sidebar_click: ClientHook::Absent,
            generate_heading_slug: ClientHook::Absent,
            generate_model_slug: ClientHook::Absent,
            generate_operation_slug: ClientHook::Absent,
            generate_tag_slug: ClientHook::Absent,
            generate_webhook_slug: ClientHook::Absent,
            tags_sorter: ClientHook::Absent,
            operations_sorter: ClientHook::Absent,
            redirect: ClientHook::Absent,
            plugins: Vec::new(),
        }
    }
}

/// Where the page loads its API document from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DocumentSource<'a> {
    /// Fetched from a URL.
    Url(&'a str),
    /// Embedded in the page.
    Content(&'a Value),
    /// One of several documents, selected in the UI.
    Sources(&'a [SourceConfig]),
    /// No document configured.
    Missing,
}

impl Config {
    /// Create a configuration with the defaults of the client runtime.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the document source.
    ///
    /// Precedence is `url`, then `content`, then `sources`; the lower ranked
    /// fields are ignored when a higher ranked one is set.
    pub fn document_source(&self) -> DocumentSource<'_> {
        if !self.url.is_empty() {
            DocumentSource::Url(&self.url)
        } else if let Some(content) = self.content.as_ref().filter(|c| !c.is_null()) {
            DocumentSource::Content(content)
        } else if !self.sources.is_empty() {
            DocumentSource::Sources(&self.sources)
        } else {
            DocumentSource::Missing
        }
    }

    /// Index of the source selected when the page opens.
    ///
    /// The first source marked `default` wins; without one the first source
    /// is selected. Returns `None` when there are no sources.
    pub fn default_source_index(&self) -> Option<usize> {
        if self.sources.is_empty() {
            return None;
        }
        Some(self.sources.iter().position(|s| s.default).unwrap_or(0))
    }

    /// Source selected when the page opens.
    pub fn default_source(&self) -> Option<&SourceConfig> {
        self.default_source_index().map(|i| &self.sources[i])
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

#[allow(clippy::ref_option)]
pub(crate) fn is_unset(value: &Option<Value>) -> bool {
    value.as_ref().is_none_or(Value::is_null)
}
