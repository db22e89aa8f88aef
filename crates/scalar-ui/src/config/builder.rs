//! Chainable setters for [`Config`].
//!
//! Every setter consumes the configuration and returns the updated value, so
//! a pipeline like `Config::new().with_url(..).with_theme(..)` never shares
//! a half-built value with anyone else.
//!
//! - List fields (`servers`, `sources`, `plugins`) are append-only.
//! - Opaque documents (`authentication`, `meta_data`, `default_http_client`,
//!   `path_routing`) are replaced wholesale.
//! - `variables` is extended one key at a time.

use serde_json::{Map, Value};

use super::{ClientHook, Config, DeveloperTools, HiddenClients, Plugin, Server, SourceConfig};

impl Config {
    /// Set the URL of the API document.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Embed the API document as text.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(Value::String(content.into()));
        self
    }

    /// Embed an already parsed API document.
    #[must_use]
    pub fn with_content_value(mut self, content: Value) -> Self {
        self.content = Some(content);
        self
    }

    #[must_use]
    pub fn with_proxy_url(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = proxy_url.into();
        self
    }

    /// Set the URL polled for hot reload.
    #[must_use]
    pub fn with_hot_reload_url(mut self, url: impl Into<String>) -> Self {
        self.hot_reload_url = url.into();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_favicon(mut self, favicon: impl Into<String>) -> Self {
        self.favicon = favicon.into();
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    #[must_use]
    pub fn with_dark_mode(mut self, enabled: bool) -> Self {
        self.dark_mode = enabled;
        self
    }

    /// Force `dark`, `light` or `system` mode.
    #[must_use]
    pub fn with_force_dark_mode_state(mut self, state: impl Into<String>) -> Self {
        self.force_dark_mode_state = state.into();
        self
    }

    #[must_use]
    pub fn with_custom_css(mut self, css: impl Into<String>) -> Self {
        self.custom_css = css.into();
        self
    }

    /// Declare one CSS custom property, replacing a previous value.
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_default_fonts(mut self, enabled: bool) -> Self {
        self.with_default_fonts = enabled;
        self
    }

    #[must_use]
    pub fn with_sidebar(mut self, show: bool) -> Self {
        self.show_sidebar = show;
        self
    }

    /// Hide HTTP method badges in the sidebar.
    #[must_use]
    pub fn hide_http_methods(mut self) -> Self {
        self.hide_methods = true;
        self
    }

    #[must_use]
    pub fn hide_models_section(mut self) -> Self {
        self.hide_models = true;
        self
    }

    #[must_use]
    pub fn hide_download(mut self) -> Self {
        self.hide_download_button = true;
        self
    }

    #[must_use]
    pub fn with_hide_search(mut self, hide: bool) -> Self {
        self.hide_search = hide;
        self
    }

    #[must_use]
    pub fn with_hide_test_request_button(mut self, hide: bool) -> Self {
        self.hide_test_request_button = hide;
        self
    }

    #[must_use]
    pub fn with_hide_client_button(mut self, hide: bool) -> Self {
        self.hide_client_button = hide;
        self
    }

    #[must_use]
    pub fn with_hide_dark_mode_toggle(mut self, hide: bool) -> Self {
        self.hide_dark_mode_toggle = hide;
        self
    }

    /// One of `yaml`, `json`, `both`, `none`, `direct`.
    #[must_use]
    pub fn with_document_download_type(mut self, download_type: impl Into<String>) -> Self {
        self.document_download_type = download_type.into();
        self
    }

    /// `summary` or `id`.
    #[must_use]
    pub fn with_operation_title_source(mut self, source: impl Into<String>) -> Self {
        self.operation_title_source = source.into();
        self
    }

    #[must_use]
    pub fn with_order_required_first(mut self, enabled: bool) -> Self {
        self.order_required_properties_first = enabled;
        self
    }

    /// `alpha`, `custom` or `preserve`.
    #[must_use]
    pub fn with_order_schema_properties_by(mut self, mode: impl Into<String>) -> Self {
        self.order_schema_properties_by = mode.into();
        self
    }

    #[must_use]
    pub fn with_expand_all_responses(mut self, enabled: bool) -> Self {
        self.expand_all_responses = enabled;
        self
    }

    #[must_use]
    pub fn with_expand_all_model_sections(mut self, enabled: bool) -> Self {
        self.expand_all_model_sections = enabled;
        self
    }

    #[must_use]
    pub fn with_default_open_all_tags(mut self, enabled: bool) -> Self {
        self.default_open_all_tags = enabled;
        self
    }

    /// Show the developer tools always (`true`) or never (`false`).
    #[must_use]
    pub fn with_developer_tools(self, show: bool) -> Self {
        self.with_developer_tools_mode(if show {
            DeveloperTools::Always
        } else {
            DeveloperTools::Never
        })
    }

    #[must_use]
    pub fn with_developer_tools_mode(mut self, mode: DeveloperTools) -> Self {
        self.show_developer_tools = mode;
        self
    }

    #[must_use]
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    #[must_use]
    pub fn with_persist_auth(mut self, enabled: bool) -> Self {
        self.persist_auth = enabled;
        self
    }

    /// Replace the authentication document.
    #[must_use]
    pub fn with_authentication(mut self, authentication: Map<String, Value>) -> Self {
        self.authentication = authentication;
        self
    }

    /// Send credentials (cookies) with requests.
    #[must_use]
    pub fn with_credentials(mut self, enabled: bool) -> Self {
        self.with_credentials = enabled;
        self
    }

    /// Append a server with a description (may be empty).
    #[must_use]
    pub fn with_server(self, url: impl Into<String>, description: impl Into<String>) -> Self {
        self.with_server_entry(Server::new(url).with_description(description))
    }

    /// Append a fully specified server.
    #[must_use]
    pub fn with_server_entry(mut self, server: Server) -> Self {
        self.servers.push(server);
        self
    }

    #[must_use]
    pub fn with_path_routing(mut self, path_routing: Map<String, Value>) -> Self {
        self.path_routing = path_routing;
        self
    }

    #[must_use]
    pub fn with_base_server_url(mut self, url: impl Into<String>) -> Self {
        self.base_server_url = url.into();
        self
    }

    /// Append a document to the document selector.
    #[must_use]
    pub fn with_source(mut self, source: SourceConfig) -> Self {
        self.sources.push(source);
        self
    }

    /// Replace the page metadata document.
    #[must_use]
    pub fn with_meta_data(mut self, meta_data: Map<String, Value>) -> Self {
        self.meta_data = meta_data;
        self
    }

    #[must_use]
    pub fn with_default_http_client(mut self, client: Map<String, Value>) -> Self {
        self.default_http_client = client;
        self
    }

    #[must_use]
    pub fn with_hidden_clients(mut self, hidden: HiddenClients) -> Self {
        self.hidden_clients = Some(hidden);
        self
    }

    #[must_use]
    pub fn with_telemetry(mut self, enabled: bool) -> Self {
        self.telemetry = enabled;
        self
    }

    #[must_use]
    pub fn with_is_loading(mut self, loading: bool) -> Self {
        self.is_loading = loading;
        self
    }

    #[must_use]
    pub fn with_on_spec_update(mut self, hook: impl Into<ClientHook>) -> Self {
        self.on_spec_update = hook.into();
        self
    }

    #[must_use]
    pub fn with_on_loaded(mut self, hook: impl Into<ClientHook>) -> Self {
        self.on_loaded = hook.into();
        self
    }

    #[must_use]
    pub fn with_on_before_request(mut self, hook: impl Into<ClientHook>) -> Self {
        self.on_before_request = hook.into();
        self
    }

    #[must_use]
    pub fn with_on_request_sent(mut self, hook: impl Into<ClientHook>) -> Self {
        self.on_request_sent = hook.into();
        self
    }

    #[must_use]
    pub fn with_on_document_select(mut self, hook: impl Into<ClientHook>) -> Self {
        self.on_document_select = hook.into();
        self
    }

    #[must_use]
    pub fn with_on_server_change(mut self, hook: impl Into<ClientHook>) -> Self {
        self.on_server_change = hook.into();
        self
    }

    #[must_use]
    pub fn with_on_show_more(mut self, hook: impl Into<ClientHook>) -> Self {
        self.on_show_more = hook.into();
        self
    }

    #[must_use]
    pub fn with_on_sidebar_click(mut self, hook: impl Into<ClientHook>) -> Self {
        self.on_sidebar_click = hook.into();
        self
    }

    #[must_use]
    pub fn with_generate_heading_slug(mut self, hook: impl Into<ClientHook>) -> Self {
        self.generate_heading_slug = hook.into();
        self
    }

    #[must_use]
    pub fn with_generate_model_slug(mut self, hook: impl Into<ClientHook>) -> Self {
        self.generate_model_slug = hook.into();
        self
    }

    #[must_use]
    pub fn with_generate_operation_slug(mut self, hook: impl Into<ClientHook>) -> Self {
        self.generate_operation_slug = hook.into();
        self
    }

    #[must_use]
    pub fn with_generate_tag_slug(mut self, hook: impl Into<ClientHook>) -> Self {
        self.generate_tag_slug = hook.into();
        self
    }

    #[must_use]
    pub fn with_generate_webhook_slug(mut self, hook: impl Into<ClientHook>) -> Self {
        self.generate_webhook_slug = hook.into();
        self
    }

    #[must_use]
    pub fn with_tags_sorter(mut self, hook: impl Into<ClientHook>) -> Self {
        self.tags_sorter = hook.into();
        self
    }

    #[must_use]
    pub fn with_operations_sorter(mut self, hook: impl Into<ClientHook>) -> Self {
        self.operations_sorter = hook.into();
        self
    }

    #[must_use]
    pub fn with_redirect(mut self, hook: impl Into<ClientHook>) -> Self {
        self.redirect = hook.into();
        self
    }

    /// Append a client-side plugin.
    #[must_use]
    pub fn with_plugin(mut self, plugin: Plugin) -> Self {
        self.plugins.push(plugin);
        self
    }
}
