//! List entries of the page configuration: servers, sources and plugins.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server offered in the request builder, overriding the document's list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Values for the `{variables}` in `url`.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub variables: Map<String, Value>,
}

impl Server {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_variables(mut self, variables: Map<String, Value>) -> Self {
        self.variables = variables;
        self
    }
}

/// One document of a multi-document page.
///
/// At most one source in a list should be marked `default`; when none is,
/// the first one is selected.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Name shown in the document selector.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// URL slug identifying the document.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub slug: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "super::is_unset")]
    pub content: Option<Value>,
    #[serde(skip_serializing_if = "super::is_false")]
    pub default: bool,
}

impl SourceConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Source fetched from `url`.
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Source embedded as text.
    #[must_use]
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(Value::String(content.into())),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Mark this source as the one selected on load.
    #[must_use]
    pub fn as_default(mut self) -> Self {
        self.default = true;
        self
    }
}

/// Client-side plugin declaration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plugin {
    pub name: String,
    /// Plugin settings, opaque to the server.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub config: Map<String, Value>,
    #[serde(skip_serializing_if = "super::is_false")]
    pub enabled: bool,
}

impl Plugin {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: Map<String, Value>) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_server_url_always_serialized() {
        let value = serde_json::to_value(Server::default()).unwrap();
        assert_eq!(value, json!({"url": ""}));
    }

    #[test]
    fn test_server_with_variables() {
        let mut variables = Map::new();
        variables.insert("region".to_owned(), json!({"default": "eu"}));
        let server = Server::new("https://{region}.example.com")
            .with_description("Regional")
            .with_variables(variables);

        assert_eq!(
            serde_json::to_value(&server).unwrap(),
            json!({
                "url": "https://{region}.example.com",
                "description": "Regional",
                "variables": {"region": {"default": "eu"}},
            })
        );
    }

    #[test]
    fn test_source_omits_unset_fields() {
        let source = SourceConfig::from_url("https://x/a.yaml").with_slug("a");
        assert_eq!(
            serde_json::to_value(&source).unwrap(),
            json!({"slug": "a", "url": "https://x/a.yaml"})
        );
    }

    #[test]
    fn test_source_default_flag() {
        let source = SourceConfig::from_content("openapi: 3.1.0")
            .with_title("Inline")
            .as_default();
        assert_eq!(
            serde_json::to_value(&source).unwrap(),
            json!({"title": "Inline", "content": "openapi: 3.1.0", "default": true})
        );
    }

    #[test]
    fn test_plugin_config_is_opaque() {
        let mut settings = Map::new();
        settings.insert("nested".to_owned(), json!({"list": [1, "two", null]}));
        let plugin = Plugin::new("analytics").with_config(settings).enabled();

        let value = serde_json::to_value(&plugin).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "analytics",
                "config": {"nested": {"list": [1, "two", null]}},
                "enabled": true,
            })
        );
        let back: Plugin = serde_json::from_value(value).unwrap();
        assert_eq!(back, plugin);
    }
}
