//! Script-safe JSON for inline `<script>` elements.
//!
//! The page assigns the configuration to a global inside an inline script.
//! An HTML parser ends a script element at the first `</script`, no matter
//! whether it sits inside a JavaScript string, so the JSON must never contain
//! one. Escaping `<`, `>` and `&` as `\u003c`, `\u003e`, `\u0026` rules that
//! out along with `<!--`. U+2028 and U+2029 are escaped as well because older
//! JavaScript engines reject them inside string literals.
//!
//! All of these characters can only occur inside JSON strings, where the
//! `\uXXXX` form denotes the same character, so the escaped text still parses
//! to the identical value.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::config::{Config, DocumentSource, is_unset};
use crate::error::RenderError;

/// JSON text that is safe to place verbatim inside a `<script>` element.
///
/// Only produced by [`embed_json`], so holding one means the escaping already
/// happened. Templates must not escape it again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbeddedJson(String);

impl EmbeddedJson {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EmbeddedJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serialize any value as pretty-printed, script-safe JSON.
///
/// # Errors
///
/// Returns [`RenderError::Serialization`] if the value cannot be represented
/// as JSON (for example a map with non-string keys).
pub fn embed_json<T: Serialize + ?Sized>(value: &T) -> Result<EmbeddedJson, RenderError> {
    let json = serde_json::to_string_pretty(value).map_err(RenderError::Serialization)?;
    Ok(EmbeddedJson(escape_script(&json)))
}

/// Serialize the configuration as it should reach the client runtime.
///
/// Besides the omission rules encoded on [`Config`] itself, the payload:
///
/// - keeps only the winning document source (`url`, then `content`, then
///   `sources`);
/// - marks exactly one source as `default`: the first marked one, or the
///   first source when none is marked.
///
/// # Errors
///
/// Returns [`RenderError::Serialization`] if a value has no JSON form.
pub fn config_payload(config: &Config) -> Result<EmbeddedJson, RenderError> {
    let payload = normalize(config);
    let json = embed_json(payload.as_ref())?;
    tracing::debug!(bytes = json.as_str().len(), "Serialized page configuration");
    Ok(json)
}

/// Apply document source precedence and default source selection.
///
/// Borrows the input when it already satisfies both rules.
fn normalize(config: &Config) -> Cow<'_, Config> {
    let mut payload = Cow::Borrowed(config);

    if config.content.as_ref().is_some_and(Value::is_null) {
        payload.to_mut().content = None;
    }

    match config.document_source() {
        DocumentSource::Url(_) if !is_unset(&config.content) || !config.sources.is_empty() => {
            tracing::warn!("Both url and content/sources are set, using url");
            let owned = payload.to_mut();
            owned.content = None;
            owned.sources.clear();
        }
        DocumentSource::Content(_) if !config.sources.is_empty() => {
            tracing::warn!("Both content and sources are set, using content");
            payload.to_mut().sources.clear();
        }
        _ => {}
    }

    if let Some(selected) = payload.default_source_index() {
        let marked = payload.sources.iter().filter(|s| s.default).count();
        if marked > 1 {
            tracing::warn!(
                marked,
                selected,
                "Several sources are marked default, keeping the first"
            );
        }
        let consistent = payload
            .sources
            .iter()
            .enumerate()
            .all(|(i, s)| s.default == (i == selected));
        if !consistent {
            for (i, source) in payload.to_mut().sources.iter_mut().enumerate() {
                source.default = i == selected;
            }
        }
    }

    payload
}

/// Replace characters that could end a script element or upset a JavaScript
/// parser with their JSON unicode escapes.
fn escape_script(json: &str) -> String {
    let mut result = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => result.push_str("\\u003c"),
            '>' => result.push_str("\\u003e"),
            '&' => result.push_str("\\u0026"),
            '\u{2028}' => result.push_str("\\u2028"),
            '\u{2029}' => result.push_str("\\u2029"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientHook, Plugin, SourceConfig};
    use pretty_assertions::assert_eq;
    use serde::Serializer;
    use serde_json::{Value, json};

    fn payload_value(config: &Config) -> Value {
        let json = config_payload(config).unwrap();
        serde_json::from_str(json.as_str()).unwrap()
    }

    fn default_slugs(value: &Value) -> Vec<(String, bool)> {
        value["sources"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| {
                (
                    s["slug"].as_str().unwrap().to_owned(),
                    s.get("default").and_then(Value::as_bool).unwrap_or(false),
                )
            })
            .collect()
    }

    #[test]
    fn test_escape_script_closing_sequences() {
        let json = embed_json("</script><!-- & -->").unwrap();
        assert!(!json.as_str().contains('<'));
        assert!(!json.as_str().contains('>'));
        assert!(!json.as_str().contains('&'));
        assert_eq!(
            json.as_str(),
            r#""\u003c/script\u003e\u003c!-- \u0026 --\u003e""#
        );
    }

    #[test]
    fn test_escape_line_separators() {
        let json = embed_json("a\u{2028}b\u{2029}c").unwrap();
        assert_eq!(json.as_str(), r#""a\u2028b\u2029c""#);
    }

    #[test]
    fn test_escaped_json_parses_back() {
        let title = "</script><script>alert(\"x\\y\")</script> \u{2028}";
        let config = Config::new().with_title(title);
        let value = payload_value(&config);
        assert_eq!(value["title"], title);
    }

    #[test]
    fn test_payload_round_trips_to_equivalent_config() {
        let mut auth = serde_json::Map::new();
        auth.insert("preferredSecurityScheme".to_owned(), json!("apiKey"));

        let config = Config::new()
            .with_url("https://x/openapi.yaml")
            .with_title("Docs <beta>")
            .with_description("Everything & more")
            .with_theme("purple")
            .with_sidebar(false)
            .with_variable("--brand", "#123456")
            .with_authentication(auth)
            .with_server("https://api.example.com", "Production")
            .with_on_loaded("onLoaded")
            .with_operations_sorter(json!({"by": "method"}))
            .with_plugin(Plugin::new("analytics").enabled());

        let json = config_payload(&config).unwrap();
        let back: Config = serde_json::from_str(json.as_str()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_payload_is_deterministic() {
        let config = Config::new()
            .with_url("https://x/openapi.yaml")
            .with_variable("--b", "2")
            .with_variable("--a", "1");
        let first = config_payload(&config).unwrap();
        let second = config_payload(&config).unwrap();
        assert_eq!(first, second);
        assert!(first.as_str().find("--a").unwrap() < first.as_str().find("--b").unwrap());
    }

    #[test]
    fn test_empty_collections_are_omitted() {
        let value = payload_value(&Config::new());
        let object = value.as_object().unwrap();
        for key in [
            "plugins",
            "servers",
            "sources",
            "variables",
            "authentication",
            "metaData",
            "defaultHttpClient",
            "pathRouting",
            "onLoaded",
            "redirect",
            "url",
            "content",
            "darkMode",
        ] {
            assert!(!object.contains_key(key), "unexpected key {key}");
        }
    }

    #[test]
    fn test_null_values_are_omitted() {
        let config = Config::new()
            .with_content_value(Value::Null)
            .with_source(SourceConfig::from_url("https://example.com/a.yaml"))
            .with_on_loaded(ClientHook::Inline(Value::Null));
        let json = config_payload(&config).unwrap();
        assert!(!json.as_str().contains("null"), "{}", json.as_str());

        let value: Value = serde_json::from_str(json.as_str()).unwrap();
        assert!(value.get("content").is_none());
        assert!(value.get("onLoaded").is_none());
        assert_eq!(
            value["sources"],
            json!([{"url": "https://example.com/a.yaml", "default": true}])
        );
    }

    #[test]
    fn test_null_source_content_is_omitted() {
        let mut source = SourceConfig::from_url("https://example.com/a.yaml");
        source.content = Some(Value::Null);
        let value = payload_value(&Config::new().with_source(source));
        assert_eq!(
            value["sources"][0],
            json!({"url": "https://example.com/a.yaml", "default": true})
        );
    }

    #[test]
    fn test_normalize_clears_null_content() {
        let mut config = Config::new().with_url("/openapi.yaml");
        config.content = Some(Value::Null);
        let payload = normalize(&config);
        assert!(matches!(payload, Cow::Owned(_)));
        assert_eq!(payload.content, None);
        assert_eq!(payload.url, "/openapi.yaml");
    }

    #[test]
    fn test_hooks_pass_through() {
        let config = Config::new()
            .with_on_spec_update("window.handleSpec")
            .with_generate_heading_slug(json!({"prefix": "h-"}))
            .with_redirect(ClientHook::Absent);
        let value = payload_value(&config);
        assert_eq!(value["onSpecUpdate"], "window.handleSpec");
        assert_eq!(value["generateHeadingSlug"], json!({"prefix": "h-"}));
        assert!(value.get("redirect").is_none());
    }

    #[test]
    fn test_marked_source_is_selected() {
        let config = Config::new()
            .with_source(SourceConfig::new().with_slug("a"))
            .with_source(SourceConfig::new().with_slug("b").as_default())
            .with_source(SourceConfig::new().with_slug("c"));
        let value = payload_value(&config);
        assert_eq!(
            default_slugs(&value),
            vec![
                ("a".to_owned(), false),
                ("b".to_owned(), true),
                ("c".to_owned(), false),
            ]
        );
    }

    #[test]
    fn test_first_source_is_implicit_default() {
        let config = Config::new()
            .with_source(SourceConfig::new().with_slug("a"))
            .with_source(SourceConfig::new().with_slug("b"))
            .with_source(SourceConfig::new().with_slug("c"));
        let value = payload_value(&config);
        assert_eq!(
            default_slugs(&value),
            vec![
                ("a".to_owned(), true),
                ("b".to_owned(), false),
                ("c".to_owned(), false),
            ]
        );
        // The caller's configuration is left untouched.
        assert!(!config.sources[0].default);
    }

    #[test]
    fn test_duplicate_defaults_keep_first() {
        let config = Config::new()
            .with_source(SourceConfig::new().with_slug("a"))
            .with_source(SourceConfig::new().with_slug("b").as_default())
            .with_source(SourceConfig::new().with_slug("c").as_default());
        let value = payload_value(&config);
        assert_eq!(
            default_slugs(&value),
            vec![
                ("a".to_owned(), false),
                ("b".to_owned(), true),
                ("c".to_owned(), false),
            ]
        );
    }

    #[test]
    fn test_url_shadows_content_and_sources() {
        let config = Config::new()
            .with_url("https://x/openapi.yaml")
            .with_content("openapi: 3.1.0")
            .with_source(SourceConfig::from_url("https://x/other.yaml"));
        let value = payload_value(&config);
        assert_eq!(value["url"], "https://x/openapi.yaml");
        assert!(value.get("content").is_none());
        assert!(value.get("sources").is_none());
    }

    #[test]
    fn test_content_shadows_sources() {
        let config = Config::new()
            .with_content("openapi: 3.1.0")
            .with_source(SourceConfig::from_url("https://x/other.yaml"));
        let value = payload_value(&config);
        assert_eq!(value["content"], "openapi: 3.1.0");
        assert!(value.get("sources").is_none());
    }

    #[test]
    fn test_normalize_borrows_consistent_config() {
        let config = Config::new()
            .with_url("https://x/openapi.yaml")
            .with_title("Docs");
        assert!(matches!(normalize(&config), Cow::Borrowed(_)));
    }

    struct Unrepresentable;

    impl Serialize for Unrepresentable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("native handle has no JSON form"))
        }
    }

    #[test]
    fn test_unrepresentable_value_is_an_error() {
        let err = embed_json(&Unrepresentable).unwrap_err();
        assert!(matches!(err, RenderError::Serialization(_)));
        assert!(err.to_string().contains("native handle has no JSON form"));
    }
}
