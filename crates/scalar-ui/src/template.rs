//! HTML page template for the API reference.
//!
//! The bundled template is parsed once per process and reused by every
//! render. Output is a pure function of the configuration and that template.
//!
//! Escaping is split by context:
//!
//! - title, description, favicon and meta tags are HTML-escaped by the
//!   template engine (`.html` templates auto-escape);
//! - the configuration JSON is already script-safe (see [`crate::embed`]) and
//!   is inserted verbatim;
//! - `customCss` is trusted stylesheet text and is inserted verbatim;
//! - CSS variable names and values go through the `css` filter.

use std::fmt::Write;
use std::sync::OnceLock;

use minijinja::{Environment, Value, context};
use serde::Serialize;

use crate::config::Config;
use crate::embed;
use crate::error::{RenderError, TemplateError};

/// Title used when neither `title` nor `metaData.title` is set.
const FALLBACK_TITLE: &str = "API Reference";

/// A parsed page template.
pub struct PageTemplate {
    env: Environment<'static>,
    name: String,
}

impl PageTemplate {
    /// Parse a template from source.
    ///
    /// Auto-escaping follows the template name, so use a `.html` name for
    /// HTML output.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Parse`] if the source has a syntax error.
    pub fn from_source(
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<Self, TemplateError> {
        let name = name.into();
        let mut env = Environment::new();
        env.add_filter("css", css_filter);
        env.add_template_owned(name.clone(), source.into())
            .map_err(TemplateError::parse)?;
        Ok(Self { env, name })
    }

    /// The template bundled with the crate.
    ///
    /// Loaded and parsed on first use; later calls return the same instance,
    /// or the same error.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingAsset`] or [`TemplateError::Parse`] if
    /// the bundled asset is unusable.
    pub fn bundled() -> Result<&'static Self, TemplateError> {
        static BUNDLED: OnceLock<Result<PageTemplate, TemplateError>> = OnceLock::new();
        BUNDLED
            .get_or_init(Self::load_bundled)
            .as_ref()
            .map_err(Clone::clone)
    }

    fn load_bundled() -> Result<Self, TemplateError> {
        let name = scalar_assets::PAGE_TEMPLATE;
        let source = scalar_assets::get_text(name)
            .ok_or_else(|| TemplateError::MissingAsset(name.to_owned()))?;
        let template = Self::from_source(name, source)?;
        tracing::debug!(template = name, "Loaded page template");
        Ok(template)
    }

    /// Render the page for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Serialization`] if the configuration cannot be
    /// serialized and [`RenderError::Template`] if the template fails.
    pub fn render(&self, config: &Config) -> Result<String, RenderError> {
        let config_json = embed::config_payload(config)?;
        let hot_reload_url = if config.hot_reload_url.is_empty() {
            Value::from(())
        } else {
            Value::from_safe_string(embed::embed_json(&config.hot_reload_url)?.into_string())
        };
        let head = HeadData::from_config(config);

        let ctx = context! {
            title => head.title,
            description => head.description,
            favicon => &config.favicon,
            meta_tags => head.meta_tags,
            variables => config.variables.iter().collect::<Vec<_>>(),
            custom_css => Value::from_safe_string(config.custom_css.clone()),
            config_json => Value::from_safe_string(config_json.into_string()),
            hot_reload_url => hot_reload_url,
        };

        let template = self
            .env
            .get_template(&self.name)
            .map_err(TemplateError::execute)?;
        let html = template.render(ctx).map_err(TemplateError::execute)?;
        Ok(html)
    }
}

/// Render `config` with the bundled template.
///
/// # Errors
///
/// Returns [`RenderError`] if serialization or the template fails.
pub fn render_page(config: &Config) -> Result<String, RenderError> {
    PageTemplate::bundled()?.render(config)
}

/// Values for the document head.
struct HeadData {
    title: String,
    description: String,
    meta_tags: Vec<MetaTag>,
}

/// A `<meta>` element.
#[derive(Debug, PartialEq, Serialize)]
struct MetaTag {
    /// `name` or `property`.
    attribute: &'static str,
    key: String,
    content: String,
}

impl HeadData {
    fn from_config(config: &Config) -> Self {
        let meta_text = |key: &str| {
            config
                .meta_data
                .get(key)
                .and_then(serde_json::Value::as_str)
                .filter(|s| !s.is_empty())
        };

        let title = if config.title.is_empty() {
            meta_text("title").unwrap_or(FALLBACK_TITLE).to_owned()
        } else {
            config.title.clone()
        };
        let description = if config.description.is_empty() {
            meta_text("description").unwrap_or_default().to_owned()
        } else {
            config.description.clone()
        };

        let meta_tags = config
            .meta_data
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "title" | "description"))
            .filter_map(|(key, value)| {
                let content = value.as_str()?;
                Some(meta_tag(key, content))
            })
            .collect();

        Self {
            title,
            description,
            meta_tags,
        }
    }
}

/// Map a metadata key to a meta tag.
///
/// `ogImage` becomes `property="og:image"`, `twitterCard` becomes
/// `name="twitter:card"`, anything else is used as the `name` unchanged.
fn meta_tag(key: &str, content: &str) -> MetaTag {
    let (attribute, key) = if let Some(rest) = prefixed(key, "og") {
        ("property", format!("og:{rest}"))
    } else if let Some(rest) = prefixed(key, "twitter") {
        ("name", format!("twitter:{rest}"))
    } else {
        ("name", key.to_owned())
    };
    MetaTag {
        attribute,
        key,
        content: content.to_owned(),
    }
}

/// Strip a camelCase prefix and split the rest into `:`-separated lowercase
/// words: `prefixed("ogImageAlt", "og")` is `image:alt`.
fn prefixed(key: &str, prefix: &str) -> Option<String> {
    let rest = key.strip_prefix(prefix)?;
    if !rest.starts_with(|c: char| c.is_ascii_uppercase()) {
        return None;
    }
    let mut result = String::with_capacity(rest.len() + 2);
    for (i, c) in rest.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                result.push(':');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    Some(result)
}

/// Template filter escaping text for use inside a CSS declaration.
///
/// Returns a safe value so the HTML auto-escaper leaves it alone: HTML
/// entities are not decoded inside `<style>`.
fn css_filter(value: &str) -> Value {
    Value::from_safe_string(escape_css(value))
}

/// Escape characters that could end a declaration, a block, a comment or the
/// style element. Everything else is kept, so `#123456` or `calc(1rem * 2)`
/// survive unchanged.
fn escape_css(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        let escape = match c {
            '<' | '>' | '&' | '{' | '}' | ';' | '\\' | '"' | '\'' => true,
            '/' => chars.peek() == Some(&'*'),
            c => c.is_control(),
        };
        if escape {
            let _ = write!(result, "\\{:x} ", u32::from(c));
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceConfig;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const CONFIG_MARKER: &str = "window.__SCALAR_CONFIG__ = ";

    /// Extract the configuration JSON assigned in the inline script.
    fn embedded_config(html: &str) -> serde_json::Value {
        assert_eq!(html.matches(CONFIG_MARKER).count(), 1);
        let start = html.find(CONFIG_MARKER).unwrap() + CONFIG_MARKER.len();
        let script = &html[start..];
        let end = script.find("</script>").unwrap();
        let body = script[..end].trim_end().trim_end_matches(';');
        serde_json::from_str(body).unwrap()
    }

    fn style_block(html: &str) -> &str {
        let start = html.find("<style>").unwrap();
        let end = html.find("</style>").unwrap();
        &html[start..end]
    }

    fn document(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_render_page_end_to_end() {
        let config = Config::new()
            .with_url("https://x/openapi.yaml")
            .with_title("Docs")
            .with_theme("purple")
            .with_sidebar(false)
            .with_variable("--brand", "#123456");

        let html = render_page(&config).unwrap();

        assert_eq!(
            embedded_config(&html),
            json!({
                "url": "https://x/openapi.yaml",
                "proxyUrl": "https://proxy.scalar.com",
                "title": "Docs",
                "theme": "purple",
                "layout": "modern",
                "variables": {"--brand": "#123456"},
                "showSidebar": false,
                "showDeveloperTools": "always",
                "interactive": true,
            })
        );
        assert!(style_block(&html).contains("--brand: #123456;"));
        assert!(html.contains("<title>Docs</title>"));
        assert!(html.contains("<div id=\"app\"></div>"));
        assert!(html.contains("@scalar/api-reference"));
    }

    #[test]
    fn test_render_page_is_idempotent() {
        let config = Config::new()
            .with_url("https://x/openapi.yaml")
            .with_variable("--a", "1")
            .with_variable("--b", "2")
            .with_meta_data(document(json!({"ogTitle": "Docs", "robots": "noindex"})));
        assert_eq!(render_page(&config).unwrap(), render_page(&config).unwrap());
    }

    #[test]
    fn test_render_page_title_cannot_close_script() {
        let title = "</script><script>alert(1)</script>";
        let config = Config::new().with_title(title);

        let html = render_page(&config).unwrap();

        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains(
            "<title>&lt;&#x2f;script&gt;&lt;script&gt;alert(1)&lt;&#x2f;script&gt;</title>"
        ));
        assert_eq!(embedded_config(&html)["title"], title);
    }

    #[test]
    fn test_render_page_custom_css_cannot_close_config_script() {
        let css = "body { color: red; } </script><script>alert(1)</script>";
        let config = Config::new().with_custom_css(css);

        let html = render_page(&config).unwrap();

        // Verbatim inside the style element, escaped inside the JSON.
        assert!(style_block(&html).contains(css));
        assert_eq!(embedded_config(&html)["customCss"], css);
    }

    #[test]
    fn test_render_page_escapes_description_and_favicon() {
        let config = Config::new()
            .with_description("Fast \"and\" <safe>")
            .with_favicon("icon.png\" onload=\"x");

        let html = render_page(&config).unwrap();

        assert!(html.contains("content=\"Fast &quot;and&quot; &lt;safe&gt;\""));
        assert!(html.contains("href=\"icon.png&quot; onload=&quot;x\""));
    }

    #[test]
    fn test_render_page_omits_empty_head_fields() {
        let html = render_page(&Config::new()).unwrap();
        assert!(html.contains("<title>API Reference</title>"));
        assert!(!html.contains("name=\"description\""));
        assert!(!html.contains("rel=\"icon\""));
    }

    #[test]
    fn test_render_page_meta_data_tags() {
        let config = Config::new().with_meta_data(document(json!({
            "title": "Meta title",
            "description": "Meta description",
            "ogImage": "https://x/card.png",
            "twitterCard": "summary_large_image",
            "robots": "noindex",
            "ignored": 42,
        })));

        let html = render_page(&config).unwrap();

        assert!(html.contains("<title>Meta title</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"Meta description\" />"));
        assert!(html.contains("<meta property=\"og:image\""));
        assert!(html.contains("<meta name=\"twitter:card\" content=\"summary_large_image\" />"));
        assert!(html.contains("<meta name=\"robots\" content=\"noindex\" />"));
        assert!(!html.contains("\"ignored\" content"));
    }

    #[test]
    fn test_render_page_title_overrides_meta_title() {
        let config = Config::new()
            .with_title("Docs")
            .with_meta_data(document(json!({"title": "Meta title"})));
        let html = render_page(&config).unwrap();
        assert!(html.contains("<title>Docs</title>"));
    }

    #[test]
    fn test_render_page_variables_cannot_break_style() {
        let config = Config::new()
            .with_variable("--x", "red; } </style><script>alert(1)</script>")
            .with_variable("--y{", "/* open comment");

        let html = render_page(&config).unwrap();
        let style = style_block(&html);

        assert_eq!(html.matches("</style>").count(), 1);
        assert!(!html.contains("<script>alert(1)"));
        assert!(style.contains("--x: red\\3b  \\7d  \\3c /style\\3e "));
        assert!(style.contains("--y\\7b : \\2f * open comment;"));
    }

    #[test]
    fn test_render_page_custom_css_is_verbatim() {
        let css = ".a > .b { content: \"&\"; }";
        let html = render_page(&Config::new().with_custom_css(css)).unwrap();
        assert!(style_block(&html).contains(css));
    }

    #[test]
    fn test_render_page_hot_reload_script() {
        let without = render_page(&Config::new()).unwrap();
        assert!(!without.contains("window.location.reload()"));

        let config = Config::new().with_hot_reload_url("http://localhost:8080/hot-reload");
        let with = render_page(&config).unwrap();
        assert!(with.contains("window.location.reload()"));
        assert!(with.contains("var url = \"http://localhost:8080/hot-reload\";"));
    }

    #[test]
    fn test_render_page_hot_reload_url_cannot_close_script() {
        let config = Config::new().with_hot_reload_url("/reload</script><script>alert(1)");
        let html = render_page(&config).unwrap();
        assert!(!html.contains("<script>alert(1)"));
    }

    #[test]
    fn test_render_page_multi_source_selection() {
        let config = Config::new()
            .with_source(SourceConfig::from_url("https://x/a.yaml").with_slug("a"))
            .with_source(SourceConfig::from_url("https://x/b.yaml").with_slug("b"));
        let value = embedded_config(&render_page(&config).unwrap());
        assert_eq!(value["sources"][0]["default"], true);
        assert!(value["sources"][1].get("default").is_none());
    }

    #[test]
    fn test_from_source_reports_parse_errors() {
        let result = PageTemplate::from_source("broken.html", "{% for x in %}");
        assert!(matches!(result, Err(TemplateError::Parse(_))));
    }

    #[test]
    fn test_render_reports_execution_errors() {
        let template = PageTemplate::from_source("bad.html", "{{ title|css(1) }}").unwrap();
        let err = template.render(&Config::new()).unwrap_err();
        assert!(matches!(err, RenderError::Template(TemplateError::Execute(_))));
    }

    #[test]
    fn test_custom_template_receives_page_data() {
        let template = PageTemplate::from_source(
            "custom.html",
            "<h1>{{ title }}</h1><script>var c = {{ config_json }};</script>",
        )
        .unwrap();
        let html = template.render(&Config::new().with_title("A & B")).unwrap();
        assert!(html.starts_with("<h1>A &amp; B</h1>"));
        assert!(html.contains("\"title\": \"A \\u0026 B\""));
    }

    #[test]
    fn test_bundled_template_is_shared() {
        let first = PageTemplate::bundled().unwrap();
        let second = PageTemplate::bundled().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_meta_tag_key_mapping() {
        assert_eq!(
            meta_tag("ogImageAlt", "alt"),
            MetaTag {
                attribute: "property",
                key: "og:image:alt".to_owned(),
                content: "alt".to_owned(),
            }
        );
        assert_eq!(meta_tag("twitterSite", "@x").key, "twitter:site");
        assert_eq!(meta_tag("organization", "x").key, "organization");
        assert_eq!(meta_tag("robots", "x").attribute, "name");
    }

    #[test]
    fn test_escape_css_special_characters() {
        assert_eq!(escape_css("#123456"), "#123456");
        assert_eq!(escape_css("calc(1rem * 2)"), "calc(1rem * 2)");
        assert_eq!(escape_css("a;b"), "a\\3b b");
        assert_eq!(escape_css("</style>"), "\\3c /style\\3e ");
        assert_eq!(escape_css("/*"), "\\2f *");
        assert_eq!(escape_css("a\nb"), "a\\a b");
    }
}
