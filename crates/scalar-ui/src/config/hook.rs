//! Client-side references and small enumerations of the page configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reference to a function that exists only in the browser.
///
/// Callbacks, slug generators, sorters and the redirect rule are resolved by
/// the client runtime. The server never interprets them; it only carries the
/// reference into the page.
///
/// - `Named` serializes as a JSON string (for example the name of a global
///   function).
/// - `Inline` serializes as the given JSON value unchanged.
/// - `Absent` is omitted from the output, and so is an inline `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClientHook {
    #[default]
    Absent,
    Named(String),
    Inline(Value),
}

impl ClientHook {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent | Self::Inline(Value::Null))
    }

    /// Reference a client function by name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

impl From<&str> for ClientHook {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<String> for ClientHook {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<Value> for ClientHook {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::String(name) => Self::Named(name),
            other => Self::Inline(other),
        }
    }
}

/// HTTP client snippets hidden from the code sample picker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HiddenClients {
    /// `true` hides every client.
    All(bool),
    /// Client names, e.g. `["fetch", "axios"]`.
    Names(Vec<String>),
    /// Per target language: `true` or a list of client names.
    Targets(BTreeMap<String, Value>),
}

/// When the developer tools toolbar is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeveloperTools {
    #[default]
    Always,
    Never,
    Localhost,
}
