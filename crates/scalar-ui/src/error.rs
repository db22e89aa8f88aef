//! Error types for page rendering.

use std::sync::Arc;

/// Error returned when a page cannot be rendered.
///
/// Rendering is a pure function of the configuration and the bundled
/// template, so retrying with the same input fails the same way.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A configuration value has no JSON representation.
    #[error("Failed to serialize configuration: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The page template could not be loaded, parsed or executed.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Error raised by the page template.
///
/// Cheap to clone: the bundled template is parsed once and a failure is
/// handed to every later render call.
#[derive(Clone, Debug, thiserror::Error)]
pub enum TemplateError {
    /// The template asset is missing from the bundle or is not UTF-8.
    #[error("Template asset not found: {0}")]
    MissingAsset(String),

    /// The template source has a syntax error.
    #[error("Failed to parse template: {0}")]
    Parse(#[source] Arc<minijinja::Error>),

    /// The template failed while rendering.
    #[error("Failed to execute template: {0}")]
    Execute(#[source] Arc<minijinja::Error>),
}

impl TemplateError {
    pub(crate) fn parse(err: minijinja::Error) -> Self {
        Self::Parse(Arc::new(err))
    }

    pub(crate) fn execute(err: minijinja::Error) -> Self {
        Self::Execute(Arc::new(err))
    }
}
