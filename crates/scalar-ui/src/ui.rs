//! A configured API reference page.

use crate::config::Config;
use crate::error::RenderError;
use crate::template::render_page;

/// Holds one page configuration and renders it on demand.
///
/// Rendering borrows the instance immutably, so a shared `ScalarUi` can serve
/// concurrent requests. Replacing the configuration needs `&mut self`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScalarUi {
    config: Config,
}

impl ScalarUi {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// An instance with the default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Render the full HTML page.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the configuration cannot be serialized or
    /// the template fails.
    pub fn render(&self) -> Result<String, RenderError> {
        render_page(&self.config)
    }
}

impl From<Config> for ScalarUi {
    fn from(config: Config) -> Self {
        Self::new(config)
    }
}
