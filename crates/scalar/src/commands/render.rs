//! `scalar render` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use scalar_settings::{CliSettings, Settings};
use scalar_ui::ScalarUi;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to configuration file (default: auto-discover scalar.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// A static page has no server to poll, so hot reload is always off,
    /// including an explicit `hotReloadUrl` in `[page]`.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            hot_reload_enabled: Some(false),
            ..CliSettings::default()
        };
        let mut settings = Settings::load(self.config.as_deref(), Some(&cli_settings))?;
        settings.page.hot_reload_url.clear();

        let html = ScalarUi::new(settings.page).render()?;
        tracing::debug!(bytes = html.len(), "Rendered page");

        match &self.output {
            Some(path) => write_page(path, &html),
            None => {
                std::io::stdout().lock().write_all(html.as_bytes())?;
                Ok(())
            }
        }
    }
}

/// Write the page to `path`, creating parent directories.
fn write_page(path: &Path, html: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;

    Output::new().success(&format!("Wrote {}", path.display()));
    Ok(())
}
