//! `scalar serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use scalar_server::{ServerConfig, run_server};
use scalar_settings::{CliSettings, Settings};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover scalar.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long, env = "SCALAR_HOST")]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long, env = "SCALAR_PORT")]
    port: Option<u16>,

    /// API document to serve next to the page (overrides config).
    #[arg(short, long)]
    document: Option<PathBuf>,

    /// Disable hot reload.
    #[arg(long)]
    no_hot_reload: bool,

    /// Enable verbose output (request and render logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let settings = Settings::load(self.config.as_deref(), Some(&self.cli_settings()))?;

        output.info(&format!(
            "Starting server on http://{}:{}",
            settings.server.host, settings.server.port
        ));
        if let Some(path) = &settings.config_path {
            output.info(&format!("Config: {}", path.display()));
        }
        match &settings.document {
            Some(document) => output.info(&format!(
                "Document: {} -> {}",
                document.path.display(),
                document.route
            )),
            None if settings.page.url.is_empty() => {
                output.info("Document: none (set [document] or [page] url)");
            }
            None => output.info(&format!("Document: {}", settings.page.url)),
        }
        if settings.hot_reload.enabled {
            output.info("Hot reload: enabled");
        } else {
            output.info("Hot reload: disabled");
        }

        run_server(ServerConfig::from(&settings)).await?;

        Ok(())
    }

    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            host: self.host.clone(),
            port: self.port,
            document: self.document.clone(),
            hot_reload_enabled: self.no_hot_reload.then_some(false),
        }
    }
}
