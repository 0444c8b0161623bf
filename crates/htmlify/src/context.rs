//! Global context for CLI commands

use anyhow::{Context as _, Result};
use htmlify_core::config::{Config, ConfigOverrides};
use std::env;
use std::path::Path;

/// Global context containing the resolved configuration
pub struct Context {
    pub config: Config,
    pub verbose: bool,
}

impl Context {
    /// Load, override and validate the configuration, then load the dotenv file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be determined
    /// - The config file exists but cannot be parsed
    /// - The resulting settings would overwrite inputs with outputs
    pub fn new(
        config_path: Option<&Path>,
        overrides: ConfigOverrides,
        verbose: bool,
    ) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine current directory")?;

        let config = Config::load(&cwd, config_path)?
            .with_overrides(overrides)
            .resolved(&cwd)?;

        // Loaded once, before any document is compiled
        config.load_dotenv(&cwd);

        Ok(Self { config, verbose })
    }
}
