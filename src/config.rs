use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use finchat_common::ChatConfig;
use finchat_common::config::DEFAULT_BACKEND_URL;

/// Looked up in the working directory when no path is given.
const DEFAULT_CONFIG_FILE: &str = "finchat";

/// Load client configuration.
///
/// Layers, lowest first: built-in defaults, the config file (optional unless
/// `path` is given), then `FINCHAT_*` environment variables. `.env` is
/// loaded by [`crate::cli::Cli::from_env_and_args`] before this runs.
pub fn load_config(path: Option<&Path>) -> Result<ChatConfig> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let settings = Config::builder()
        .set_default("backend_url", DEFAULT_BACKEND_URL)?
        .set_default("palette", "multi")?
        .set_default("number_format", "grouped")?
        .add_source(file)
        .add_source(Environment::with_prefix("FINCHAT"))
        .build()
        .context("Failed to load configuration")?;

    let config: ChatConfig = settings
        .try_deserialize()
        .context("Invalid configuration")?;

    tracing::debug!(?config, "Configuration loaded");
    Ok(config)
}
