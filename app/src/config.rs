//! Command-line and environment configuration.

use clap::Parser;
use rickdex_core::DEFAULT_BASE_URL;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

#[derive(Debug, Clone, Parser)]
#[command(name = "rickdex", version, about = "Browse Rick and Morty characters from the terminal")]
pub struct Config {
    /// Base URL of the character API.
    #[arg(long, env = "RICKDEX_API_BASE", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log filter directives, e.g. `info` or `rickdex_core=debug`.
    #[arg(long, env = "RICKDEX_LOG", default_value = "warn")]
    pub log: String,

    /// Relative URL to open first, e.g. `/?q=Rick&p=2`.
    #[arg(default_value = "/")]
    pub start: String,
}

/// Install the stderr subscriber. Logs never share stdout with the UI.
pub fn init_logging(config: &Config) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(&config.log).map_err(|e| AppError::Logging(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
