pub mod analyze;
pub mod commands;
pub mod export;
pub mod import;
pub mod output;
pub mod render;

pub use commands::{Cli, Commands};

use std::path::PathBuf;

use crate::config::{self, ClientConfig};
use crate::errors::SolauditError;

/// Builds the effective client config: optional YAML file, then CLI flag
/// overrides.
pub(crate) async fn resolve_config(
    config_path: Option<&str>,
    server: Option<String>,
    timeout: Option<u64>,
) -> Result<ClientConfig, SolauditError> {
    let mut config = match config_path {
        Some(path) => config::parse_config(&PathBuf::from(path)).await?,
        None => ClientConfig::default(),
    };

    if let Some(server) = server {
        config.server_url = server;
    }
    if let Some(timeout) = timeout {
        if timeout == 0 {
            return Err(SolauditError::Config("timeout must be positive".into()));
        }
        config.timeout_seconds = timeout;
    }

    Ok(config)
}
