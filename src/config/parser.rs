use std::path::Path;

use crate::errors::SolauditError;

use super::types::{ClientConfig, ConfigFile};

pub async fn parse_config(path: &Path) -> Result<ClientConfig, SolauditError> {
    if !path.exists() {
        return Err(SolauditError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let file: ConfigFile = serde_yaml::from_str(&content)
        .map_err(|e| SolauditError::Config(format!("Invalid config file: {}", e)))?;

    let config = ClientConfig::from_file(file);
    if config.max_file_size_bytes == 0 {
        return Err(SolauditError::Config(
            "max_file_size_bytes must be positive".into(),
        ));
    }
    if config.timeout_seconds == 0 {
        return Err(SolauditError::Config(
            "timeout_seconds must be positive".into(),
        ));
    }
    Ok(config)
}
