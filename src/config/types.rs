use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 120;
/// Upload ceiling enforced before any request is sent.
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 1_048_576;

/// Resolved client settings: file values overridden by CLI flags.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_url: String,
    pub timeout_seconds: u64,
    pub max_file_size_bytes: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
        }
    }
}

/// On-disk YAML shape. Every field is optional; absent fields fall back to
/// the defaults above.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    pub server_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub max_file_size_bytes: Option<u64>,
}

impl ClientConfig {
    pub fn from_file(file: ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            server_url: file.server_url.unwrap_or(defaults.server_url),
            timeout_seconds: file.timeout_seconds.unwrap_or(defaults.timeout_seconds),
            max_file_size_bytes: file
                .max_file_size_bytes
                .unwrap_or(defaults.max_file_size_bytes),
        }
    }
}
