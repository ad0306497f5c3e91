use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-report analysis metadata. Produced once by the analyzer and never
/// mutated by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Source path or identifier the analysis was run against.
    pub target: String,
    /// Detected Solidity pragma, if any. Omitted from the wire form when
    /// absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solidity_version: Option<String>,
    /// Wall-clock duration of the analysis run. Non-negative.
    pub analysis_duration_seconds: f64,
    /// When the analysis ran, ISO-8601. Also the only timestamp allowed to
    /// appear in rendered exports.
    pub timestamp: DateTime<Utc>,
    /// Project framework (e.g. "hardhat", "foundry"), if detected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
}
