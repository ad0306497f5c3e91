//! HTTP client for the analyzer service.
//!
//! Three one-shot operations against the service's multipart endpoints.
//! No retries: a failure is surfaced to the caller as-is. Responses that
//! carry a report are run through full validation before being returned;
//! an imported report is never trusted more than a freshly analyzed one.

use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::errors::SolauditError;
use crate::models::AnalysisReport;
use crate::reporting::validate_report;

/// Success envelope of `/api/analyze` and `/api/import-report`.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    status: String,
    report: Option<serde_json::Value>,
}

pub struct AnalyzerClient {
    client: reqwest::Client,
    base_url: String,
    max_file_size: u64,
}

impl AnalyzerClient {
    pub fn new(config: &ClientConfig) -> Result<Self, SolauditError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| SolauditError::Transport(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.server_url.trim_end_matches('/').to_string(),
            max_file_size: config.max_file_size_bytes,
        })
    }

    /// Submits a Solidity source file for analysis.
    pub async fn analyze(&self, file: &Path) -> Result<AnalysisReport, SolauditError> {
        let report = self.post_for_report("/api/analyze", file, &["sol"]).await?;
        info!(
            target = %report.analysis_metadata.target,
            vulnerabilities = report.summary.total_vulnerabilities,
            "Analysis completed"
        );
        Ok(report)
    }

    /// Submits a previously exported JSON report for server-side
    /// validation and re-import.
    pub async fn import_report(&self, file: &Path) -> Result<AnalysisReport, SolauditError> {
        self.post_for_report("/api/import-report", file, &["json"])
            .await
    }

    /// Submits a Solidity source file and returns the server-rendered HTML
    /// report document.
    pub async fn export_html(&self, file: &Path) -> Result<String, SolauditError> {
        let response = self.post_file("/api/analyze/html", file, &["sol"]).await?;
        response
            .text()
            .await
            .map_err(|e| SolauditError::Transport(format!("Failed to read HTML body: {}", e)))
    }

    async fn post_for_report(
        &self,
        endpoint: &str,
        file: &Path,
        allowed_extensions: &[&str],
    ) -> Result<AnalysisReport, SolauditError> {
        let response = self.post_file(endpoint, file, allowed_extensions).await?;
        let envelope: ApiResponse = response
            .json()
            .await
            .map_err(|e| SolauditError::Transport(format!("Unreadable response body: {}", e)))?;

        if envelope.status != "success" {
            return Err(SolauditError::Transport(format!(
                "Analyzer returned status \"{}\"",
                envelope.status
            )));
        }
        let value = envelope.report.ok_or_else(|| {
            SolauditError::Transport("Success response without a report".into())
        })?;

        let report: AnalysisReport = serde_json::from_value(value)
            .map_err(|e| SolauditError::Validation(format!("Invalid report: {}", e)))?;
        validate_report(&report)?;
        Ok(report)
    }

    async fn post_file(
        &self,
        endpoint: &str,
        file: &Path,
        allowed_extensions: &[&str],
    ) -> Result<reqwest::Response, SolauditError> {
        let bytes = self.read_input(file, allowed_extensions).await?;
        let filename = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "input".to_string());

        let form = Form::new().part("file", Part::bytes(bytes).file_name(filename));
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "Uploading file");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SolauditError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(SolauditError::Transport(format!(
                "Analyzer responded with HTTP {}: {}",
                status,
                detail.trim()
            )));
        }
        Ok(response)
    }

    /// Pre-flight checks; violations are rejected before any request is
    /// sent.
    async fn read_input(
        &self,
        file: &Path,
        allowed_extensions: &[&str],
    ) -> Result<Vec<u8>, SolauditError> {
        let extension = file
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        if !allowed_extensions.contains(&extension.as_str()) {
            return Err(SolauditError::UnsupportedInput(format!(
                "{}: expected a .{} file",
                file.display(),
                allowed_extensions.join(" or .")
            )));
        }

        let metadata = tokio::fs::metadata(file).await.map_err(|e| {
            SolauditError::UnsupportedInput(format!("{}: {}", file.display(), e))
        })?;
        if metadata.len() > self.max_file_size {
            return Err(SolauditError::UnsupportedInput(format!(
                "{}: {} bytes exceeds the {} byte limit",
                file.display(),
                metadata.len(),
                self.max_file_size
            )));
        }

        Ok(tokio::fs::read(file).await?)
    }
}
