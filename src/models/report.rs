use serde::{Deserialize, Serialize};

use super::contract::ContractInfo;
use super::finding::Finding;
use super::metadata::AnalysisMetadata;

/// Derived severity counts. Never hand-authored: always recomputed from the
/// finding sequences and cross-checked against any embedded copy on import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_vulnerabilities: usize,
    pub high_severity: usize,
    pub medium_severity: usize,
    pub low_severity: usize,
    pub informational: usize,
    pub total_contracts_analyzed: usize,
}

/// The aggregate analysis result, as produced by the analyzer service and
/// round-tripped through the JSON export.
///
/// Sequence order is significant and preserved through
/// serialization: findings render in report order within each severity
/// group, never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Semantic version of the report format (not the tool release).
    /// Carried opaquely; the client does not gate on it.
    pub sca_version: String,
    pub analysis_metadata: AnalysisMetadata,
    pub contracts_analyzed: Vec<ContractInfo>,
    /// Findings with ordinal severity (High, Medium, Low).
    pub vulnerabilities: Vec<Finding>,
    /// Findings with severity fixed to Informational.
    pub informational_findings: Vec<Finding>,
    pub summary: ReportSummary,
}

impl AnalysisReport {
    /// All findings in report order, vulnerabilities first.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.vulnerabilities
            .iter()
            .chain(self.informational_findings.iter())
    }
}
