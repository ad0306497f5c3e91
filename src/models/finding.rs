use serde::{Deserialize, Serialize};

/// Severity level for a finding, ordered from most to least severe.
///
/// `Informational` never appears in the `vulnerabilities` sequence of a
/// report and is the only level allowed in `informational_findings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
    Informational,
}

impl Severity {
    /// Returns a numeric rank where lower values indicate higher severity.
    /// High = 0, Medium = 1, Low = 2, Informational = 3.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::High => 0,
            Severity::Medium => 1,
            Severity::Low => 2,
            Severity::Informational => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Informational => "Informational",
        }
    }

    /// True for the ordinal levels permitted in the `vulnerabilities`
    /// sequence.
    pub fn is_vulnerability(&self) -> bool {
        !matches!(self, Severity::Informational)
    }
}

/// Analyzer confidence in a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        }
    }
}

/// Source position of a finding. Lines are 1-based and inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub start_line: u32,
    pub end_line: u32,
    /// Opaque analyzer-defined mapping string. Omitted from the wire form
    /// when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_mapping: Option<String>,
}

/// A single detector result.
///
/// Vulnerabilities and informational findings share this shape; the report
/// keeps them in two separate sequences and the severity domain of each
/// sequence is enforced at validation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Unique within the report, across both finding sequences.
    pub id: String,
    /// Detector rule name (e.g. "reentrancy-eth").
    pub detector: String,
    /// Smart Contract Weakness Classification code. May be empty.
    pub swc_id: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub contract: String,
    /// None for contract- or file-level issues. Always serialized, as
    /// explicit `null` when absent.
    pub function: Option<String>,
    pub location: Location,
    /// Verbatim source excerpt.
    pub code_snippet: String,
    pub fix_suggestion: String,
    pub confidence: Confidence,
}
