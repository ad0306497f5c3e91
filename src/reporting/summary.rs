use crate::models::{ContractInfo, Finding, ReportSummary, Severity};

/// Derives the summary counts from the finding and contract sequences.
///
/// Total over all well-formed input: empty sequences yield all-zero counts.
/// Severity-domain violations (an `Informational` finding in the
/// vulnerability list, or vice versa) are rejected by report validation
/// before this is consulted; the counts here classify every vulnerability
/// into exactly one of the three ordinal buckets.
pub fn aggregate(
    vulnerabilities: &[Finding],
    informational_findings: &[Finding],
    contracts: &[ContractInfo],
) -> ReportSummary {
    let mut summary = ReportSummary {
        total_vulnerabilities: vulnerabilities.len(),
        informational: informational_findings.len(),
        total_contracts_analyzed: contracts.len(),
        ..Default::default()
    };

    for finding in vulnerabilities {
        match finding.severity {
            Severity::High => summary.high_severity += 1,
            Severity::Medium => summary.medium_severity += 1,
            Severity::Low => summary.low_severity += 1,
            // Filtered out by validation; counted here so the bucket sums
            // can never silently drift from the total.
            Severity::Informational => summary.informational += 1,
        }
    }

    summary
}
