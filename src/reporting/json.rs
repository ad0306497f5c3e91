//! JSON export/import of analysis reports.
//!
//! The wire form is the `AnalysisReport` structure itself, UTF-8,
//! pretty-printed so exports stay human-inspectable. `solidity_version`,
//! `framework` and `source_mapping` are omitted when absent; `function` is
//! always present, as explicit `null` for contract- or file-level findings.

use crate::errors::SolauditError;
use crate::models::{AnalysisReport, Finding};
use crate::reporting::summary::aggregate;

/// Serializes a report to its canonical JSON export form.
pub fn serialize_report(report: &AnalysisReport) -> Result<Vec<u8>, SolauditError> {
    serde_json::to_vec_pretty(report)
        .map_err(|e| SolauditError::Validation(format!("Report not serializable: {}", e)))
}

/// Parses and fully validates an imported report.
///
/// Fails with a `Validation` error naming the offending field on any
/// missing field, type mismatch, out-of-domain enum value, or violated
/// report invariant. Never yields a partially populated report.
pub fn deserialize_report(bytes: &[u8]) -> Result<AnalysisReport, SolauditError> {
    let report: AnalysisReport = serde_json::from_slice(bytes)
        .map_err(|e| SolauditError::Validation(format!("Invalid report JSON: {}", e)))?;
    validate_report(&report)?;
    Ok(report)
}

/// Checks every report invariant. Applied to imported reports and to
/// freshly received analyzer responses alike; an imported report is never
/// trusted more than a fresh one.
pub fn validate_report(report: &AnalysisReport) -> Result<(), SolauditError> {
    if report.analysis_metadata.analysis_duration_seconds < 0.0 {
        return Err(SolauditError::Validation(format!(
            "analysis_metadata.analysis_duration_seconds: negative duration {}",
            report.analysis_metadata.analysis_duration_seconds
        )));
    }

    for (i, contract) in report.contracts_analyzed.iter().enumerate() {
        let lines = &contract.source_lines;
        if lines.start < 1 || lines.start > lines.end {
            return Err(SolauditError::Validation(format!(
                "contracts_analyzed[{}].source_lines: invalid span {}..{}",
                i, lines.start, lines.end
            )));
        }
    }

    validate_findings(&report.vulnerabilities, "vulnerabilities", true)?;
    validate_findings(
        &report.informational_findings,
        "informational_findings",
        false,
    )?;

    let mut seen = std::collections::HashSet::new();
    for finding in report.findings() {
        if !seen.insert(finding.id.as_str()) {
            return Err(SolauditError::Validation(format!(
                "findings: duplicate id \"{}\"",
                finding.id
            )));
        }
    }

    // Recompute the summary and compare; an embedded summary is never
    // trusted as-is.
    let expected = aggregate(
        &report.vulnerabilities,
        &report.informational_findings,
        &report.contracts_analyzed,
    );
    let actual = &report.summary;
    let checks = [
        (
            "summary.total_vulnerabilities",
            expected.total_vulnerabilities,
            actual.total_vulnerabilities,
        ),
        ("summary.high_severity", expected.high_severity, actual.high_severity),
        ("summary.medium_severity", expected.medium_severity, actual.medium_severity),
        ("summary.low_severity", expected.low_severity, actual.low_severity),
        ("summary.informational", expected.informational, actual.informational),
        (
            "summary.total_contracts_analyzed",
            expected.total_contracts_analyzed,
            actual.total_contracts_analyzed,
        ),
    ];
    for (field, want, got) in checks {
        if want != got {
            return Err(SolauditError::Validation(format!(
                "{}: declared {} but counted {}",
                field, got, want
            )));
        }
    }

    Ok(())
}

fn validate_findings(
    findings: &[Finding],
    path: &str,
    ordinal: bool,
) -> Result<(), SolauditError> {
    for (i, finding) in findings.iter().enumerate() {
        if finding.severity.is_vulnerability() != ordinal {
            return Err(SolauditError::Validation(format!(
                "{}[{}].severity: {} not allowed in this sequence",
                path,
                i,
                finding.severity.as_str()
            )));
        }
        let loc = &finding.location;
        if loc.start_line < 1 || loc.start_line > loc.end_line {
            return Err(SolauditError::Validation(format!(
                "{}[{}].location: invalid span {}..{}",
                path, i, loc.start_line, loc.end_line
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use crate::reporting::fixtures::sample_report;

    #[test]
    fn round_trip_preserves_structure() {
        let report = sample_report();
        let bytes = serialize_report(&report).unwrap();
        let back = deserialize_report(&bytes).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn optional_fields_follow_the_convention() {
        let mut report = sample_report();
        report.analysis_metadata.framework = None;
        report.vulnerabilities[0].function = None;
        let bytes = serialize_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert!(value["analysis_metadata"].get("framework").is_none());
        assert!(value["vulnerabilities"][0]["function"].is_null());
    }

    #[test]
    fn inconsistent_summary_is_rejected() {
        let mut report = sample_report();
        report.summary.high_severity += 1;
        let bytes = serde_json::to_vec(&report).unwrap();
        let err = deserialize_report(&bytes).unwrap_err();
        match err {
            SolauditError::Validation(msg) => assert!(msg.contains("summary.high_severity")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn out_of_domain_severity_is_rejected() {
        let report = sample_report();
        let mut value: serde_json::Value =
            serde_json::from_slice(&serialize_report(&report).unwrap()).unwrap();
        value["vulnerabilities"][0]["severity"] = "Critical".into();
        let err = deserialize_report(value.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, SolauditError::Validation(_)));
    }

    #[test]
    fn informational_in_vulnerability_list_is_rejected() {
        let mut report = sample_report();
        report.vulnerabilities[0].severity = Severity::Informational;
        report.summary.high_severity -= 1;
        report.summary.informational += 1;
        let err = validate_report(&report).unwrap_err();
        match err {
            SolauditError::Validation(msg) => {
                assert!(msg.contains("vulnerabilities[0].severity"))
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn negative_duration_is_rejected() {
        let mut report = sample_report();
        report.analysis_metadata.analysis_duration_seconds = -0.5;
        let bytes = serde_json::to_vec(&report).unwrap();
        let err = deserialize_report(&bytes).unwrap_err();
        match err {
            SolauditError::Validation(msg) => {
                assert!(msg.contains("analysis_duration_seconds"))
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn inverted_location_span_is_rejected() {
        let mut report = sample_report();
        report.vulnerabilities[0].location.start_line = 50;
        report.vulnerabilities[0].location.end_line = 42;
        let err = validate_report(&report).unwrap_err();
        match err {
            SolauditError::Validation(msg) => {
                assert!(msg.contains("vulnerabilities[0].location"))
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn zero_based_source_lines_are_rejected() {
        let mut report = sample_report();
        report.contracts_analyzed[0].source_lines.start = 0;
        let bytes = serde_json::to_vec(&report).unwrap();
        let err = deserialize_report(&bytes).unwrap_err();
        match err {
            SolauditError::Validation(msg) => {
                assert!(msg.contains("contracts_analyzed[0].source_lines"))
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_finding_id_is_rejected() {
        let mut report = sample_report();
        report.informational_findings[0].id = report.vulnerabilities[0].id.clone();
        let err = validate_report(&report).unwrap_err();
        assert!(matches!(err, SolauditError::Validation(_)));
    }

    #[test]
    fn missing_field_names_the_field() {
        let report = sample_report();
        let mut value: serde_json::Value =
            serde_json::from_slice(&serialize_report(&report).unwrap()).unwrap();
        value["vulnerabilities"][0]
            .as_object_mut()
            .unwrap()
            .remove("detector");
        let err = deserialize_report(value.to_string().as_bytes()).unwrap_err();
        match err {
            SolauditError::Validation(msg) => assert!(msg.contains("detector")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn zero_finding_report_is_valid() {
        let mut report = sample_report();
        report.vulnerabilities.clear();
        report.informational_findings.clear();
        report.summary = crate::reporting::summary::aggregate(
            &[],
            &[],
            &report.contracts_analyzed,
        );
        let bytes = serialize_report(&report).unwrap();
        assert!(deserialize_report(&bytes).is_ok());
    }
}
