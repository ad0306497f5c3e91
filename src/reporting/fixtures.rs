//! Shared report fixtures for unit tests.

use chrono::{TimeZone, Utc};

use crate::models::{
    AnalysisMetadata, AnalysisReport, Confidence, ContractInfo, Finding, Location, Severity,
    SourceLines,
};
use crate::reporting::summary::aggregate;

pub fn sample_finding(id: &str, severity: Severity) -> Finding {
    Finding {
        id: id.to_string(),
        detector: "reentrancy-eth".to_string(),
        swc_id: "SWC-107".to_string(),
        severity,
        title: "Reentrancy in withdraw".to_string(),
        description: "State is updated after the external call.".to_string(),
        contract: "Vault".to_string(),
        function: Some("withdraw".to_string()),
        location: Location {
            file: "Vault.sol".to_string(),
            start_line: 42,
            end_line: 48,
            source_mapping: Some("42:120:0".to_string()),
        },
        code_snippet: "(bool ok, ) = msg.sender.call{value: amount}(\"\");".to_string(),
        fix_suggestion: "Update balances before the external call.".to_string(),
        confidence: Confidence::High,
    }
}

pub fn sample_report() -> AnalysisReport {
    let vulnerabilities = vec![
        sample_finding("vuln-1", Severity::High),
        sample_finding("vuln-2", Severity::Low),
    ];
    let informational_findings = vec![sample_finding("info-1", Severity::Informational)];
    let contracts_analyzed = vec![ContractInfo {
        name: "Vault".to_string(),
        source_file: "Vault.sol".to_string(),
        source_lines: SourceLines { start: 1, end: 120 },
        is_upgradeable: false,
    }];
    let summary = aggregate(&vulnerabilities, &informational_findings, &contracts_analyzed);

    AnalysisReport {
        sca_version: "1.2.0".to_string(),
        analysis_metadata: AnalysisMetadata {
            target: "Vault.sol".to_string(),
            solidity_version: Some("0.8.24".to_string()),
            analysis_duration_seconds: 1.75,
            timestamp: Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap(),
            framework: Some("foundry".to_string()),
        },
        contracts_analyzed,
        vulnerabilities,
        informational_findings,
        summary,
    }
}
