use console::style;

use crate::models::AnalysisReport;

/// Prints the post-run summary table for a received report.
pub fn print_report_summary(report: &AnalysisReport) {
    let meta = &report.analysis_metadata;
    let summary = &report.summary;

    println!();
    println!("Target: {}", style(&meta.target).bold());
    if let Some(version) = &meta.solidity_version {
        println!("Solidity: {}", version);
    }
    println!(
        "Analyzed {} contract(s) in {:.2}s",
        summary.total_contracts_analyzed, meta.analysis_duration_seconds
    );
    println!();
    println!(
        "  {} high  {} medium  {} low  {} informational",
        style(summary.high_severity).red().bold(),
        style(summary.medium_severity).yellow().bold(),
        style(summary.low_severity).blue().bold(),
        style(summary.informational).dim().bold(),
    );

    if summary.total_vulnerabilities == 0 && summary.informational == 0 {
        println!("\n{}", style("No findings.").green());
        return;
    }

    println!();
    for finding in report.findings() {
        let severity = match finding.severity.rank() {
            0 => style(finding.severity.as_str()).red(),
            1 => style(finding.severity.as_str()).yellow(),
            2 => style(finding.severity.as_str()).blue(),
            _ => style(finding.severity.as_str()).dim(),
        };
        println!(
            "  [{}] {} ({}:{})",
            severity,
            finding.title,
            finding.location.file,
            finding.location.start_line
        );
    }
}
