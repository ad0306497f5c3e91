//! Self-contained HTML export of an analysis report.
//!
//! The document embeds all styling and references no external resources,
//! so it can be viewed or printed offline. Output is deterministic: the
//! only timestamp is `analysis_metadata.timestamp`, never wall clock.

use std::fmt::Write;

use crate::models::{AnalysisReport, Finding, Severity};

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#0f1117;color:#e5e7eb}\
main{max-width:960px;margin:0 auto;padding:2rem}\
h1{font-size:1.5rem}h2{font-size:1.2rem;margin-top:2rem}\
table{border-collapse:collapse;width:100%}\
td,th{border:1px solid #374151;padding:.4rem .6rem;text-align:left}\
.finding{border:1px solid #374151;border-left-width:4px;border-radius:4px;\
padding:1rem;margin:1rem 0}\
.finding.high{border-left-color:#ef4444}\
.finding.medium{border-left-color:#eab308}\
.finding.low{border-left-color:#3b82f6}\
.finding.informational{border-left-color:#6b7280}\
.meta{color:#9ca3af;font-size:.85rem}\
pre{background:#1f2937;padding:.6rem;border-radius:4px;overflow-x:auto}\
.fix{color:#34d399}";

/// Renders the report into a stand-alone HTML document.
///
/// Findings are grouped by severity High, Medium, Low, Informational, and
/// within each group keep the order of the report's sequences. All
/// analyzer-supplied text is escaped; a snippet embedded in a hostile
/// source comment renders as literal text.
pub fn render_html(report: &AnalysisReport) -> String {
    let mut out = String::with_capacity(8 * 1024);
    let meta = &report.analysis_metadata;

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = write!(
        out,
        "<title>Analysis report - {}</title>\n<style>{}</style>\n</head>\n<body>\n<main>\n",
        escape(&meta.target),
        STYLE
    );

    let _ = write!(out, "<h1>Smart contract analysis report</h1>\n");
    out.push_str("<section class=\"meta\">\n");
    let _ = write!(out, "<p>Target: {}</p>\n", escape(&meta.target));
    let _ = write!(out, "<p>Generated: {}</p>\n", meta.timestamp.to_rfc3339());
    if let Some(version) = &meta.solidity_version {
        let _ = write!(out, "<p>Solidity: {}</p>\n", escape(version));
    }
    if let Some(framework) = &meta.framework {
        let _ = write!(out, "<p>Framework: {}</p>\n", escape(framework));
    }
    let _ = write!(
        out,
        "<p>Duration: {:.2}s | Report format: {}</p>\n",
        meta.analysis_duration_seconds,
        escape(&report.sca_version)
    );
    out.push_str("</section>\n");

    render_summary(&mut out, report);
    render_contracts(&mut out, report);

    for severity in [
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Informational,
    ] {
        let group: Vec<&Finding> = report
            .findings()
            .filter(|f| f.severity == severity)
            .collect();
        if group.is_empty() {
            continue;
        }
        let _ = write!(
            out,
            "<h2>{} ({})</h2>\n",
            severity_heading(severity),
            group.len()
        );
        for finding in group {
            render_finding(&mut out, finding);
        }
    }

    out.push_str("</main>\n</body>\n</html>\n");
    out
}

fn render_summary(out: &mut String, report: &AnalysisReport) {
    let s = &report.summary;
    out.push_str("<h2>Summary</h2>\n<table>\n");
    out.push_str("<tr><th>High</th><th>Medium</th><th>Low</th><th>Informational</th><th>Contracts</th></tr>\n");
    let _ = write!(
        out,
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        s.high_severity, s.medium_severity, s.low_severity, s.informational, s.total_contracts_analyzed
    );
    out.push_str("</table>\n");
}

fn render_contracts(out: &mut String, report: &AnalysisReport) {
    if report.contracts_analyzed.is_empty() {
        return;
    }
    out.push_str("<h2>Contracts analyzed</h2>\n<table>\n");
    out.push_str("<tr><th>Name</th><th>File</th><th>Lines</th><th>Upgradeable</th></tr>\n");
    for contract in &report.contracts_analyzed {
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}-{}</td><td>{}</td></tr>\n",
            escape(&contract.name),
            escape(&contract.source_file),
            contract.source_lines.start,
            contract.source_lines.end,
            if contract.is_upgradeable { "yes" } else { "no" }
        );
    }
    out.push_str("</table>\n");
}

fn render_finding(out: &mut String, finding: &Finding) {
    let _ = write!(
        out,
        "<div class=\"finding {}\">\n<h3>{}</h3>\n",
        finding.severity.as_str().to_ascii_lowercase(),
        escape(&finding.title)
    );
    let _ = write!(
        out,
        "<p class=\"meta\">{} | {} | confidence: {}</p>\n",
        escape(&finding.detector),
        if finding.swc_id.is_empty() {
            "no SWC id".to_string()
        } else {
            escape(&finding.swc_id)
        },
        finding.confidence.as_str()
    );
    let scope = match &finding.function {
        Some(function) => format!("{}.{}", finding.contract, function),
        None => finding.contract.clone(),
    };
    let _ = write!(
        out,
        "<p class=\"meta\">{} — {}:{}-{}</p>\n",
        escape(&scope),
        escape(&finding.location.file),
        finding.location.start_line,
        finding.location.end_line
    );
    let _ = write!(out, "<p>{}</p>\n", escape(&finding.description));
    let _ = write!(out, "<pre>{}</pre>\n", escape(&finding.code_snippet));
    let _ = write!(
        out,
        "<p class=\"fix\">Fix: {}</p>\n</div>\n",
        escape(&finding.fix_suggestion)
    );
}

fn severity_heading(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "High severity",
        Severity::Medium => "Medium severity",
        Severity::Low => "Low severity",
        Severity::Informational => "Informational",
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
