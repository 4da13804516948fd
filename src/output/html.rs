//! HTML output format.
//!
//! Generates a self-contained page with inline styling so the report can be
//! opened or shared as a single file.

use std::fmt::Write;
use std::sync::Arc;

use anyhow::Result;
use chrono::Local;

use super::{escape_markup, ReportWriter};
use crate::model::TargetReport;

pub struct HtmlWriter;

impl ReportWriter for HtmlWriter {
    fn render(&self, reports: &[Arc<TargetReport>]) -> Result<String> {
        let total_findings: usize = reports.iter().map(|r| r.result_count()).sum();

        let mut html = String::new();
        html.push_str(&format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Scan report</title>
    <style>
        body {{ font-family: monospace; background: #1a1a2e; color: #eee; margin: 2em; }}
        h1 {{ border-bottom: 1px solid #0f3460; padding-bottom: 0.3em; }}
        .meta {{ color: #888; margin-bottom: 2em; }}
        table {{ border-collapse: collapse; margin-bottom: 2em; }}
        th, td {{ border: 1px solid #0f3460; padding: 0.3em 0.8em; text-align: left; }}
        .s2 {{ color: #28a745; }}
        .s3 {{ color: #ffc107; }}
        .s4 {{ color: #fd7e14; }}
        .s5 {{ color: #dc3545; }}
    </style>
</head>
<body>
    <h1>Scan report</h1>
    <p class="meta">Generated {} &middot; {} target(s) &middot; {} finding(s)</p>
"#,
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            reports.len(),
            total_findings,
        ));

        for report in reports {
            let progress = if report.is_completed() {
                ""
            } else {
                " [in progress]"
            };
            writeln!(
                html,
                "    <h2>{}{}</h2>",
                escape_markup(&report.url()),
                progress
            )?;
            html.push_str("    <table>\n");
            html.push_str("        <tr><th>Path</th><th>Status</th><th>Length</th></tr>\n");

            for finding in report.results().iter() {
                writeln!(
                    html,
                    "        <tr><td>{}</td><td class=\"{}\">{}</td><td>{}</td></tr>",
                    escape_markup(finding.path()),
                    status_class(finding.status()),
                    finding.status(),
                    finding.content_length()
                )?;
            }
            html.push_str("    </table>\n");
        }

        html.push_str("</body>\n</html>\n");
        Ok(html)
    }
}

fn status_class(status: u16) -> &'static str {
    match status {
        200..=299 => "s2",
        300..=399 => "s3",
        400..=499 => "s4",
        _ => "s5",
    }
}
