//! Markdown output format: a table of findings per target.

use std::fmt::Write;
use std::sync::Arc;

use anyhow::Result;
use chrono::Local;

use super::ReportWriter;
use crate::model::TargetReport;

pub struct MarkdownWriter;

impl ReportWriter for MarkdownWriter {
    fn render(&self, reports: &[Arc<TargetReport>]) -> Result<String> {
        let mut out = String::from("# Scan report\n\n");
        writeln!(
            out,
            "Generated: {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;

        for report in reports {
            let status = if report.is_completed() {
                ""
            } else {
                " (in progress)"
            };
            writeln!(out, "## {}{}\n", report.url(), status)?;
            out.push_str("| Path | Status | Length |\n");
            out.push_str("|------|--------|--------|\n");

            for finding in report.results().iter() {
                writeln!(
                    out,
                    "| {} | {} | {} |",
                    finding.path(),
                    finding.status(),
                    finding.content_length()
                )?;
            }
            out.push('\n');
        }

        Ok(out)
    }
}
