//! XML output format.

use std::fmt::Write;
use std::sync::Arc;

use anyhow::Result;

use super::{escape_markup, ReportWriter};
use crate::model::TargetReport;

pub struct XmlWriter;

impl ReportWriter for XmlWriter {
    fn render(&self, reports: &[Arc<TargetReport>]) -> Result<String> {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<report>\n");

        for report in reports {
            writeln!(out, "  <target url=\"{}\">", escape_markup(&report.url()))?;
            for finding in report.results().iter() {
                writeln!(
                    out,
                    "    <finding path=\"{}\" status=\"{}\" content-length=\"{}\"/>",
                    escape_markup(finding.path()),
                    finding.status(),
                    finding.content_length()
                )?;
            }
            out.push_str("  </target>\n");
        }

        out.push_str("</report>\n");
        Ok(out)
    }
}
