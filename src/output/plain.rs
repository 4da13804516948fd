//! Plain text output, the default fallback format.
//!
//! One line per finding: status code, human-readable size, full URL.

use std::fmt::Write;
use std::sync::Arc;

use anyhow::Result;

use super::{human_size, ReportWriter};
use crate::model::TargetReport;

pub struct PlainWriter;

impl ReportWriter for PlainWriter {
    fn render(&self, reports: &[Arc<TargetReport>]) -> Result<String> {
        let mut out = String::new();

        for report in reports {
            for finding in report.results().iter() {
                writeln!(
                    out,
                    "{}  {:>6}  {}{}",
                    finding.status(),
                    human_size(finding.content_length()),
                    report.url(),
                    finding.path()
                )?;
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BasicResponse;

    #[test]
    fn renders_one_line_per_finding() {
        let report = Arc::new(TargetReport::new("example.com", 80, "http", "/admin/"));
        report.add_result(
            "login.php",
            200,
            Arc::new(BasicResponse::new("").with_header("content-length", "1234")),
        );
        report.add_result("backup/", 403, Arc::new(BasicResponse::new("denied")));

        let out = PlainWriter.render(&[report]).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("200"));
        assert!(lines[0].ends_with("http://example.com:80/admin/login.php"));
        assert!(lines[1].starts_with("403"));
    }

    #[test]
    fn empty_collection_renders_empty() {
        let out = PlainWriter.render(&[]).unwrap();
        assert!(out.is_empty());
    }
}
