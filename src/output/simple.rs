//! Simple text output: one discovered URL per line, nothing else.

use std::fmt::Write;
use std::sync::Arc;

use anyhow::Result;

use super::ReportWriter;
use crate::model::TargetReport;

pub struct SimpleWriter;

impl ReportWriter for SimpleWriter {
    fn render(&self, reports: &[Arc<TargetReport>]) -> Result<String> {
        let mut out = String::new();

        for report in reports {
            for finding in report.results().iter() {
                writeln!(out, "{}{}", report.url(), finding.path())?;
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
    fn renders_bare_urls() {
        let report = Arc::new(TargetReport::new("example.com", 443, "https", ""));
        report.add_result(".git/config", 200, Arc::new(BasicResponse::new("x")));

        let out = SimpleWriter.render(&[report]).unwrap();
        assert_eq!(out, "https://example.com:443/.git/config\n");
    }
}
