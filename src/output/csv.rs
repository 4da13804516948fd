//! CSV output format: one row per finding across all targets.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use csv::Writer;

use super::ReportWriter;
use crate::model::TargetReport;

pub struct CsvWriter;

impl ReportWriter for CsvWriter {
    fn render(&self, reports: &[Arc<TargetReport>]) -> Result<String> {
        let mut writer = Writer::from_writer(Vec::new());
        writer.write_record(["URL", "Path", "Status", "Length"])?;

        for report in reports {
            for finding in report.results().iter() {
                writer.write_record([
                    report.url(),
                    finding.path().to_string(),
                    finding.status().to_string(),
                    finding.content_length().to_string(),
                ])?;
            }
        }

        let bytes = writer
            .into_inner()
            .map_err(|err| anyhow!("failed to flush csv buffer: {err}"))?;
        Ok(String::from_utf8(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BasicResponse;

    #[test]
    fn renders_header_and_rows() {
        let report = Arc::new(TargetReport::new("example.com", 80, "http", ""));
        report.add_result("db.sql", 200, Arc::new(BasicResponse::new("dump")));

        let out = CsvWriter.render(&[report]).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "URL,Path,Status,Length");
        assert_eq!(lines[1], "http://example.com:80/,db.sql,200,4");
    }

    #[test]
    fn quotes_fields_with_commas() {
        let report = Arc::new(TargetReport::new("example.com", 80, "http", ""));
        report.add_result("a,b", 200, Arc::new(BasicResponse::new("")));

        let out = CsvWriter.render(&[report]).unwrap();
        assert!(out.contains("\"a,b\""));
    }
}
