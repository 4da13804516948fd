//! JSON output format.
//!
//! The document is an object keyed by target URL, each value an array of
//! finding records. Target order follows first registration; finding order
//! follows discovery.

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use serde_json::{Map, Value};

use super::ReportWriter;
use crate::model::TargetReport;

#[derive(Serialize)]
struct FindingRecord<'a> {
    path: &'a str,
    status: u16,
    #[serde(rename = "content-length")]
    content_length: u64,
}

pub struct JsonWriter;

impl ReportWriter for JsonWriter {
    fn render(&self, reports: &[Arc<TargetReport>]) -> Result<String> {
        let mut document = Map::new();

        for report in reports {
            let results = report.results();
            let records = results
                .iter()
                .map(|finding| {
                    serde_json::to_value(FindingRecord {
                        path: finding.path(),
                        status: finding.status(),
                        content_length: finding.content_length(),
                    })
                })
                .collect::<Result<Vec<Value>, _>>()?;

            document.insert(report.url(), Value::Array(records));
        }

        Ok(serde_json::to_string_pretty(&Value::Object(document))?)
    }
}
