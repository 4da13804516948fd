//! Process-wide report coordinator.
//!
//! One [`ReportManager`] exists per scan session. Scanning workers register
//! their per-target [`TargetReport`]s through [`update_report`] as results
//! come in; every update re-renders the full state of all tracked reports
//! and replaces the sink contents. A single coarse lock covers membership,
//! rendering, and persistence, so concurrent updates from different workers
//! can never interleave inside a write or corrupt the output.
//!
//! [`update_report`]: ReportManager::update_report

use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;
use tracing::debug;

use crate::model::TargetReport;
use crate::output::{Format, ReportWriter};
use crate::sink::ReportSink;

pub struct ReportManager {
    format: Format,
    writer: Box<dyn ReportWriter>,
    inner: Mutex<Inner>,
}

struct Inner {
    reports: Vec<Arc<TargetReport>>,
    sink: Box<dyn ReportSink>,
}

impl ReportManager {
    /// Creates a manager writing `format` output into `sink`.
    ///
    /// The writer variant is constructed here, once, and reused for every
    /// subsequent write.
    pub fn new(format: Format, sink: Box<dyn ReportSink>) -> Self {
        Self {
            format,
            writer: format.writer(),
            inner: Mutex::new(Inner {
                reports: Vec::new(),
                sink,
            }),
        }
    }

    /// Registers `report` if it is not yet tracked, then rewrites the full
    /// output.
    ///
    /// Identity is per report instance; re-registering a tracked report is
    /// a membership no-op but still triggers the write. Reports appear in
    /// the output in first-registration order.
    ///
    /// # Errors
    ///
    /// Propagates any writer or sink failure unchanged; membership itself
    /// cannot fail.
    pub fn update_report(&self, report: &Arc<TargetReport>) -> Result<()> {
        let mut inner = self.inner.lock();

        if !inner.reports.iter().any(|tracked| Arc::ptr_eq(tracked, report)) {
            debug!(url = %report.url(), "tracking new target report");
            inner.reports.push(Arc::clone(report));
        }

        self.write_locked(&mut inner)
    }

    /// Re-renders the full state of every tracked report and replaces the
    /// sink contents.
    pub fn write_report(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        self.write_locked(&mut inner)
    }

    fn write_locked(&self, inner: &mut Inner) -> Result<()> {
        let rendered = self.writer.render(&inner.reports)?;
        debug!(
            format = %self.format,
            reports = inner.reports.len(),
            bytes = rendered.len(),
            "rewriting report output"
        );
        inner.sink.rewrite(rendered.as_bytes())?;
        Ok(())
    }

    /// Forces the sink to commit its current state, without re-rendering.
    pub fn save(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.sink.save()?;
        Ok(())
    }

    /// Releases the output sink. Intended as a terminal, single-caller
    /// operation once all scanning work has joined; what happens to writes
    /// issued afterwards is up to the sink.
    pub fn close(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.sink.close()?;
        Ok(())
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Number of reports currently tracked.
    pub fn report_count(&self) -> usize {
        self.inner.lock().reports.len()
    }
}
