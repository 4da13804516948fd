use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use super::{Finding, Response};

/// The aggregate of all findings for one scanned target.
///
/// One report exists per host+port+protocol+base_path combination. The
/// scanning worker for that target appends findings as it confirms paths;
/// the findings sequence is append-only and preserves discovery order.
///
/// Appending is internally synchronized, so a report can be shared between
/// a worker and the report manager rendering it, or between several workers
/// probing the same target.
pub struct TargetReport {
    host: String,
    port: u16,
    protocol: String,
    base_path: String,
    results: RwLock<Vec<Finding>>,
    completed: AtomicBool,
}

impl TargetReport {
    /// Creates an empty report for one target.
    ///
    /// The base path is normalized on the way in: at most one trailing `/`
    /// is stripped, then at most one leading `/`.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        protocol: impl Into<String>,
        base_path: &str,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            protocol: protocol.into(),
            base_path: normalize_base_path(base_path),
            results: RwLock::new(Vec::new()),
            completed: AtomicBool::new(false),
        }
    }

    /// Records one discovered path.
    ///
    /// Duplicates are permitted and preserved; no validation is performed on
    /// the inputs.
    pub fn add_result(&self, path: impl Into<String>, status: u16, response: Arc<dyn Response>) {
        self.results.write().push(Finding::new(path, status, response));
    }

    /// Read access to the findings recorded so far, in discovery order.
    pub fn results(&self) -> RwLockReadGuard<'_, Vec<Finding>> {
        self.results.read()
    }

    pub fn result_count(&self) -> usize {
        self.results.read().len()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Normalized base path: never starts or ends with `/`.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Base URL of the target, with a trailing `/` so a finding's path can
    /// be appended directly.
    pub fn url(&self) -> String {
        if self.base_path.is_empty() {
            format!("{}://{}:{}/", self.protocol, self.host, self.port)
        } else {
            format!(
                "{}://{}:{}/{}/",
                self.protocol, self.host, self.port, self.base_path
            )
        }
    }

    /// Marks the target scan as finished. Set by scan-lifecycle code once
    /// the worker for this target has drained its wordlist.
    pub fn mark_completed(&self) {
        self.completed.store(true, Ordering::Release);
    }

    pub fn is_completed(&self) -> bool {
        self.completed.load(Ordering::Acquire)
    }
}

fn normalize_base_path(raw: &str) -> String {
    let stripped = raw.strip_suffix('/').unwrap_or(raw);
    let stripped = stripped.strip_prefix('/').unwrap_or(stripped);
    stripped.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BasicResponse;

    fn response() -> Arc<dyn Response> {
        Arc::new(BasicResponse::new("body"))
    }

    #[test]
    fn base_path_normalization() {
        let cases = [
            ("/a/b/", "a/b"),
            ("a/b", "a/b"),
            ("/a/b", "a/b"),
            ("a/b/", "a/b"),
            ("/", ""),
            ("", ""),
        ];

        for (input, expected) in cases {
            let report = TargetReport::new("example.com", 80, "http", input);
            assert_eq!(report.base_path(), expected, "input {:?}", input);
        }
    }

    #[test]
    fn results_preserve_order_and_duplicates() {
        let report = TargetReport::new("example.com", 80, "http", "");

        report.add_result("a", 200, response());
        report.add_result("b", 404, response());
        report.add_result("a", 200, response());

        let results = report.results();
        assert_eq!(results.len(), 3);
        let paths: Vec<&str> = results.iter().map(|f| f.path()).collect();
        assert_eq!(paths, ["a", "b", "a"]);
    }

    #[test]
    fn url_includes_base_path() {
        let report = TargetReport::new("example.com", 8080, "https", "/admin/");
        assert_eq!(report.url(), "https://example.com:8080/admin/");

        let bare = TargetReport::new("example.com", 80, "http", "/");
        assert_eq!(bare.url(), "http://example.com:80/");
    }

    #[test]
    fn completed_flag_starts_false() {
        let report = TargetReport::new("example.com", 80, "http", "");
        assert!(!report.is_completed());

        report.mark_completed();
        assert!(report.is_completed());
    }
}
