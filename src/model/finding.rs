use std::fmt;
use std::sync::Arc;

/// Read-only view of an HTTP response, owned by the caller.
///
/// The scanning side keeps full ownership of its request/response objects;
/// the reporting core only ever needs header lookup and the raw body, so
/// that is all this trait exposes.
pub trait Response: Send + Sync {
    /// Returns the value of the named header, if present.
    ///
    /// Header names are matched case-insensitively, as in HTTP.
    fn header(&self, name: &str) -> Option<&str>;

    /// Raw response body bytes.
    fn body(&self) -> &[u8];
}

/// Minimal [`Response`] backed by owned headers and a body buffer.
///
/// Useful for embedders whose HTTP client hands out owned data, and for
/// tests.
#[derive(Debug, Clone, Default)]
pub struct BasicResponse {
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl BasicResponse {
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self {
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl Response for BasicResponse {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn body(&self) -> &[u8] {
        &self.body
    }
}

/// One discovered path and its HTTP outcome within a target.
///
/// Immutable after construction; owned by the [`TargetReport`] it was
/// appended to.
///
/// [`TargetReport`]: crate::model::TargetReport
#[derive(Clone)]
pub struct Finding {
    path: String,
    status: u16,
    response: Arc<dyn Response>,
}

impl Finding {
    pub fn new(path: impl Into<String>, status: u16, response: Arc<dyn Response>) -> Self {
        Self {
            path: path.into(),
            status,
            response,
        }
    }

    /// Relative URL path segment that was discovered.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// HTTP status code of the probe that confirmed the path.
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn response(&self) -> &dyn Response {
        self.response.as_ref()
    }

    /// Content length of the response.
    ///
    /// Read from the `content-length` header when it is present and parses
    /// as an integer; otherwise the byte length of the body. A missing or
    /// malformed header is silently substituted, so this never fails.
    pub fn content_length(&self) -> u64 {
        self.response
            .header("content-length")
            .and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or_else(|| self.response.body().len() as u64)
    }
}

impl fmt::Debug for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Finding")
            .field("path", &self.path)
            .field("status", &self.status)
            .field("content_length", &self.content_length())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_length_from_header() {
        let response = BasicResponse::new("tiny").with_header("content-length", "42");
        let finding = Finding::new("index.html", 200, Arc::new(response));

        // The header wins regardless of actual body length.
        assert_eq!(finding.content_length(), 42);
    }

    #[test]
    fn content_length_header_case_insensitive() {
        let response = BasicResponse::new("tiny").with_header("Content-Length", "7");
        let finding = Finding::new("index.html", 200, Arc::new(response));

        assert_eq!(finding.content_length(), 7);
    }

    #[test]
    fn content_length_falls_back_to_body() {
        let response = BasicResponse::new("hello world");
        let finding = Finding::new("robots.txt", 200, Arc::new(response));

        assert_eq!(finding.content_length(), 11);
    }

    #[test]
    fn content_length_malformed_header_falls_back() {
        let response = BasicResponse::new("abcde").with_header("content-length", "not-a-number");
        let finding = Finding::new("admin/", 301, Arc::new(response));

        assert_eq!(finding.content_length(), 5);
    }

    #[test]
    fn finding_accessors() {
        let finding = Finding::new("backup.zip", 200, Arc::new(BasicResponse::new("")));

        assert_eq!(finding.path(), "backup.zip");
        assert_eq!(finding.status(), 200);
        assert!(finding.response().header("content-length").is_none());
    }
}
