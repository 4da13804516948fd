//! Core data types for discovered paths and per-target reports.
//!
//! This module contains the fundamental types used throughout dirreport:
//!
//! - [`Finding`] - One discovered path and its HTTP outcome
//! - [`Response`] - Read-only view of the HTTP response backing a finding
//! - [`BasicResponse`] - Owned, in-memory [`Response`] implementation
//! - [`TargetReport`] - The aggregate of all findings for one scanned target
//!
//! # Example
//!
//! ```
//! use dirreport::{BasicResponse, TargetReport};
//! use std::sync::Arc;
//!
//! let report = TargetReport::new("example.com", 443, "https", "/app/");
//! report.add_result("config.php", 403, Arc::new(BasicResponse::new("denied")));
//!
//! println!("{} findings for {}", report.result_count(), report.url());
//! ```

mod finding;
mod report;

pub use finding::*;
pub use report::*;
