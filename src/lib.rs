//! Thread-safe aggregation and incremental persistence of web path scan
//! results.
//!
//! `dirreport` is the reporting core of a directory brute-forcing tool. Worker
//! threads scanning different targets append discovered paths to their own
//! [`TargetReport`] and notify a shared [`ReportManager`], which re-renders
//! the complete state of every tracked report into a single output sink on
//! each update. Rendering is delegated to one of several [`Format`] writer
//! variants (plain text, simple URL list, JSON, XML, Markdown, CSV, HTML).
//!
//! The crate does no scanning, path generation, or network I/O. HTTP
//! responses come in through the narrow [`Response`] trait and output leaves
//! through the [`ReportSink`](sink::ReportSink) trait.
//!
//! # Example
//!
//! ```
//! use dirreport::{BasicResponse, Format, MemorySink, ReportManager, TargetReport};
//! use std::sync::Arc;
//!
//! let report = Arc::new(TargetReport::new("example.com", 80, "http", "/admin/"));
//! report.add_result("login.php", 200, Arc::new(BasicResponse::new("<html></html>")));
//!
//! let sink = MemorySink::new();
//! let manager = ReportManager::new(Format::from("json"), Box::new(sink.clone()));
//! manager.update_report(&report)?;
//! manager.save()?;
//! manager.close()?;
//!
//! assert!(sink.contents().contains("login.php"));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod manager;
pub mod model;
pub mod output;
pub mod sink;

pub use manager::ReportManager;
pub use model::{BasicResponse, Finding, Response, TargetReport};
pub use output::{Format, ReportWriter};
pub use sink::{FileSink, MemorySink, ReportSink, SinkError};
