//! Report writer variants.
//!
//! Each writer is a full-state renderer: it consumes the complete current
//! collection of tracked reports and produces the entire output from
//! scratch. Writers never append deltas, so re-running one after new
//! results arrive always yields a consistent document.
//!
//! | Format tag | Variant |
//! |------------|---------|
//! | `simple`   | [`SimpleWriter`] - one URL per line |
//! | `json`     | [`JsonWriter`] |
//! | `xml`      | [`XmlWriter`] |
//! | `md`       | [`MarkdownWriter`] |
//! | `csv`      | [`CsvWriter`] |
//! | `html`     | [`HtmlWriter`] |
//! | anything else | [`PlainWriter`] (fallback) |

mod csv;
mod html;
mod json;
mod markdown;
mod plain;
mod simple;
mod xml;

pub use csv::CsvWriter;
pub use html::HtmlWriter;
pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use plain::PlainWriter;
pub use simple::SimpleWriter;
pub use xml::XmlWriter;

use std::sync::Arc;

use anyhow::Result;

use crate::model::TargetReport;

/// A format-specific full-state renderer.
///
/// Implementations must be pure functions of the reports collection: the
/// manager calls [`render`](ReportWriter::render) after every update and
/// replaces the sink contents with the result.
pub trait ReportWriter: Send + Sync {
    /// Renders the complete current state of every tracked report.
    fn render(&self, reports: &[Arc<TargetReport>]) -> Result<String>;
}

/// Output format for scan reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Plain text, one `status size url` line per finding. Default fallback.
    Plain,
    /// One full URL per line.
    Simple,
    Json,
    Xml,
    Markdown,
    Csv,
    Html,
}

impl From<&str> for Format {
    /// Maps a format tag to its variant. Tags are matched exactly and
    /// case-sensitively; any unrecognized tag resolves to [`Format::Plain`],
    /// so this conversion never fails.
    fn from(tag: &str) -> Self {
        match tag {
            "simple" => Format::Simple,
            "json" => Format::Json,
            "xml" => Format::Xml,
            "md" => Format::Markdown,
            "csv" => Format::Csv,
            "html" => Format::Html,
            _ => Format::Plain,
        }
    }
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Plain => "plain",
            Format::Simple => "simple",
            Format::Json => "json",
            Format::Xml => "xml",
            Format::Markdown => "md",
            Format::Csv => "csv",
            Format::Html => "html",
        }
    }

    /// File extension for report files of this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Plain | Format::Simple => ".txt",
            Format::Json => ".json",
            Format::Xml => ".xml",
            Format::Markdown => ".md",
            Format::Csv => ".csv",
            Format::Html => ".html",
        }
    }

    /// Constructs the writer variant for this format.
    pub fn writer(&self) -> Box<dyn ReportWriter> {
        match self {
            Format::Plain => Box::new(PlainWriter),
            Format::Simple => Box::new(SimpleWriter),
            Format::Json => Box::new(JsonWriter),
            Format::Xml => Box::new(XmlWriter),
            Format::Markdown => Box::new(MarkdownWriter),
            Format::Csv => Box::new(CsvWriter),
            Format::Html => Box::new(HtmlWriter),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Human-readable byte size, used by the plain text writer.
pub(crate) fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{:.0}{}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.0}TB", size)
}

/// Escapes `&`, `<`, `>` and `"` for XML/HTML markup contexts.
pub(crate) fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
