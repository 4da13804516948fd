//! Output sinks: where rendered reports end up.
//!
//! The manager treats its sink as an opaque destination supporting three
//! operations: replace the whole contents with a fresh render, flush to the
//! underlying storage, and release. [`FileSink`] is the file-backed
//! implementation used by report files on disk; [`MemorySink`] buffers in
//! memory and is handy for tests and embedders that post-process output
//! themselves.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink has been released; no further operations are possible.
    #[error("sink is closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Destination for rendered report output.
pub trait ReportSink: Send {
    /// Replaces the entire sink contents with a fresh full render.
    fn rewrite(&mut self, contents: &[u8]) -> Result<(), SinkError>;

    /// Commits buffered output to the underlying destination.
    fn save(&mut self) -> Result<(), SinkError>;

    /// Releases the sink. Further rewrites and saves fail; closing an
    /// already-closed sink is a no-op.
    fn close(&mut self) -> Result<(), SinkError>;
}

/// File-backed report sink.
///
/// Each rewrite truncates the file and writes the new render from offset
/// zero, so the file always holds exactly one consistent document.
pub struct FileSink {
    path: PathBuf,
    file: Option<File>,
}

impl FileSink {
    /// Creates (or truncates) the report file, making parent directories as
    /// needed.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        debug!(path = %path.display(), "opened report file");

        Ok(Self {
            path,
            file: Some(file),
        })
    }

    /// Like [`create`](Self::create), but never clobbers an existing file:
    /// when `path` exists, `_2`, `_3`, ... is appended until a free name is
    /// found.
    pub fn create_unique(path: impl Into<PathBuf>) -> Result<Self, SinkError> {
        Self::create(unique_path(path.into()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileSink {
    fn rewrite(&mut self, contents: &[u8]) -> Result<(), SinkError> {
        let file = self.file.as_mut().ok_or(SinkError::Closed)?;
        file.seek(SeekFrom::Start(0))?;
        file.set_len(0)?;
        file.write_all(contents)?;
        Ok(())
    }

    fn save(&mut self) -> Result<(), SinkError> {
        let file = self.file.as_mut().ok_or(SinkError::Closed)?;
        file.flush()?;
        file.sync_data()?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), SinkError> {
        if let Some(mut file) = self.file.take() {
            file.flush()?;
            debug!(path = %self.path.display(), "closed report file");
        }
        Ok(())
    }
}

fn unique_path(path: PathBuf) -> PathBuf {
    if !path.exists() {
        return path;
    }

    let mut counter = 2;
    loop {
        let candidate = PathBuf::from(format!("{}_{}", path.display(), counter));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// In-memory report sink with shared inspection handles.
///
/// Cloning yields another handle onto the same buffer, so a test can hand
/// one clone to a [`ReportManager`](crate::ReportManager) and inspect the
/// other after writes happen.
#[derive(Clone, Default)]
pub struct MemorySink {
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Default)]
struct MemoryState {
    contents: Vec<u8>,
    rewrites: usize,
    saves: usize,
    closed: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current sink contents, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.state.lock().contents).into_owned()
    }

    /// Number of full rewrites performed so far.
    pub fn rewrite_count(&self) -> usize {
        self.state.lock().rewrites
    }

    pub fn save_count(&self) -> usize {
        self.state.lock().saves
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }
}

impl ReportSink for MemorySink {
    fn rewrite(&mut self, contents: &[u8]) -> Result<(), SinkError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SinkError::Closed);
        }
        state.contents.clear();
        state.contents.extend_from_slice(contents);
        state.rewrites += 1;
        Ok(())
    }

    fn save(&mut self) -> Result<(), SinkError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SinkError::Closed);
        }
        state.saves += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), SinkError> {
        self.state.lock().closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sink_rewrite_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let mut sink = FileSink::create(&path).unwrap();

        sink.rewrite(b"a much longer first render").unwrap();
        sink.rewrite(b"short").unwrap();
        sink.save().unwrap();

        // The second render fully replaces the first, including the tail.
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn file_sink_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/example.com/scan.txt");

        let sink = FileSink::create(&path).unwrap();
        assert_eq!(sink.path(), path);
        assert!(path.exists());
    }

    #[test]
    fn file_sink_rejects_writes_after_close() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::create(dir.path().join("report.txt")).unwrap();

        sink.close().unwrap();
        assert!(matches!(sink.rewrite(b"x"), Err(SinkError::Closed)));
        assert!(matches!(sink.save(), Err(SinkError::Closed)));
        // Second close is a no-op.
        sink.close().unwrap();
    }

    #[test]
    fn create_unique_suffixes_existing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        let first = FileSink::create_unique(&path).unwrap();
        let second = FileSink::create_unique(&path).unwrap();
        let third = FileSink::create_unique(&path).unwrap();

        assert_eq!(first.path(), path);
        assert!(second.path().to_string_lossy().ends_with("report.txt_2"));
        assert!(third.path().to_string_lossy().ends_with("report.txt_3"));
    }

    #[test]
    fn memory_sink_counts_operations() {
        let sink = MemorySink::new();
        let mut writer_handle = sink.clone();

        writer_handle.rewrite(b"one").unwrap();
        writer_handle.rewrite(b"two").unwrap();
        writer_handle.save().unwrap();

        assert_eq!(sink.contents(), "two");
        assert_eq!(sink.rewrite_count(), 2);
        assert_eq!(sink.save_count(), 1);

        writer_handle.close().unwrap();
        assert!(sink.is_closed());
        assert!(matches!(writer_handle.rewrite(b"x"), Err(SinkError::Closed)));
    }
}
