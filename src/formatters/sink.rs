//! # Injectable output sink.
//!
//! Every byte a formatter produces goes through one [`Sink`], so the entire
//! formatter contract can be verified by capturing writes. Three targets:
//!
//! - [`Sink::stdout`] the process standard output stream (default);
//! - [`Sink::file`] a named file opened in write/truncate mode for the run;
//! - [`Sink::capture`] an in-memory buffer with a read handle, for tests.
//!
//! Writes are flushed immediately (progress glyphs must stream as the run
//! proceeds). A failed write is reported via `tracing` and otherwise
//! ignored: reporting must not take down the run.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::error::RunnerError;

enum Target {
    Stdout(io::Stdout),
    File(File),
    Buffer(Arc<Mutex<Vec<u8>>>),
}

/// Append-only text output shared by a formatter.
pub struct Sink {
    target: Mutex<Target>,
}

impl Sink {
    /// Sink writing to the process standard output stream.
    pub fn stdout() -> Self {
        Self {
            target: Mutex::new(Target::Stdout(io::stdout())),
        }
    }

    /// Sink writing to `path`, created/truncated for the duration of the run.
    pub fn file(path: &Path) -> Result<Self, RunnerError> {
        let file = File::create(path).map_err(|source| RunnerError::OutputOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            target: Mutex::new(Target::File(file)),
        })
    }

    /// In-memory sink plus a handle for reading back what was written.
    pub fn capture() -> (Self, CaptureHandle) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let sink = Self {
            target: Mutex::new(Target::Buffer(Arc::clone(&buffer))),
        };
        (sink, CaptureHandle { buffer })
    }

    /// Writes `text` and flushes.
    pub fn write(&self, text: &str) {
        let mut target = self.target.lock().unwrap_or_else(|e| e.into_inner());
        let result = match &mut *target {
            Target::Stdout(out) => {
                let mut lock = out.lock();
                lock.write_all(text.as_bytes()).and_then(|()| lock.flush())
            }
            Target::File(file) => file
                .write_all(text.as_bytes())
                .and_then(|()| file.flush()),
            Target::Buffer(buffer) => {
                let mut buffer = buffer.lock().unwrap_or_else(|e| e.into_inner());
                buffer.extend_from_slice(text.as_bytes());
                Ok(())
            }
        };
        if let Err(err) = result {
            tracing::warn!("dropped report output: {err}");
        }
    }
}

/// Read side of a [`Sink::capture`] pair.
#[derive(Clone)]
pub struct CaptureHandle {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureHandle {
    /// Everything written so far, as UTF-8 (lossy).
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_reads_back_writes() {
        let (sink, handle) = Sink::capture();
        sink.write(".");
        sink.write("F\n");
        assert_eq!(handle.contents(), ".F\n");
    }

    #[test]
    fn test_file_sink_truncates_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "stale").unwrap();

        let sink = Sink::file(&path).unwrap();
        sink.write("fresh");
        drop(sink);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn test_file_sink_open_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let Err(err) = Sink::file(&dir.path().join("no/such/dir/report.txt")) else {
            panic!("expected open failure");
        };
        assert_eq!(err.as_label(), "runner_output_open");
    }
}
