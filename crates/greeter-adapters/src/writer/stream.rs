//! `io::Write`-backed writer adapter.
//!
//! One adapter covers every byte sink: stdout, stderr, files, and in tests a
//! plain `Vec<u8>`. Each message is written as a single line.
//!
//! Files are opened on the first write, so a run that never reaches the
//! output port leaves the filesystem untouched.

use std::{
    any::Any,
    fs::{File, OpenOptions},
    io::{self, Write},
    panic::{self, AssertUnwindSafe},
    path::PathBuf,
    sync::{Mutex, PoisonError},
};

use greeter_core::application::{
    CancellationToken, MessageWriter,
    error::{DomainResult, ErrorInfo},
};
use tracing::{debug, error, trace, warn};

use super::check_cancelled;

/// Writes each message followed by `\n` to the wrapped sink.
#[derive(Debug)]
pub struct StreamWriter<W> {
    sink: Mutex<W>,
}

impl StreamWriter<io::Stdout> {
    /// Writer for standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl StreamWriter<io::Stderr> {
    /// Writer for standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl StreamWriter<AppendFile> {
    /// Writer that appends to `path`, creating it on the first write.
    ///
    /// An unopenable path surfaces as `write failed: cannot open <path>: ...`.
    pub fn append_to(path: impl Into<PathBuf>) -> Self {
        Self::new(AppendFile::new(path))
    }
}

/// Append-mode file sink that defers `open` until bytes arrive.
#[derive(Debug)]
pub struct AppendFile {
    path: PathBuf,
    file: Option<File>,
}

impl AppendFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    fn file(&mut self) -> io::Result<&mut File> {
        match self.file {
            Some(ref mut file) => Ok(file),
            None => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)
                    .map_err(|e| {
                        io::Error::new(
                            e.kind(),
                            format!("cannot open {}: {e}", self.path.display()),
                        )
                    })?;
                debug!(path = %self.path.display(), "Opened output file");
                Ok(self.file.insert(file))
            }
        }
    }
}

impl Write for AppendFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<W: Write + Send> StreamWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Consume the adapter and return the sink (testing helper).
    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_line(&self, message: &str) -> io::Result<()> {
        // A panic in an earlier write leaves the lock poisoned; the sink
        // itself is still usable.
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(sink, "{message}")?;
        sink.flush()
    }
}

impl<W: Write + Send> MessageWriter for StreamWriter<W> {
    fn write(&self, message: &str, cancel: &CancellationToken) -> DomainResult<()> {
        if let Some(err) = check_cancelled(cancel) {
            debug!("Write skipped: {err}");
            return Err(err);
        }

        match panic::catch_unwind(AssertUnwindSafe(|| self.write_line(message))) {
            Ok(Ok(())) => {
                trace!(bytes = message.len() + 1, "Message written");
                Ok(())
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Write failed");
                Err(ErrorInfo::infrastructure(format!("write failed: {e}")))
            }
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                error!(%reason, "Writer panicked");
                Err(ErrorInfo::infrastructure(format!(
                    "write panicked: {reason}"
                )))
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greeter_core::application::error::ErrorKind;

    /// Sink that rejects every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Sink that panics on the first write and then behaves.
    #[derive(Default)]
    struct PanicOnce {
        panicked: bool,
        written: Vec<u8>,
    }

    impl Write for PanicOnce {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if !self.panicked {
                self.panicked = true;
                panic!("sink exploded");
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn appends_newline() {
        let writer = StreamWriter::new(Vec::new());
        writer
            .write("Hello, Alice!", &CancellationToken::new())
            .unwrap();
        assert_eq!(writer.into_inner(), b"Hello, Alice!\n");
    }

    #[test]
    fn writes_empty_and_unicode_messages() {
        let writer = StreamWriter::new(Vec::new());
        let cancel = CancellationToken::new();
        writer.write("", &cancel).unwrap();
        writer.write("Hello, José García!", &cancel).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text, "\nHello, José García!\n");
    }

    #[test]
    fn long_messages_are_not_truncated() {
        let message = "m".repeat(10_000);
        let writer = StreamWriter::new(Vec::new());
        writer.write(&message, &CancellationToken::new()).unwrap();
        assert_eq!(writer.into_inner().len(), 10_001);
    }

    #[test]
    fn cancelled_token_skips_write() {
        let cancel = CancellationToken::new();
        cancel.cancel("context canceled");

        let writer = StreamWriter::new(Vec::new());
        let err = writer.write("Hello, Alice!", &cancel).unwrap_err();

        assert_eq!(err.kind, ErrorKind::Infrastructure);
        assert_eq!(err.message, "write cancelled: context canceled");
        assert!(writer.into_inner().is_empty());
    }

    #[test]
    fn io_error_becomes_infrastructure_error() {
        let writer = StreamWriter::new(BrokenPipe);
        let err = writer.write("Hello", &CancellationToken::new()).unwrap_err();

        assert_eq!(err.kind, ErrorKind::Infrastructure);
        assert!(err.message.starts_with("write failed:"));
        assert!(err.message.contains("pipe closed"));
    }

    #[test]
    fn panic_is_caught_and_writer_recovers() {
        let writer = StreamWriter::new(PanicOnce::default());
        let cancel = CancellationToken::new();

        let err = writer.write("first", &cancel).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Infrastructure);
        assert_eq!(err.message, "write panicked: sink exploded");

        writer.write("second", &cancel).unwrap();
        assert_eq!(writer.into_inner().written, b"second\n");
    }

    #[test]
    fn append_to_creates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greetings.txt");
        let cancel = CancellationToken::new();

        StreamWriter::append_to(&path)
            .write("Hello, Alice!", &cancel)
            .unwrap();
        StreamWriter::append_to(&path)
            .write("Hello, Bob!", &cancel)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Hello, Alice!\nHello, Bob!\n");
    }

    #[test]
    fn append_to_touches_nothing_until_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greetings.txt");

        let writer = StreamWriter::append_to(&path);
        assert!(!path.exists());

        writer.write("Hello, Alice!", &CancellationToken::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn cancelled_file_write_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greetings.txt");
        let cancel = CancellationToken::new();
        cancel.cancel("context canceled");

        let err = StreamWriter::append_to(&path)
            .write("Hello, Alice!", &cancel)
            .unwrap_err();

        assert!(err.message.starts_with("write cancelled"));
        assert!(!path.exists());
    }

    #[test]
    fn unopenable_file_fails_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.txt");

        let err = StreamWriter::append_to(&path)
            .write("Hello, Alice!", &CancellationToken::new())
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Infrastructure);
        assert!(err.message.starts_with("write failed: cannot open"));
        assert!(err.message.contains("out.txt"));
    }

    #[test]
    fn panic_message_handles_payload_types() {
        assert_eq!(panic_message(&"static"), "static");
        assert_eq!(panic_message(&String::from("owned")), "owned");
        assert_eq!(panic_message(&42_u8), "unknown panic");
    }
}
