//! Log writer module
//!
//! Routes access and error lines to stdout/stderr, or into memory when the
//! server is embedded (tests read the captured lines back).

use std::sync::Mutex;

/// Log output target
pub enum LogTarget {
    /// Write to stdout
    Stdout,
    /// Write to stderr
    Stderr,
    /// Keep lines in memory
    Capture(Mutex<Vec<String>>),
}

impl LogTarget {
    pub const fn capture() -> Self {
        Self::Capture(Mutex::new(Vec::new()))
    }

    fn write(&self, message: &str) {
        match self {
            Self::Stdout => {
                println!("{message}");
            }
            Self::Stderr => {
                eprintln!("{message}");
            }
            Self::Capture(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(message.to_string());
                }
            }
        }
    }

    fn lines(&self) -> Vec<String> {
        match self {
            Self::Capture(lines) => lines.lock().map(|l| l.clone()).unwrap_or_default(),
            Self::Stdout | Self::Stderr => Vec::new(),
        }
    }
}

/// Thread-safe log writer
pub struct LogWriter {
    /// Access and info target
    access: LogTarget,
    /// Error and warning target
    error: LogTarget,
}

impl LogWriter {
    pub const fn new(access: LogTarget, error: LogTarget) -> Self {
        Self { access, error }
    }

    /// stdout for access/info, stderr for errors
    pub const fn console() -> Self {
        Self::new(LogTarget::Stdout, LogTarget::Stderr)
    }

    /// Both channels kept in memory
    pub const fn capture() -> Self {
        Self::new(LogTarget::capture(), LogTarget::capture())
    }

    /// Write to access log
    pub fn write_access(&self, message: &str) {
        self.access.write(message);
    }

    /// Write info message (to access log target)
    pub fn write_info(&self, message: &str) {
        self.access.write(message);
    }

    /// Write to error log
    pub fn write_error(&self, message: &str) {
        self.error.write(message);
    }

    /// Lines captured on the access channel (empty for console targets)
    pub fn access_lines(&self) -> Vec<String> {
        self.access.lines()
    }

    /// Lines captured on the error channel (empty for console targets)
    pub fn error_lines(&self) -> Vec<String> {
        self.error.lines()
    }
}
