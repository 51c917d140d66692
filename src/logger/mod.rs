//! Logger module
//!
//! Provides logging utilities for the HTTP server including:
//! - Startup and shutdown console lines
//! - One access line per request
//! - Error and warning logging

mod format;
pub mod writer;

pub use format::{version_str, RequestRecord, ACCESS_PREFIX};
pub use writer::{LogTarget, LogWriter};

use std::net::SocketAddr;
use std::path::Path;

pub fn log_server_start(log: &LogWriter, addr: &SocketAddr, root: &Path) {
    log.write_info(&format!("✓ Server running on http://{addr}"));
    log.write_info(&format!("✓ Serving files from: {}", root.display()));
    log.write_info("✓ Press Ctrl+C to stop");
}

pub fn log_server_stopped(log: &LogWriter) {
    log.write_info("\n✓ Server stopped");
}

/// The single access line for a request
pub fn log_request(log: &LogWriter, record: &RequestRecord) {
    log.write_access(&record.format());
}

pub fn log_connection_error(log: &LogWriter, err: &impl std::fmt::Debug) {
    log.write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(log: &LogWriter, message: &str) {
    log.write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(log: &LogWriter, message: &str) {
    log.write_error(&format!("[WARN] {message}"));
}
