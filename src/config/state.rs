// Application state module
// Read-only state shared by every connection task

use std::path::PathBuf;
use std::sync::Arc;

use super::types::Config;
use crate::logger::LogWriter;
use crate::server::signal::SignalHandler;

/// Application state
///
/// Nothing in here is mutated per request: the root and configuration are
/// fixed at startup and the only flag is the shutdown token.
pub struct AppState {
    pub config: Config,
    /// Canonical root directory, passed to every path lookup
    pub root: PathBuf,
    pub logger: LogWriter,
    pub signals: Arc<SignalHandler>,
}

impl AppState {
    /// Resolve the root directory and build state logging to stdout/stderr
    pub fn new(config: &Config) -> Result<Self, String> {
        Self::with_logger(config, LogWriter::console())
    }

    /// Build state with an explicit log writer (e.g. an in-memory capture)
    pub fn with_logger(config: &Config, logger: LogWriter) -> Result<Self, String> {
        let root = config.resolve_root()?;

        Ok(Self {
            config: config.clone(),
            root,
            logger,
            signals: Arc::new(SignalHandler::new()),
        })
    }
}
