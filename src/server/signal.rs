// Signal handling module
//
// SIGINT (Ctrl+C) is the only way to stop the server. The handler flips a
// shared stop flag and wakes the accept loop; nothing else is shared.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use crate::config::AppState;
use crate::logger;

/// Shutdown token observed by the accept loop
pub struct SignalHandler {
    /// Wakes tasks waiting for shutdown
    pub shutdown: Notify,
    /// Whether shutdown has been requested
    pub shutdown_requested: AtomicBool,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            shutdown: Notify::new(),
            shutdown_requested: AtomicBool::new(false),
        }
    }

    /// Request shutdown: LISTENING -> STOPPED
    pub fn trigger(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        self.shutdown.notify_waiters();
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }

    /// Resolve once shutdown has been requested, including before the call
    pub async fn wait(&self) {
        let notified = self.shutdown.notified();
        tokio::pin!(notified);
        // Register before checking the flag so a trigger in between is seen
        notified.as_mut().enable();

        if self.is_shutdown_requested() {
            return;
        }
        notified.await;
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the Ctrl+C listener (Unix)
///
/// The SIGINT handler is registered before this returns, so an interrupt
/// arriving at any point after startup reaches the accept loop.
#[cfg(unix)]
pub fn start_signal_handler(state: Arc<AppState>) {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = match signal(SignalKind::interrupt()) {
        Ok(s) => s,
        Err(e) => {
            logger::log_error(
                &state.logger,
                &format!("Failed to register SIGINT handler: {e}"),
            );
            return;
        }
    };

    tokio::spawn(async move {
        if sigint.recv().await.is_some() {
            state.signals.trigger();
        }
    });
}

/// Windows fallback - Ctrl+C through the console handler
#[cfg(not(unix))]
pub fn start_signal_handler(state: Arc<AppState>) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => state.signals.trigger(),
            Err(e) => logger::log_error(
                &state.logger,
                &format!("Failed to register Ctrl+C handler: {e}"),
            ),
        }
    });
}
