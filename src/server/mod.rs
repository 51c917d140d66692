// Server module entry point
// Binds the listener, installs the interrupt handler and runs the accept loop

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module is exposed as `server_loop`
#[path = "loop.rs"]
pub mod server_loop;

use std::sync::Arc;

use crate::config::AppState;
use crate::logger;

// Re-export commonly used items
pub use listener::create_listener;
pub use server_loop::start_server_loop;
pub use signal::SignalHandler;

/// Bind the configured address and serve until Ctrl+C.
///
/// A bind failure returns an error before anything is accepted.
pub async fn run(state: Arc<AppState>) -> Result<(), Box<dyn std::error::Error>> {
    let addr = state.config.get_socket_addr()?;
    let listener =
        create_listener(addr).map_err(|e| format!("Failed to bind {addr}: {e}"))?;

    logger::log_server_start(&state.logger, &listener.local_addr()?, &state.root);
    signal::start_signal_handler(Arc::clone(&state));

    start_server_loop(listener, state).await;
    Ok(())
}
