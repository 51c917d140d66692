// Server loop module
// Accept loop: LISTENING until the shutdown token fires, then STOPPED

use hyper_util::server::graceful::GracefulShutdown;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::connection::handle_connection;
use crate::config::AppState;
use crate::logger;

/// Accept connections until shutdown is requested.
///
/// On shutdown the listener is dropped first, so no new connection is
/// accepted, then open connections get `shutdown_grace_secs` to finish the
/// response they are writing. The stop line is printed last.
pub async fn start_server_loop(listener: TcpListener, state: Arc<AppState>) {
    let graceful = GracefulShutdown::new();

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        handle_connection(stream, peer_addr, &state, &graceful);
                    }
                    Err(e) => {
                        logger::log_error(&state.logger, &format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = state.signals.wait() => {
                break;
            }
        }
    }

    // Release the socket before draining
    drop(listener);

    let grace = Duration::from_secs(state.config.performance.shutdown_grace_secs);
    if tokio::time::timeout(grace, graceful.shutdown()).await.is_err() {
        logger::log_warning(
            &state.logger,
            &format!("Connections still open after {}s, closing them", grace.as_secs()),
        );
    }

    logger::log_server_stopped(&state.logger);
}
