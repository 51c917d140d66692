// Connection handling module
// Serves one accepted TCP connection on its own task

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use hyper_util::server::graceful::GracefulShutdown;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler;
use crate::logger::{self, RequestRecord};

/// Handle a single connection in a spawned task.
///
/// This function:
/// 1. Wraps the TCP stream in `TokioIo`
/// 2. Configures the HTTP/1 connection (keep-alive per configuration;
///    HTTP/1.0 clients close after one response unless they ask otherwise)
/// 3. Registers the connection with the graceful-shutdown watcher
/// 4. Logs requests rejected by the parser, which never reach the handler
///
/// # Arguments
///
/// * `stream` - The accepted TCP stream
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state
/// * `graceful` - Shutdown watcher owned by the accept loop
pub fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
    graceful: &GracefulShutdown,
) {
    let io = TokioIo::new(stream);

    let mut builder = http1::Builder::new();
    builder.keep_alive(state.config.performance.keep_alive);

    let service_state = Arc::clone(state);
    let conn = builder.serve_connection(
        io,
        service_fn(move |req| {
            let state = Arc::clone(&service_state);
            async move { handler::handle_request(req, peer_addr, state).await }
        }),
    );
    let conn = graceful.watch(conn);

    let state = Arc::clone(state);
    tokio::spawn(async move {
        if let Err(err) = conn.await {
            if let Some(status) = rejected_status(&err) {
                logger::log_request(&state.logger, &RequestRecord::rejected(peer_addr, status));
            } else if !err.is_incomplete_message() {
                logger::log_connection_error(&state.logger, &err);
            }
        }
    });
}

/// Status hyper answered with when it refused to parse a request.
///
/// hyper writes these responses itself, without going through the service,
/// so they carry neither the no-cache headers nor the `Server` header.
/// `None` means hyper closed the connection without writing a response.
fn rejected_status(err: &hyper::Error) -> Option<u16> {
    if !err.is_parse() || err.is_parse_version_h2() || err.is_parse_status() {
        return None;
    }

    // hyper exposes the parse kind only through its message
    let message = err.to_string();
    if err.is_parse_too_large() {
        if message == URI_TOO_LONG_MESSAGE {
            Some(414)
        } else {
            Some(431)
        }
    } else if message.starts_with(INTERNAL_ERROR_PREFIX) {
        None
    } else {
        Some(400)
    }
}

/// hyper's message for a request target longer than it accepts
const URI_TOO_LONG_MESSAGE: &str = "URI too long";
/// Prefix of hyper's message for a parse failure inside hyper itself
const INTERNAL_ERROR_PREFIX: &str = "internal error inside Hyper";
