//! Access log format module
//!
//! One record per request, rendered as
//! `[SERVER] <client-ip> - "<METHOD> <target> <HTTP/x.y>" <status> <bytes>`.

use hyper::http::request::Parts;
use hyper::Version;
use std::net::SocketAddr;

/// Prefix of every access log line
pub const ACCESS_PREFIX: &str = "[SERVER]";

/// Request record: created when the request is parsed, completed once the
/// response exists, then written to the access log and dropped.
#[derive(Debug, Clone)]
pub struct RequestRecord {
    /// Client IP address
    pub client_addr: String,
    /// Client port
    pub client_port: u16,
    /// HTTP method (GET, HEAD, ...)
    pub method: String,
    /// Request target as sent (path plus query)
    pub target: String,
    /// Protocol version, e.g. `HTTP/1.1`
    pub version: &'static str,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: u64,
}

impl RequestRecord {
    pub fn from_parts(parts: &Parts, peer: SocketAddr) -> Self {
        let target = parts
            .uri
            .path_and_query()
            .map_or_else(|| parts.uri.to_string(), ToString::to_string);

        Self {
            client_addr: peer.ip().to_string(),
            client_port: peer.port(),
            method: parts.method.to_string(),
            target,
            version: version_str(parts.version),
            status: 200,
            body_bytes: 0,
        }
    }

    /// Record for a connection whose request never reached the handler
    pub fn rejected(peer: SocketAddr, status: u16) -> Self {
        Self {
            client_addr: peer.ip().to_string(),
            client_port: peer.port(),
            method: String::new(),
            target: String::new(),
            version: "",
            status,
            body_bytes: 0,
        }
    }

    /// Fill in the outcome once the response is final
    pub fn complete(&mut self, status: u16, body_bytes: u64) {
        self.status = status;
        self.body_bytes = body_bytes;
    }

    /// The request line in quotes, or `"-"` when none was parsed
    fn request_line(&self) -> String {
        if self.method.is_empty() {
            "\"-\"".to_string()
        } else {
            format!("\"{} {} {}\"", self.method, self.target, self.version)
        }
    }

    /// Render the full access log line
    pub fn format(&self) -> String {
        let bytes = if self.body_bytes == 0 {
            "-".to_string()
        } else {
            self.body_bytes.to_string()
        };

        format!(
            "{ACCESS_PREFIX} {} - {} {} {}",
            self.client_addr,
            self.request_line(),
            self.status,
            bytes,
        )
    }
}

/// Protocol version as it appears on the request line
pub fn version_str(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_2 => "HTTP/2.0",
        Version::HTTP_3 => "HTTP/3.0",
        _ => "HTTP/1.1",
    }
}
