//! Static file server that disables client and proxy caching.
//!
//! Serves a fixed root directory over HTTP/1.x on `0.0.0.0:5000`. Every
//! response carries `Cache-Control: no-cache, no-store, must-revalidate`,
//! `Pragma: no-cache` and `Expires: 0`, and every request produces one
//! `[SERVER]` access line.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
