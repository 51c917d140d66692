//! Request dispatch module
//!
//! Entry point for HTTP request processing. The static file handler builds
//! the base response; two steps are composed around it: the no-cache
//! headers are applied last, then the request is written to the access log.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, LogWriter, RequestRecord};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderValue, SERVER};
use hyper::http::request::Parts;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    /// Raw (still percent-encoded) path
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
    pub log: &'a LogWriter,
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    peer: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    // The body is never read
    let (parts, _body) = req.into_parts();
    let mut record = RequestRecord::from_parts(&parts, peer);

    let mut response = dispatch(&parts, &state).await;
    finalize_headers(&mut response, &state.config.http.server_name);

    let body_bytes = response.body().size_hint().exact().unwrap_or_default();
    record.complete(response.status().as_u16(), body_bytes);
    logger::log_request(&state.logger, &record);

    Ok(response)
}

/// Produce the base response: method check, then static file serving
pub async fn dispatch(parts: &Parts, state: &AppState) -> Response<Full<Bytes>> {
    let method = &parts.method;
    if let Some(resp) = check_http_method(method) {
        return resp;
    }

    let ctx = RequestContext {
        path: parts.uri.path(),
        query: parts.uri.query(),
        is_head: *method == Method::HEAD,
        log: &state.logger,
    };

    static_files::serve(&ctx, &state.root, &state.config.http.index_files).await
}

/// Header post-processing applied to every response, whatever its status
pub fn finalize_headers(response: &mut Response<Full<Bytes>>, server_name: &str) {
    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(server_name) {
        headers.insert(SERVER, value);
    }
    http::apply_no_cache(headers);
}

/// Only GET and HEAD are served; anything else is 501
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        _ => Some(http::build_501_response(method.as_str())),
    }
}
