//! HTTP response building module
//!
//! Builders for the handful of responses a static server produces. Bodies
//! are dropped for HEAD requests but `Content-Length` still reports the
//! size a GET would have received.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{CONTENT_LENGTH, CONTENT_TYPE, LAST_MODIFIED, LOCATION};
use hyper::{Response, StatusCode};

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const ERROR_CONTENT_TYPE: &str = "text/html;charset=utf-8";

/// Build 200 response for a file's contents
pub fn build_file_response(
    data: Bytes,
    content_type: &str,
    last_modified: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, content_type)
        .header(CONTENT_LENGTH, content_length);

    if let Some(last_modified) = last_modified {
        builder = builder.header(LAST_MODIFIED, last_modified);
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error("200", &e);
        fallback(StatusCode::OK)
    })
}

/// Build generic HTML response
pub fn build_html_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, HTML_CONTENT_TYPE)
        .header(CONTENT_LENGTH, content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            fallback(StatusCode::OK)
        })
}

/// Build 301 redirect, used to add the trailing slash to directory paths
pub fn build_redirect_response(location: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::MOVED_PERMANENTLY)
        .header(LOCATION, location)
        .header(CONTENT_LENGTH, 0)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            fallback(StatusCode::MOVED_PERMANENTLY)
        })
}

/// Build an error response with the standard HTML error page
pub fn build_error_response(
    status: StatusCode,
    message: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let page = error_page(status, message);
    let content_length = page.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(page)
    };

    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, ERROR_CONTENT_TYPE)
        .header(CONTENT_LENGTH, content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            fallback(status)
        })
}

/// Build 404 Not Found response
pub fn build_404_response(is_head: bool) -> Response<Full<Bytes>> {
    build_error_response(StatusCode::NOT_FOUND, "File not found", is_head)
}

/// Build 501 Not Implemented response for methods other than GET/HEAD
pub fn build_501_response(method: &str) -> Response<Full<Bytes>> {
    build_error_response(
        StatusCode::NOT_IMPLEMENTED,
        &format!("Unsupported method ('{method}')"),
        false,
    )
}

/// Build 500 Internal Server Error response
pub fn build_500_response(is_head: bool) -> Response<Full<Bytes>> {
    build_error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Error reading file",
        is_head,
    )
}

/// Render the HTML error page
pub fn error_page(status: StatusCode, message: &str) -> String {
    let code = status.as_u16();
    format!(
        r#"<!DOCTYPE HTML>
<html lang="en">
    <head>
        <meta charset="utf-8">
        <title>Error response</title>
    </head>
    <body>
        <h1>Error response</h1>
        <p>Error code: {code}</p>
        <p>Message: {}.</p>
        <p>Error code explanation: {code} - {}.</p>
    </body>
</html>
"#,
        escape_html(message),
        explain(status),
    )
}

/// Longer explanation of a status, shown on the error page
pub fn explain(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "Bad request syntax or unsupported method",
        403 => "Request forbidden -- authorization will not help",
        404 => "Nothing matches the given URI",
        405 => "Specified method is invalid for this resource",
        500 => "Server got itself in trouble",
        501 => "Server does not support this operation",
        _ => status.canonical_reason().unwrap_or("Unknown error"),
    }
}

/// Escape text for inclusion in HTML element content (quotes are kept)
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn fallback(status: StatusCode) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = status;
    response
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    eprintln!("[ERROR] Failed to build {status} response: {error}");
}
