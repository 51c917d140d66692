//! HTTP cache control module
//!
//! Every response leaves the server marked as uncacheable. The three headers
//! are applied last, after all other header construction, and replace any
//! earlier value.

use chrono::{DateTime, Utc};
use hyper::header::{HeaderMap, HeaderValue, CACHE_CONTROL, EXPIRES, PRAGMA};
use std::time::SystemTime;

pub const NO_CACHE_CONTROL: &str = "no-cache, no-store, must-revalidate";
pub const NO_CACHE_PRAGMA: &str = "no-cache";
pub const NO_CACHE_EXPIRES: &str = "0";

/// Overwrite the caching headers with the no-cache set
pub fn apply_no_cache(headers: &mut HeaderMap) {
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(NO_CACHE_CONTROL));
    headers.insert(PRAGMA, HeaderValue::from_static(NO_CACHE_PRAGMA));
    headers.insert(EXPIRES, HeaderValue::from_static(NO_CACHE_EXPIRES));
}

/// Format a timestamp as an IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`
pub fn http_date(time: SystemTime) -> String {
    let time: DateTime<Utc> = time.into();
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
