//! Request path resolution
//!
//! Maps a URL path onto a filesystem path beneath the root directory.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::path::{Path, PathBuf};

/// Characters left unescaped in a single path segment
const SEGMENT_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// Resolve a request path beneath `root`.
///
/// The path is percent-decoded and normalized segment by segment: empty and
/// `.` segments are dropped, `..` removes the previous segment and is
/// ignored at the root, so the result can never climb above `root`.
pub fn resolve(root: &Path, uri_path: &str) -> PathBuf {
    root.join(normalize(uri_path).join("/"))
}

/// Decoded, normalized path segments
pub fn normalize(uri_path: &str) -> Vec<String> {
    let decoded = percent_decode_str(uri_path).decode_utf8_lossy();

    let mut segments: Vec<String> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s if is_foreign_separator(s) => {}
            s => segments.push(s.to_string()),
        }
    }
    segments
}

/// Same-origin URL of the directory a request path names, with a trailing
/// slash.
///
/// Built from the normalized segments, so leading or doubled slashes can
/// never turn into a protocol-relative `//host/...` reference.
pub fn directory_url(uri_path: &str) -> String {
    let mut url = String::from("/");
    for segment in normalize(uri_path) {
        url.extend(utf8_percent_encode(&segment, SEGMENT_SAFE));
        url.push('/');
    }
    url
}

/// The percent-decoded request path, as shown to clients
pub fn decoded(uri_path: &str) -> String {
    percent_decode_str(uri_path).decode_utf8_lossy().into_owned()
}

#[cfg(windows)]
fn is_foreign_separator(segment: &str) -> bool {
    segment.contains('\\') || segment.contains(':')
}

#[cfg(not(windows))]
const fn is_foreign_separator(_segment: &str) -> bool {
    false
}
