//! MIME type detection module
//!
//! Returns the Content-Type for a file based on its extension.

use std::path::Path;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Get MIME Content-Type for a file path
///
/// Compressed archives are served as their archive type, never as the type
/// of the content inside (`site.tar.gz` is `application/gzip`).
pub fn get_content_type(path: &Path) -> &'static str {
    let extension = path.extension().and_then(|e| e.to_str());

    if let Some(content_type) = extension.and_then(archive_type) {
        return content_type;
    }

    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}

fn archive_type(extension: &str) -> Option<&'static str> {
    match extension {
        "Z" => Some(DEFAULT_CONTENT_TYPE),
        _ => match extension.to_ascii_lowercase().as_str() {
            "gz" => Some("application/gzip"),
            "bz2" => Some("application/x-bzip2"),
            "xz" => Some("application/x-xz"),
            _ => None,
        },
    }
}
