//! HTTP protocol layer module
//!
//! Protocol-level helpers with no knowledge of the filesystem: response
//! builders, content types, and the no-cache header policy.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used items
pub use cache::apply_no_cache;
pub use response::{
    build_404_response, build_500_response, build_501_response, build_error_response,
    build_file_response, build_html_response, build_redirect_response,
};
