//! Static file serving module
//!
//! Resolves a request path beneath the root directory and answers with the
//! file, the directory's index document, a directory listing, or an error.

use crate::handler::router::RequestContext;
use crate::handler::{listing, resolve};
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncReadExt;

/// Serve a request path from the root directory
pub async fn serve(
    ctx: &RequestContext<'_>,
    root: &Path,
    index_files: &[String],
) -> Response<Full<Bytes>> {
    let target = resolve::resolve(root, ctx.path);

    // File not found is common (404), no need to log
    let Ok(metadata) = fs::metadata(&target).await else {
        return http::build_404_response(ctx.is_head);
    };

    if metadata.is_dir() {
        return serve_directory(ctx, &target, index_files).await;
    }

    // A trailing slash only makes sense for directories
    if ctx.path.ends_with('/') {
        return http::build_404_response(ctx.is_head);
    }

    serve_file(ctx, &target).await
}

/// Serve a directory: redirect to the slash form, then index or listing
async fn serve_directory(
    ctx: &RequestContext<'_>,
    dir: &Path,
    index_files: &[String],
) -> Response<Full<Bytes>> {
    if !ctx.path.ends_with('/') {
        let dir_url = resolve::directory_url(ctx.path);
        let location = match ctx.query {
            Some(query) => format!("{dir_url}?{query}"),
            None => dir_url,
        };
        return http::build_redirect_response(&location);
    }

    if let Some(index_path) = find_index(dir, index_files).await {
        return serve_file(ctx, &index_path).await;
    }

    match listing::read_entries(dir).await {
        Ok(entries) => {
            let page = listing::render(&resolve::decoded(ctx.path), &entries);
            http::build_html_response(page, ctx.is_head)
        }
        Err(e) => {
            logger::log_warning(
                ctx.log,
                &format!("Cannot list directory '{}': {e}", dir.display()),
            );
            http::build_error_response(
                StatusCode::NOT_FOUND,
                "No permission to list directory",
                ctx.is_head,
            )
        }
    }
}

/// First configured index document that exists as a regular file
pub async fn find_index(dir: &Path, index_files: &[String]) -> Option<std::path::PathBuf> {
    for index_file in index_files {
        let index_path = dir.join(index_file);
        if fs::metadata(&index_path).await.is_ok_and(|m| m.is_file()) {
            return Some(index_path);
        }
    }
    None
}

/// Serve a single regular file
async fn serve_file(ctx: &RequestContext<'_>, path: &Path) -> Response<Full<Bytes>> {
    let Ok(mut file) = fs::File::open(path).await else {
        return http::build_404_response(ctx.is_head);
    };

    let last_modified = file
        .metadata()
        .await
        .ok()
        .and_then(|m| m.modified().ok())
        .map(cache::http_date);

    let mut content = Vec::new();
    if let Err(e) = file.read_to_end(&mut content).await {
        logger::log_error(
            ctx.log,
            &format!("Failed to read file '{}': {e}", path.display()),
        );
        return http::build_500_response(ctx.is_head);
    }

    http::build_file_response(
        Bytes::from(content),
        mime::get_content_type(path),
        last_modified.as_deref(),
        ctx.is_head,
    )
}
