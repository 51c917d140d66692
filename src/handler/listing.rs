//! Directory listing module
//!
//! Renders the HTML index page for directories without an index document.

use crate::http::response::escape_html;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::io;
use std::path::Path;
use tokio::fs;

/// Characters left unescaped in listing links
const LINK_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// One row of the listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub is_dir: bool,
    pub is_symlink: bool,
}

impl ListingEntry {
    fn href(&self) -> String {
        let link = if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        };
        utf8_percent_encode(&link, LINK_SAFE).to_string()
    }

    fn label(&self) -> String {
        let mut label = self.name.clone();
        if self.is_dir {
            label.push('/');
        }
        if self.is_symlink {
            label.push('@');
        }
        escape_html(&label)
    }
}

/// Read `dir` and return its entries sorted case-insensitively
pub async fn read_entries(dir: &Path) -> io::Result<Vec<ListingEntry>> {
    let mut reader = fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_symlink = entry.file_type().await.is_ok_and(|t| t.is_symlink());
        // Follows symlinks, so a link to a directory lists as a directory
        let is_dir = fs::metadata(entry.path()).await.is_ok_and(|m| m.is_dir());

        entries.push(ListingEntry {
            name,
            is_dir,
            is_symlink,
        });
    }

    entries.sort_by_key(|e| e.name.to_lowercase());
    Ok(entries)
}

/// Render the listing page; `display_path` is the decoded request path
pub fn render(display_path: &str, entries: &[ListingEntry]) -> String {
    let title = format!("Directory listing for {}", escape_html(display_path));

    let mut lines = vec![
        "<!DOCTYPE HTML>".to_string(),
        "<html lang=\"en\">".to_string(),
        "<head>".to_string(),
        "<meta charset=\"utf-8\">".to_string(),
        format!("<title>{title}</title>\n</head>"),
        format!("<body>\n<h1>{title}</h1>"),
        "<hr>\n<ul>".to_string(),
    ];

    for entry in entries {
        lines.push(format!(
            "<li><a href=\"{}\">{}</a></li>",
            entry.href(),
            entry.label()
        ));
    }

    lines.push("</ul>\n<hr>\n</body>\n</html>\n".to_string());
    lines.join("\n")
}
