//! Document metadata read directly from raw Markdown lines.

use crate::error::{Error, Result};

/// Extract the document title: the trimmed text of the first line that
/// starts with `# `.
///
/// Lines are scanned as-is, before block segmentation, so a title may appear
/// anywhere in the document. `## ` and deeper headings never match.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .split('\n')
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(Error::MissingTitle)
}
