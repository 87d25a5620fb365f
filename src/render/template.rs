//! Page templates with title and content placeholders.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Placeholder replaced by the document title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Placeholder replaced by the rendered HTML.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// An HTML page template.
///
/// Rendering is a literal replacement of every placeholder occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    source: String,
    base_path: String,
}

impl PageTemplate {
    /// Create a template from its source text.
    ///
    /// Fails with [`Error::Template`] unless both placeholders are present.
    pub fn new(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        for placeholder in [TITLE_PLACEHOLDER, CONTENT_PLACEHOLDER] {
            if !source.contains(placeholder) {
                return Err(Error::Template(format!(
                    "missing placeholder {}",
                    placeholder
                )));
            }
        }
        Ok(Self {
            source,
            base_path: "/".to_string(),
        })
    }

    /// Load a template from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(fs::read_to_string(path)?)
    }

    /// Set the path prefix that root-relative `href` and `src` values are
    /// rewritten to. The default `/` leaves them untouched. A trailing `/`
    /// is added if missing.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        let mut base_path = base_path.into();
        if !base_path.ends_with('/') {
            base_path.push('/');
        }
        self.base_path = base_path;
        self
    }

    /// The configured base path.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Substitute the title and content into the template.
    pub fn render(&self, title: &str, content: &str) -> String {
        let page = self
            .source
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content);

        if self.base_path == "/" {
            return page;
        }
        page.replace("href=\"/", &format!("href=\"{}", self.base_path))
            .replace("src=\"/", &format!("src=\"{}", self.base_path))
    }
}
