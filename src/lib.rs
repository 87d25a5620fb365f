//! # mdsite
//!
//! Markdown to HTML conversion for static site generation.
//!
//! A document is split into blocks on blank lines, each block is classified
//! (heading, code, quote, list, paragraph), inline formatting is resolved
//! within it, and the result is assembled into a tree of HTML nodes that
//! serializes itself to markup.
//!
//! ## Quick Start
//!
//! ```
//! use mdsite::{extract_title, markdown_to_html};
//!
//! fn main() -> mdsite::Result<()> {
//!     let markdown = "# Hi\n\n*a* and **b**";
//!
//!     assert_eq!(extract_title(markdown)?, "Hi");
//!     assert_eq!(
//!         markdown_to_html(markdown)?,
//!         "<div><h1>Hi</h1><p><i>a</i> and <b>b</b></p></div>"
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Supported syntax
//!
//! - **Blocks**: `#`-`######` headings, fenced code, `>` quotes,
//!   `*`/`-` lists, `1.` ordered lists, paragraphs
//! - **Inline**: `**bold**`, `*italic*`, `` `code` ``, `[links](url)`,
//!   `![images](url)`
//!
//! Inline markup is single-level: delimiters do not nest, and an unbalanced
//! delimiter fails the whole document with [`Error::MalformedMarkup`].

pub mod error;
pub mod metadata;
pub mod model;
pub mod parser;
pub mod render;
pub mod site;

// Re-export commonly used types
pub use error::{Error, Result};
pub use metadata::extract_title;
pub use model::{Attributes, BlockType, HtmlNode, LeafNode, ParentNode, SpanKind, TextSpan};
pub use render::{
    markdown_to_html, markdown_to_html_node, markdown_to_html_node_with_stats, DocumentStats,
    JsonFormat, PageTemplate,
};
pub use site::{BuildReport, PageFailure, SiteOptions};

use std::path::{Path, PathBuf};

/// Render a Markdown document into a full page.
///
/// The title comes from the first `# ` line and the content from the
/// serialized node tree; both are substituted into the template.
///
/// # Example
///
/// ```
/// use mdsite::{render_page, PageTemplate};
///
/// let template = PageTemplate::new("<title>{{ Title }}</title>{{ Content }}")?;
/// let page = render_page("# Home\n\nWelcome", &template)?;
/// assert_eq!(page, "<title>Home</title><div><h1>Home</h1><p>Welcome</p></div>");
/// # Ok::<(), mdsite::Error>(())
/// ```
pub fn render_page(markdown: &str, template: &PageTemplate) -> Result<String> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html(markdown)?;
    Ok(template.render(&title, &content))
}

/// Convert a Markdown file to serialized HTML.
///
/// # Example
///
/// ```no_run
/// let html = mdsite::file_to_html("content/index.md").unwrap();
/// println!("{}", html);
/// ```
pub fn file_to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let markdown = std::fs::read_to_string(path)?;
    markdown_to_html(&markdown)
}

/// Convert a Markdown document to a JSON dump of its node tree.
pub fn to_json(markdown: &str, format: JsonFormat) -> Result<String> {
    let node = markdown_to_html_node(markdown)?;
    render::to_json(&node, format)
}

/// Builder for generating a site.
///
/// # Example
///
/// ```no_run
/// use mdsite::Mdsite;
///
/// let report = Mdsite::new()
///     .content_dir("./content")
///     .static_dir("./static")
///     .template("./template.html")
///     .output_dir("./docs")
///     .base_path("/project/")
///     .build()?;
/// println!("{} pages written", report.pages_written.len());
/// # Ok::<(), mdsite::Error>(())
/// ```
pub struct Mdsite {
    options: SiteOptions,
}

impl Mdsite {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: SiteOptions::default(),
        }
    }

    /// Set the Markdown content directory.
    pub fn content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options = self.options.with_content_dir(dir);
        self
    }

    /// Set the static asset directory.
    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options = self.options.with_static_dir(dir);
        self
    }

    /// Set the page template file.
    pub fn template(mut self, path: impl Into<PathBuf>) -> Self {
        self.options = self.options.with_template(path);
        self
    }

    /// Set the output directory.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options = self.options.with_output_dir(dir);
        self
    }

    /// Set the base path for root-relative links.
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.options = self.options.with_base_path(base_path);
        self
    }

    /// Keep existing files in the output directory.
    pub fn keep_output(mut self) -> Self {
        self.options = self.options.with_clean(false);
        self
    }

    /// Disable parallel page generation.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// The options this builder will build with.
    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    /// Build the site.
    pub fn build(self) -> Result<BuildReport> {
        site::build(&self.options)
    }
}

impl Default for Mdsite {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_title_and_html() {
        let markdown = "# Hi\n\n*a* and **b**";
        assert_eq!(extract_title(markdown).unwrap(), "Hi");
        assert_eq!(
            markdown_to_html(markdown).unwrap(),
            "<div><h1>Hi</h1><p><i>a</i> and <b>b</b></p></div>"
        );
    }

    #[test]
    fn test_end_to_end_image() {
        assert_eq!(
            markdown_to_html("![alt](http://x/y.png)").unwrap(),
            r#"<div><p><img src="http://x/y.png" alt="alt"></img></p></div>"#
        );
    }

    #[test]
    fn test_render_page_requires_title() {
        let template = PageTemplate::new("{{ Title }}{{ Content }}").unwrap();
        let result = render_page("no heading here", &template);
        assert!(matches!(result, Err(Error::MissingTitle)));
    }

    #[test]
    fn test_render_page_propagates_markup_errors() {
        let template = PageTemplate::new("{{ Title }}{{ Content }}").unwrap();
        let result = render_page("# T\n\n`open", &template);
        assert!(matches!(result, Err(Error::MalformedMarkup { .. })));
    }

    #[test]
    fn test_to_json_facade() {
        let json = to_json("# T", JsonFormat::Compact).unwrap();
        assert!(json.starts_with(r#"{"type":"parent","tag":"div""#));
    }

    #[test]
    fn test_file_to_html_missing_file() {
        let result = file_to_html("definitely/not/here.md");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    // ==================== Builder Pattern Tests ====================

    #[test]
    fn test_mdsite_builder_default() {
        let builder = Mdsite::default();
        assert!(builder.options().clean_output);
        assert!(builder.options().parallel);
    }

    #[test]
    fn test_mdsite_builder_chained() {
        let builder = Mdsite::new()
            .content_dir("c")
            .static_dir("s")
            .template("t.html")
            .output_dir("o")
            .base_path("/b/")
            .keep_output()
            .sequential();

        let options = builder.options();
        assert_eq!(options.content_dir, PathBuf::from("c"));
        assert_eq!(options.static_dir, Some(PathBuf::from("s")));
        assert_eq!(options.template_path, PathBuf::from("t.html"));
        assert_eq!(options.output_dir, PathBuf::from("o"));
        assert_eq!(options.base_path, "/b/");
        assert!(!options.clean_output);
        assert!(!options.parallel);
    }

    #[test]
    fn test_mdsite_build_missing_template() {
        let result = Mdsite::new().template("no/such/template.html").build();
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
