//! Rendering: Markdown to HTML node trees, markup, JSON, and pages.

mod html;
mod json;
mod stats;
mod template;

pub use html::{
    markdown_to_html, markdown_to_html_node, markdown_to_html_node_with_stats, HtmlRenderer,
    ROOT_TAG,
};
pub use json::{to_json, JsonFormat};
pub use stats::DocumentStats;
pub use template::{PageTemplate, CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER};
