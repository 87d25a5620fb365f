//! JSON dump of an HTML node tree.

use crate::error::{Error, Result};
use crate::model::HtmlNode;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a node tree to JSON.
pub fn to_json(node: &HtmlNode, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(node),
        JsonFormat::Compact => serde_json::to_string(node),
    };

    result.map_err(|e| Error::Json(e.to_string()))
}
