//! Block-level classification result.

use serde::Serialize;

/// The kind of a top-level Markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "level", rename_all = "snake_case")]
pub enum BlockType {
    /// Plain paragraph (fallback)
    Paragraph,
    /// ATX heading with level 1-6
    Heading(u8),
    /// Fenced code block
    Code,
    /// `>` quote block
    Quote,
    /// `*` or `-` list
    UnorderedList,
    /// `1.` `2.` ... list
    OrderedList,
}

impl BlockType {
    /// Create a heading block type, if the level is within 1-6.
    pub fn heading(level: u8) -> Option<Self> {
        (1..=6).contains(&level).then_some(BlockType::Heading(level))
    }

    /// HTML tag of the element wrapping this block.
    ///
    /// `None` for a heading level outside 1-6.
    pub fn tag(self) -> Option<&'static str> {
        let tag = match self {
            BlockType::Paragraph => "p",
            BlockType::Heading(1) => "h1",
            BlockType::Heading(2) => "h2",
            BlockType::Heading(3) => "h3",
            BlockType::Heading(4) => "h4",
            BlockType::Heading(5) => "h5",
            BlockType::Heading(6) => "h6",
            BlockType::Heading(_) => return None,
            BlockType::Code => "pre",
            BlockType::Quote => "blockquote",
            BlockType::UnorderedList => "ul",
            BlockType::OrderedList => "ol",
        };
        Some(tag)
    }

    /// Markdown prefix that opens a heading at this level, e.g. `"### "`.
    pub fn heading_prefix(self) -> Option<String> {
        match self {
            BlockType::Heading(level) => Some(format!("{} ", "#".repeat(level as usize))),
            _ => None,
        }
    }

    /// Check if this is a list block.
    pub fn is_list(self) -> bool {
        matches!(self, BlockType::UnorderedList | BlockType::OrderedList)
    }
}
