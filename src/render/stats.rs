//! Statistics collected while assembling a document tree.

use serde::Serialize;

use crate::model::{BlockType, SpanKind, TextSpan};

/// Counts of the blocks and inline elements in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    /// Number of blocks rendered (empty blocks excluded)
    pub block_count: u32,

    /// Number of headings, any level
    pub heading_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of fenced code blocks
    pub code_block_count: u32,

    /// Number of quote blocks
    pub quote_count: u32,

    /// Number of unordered lists
    pub unordered_list_count: u32,

    /// Number of ordered lists
    pub ordered_list_count: u32,

    /// Number of list items across all lists
    pub list_item_count: u32,

    /// Number of links
    pub link_count: u32,

    /// Number of images
    pub image_count: u32,
}

impl DocumentStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rendered block.
    pub fn add_block(&mut self, block_type: BlockType) {
        self.block_count += 1;
        match block_type {
            BlockType::Paragraph => self.paragraph_count += 1,
            BlockType::Heading(_) => self.heading_count += 1,
            BlockType::Code => self.code_block_count += 1,
            BlockType::Quote => self.quote_count += 1,
            BlockType::UnorderedList => self.unordered_list_count += 1,
            BlockType::OrderedList => self.ordered_list_count += 1,
        }
    }

    /// Record a list item.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Record links and images among resolved spans.
    pub fn add_spans(&mut self, spans: &[TextSpan]) {
        for span in spans {
            match span.kind {
                SpanKind::Link => self.link_count += 1,
                SpanKind::Image => self.image_count += 1,
                _ => {}
            }
        }
    }

    /// Total number of lists, ordered or not.
    pub fn list_count(&self) -> u32 {
        self.unordered_list_count + self.ordered_list_count
    }
}
