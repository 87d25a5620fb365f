//! Document tree assembly: Markdown blocks to an HTML node tree.

use log::debug;

use crate::error::{Error, Result};
use crate::model::{BlockType, HtmlNode, LeafNode, ParentNode, TextSpan};
use crate::parser::{block, inline};

use super::DocumentStats;

/// Tag of the root element wrapping every block.
pub const ROOT_TAG: &str = "div";

/// Convert Markdown to an HTML node tree rooted at a `div`.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    HtmlRenderer::new().render(markdown)
}

/// Convert Markdown to an HTML node tree, collecting statistics.
pub fn markdown_to_html_node_with_stats(markdown: &str) -> Result<(HtmlNode, DocumentStats)> {
    HtmlRenderer::new().render_with_stats(markdown)
}

/// Convert Markdown to serialized HTML markup.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    markdown_to_html_node(markdown)?.to_html()
}

/// Assembles HTML node trees from Markdown documents.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    stats: DocumentStats,
}

impl HtmlRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a document to its node tree.
    pub fn render(mut self, markdown: &str) -> Result<HtmlNode> {
        self.render_internal(markdown)
    }

    /// Render a document, returning statistics alongside the tree.
    pub fn render_with_stats(mut self, markdown: &str) -> Result<(HtmlNode, DocumentStats)> {
        let node = self.render_internal(markdown)?;
        Ok((node, self.stats))
    }

    fn render_internal(&mut self, markdown: &str) -> Result<HtmlNode> {
        let mut children = Vec::new();

        for (index, text) in block::segment(markdown).iter().enumerate() {
            if text.is_empty() {
                debug!("block {}: empty, skipped", index);
                continue;
            }
            let block_type = block::classify(text);
            debug!("block {}: {:?}", index, block_type);
            children.push(self.render_block(text, block_type)?);
        }

        Ok(ParentNode::new(ROOT_TAG, children).into())
    }

    /// Render one block of a known type.
    ///
    /// Fails with [`Error::Structural`] if the block type has no element,
    /// e.g. a heading level outside 1-6.
    pub fn render_block(&mut self, text: &str, block_type: BlockType) -> Result<HtmlNode> {
        let tag = block_type.tag().ok_or_else(|| {
            Error::Structural(format!("no element for block type {:?}", block_type))
        })?;

        let node = match block_type {
            BlockType::Heading(_) => {
                ParentNode::new(tag, self.inline_children(block::strip_heading_prefix(text))?)
            }
            BlockType::Code => {
                let literal = block::strip_code_fence(text);
                let code = ParentNode::new("code", vec![LeafNode::text(literal).into()]);
                ParentNode::new(tag, vec![code.into()])
            }
            BlockType::Quote => {
                let joined = block::block_lines(text)
                    .map(block::strip_quote_marker)
                    .collect::<Vec<_>>()
                    .join(" ");
                ParentNode::new(tag, self.inline_children(&joined)?)
            }
            BlockType::UnorderedList | BlockType::OrderedList => {
                let mut items = Vec::new();
                for line in block::block_lines(text) {
                    let children = self.inline_children(block::strip_list_marker(line))?;
                    self.stats.add_list_item();
                    items.push(ParentNode::new("li", children).into());
                }
                ParentNode::new(tag, items)
            }
            BlockType::Paragraph => ParentNode::new(tag, self.inline_children(text)?),
        };

        self.stats.add_block(block_type);
        Ok(node.into())
    }

    /// Resolve inline text to leaf nodes. Text without content yields a
    /// single empty text leaf so the enclosing element stays serializable.
    fn inline_children(&mut self, text: &str) -> Result<Vec<HtmlNode>> {
        let spans: Vec<TextSpan> = inline::resolve(text)?;
        self.stats.add_spans(&spans);
        if spans.is_empty() {
            return Ok(vec![LeafNode::text("").into()]);
        }
        Ok(inline::to_html_nodes(&spans))
    }
}
