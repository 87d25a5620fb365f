//! Data model shared by the parser and the renderer.
//!
//! Markdown is parsed into [`TextSpan`]s and [`BlockType`]s, which the
//! renderer turns into a tree of [`HtmlNode`]s.

mod block;
mod html;
mod span;

pub use block::BlockType;
pub use html::{Attributes, HtmlNode, LeafNode, ParentNode};
pub use span::{SpanKind, TextSpan};
