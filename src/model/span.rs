//! Inline text spans and their conversion to leaf nodes.

use super::html::LeafNode;
use serde::Serialize;

/// Inline formatting applied to a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    /// Plain text
    Normal,
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
    /// `` `code` ``
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl SpanKind {
    /// HTML tag for this kind; `None` for plain text.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            SpanKind::Normal => None,
            SpanKind::Bold => Some("b"),
            SpanKind::Italic => Some("i"),
            SpanKind::Code => Some("code"),
            SpanKind::Link => Some("a"),
            SpanKind::Image => Some("img"),
        }
    }
}

/// A contiguous run of text with one inline formatting kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSpan {
    /// Text content (alt text for images)
    pub text: String,

    /// Formatting kind
    pub kind: SpanKind,

    /// Destination URL, only for links and images
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl TextSpan {
    /// Create a span of the given kind without a target.
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            target: None,
        }
    }

    /// Create a plain text span.
    pub fn normal(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Normal)
    }

    /// Create a bold span.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Bold)
    }

    /// Create an italic span.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Italic)
    }

    /// Create an inline code span.
    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Code)
    }

    /// Create a link span.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Link,
            target: Some(url.into()),
        }
    }

    /// Create an image span.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: SpanKind::Image,
            target: Some(url.into()),
        }
    }

    /// Check if this span is plain text.
    pub fn is_normal(&self) -> bool {
        self.kind == SpanKind::Normal
    }

    /// Convert to a leaf HTML node.
    pub fn to_html_node(&self) -> LeafNode {
        let target = self.target.as_deref().unwrap_or_default();
        match self.kind {
            SpanKind::Normal => LeafNode::text(self.text.as_str()),
            SpanKind::Bold | SpanKind::Italic | SpanKind::Code => {
                LeafNode::new(tag_of(self.kind), self.text.as_str())
            }
            SpanKind::Link => {
                LeafNode::new(tag_of(self.kind), self.text.as_str()).with_attribute("href", target)
            }
            SpanKind::Image => LeafNode::new(tag_of(self.kind), "")
                .with_attribute("src", target)
                .with_attribute("alt", self.text.as_str()),
        }
    }
}

impl From<&TextSpan> for LeafNode {
    fn from(span: &TextSpan) -> Self {
        span.to_html_node()
    }
}

fn tag_of(kind: SpanKind) -> &'static str {
    kind.tag().unwrap_or_default()
}
