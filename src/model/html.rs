//! HTML node tree and its serialization to markup.

use crate::error::{Error, Result};
use serde::{Serialize, Serializer};

/// HTML attributes in insertion order.
///
/// Values are written double-quoted and are not escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// Create an empty attribute list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add an attribute, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Get an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Render as ` name="value"` pairs, each preceded by one space.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        for (name, value) in &self.0 {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// A node holding text content and no children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafNode {
    /// Element name; `None` renders the value as raw text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Text content (empty for elements like `img`)
    pub value: String,

    /// Element attributes
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl LeafNode {
    /// Create a tagged leaf.
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// Create an untagged leaf that renders as raw text.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Serialize to markup. Leaves always serialize.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match &self.tag {
            None => out.push_str(&self.value),
            Some(tag) => {
                write_open_tag(out, tag, &self.attributes);
                out.push_str(&self.value);
                write_close_tag(out, tag);
            }
        }
    }
}

/// A node holding child nodes and no text of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentNode {
    /// Element name; required for serialization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Child nodes in document order; at least one is required
    pub children: Vec<HtmlNode>,

    /// Element attributes
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl ParentNode {
    /// Create a tagged parent.
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Create a parent without a tag. It fails to serialize.
    pub fn untagged(children: Vec<HtmlNode>) -> Self {
        Self {
            tag: None,
            children,
            attributes: Attributes::new(),
        }
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Serialize to markup.
    ///
    /// Fails with [`Error::Structural`] if this node or any descendant parent
    /// has no tag or no children.
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        let tag = self
            .tag
            .as_deref()
            .ok_or_else(|| Error::Structural("parent node must have a tag".to_string()))?;
        if self.children.is_empty() {
            return Err(Error::Structural(format!(
                "parent node <{}> must have children",
                tag
            )));
        }

        write_open_tag(out, tag, &self.attributes);
        for child in &self.children {
            child.write_html(out)?;
        }
        write_close_tag(out, tag);
        Ok(())
    }
}

/// An HTML element or raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HtmlNode {
    /// Text content, optionally wrapped in a tag
    Leaf(LeafNode),

    /// Element wrapping child nodes
    Parent(ParentNode),
}

impl HtmlNode {
    /// Serialize the subtree to markup.
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            HtmlNode::Leaf(leaf) => {
                leaf.write_html(out);
                Ok(())
            }
            HtmlNode::Parent(parent) => parent.write_html(out),
        }
    }

    /// Element name, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    /// Element attributes.
    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.attributes,
            HtmlNode::Parent(parent) => &parent.attributes,
        }
    }

    /// Child nodes; empty for leaves.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => &parent.children,
        }
    }

    /// Check if this is a leaf node.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HtmlNode::Leaf(_))
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

fn write_open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    attributes.write_html(out);
    out.push('>');
}

fn write_close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
