//! Result types for extraction output.
//!
//! A parse call produces exactly one [`Document`]: page-level metadata, the
//! content tree rooted at a [`NodeType::Document`] node, and the navigation
//! sections pulled out of the page chrome.
//!
//! [`Node`] is one shape shared by every node kind. Fields that do not apply
//! to a kind stay empty; empty fields are skipped when serialized so trees
//! built elsewhere (for example from selector rules) stay interchangeable.

use serde::{Deserialize, Serialize};

/// Kind of a [`Node`] in the output tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    Document,
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
    Blockquote,
    List,
    ListItem,
    Code,
    CodeBlock,
    Link,
    Image,
    Text,
    Strong,
    Emphasis,
    Mark,
    MarkInsert,
    Form,
    Input,
    NavSection,
    Table,
    TableRow,
    TableCell,
    /// Content-free fragment target (ID only).
    Anchor,
    #[serde(rename = "HR")]
    Hr,
}

impl NodeType {
    /// Whether the node starts a new block in the plain-text projection.
    #[must_use]
    pub fn is_block(self) -> bool {
        matches!(
            self,
            Self::Document
                | Self::Heading1
                | Self::Heading2
                | Self::Heading3
                | Self::Paragraph
                | Self::Blockquote
                | Self::List
                | Self::ListItem
                | Self::CodeBlock
                | Self::Form
                | Self::NavSection
                | Self::Table
                | Self::TableRow
                | Self::Hr
        )
    }

    #[must_use]
    pub fn is_heading(self) -> bool {
        matches!(self, Self::Heading1 | Self::Heading2 | Self::Heading3)
    }
}

/// One node of the output tree.
///
/// Children are owned exclusively by their parent and kept in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub node_type: NodeType,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub href: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub form_action: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub form_method: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub input_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub input_type: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub input_value: String,

    /// Table cells only: rendered from a `<th>`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_header: bool,

    /// Per-line rendering hint, e.g. the indent of a nested comment.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prefix: String,
}

impl Node {
    /// Creates an empty node of the given kind.
    #[must_use]
    pub fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            text: String::new(),
            children: Vec::new(),
            href: String::new(),
            id: String::new(),
            form_action: String::new(),
            form_method: String::new(),
            input_name: String::new(),
            input_type: String::new(),
            input_value: String::new(),
            is_header: false,
            prefix: String::new(),
        }
    }

    /// Creates a node carrying only text.
    #[must_use]
    pub fn with_text(node_type: NodeType, text: impl Into<String>) -> Self {
        let mut node = Self::new(node_type);
        node.text = text.into();
        node
    }

    /// Creates a node with the given children.
    #[must_use]
    pub fn with_children(node_type: NodeType, children: Vec<Node>) -> Self {
        let mut node = Self::new(node_type);
        node.children = children;
        node
    }

    /// A `Text` leaf.
    #[must_use]
    pub fn text_node(text: impl Into<String>) -> Self {
        Self::with_text(NodeType::Text, text)
    }

    /// A `Link` leaf.
    #[must_use]
    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        let mut node = Self::with_text(NodeType::Link, text);
        node.href = href.into();
        node
    }

    /// A `Paragraph` holding a single `Text` child.
    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::with_children(NodeType::Paragraph, vec![Self::text_node(text)])
    }

    /// A content-free fragment target.
    #[must_use]
    pub fn anchor(id: impl Into<String>) -> Self {
        let mut node = Self::new(NodeType::Anchor);
        node.id = id.into();
        node
    }

    /// Builder-style setter for `id`.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder-style setter for `prefix`.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// First child, if any.
    #[must_use]
    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    /// Whether the first child is a `Link`.
    #[must_use]
    pub fn starts_with_link(&self) -> bool {
        self.first_child()
            .is_some_and(|child| child.node_type == NodeType::Link)
    }

    /// Number of nodes of the given kind in this subtree, including `self`.
    #[must_use]
    pub fn count(&self, node_type: NodeType) -> usize {
        let own = usize::from(self.node_type == node_type);
        own + self.children.iter().map(|c| c.count(node_type)).sum::<usize>()
    }

    /// Plain-text projection of this subtree.
    ///
    /// Inline content is concatenated, blocks are separated by newlines,
    /// table cells are joined with `" | "`. Anchors contribute nothing.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self.node_type {
            NodeType::Anchor => String::new(),
            NodeType::Hr => "---".to_string(),
            NodeType::Input => {
                if self.input_value.is_empty() {
                    format!("[{}]", self.input_name)
                } else {
                    format!("[{}]", self.input_value)
                }
            }
            NodeType::TableRow => self
                .children
                .iter()
                .map(Node::plain_text)
                .collect::<Vec<_>>()
                .join(" | "),
            NodeType::Document
            | NodeType::Blockquote
            | NodeType::List
            | NodeType::Table
            | NodeType::Form
            | NodeType::NavSection => {
                let mut parts: Vec<String> = Vec::new();
                if !self.text.is_empty() {
                    parts.push(self.text.clone());
                }
                parts.extend(
                    self.children
                        .iter()
                        .map(Node::plain_text)
                        .filter(|t| !t.trim().is_empty()),
                );
                parts.join("\n")
            }
            _ => {
                let mut out = self.text.clone();
                for child in &self.children {
                    if child.node_type.is_block() && !out.is_empty() && !out.ends_with('\n') {
                        out.push('\n');
                    }
                    out.push_str(&child.plain_text());
                }
                out
            }
        }
    }
}

/// The extraction result for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub url: String,
    pub lang: String,
    /// Normalized `#rrggbb`, empty when the page declares no usable color.
    pub theme_color: String,
    /// Always rooted at a [`NodeType::Document`] node.
    pub content: Node,
    /// `NavSection` nodes, each holding at least one `Link`.
    pub navigation: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            title: String::new(),
            url: String::new(),
            lang: String::new(),
            theme_color: String::new(),
            content: Node::new(NodeType::Document),
            navigation: Vec::new(),
        }
    }
}

impl Document {
    /// Plain-text projection of the content tree.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.content.plain_text()
    }

    /// Top-level content nodes.
    #[must_use]
    pub fn blocks(&self) -> &[Node] {
        &self.content.children
    }
}
