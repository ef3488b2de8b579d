//! Node kinds and node payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of node kinds produced by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Literal text leaf
    Plain,
    /// Bold span
    Bold,
    /// Italic span
    Italic,
    /// Hyperlink span; carries a URL
    Link,
    /// Monospace block; carries raw text, never styled children
    Code,
    /// Paragraph
    Paragraph,
    /// Heading; `repeat_level` is the level 1-6
    Heading,
    /// Embedded image; carries an object id
    Image,
    /// Bulleted list container
    UnorderedList,
    /// Numbered list container
    OrderedList,
    /// Bulleted list item
    UnorderedItem,
    /// Numbered list item; carries its item number
    OrderedItem,
    /// Table
    Table,
    /// Table row
    TableRow,
    /// Table cell
    TableCell,
    /// Tree root
    Document,
}

impl NodeKind {
    /// Number of kinds.
    pub const COUNT: usize = 16;

    /// Every kind, in index order.
    pub const ALL: [NodeKind; Self::COUNT] = [
        NodeKind::Plain,
        NodeKind::Bold,
        NodeKind::Italic,
        NodeKind::Link,
        NodeKind::Code,
        NodeKind::Paragraph,
        NodeKind::Heading,
        NodeKind::Image,
        NodeKind::UnorderedList,
        NodeKind::OrderedList,
        NodeKind::UnorderedItem,
        NodeKind::OrderedItem,
        NodeKind::Table,
        NodeKind::TableRow,
        NodeKind::TableCell,
        NodeKind::Document,
    ];

    /// Dense index used by rule tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Plain => "plain",
            NodeKind::Bold => "bold",
            NodeKind::Italic => "italic",
            NodeKind::Link => "link",
            NodeKind::Code => "code",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Heading => "heading",
            NodeKind::Image => "image",
            NodeKind::UnorderedList => "unordered_list",
            NodeKind::OrderedList => "ordered_list",
            NodeKind::UnorderedItem => "unordered_item",
            NodeKind::OrderedItem => "ordered_item",
            NodeKind::Table => "table",
            NodeKind::TableRow => "table_row",
            NodeKind::TableCell => "table_cell",
            NodeKind::Document => "document",
        }
    }

    /// Whether this kind is a list container.
    pub fn is_list(self) -> bool {
        matches!(self, NodeKind::UnorderedList | NodeKind::OrderedList)
    }

    /// Whether this kind is a list item.
    pub fn is_list_item(self) -> bool {
        matches!(self, NodeKind::UnorderedItem | NodeKind::OrderedItem)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle to a node inside a [`NodeTree`](super::NodeTree).
///
/// Ids are only meaningful for the tree that minted them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(super) usize);

impl NodeId {
    /// Position of the node in the tree's arena (creation order).
    pub fn index(self) -> usize {
        self.0
    }
}

/// One semantic unit of output.
///
/// A node is built detached with the `with_*` methods and becomes part of a
/// tree through [`NodeTree::append`](super::NodeTree::append); after that it
/// is only reachable through shared references.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    content: String,
    url: Option<String>,
    object_id: Option<String>,
    repeat_level: u32,
    item_number: u32,
    pub(super) children: Vec<NodeId>,
    pub(super) parent: Option<NodeId>,
}

impl Node {
    /// Create a detached node of the given kind.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            content: String::new(),
            url: None,
            object_id: None,
            repeat_level: 0,
            item_number: 0,
            children: Vec::new(),
            parent: None,
        }
    }

    /// Create a plain text leaf.
    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Plain).with_content(content)
    }

    /// Set the literal text.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the hyperlink target.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the embedded-object id.
    pub fn with_object_id(mut self, object_id: impl Into<String>) -> Self {
        self.object_id = Some(object_id.into());
        self
    }

    /// Set the repeat level (heading level or list depth).
    pub fn with_repeat_level(mut self, level: u32) -> Self {
        self.repeat_level = level;
        self
    }

    /// Set the ordered item number.
    pub fn with_item_number(mut self, number: u32) -> Self {
        self.item_number = number;
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn object_id(&self) -> Option<&str> {
        self.object_id.as_deref()
    }

    pub fn repeat_level(&self) -> u32 {
        self.repeat_level
    }

    pub fn item_number(&self) -> u32 {
        self.item_number
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub(super) fn push_content(&mut self, text: &str) {
        self.content.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_index_matches_all() {
        for (i, kind) in NodeKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(NodeKind::OrderedItem.to_string(), "ordered_item");
        assert_eq!(
            serde_json::to_string(&NodeKind::TableCell).unwrap(),
            "\"table_cell\""
        );
        for kind in NodeKind::ALL {
            assert_eq!(serde_json::to_string(&kind).unwrap(), format!("\"{}\"", kind));
        }
    }

    #[test]
    fn test_node_builder() {
        let node = Node::new(NodeKind::Link)
            .with_url("https://example.com")
            .with_repeat_level(2);
        assert_eq!(node.kind(), NodeKind::Link);
        assert_eq!(node.url(), Some("https://example.com"));
        assert_eq!(node.repeat_level(), 2);
        assert!(node.children().is_empty());
        assert!(node.parent().is_none());
    }
}
