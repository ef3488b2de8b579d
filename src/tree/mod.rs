//! Format-agnostic node tree.
//!
//! The parser produces a [`NodeTree`] once per document; the generator walks
//! it any number of times. Nodes live in an arena owned by the tree. Each
//! node owns its ordered child list, and the parent link is a plain
//! [`NodeId`] used only for ancestor queries.

mod json;
mod node;

pub use json::{to_json, JsonFormat};
pub use node::{Node, NodeId, NodeKind};

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Arena-backed document tree rooted at a [`NodeKind::Document`] node.
#[derive(Debug, Clone)]
pub struct NodeTree {
    nodes: Vec<Node>,
}

impl NodeTree {
    /// Create a tree holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Document)],
        }
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append `node` as the last child of `parent` and return its id, so the
    /// caller can descend into it.
    pub fn append(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        node.children.clear();
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was minted by a different tree.
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Kind of a node.
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.get(id).kind()
    }

    /// Children of a node, in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).children()
    }

    /// Last child of a node.
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).last().copied()
    }

    /// Parent of a node; `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).parent()
    }

    /// Strict ancestors of a node, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Whether the node's parent exists and has the same kind as the node.
    pub fn parent_has_same_kind(&self, id: NodeId) -> bool {
        self.parent(id)
            .is_some_and(|parent| self.kind(parent) == self.kind(id))
    }

    /// Pre-order traversal starting at (and including) `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the root has no children.
    pub fn is_empty(&self) -> bool {
        self.children(self.root()).is_empty()
    }

    /// Serializable view of the subtree at `id`.
    pub fn view(&self, id: NodeId) -> NodeView<'_> {
        NodeView { tree: self, id }
    }

    /// Append text to an existing node. Used to merge consecutive code
    /// paragraphs into one code node.
    pub(crate) fn push_content(&mut self, id: NodeId, text: &str) {
        self.nodes[id.0].push_content(text);
    }
}

impl Default for NodeTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the ancestors of a node.
pub struct Ancestors<'a> {
    tree: &'a NodeTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// Nested serialization of a subtree. Empty and zero fields are omitted.
pub struct NodeView<'a> {
    tree: &'a NodeTree,
    id: NodeId,
}

impl Serialize for NodeView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.tree.get(self.id);
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", &node.kind())?;
        if !node.content().is_empty() {
            map.serialize_entry("content", node.content())?;
        }
        if let Some(url) = node.url() {
            map.serialize_entry("url", url)?;
        }
        if let Some(object_id) = node.object_id() {
            map.serialize_entry("objectId", object_id)?;
        }
        if node.repeat_level() > 0 {
            map.serialize_entry("repeatLevel", &node.repeat_level())?;
        }
        if node.item_number() > 0 {
            map.serialize_entry("itemNumber", &node.item_number())?;
        }
        if !node.children().is_empty() {
            let children: Vec<NodeView<'_>> =
                node.children().iter().map(|&c| self.tree.view(c)).collect();
            map.serialize_entry("children", &children)?;
        }
        map.end()
    }
}
