//! JSON dump of a node tree.

use crate::error::{Error, Result};

use super::NodeTree;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a tree, starting at its root.
pub fn to_json(tree: &NodeTree, format: JsonFormat) -> Result<String> {
    let view = tree.view(tree.root());
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&view),
        JsonFormat::Compact => serde_json::to_string(&view),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
