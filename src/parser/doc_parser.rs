//! Builds a [`NodeTree`] from a source [`Document`].

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{Bullet, Document, Paragraph, ParagraphElement, StructuralElement, Table};
use crate::tree::{Node, NodeId, NodeKind, NodeTree};

use super::{ErrorMode, ParseOptions};

/// Document parser.
///
/// A parser holds only configuration; all per-document state lives in a
/// context created by [`DocParser::parse`], so one parser can be shared
/// between threads and reused.
#[derive(Debug, Clone, Default)]
pub struct DocParser {
    options: ParseOptions,
}

impl DocParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a document into a node tree.
    ///
    /// Embedded objects are recorded by id only; they are resolved against
    /// the asset manifest at render time.
    pub fn parse(&self, doc: &Document) -> Result<NodeTree> {
        let mut ctx = ParseContext::new(doc, &self.options);
        let root = ctx.tree.root();
        for element in &doc.body.content {
            ctx.parse_element(element, root)?;
        }

        log::debug!(
            "Parsed {} structural elements into {} nodes",
            doc.body.content.len(),
            ctx.tree.len()
        );
        Ok(ctx.tree)
    }
}

/// State for one parse call.
struct ParseContext<'a> {
    doc: &'a Document,
    options: &'a ParseOptions,
    tree: NodeTree,
    /// Running item count per (list id, nesting level), document-wide.
    counters: HashMap<(String, u32), u32>,
}

impl<'a> ParseContext<'a> {
    fn new(doc: &'a Document, options: &'a ParseOptions) -> Self {
        Self {
            doc,
            options,
            tree: NodeTree::new(),
            counters: HashMap::new(),
        }
    }

    fn parse_element(&mut self, element: &StructuralElement, parent: NodeId) -> Result<()> {
        if let Some(ref paragraph) = element.paragraph {
            self.parse_paragraph(paragraph, parent)?;
        }
        if let Some(ref table) = element.table {
            self.parse_table(table, parent)?;
        }
        Ok(())
    }

    fn parse_paragraph(&mut self, para: &Paragraph, parent: NodeId) -> Result<()> {
        // Suggestions and overlapping edits can leave elements out of order.
        let mut elements: Vec<&ParagraphElement> = para.elements.iter().collect();
        elements.sort_by_key(|e| e.start_index);

        let target = if let Some(ref bullet) = para.bullet {
            self.open_list_item(bullet, parent)?
        } else if para.heading_level() > 0 {
            // Headings are never classified as code, even when every run is
            // monospace; their runs stay inline under the heading node.
            let heading = Node::new(NodeKind::Heading).with_repeat_level(para.heading_level().into());
            self.tree.append(parent, heading)
        } else if self.is_code(&elements) {
            self.append_code(&elements, parent);
            return Ok(());
        } else {
            self.tree.append(parent, Node::new(NodeKind::Paragraph))
        };

        for element in elements {
            self.parse_inline(element, target);
        }
        Ok(())
    }

    fn is_code(&self, elements: &[&ParagraphElement]) -> bool {
        !elements.is_empty()
            && elements.iter().all(|e| {
                e.text_run
                    .as_ref()
                    .and_then(|r| r.font_family())
                    .is_some_and(|family| family == self.options.code_font_family)
            })
    }

    /// Merge into the previous sibling when it is already a code block.
    fn append_code(&mut self, elements: &[&ParagraphElement], parent: NodeId) {
        let code = match self.tree.last_child(parent) {
            Some(last) if self.tree.kind(last) == NodeKind::Code => last,
            _ => self.tree.append(parent, Node::new(NodeKind::Code)),
        };
        for run in elements.iter().filter_map(|e| e.text_run.as_ref()) {
            self.tree.push_content(code, &run.content);
        }
    }

    /// Nesting order is fixed: bold, then italic, then link, then text.
    fn parse_inline(&mut self, element: &ParagraphElement, target: NodeId) {
        if let Some(ref run) = element.text_run {
            if run.is_empty() {
                return;
            }
            let style = &run.text_style;
            let mut cursor = target;
            if style.bold {
                cursor = self.tree.append(cursor, Node::new(NodeKind::Bold));
            }
            if style.italic {
                cursor = self.tree.append(cursor, Node::new(NodeKind::Italic));
            }
            if let Some(url) = run.link_url() {
                cursor = self
                    .tree
                    .append(cursor, Node::new(NodeKind::Link).with_url(url));
            }
            self.tree.append(cursor, Node::plain(run.content.as_str()));
        } else if let Some(ref object) = element.inline_object_element {
            self.tree.append(
                target,
                Node::new(NodeKind::Image).with_object_id(object.inline_object_id.as_str()),
            );
        }
    }

    /// Find or create the container for a list item and append the item.
    ///
    /// Containers only grow: the trailing same-kind container of `parent` is
    /// reused, and deeper items descend into (or create) nested containers
    /// one level at a time. An item shallower than the outermost open
    /// container is placed in that container rather than closing it.
    fn open_list_item(&mut self, bullet: &Bullet, parent: NodeId) -> Result<NodeId> {
        let (list_kind, item_kind) = if self.is_ordered(bullet)? {
            (NodeKind::OrderedList, NodeKind::OrderedItem)
        } else {
            (NodeKind::UnorderedList, NodeKind::UnorderedItem)
        };
        let depth = bullet.nesting_level + 1;

        let counter = self
            .counters
            .entry((bullet.list_id.clone(), bullet.nesting_level))
            .or_insert(0);
        *counter += 1;
        let number = *counter;

        let mut container = match self.tree.last_child(parent) {
            Some(last) if self.tree.kind(last) == list_kind => last,
            _ => self
                .tree
                .append(parent, Node::new(list_kind).with_repeat_level(depth)),
        };
        while self.tree.get(container).repeat_level() < depth {
            let next_depth = self.tree.get(container).repeat_level() + 1;
            container = match self.tree.last_child(container) {
                Some(last) if self.tree.kind(last) == list_kind => last,
                _ => self
                    .tree
                    .append(container, Node::new(list_kind).with_repeat_level(next_depth)),
            };
        }

        let item = Node::new(item_kind)
            .with_repeat_level(depth)
            .with_item_number(number);
        Ok(self.tree.append(container, item))
    }

    fn is_ordered(&self, bullet: &Bullet) -> Result<bool> {
        let level = self
            .doc
            .list(&bullet.list_id)
            .ok_or_else(|| format!("paragraph references undefined list {:?}", bullet.list_id))
            .and_then(|list| {
                list.nesting_level(bullet.nesting_level).ok_or_else(|| {
                    format!(
                        "list {:?} has no nesting level {}",
                        bullet.list_id, bullet.nesting_level
                    )
                })
            });

        match level {
            Ok(level) => Ok(level.is_ordered()),
            Err(msg) if self.options.error_mode == ErrorMode::Lenient => {
                log::warn!("{}; rendering as unordered item", msg);
                Ok(false)
            }
            Err(msg) => Err(Error::MalformedInput(msg)),
        }
    }

    /// Cells are parsed with the same element logic as the body.
    fn parse_table(&mut self, table: &Table, parent: NodeId) -> Result<()> {
        let table_node = self.tree.append(parent, Node::new(NodeKind::Table));
        for row in &table.table_rows {
            let row_node = self.tree.append(table_node, Node::new(NodeKind::TableRow));
            for cell in &row.table_cells {
                let cell_node = self.tree.append(row_node, Node::new(NodeKind::TableCell));
                for element in &cell.content {
                    self.parse_element(element, cell_node)?;
                }
            }
        }
        Ok(())
    }
}
