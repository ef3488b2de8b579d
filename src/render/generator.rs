//! Rule-driven tree walk producing the output string.

use crate::error::{Error, Result};
use crate::model::Manifest;
use crate::tree::{Node, NodeId, NodeKind, NodeTree};

use super::{RuleTable, TagRule};

/// Soft line break marker inside a text run.
const LINE_BREAK_MARKER: char = '\u{000b}';

/// Render the whole tree with a rule table.
pub fn render(rules: &RuleTable, tree: &NodeTree, manifest: &Manifest) -> Result<String> {
    Generator::new(rules, tree, manifest).render(tree.root())
}

/// Walks a [`NodeTree`] under one [`RuleTable`].
///
/// Holds only shared borrows, so any number of generators can render the
/// same tree at once.
pub struct Generator<'a> {
    rules: &'a RuleTable,
    tree: &'a NodeTree,
    manifest: &'a Manifest,
}

impl<'a> Generator<'a> {
    /// Create a generator.
    pub fn new(rules: &'a RuleTable, tree: &'a NodeTree, manifest: &'a Manifest) -> Self {
        Self {
            rules,
            tree,
            manifest,
        }
    }

    /// Render the subtree rooted at `id`.
    pub fn render(&self, id: NodeId) -> Result<String> {
        let node = self.tree.get(id);
        let rule = self.rules.rule(node.kind())?;

        if let Some(object_id) = node.object_id() {
            return self.render_object(node, rule, object_id);
        }

        let mut buf = self.literal_text(id, node, rule);

        let mut previous: Option<NodeKind> = None;
        for &child in node.children() {
            let kind = self.tree.kind(child);
            let out = self.render(child)?;
            let pad = self.rules.rule(kind)?.left_pad;
            if pad && previous.is_some_and(|p| p != kind) && needs_space(&buf, &out) {
                buf.push(' ');
            }
            buf.push_str(&out);
            previous = Some(kind);
        }

        if rule.trim_inside {
            buf = buf.trim().to_string();
        }

        if rule.requires_content && buf.is_empty() {
            return Ok(String::new());
        }

        if let Some(enumerate) = rule.enumerate {
            if node.item_number() > 0 {
                buf = enumerate(node.item_number(), &buf);
            }
        }

        if let Some(repeat) = rule.repeat {
            if node.repeat_level() > 0 {
                buf = repeat(node.repeat_level(), &buf);
            }
        }

        if self.wraps(id, rule) {
            if let Some(before) = rule.before {
                buf = before(&buf);
            }
            if let Some(after) = rule.after {
                buf = after(&buf);
            }
        }

        if let (Some(link), Some(url)) = (rule.link, node.url()) {
            buf = link(url, &buf);
        }

        Ok(buf)
    }

    /// Missing manifest entries render as nothing.
    fn render_object(&self, node: &Node, rule: &TagRule, object_id: &str) -> Result<String> {
        let Some(file) = self.manifest.get(object_id) else {
            log::debug!("Dropping object {:?}: not in asset manifest", object_id);
            return Ok(String::new());
        };
        let map_file = rule.map_file.ok_or_else(|| {
            Error::Render(format!(
                "format {:?} has no file mapping for {} nodes",
                self.rules.key(),
                node.kind()
            ))
        })?;
        Ok(map_file(file))
    }

    fn literal_text(&self, id: NodeId, node: &Node, rule: &TagRule) -> String {
        if node.content().is_empty() {
            return String::new();
        }
        let text = node.content().replace(LINE_BREAK_MARKER, "\n\n");
        match rule.escape {
            Some(escape) if !self.escape_suppressed(id) => escape(&text),
            _ => text,
        }
    }

    fn escape_suppressed(&self, id: NodeId) -> bool {
        std::iter::once(id)
            .chain(self.tree.ancestors(id))
            .filter_map(|a| self.rules.get(self.tree.kind(a)))
            .any(|r| r.no_escape)
    }

    fn wraps(&self, id: NodeId, rule: &TagRule) -> bool {
        let nested = self.tree.parent_has_same_kind(id);
        !((rule.collapse && nested) || (rule.skip_first && !nested))
    }
}

fn needs_space(buf: &str, next: &str) -> bool {
    let buf_open = buf.chars().next_back().is_some_and(|c| !c.is_whitespace());
    let next_open = next.chars().next().is_some_and(|c| !c.is_whitespace());
    buf_open && next_open
}
