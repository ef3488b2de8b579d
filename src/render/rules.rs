//! Declarative per-kind rendering rules.

use crate::error::{Error, Result};
use crate::model::ManifestFile;
use crate::tree::NodeKind;

/// Transform of rendered content.
pub type TextHook = fn(&str) -> String;

/// Transform scaled by a number (repeat level or item number).
pub type CountHook = fn(u32, &str) -> String;

/// Hyperlink wrapper: `(href, content)`.
pub type LinkHook = fn(&str, &str) -> String;

/// Embedded media markup for a resolved manifest entry.
pub type FileHook = fn(&ManifestFile) -> String;

/// How one node kind renders in one format.
///
/// Built once with the chained setters and never changed afterwards. The
/// wrapper suppression policies are exclusive: `collapse()` and
/// `skip_first()` each clear the other.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagRule {
    pub(crate) no_escape: bool,
    pub(crate) skip_first: bool,
    pub(crate) collapse: bool,
    pub(crate) requires_content: bool,
    pub(crate) left_pad: bool,
    pub(crate) trim_inside: bool,
    pub(crate) escape: Option<TextHook>,
    pub(crate) before: Option<TextHook>,
    pub(crate) after: Option<TextHook>,
    pub(crate) repeat: Option<CountHook>,
    pub(crate) enumerate: Option<CountHook>,
    pub(crate) link: Option<LinkHook>,
    pub(crate) map_file: Option<FileHook>,
}

impl TagRule {
    /// A rule that emits its content unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Literal text of this node and its descendants bypasses escaping.
    pub fn no_escape(mut self) -> Self {
        self.no_escape = true;
        self
    }

    /// Suppress `before`/`after` unless the parent has the same kind.
    pub fn skip_first(mut self) -> Self {
        self.skip_first = true;
        self.collapse = false;
        self
    }

    /// Suppress `before`/`after` when the parent has the same kind.
    pub fn collapse(mut self) -> Self {
        self.collapse = true;
        self.skip_first = false;
        self
    }

    /// Render nothing at all when the inner content is empty.
    pub fn requires_content(mut self) -> Self {
        self.requires_content = true;
        self
    }

    /// Separate from a differently-kinded previous sibling with a space.
    pub fn left_pad(mut self) -> Self {
        self.left_pad = true;
        self
    }

    /// Trim whitespace around the inner content before wrapping.
    pub fn trim_inside(mut self) -> Self {
        self.trim_inside = true;
        self
    }

    pub fn escape(mut self, hook: TextHook) -> Self {
        self.escape = Some(hook);
        self
    }

    pub fn before(mut self, hook: TextHook) -> Self {
        self.before = Some(hook);
        self
    }

    pub fn after(mut self, hook: TextHook) -> Self {
        self.after = Some(hook);
        self
    }

    /// Scale output by the node's repeat level.
    pub fn repeat(mut self, hook: CountHook) -> Self {
        self.repeat = Some(hook);
        self
    }

    /// Render the item number of ordered items.
    pub fn enumerate(mut self, hook: CountHook) -> Self {
        self.enumerate = Some(hook);
        self
    }

    pub fn link(mut self, hook: LinkHook) -> Self {
        self.link = Some(hook);
        self
    }

    pub fn map_file(mut self, hook: FileHook) -> Self {
        self.map_file = Some(hook);
        self
    }

    pub fn is_collapse(&self) -> bool {
        self.collapse
    }

    pub fn is_skip_first(&self) -> bool {
        self.skip_first
    }

    pub fn is_requires_content(&self) -> bool {
        self.requires_content
    }

    pub fn is_no_escape(&self) -> bool {
        self.no_escape
    }
}

/// One output format: a rule for every node kind.
#[derive(Debug, Clone)]
pub struct RuleTable {
    key: String,
    rules: [Option<TagRule>; NodeKind::COUNT],
}

impl RuleTable {
    /// Create an empty table for the given format key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            rules: [None; NodeKind::COUNT],
        }
    }

    /// Set the rule for a kind.
    pub fn with_rule(mut self, kind: NodeKind, rule: TagRule) -> Self {
        self.rules[kind.index()] = Some(rule);
        self
    }

    /// Format key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Rule for a kind, if defined.
    pub fn get(&self, kind: NodeKind) -> Option<&TagRule> {
        self.rules[kind.index()].as_ref()
    }

    /// Rule for a kind; a missing rule is a [`Error::RenderIntegrity`] defect.
    pub fn rule(&self, kind: NodeKind) -> Result<&TagRule> {
        self.get(kind).ok_or_else(|| Error::RenderIntegrity {
            format: self.key.clone(),
            kind,
        })
    }

    /// Check that every node kind has a rule.
    pub fn validate(&self) -> Result<()> {
        NodeKind::ALL
            .iter()
            .try_for_each(|&kind| self.rule(kind).map(|_| ()))
    }
}

/// Finish a whole document: drop leading blank lines and trailing
/// whitespace, end with a single newline. Leading spaces are kept since
/// they may be the indentation of a nested list item.
pub(crate) fn finish_document(body: &str) -> String {
    let body = body.trim_start_matches('\n').trim_end();
    if body.is_empty() {
        String::new()
    } else {
        format!("{}\n", body)
    }
}
