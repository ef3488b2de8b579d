//! Format registry: format key to rule table.

use std::collections::HashMap;

use once_cell::sync::OnceCell;

use crate::error::{Error, Result};
use crate::model::Manifest;
use crate::tree::NodeTree;

use super::{generator, html, markdown, text, RuleTable};

static GLOBAL: OnceCell<FormatRegistry> = OnceCell::new();

/// Registry of output formats.
///
/// Keys and aliases are matched case-insensitively. Every table is checked
/// for completeness when it is registered.
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    tables: Vec<RuleTable>,
    by_key: HashMap<String, usize>,
}

impl FormatRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in formats (md, html, txt).
    pub fn with_defaults() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(markdown::rule_table(), &["markdown"])?;
        registry.register(html::rule_table(), &[])?;
        registry.register(text::rule_table(), &["text"])?;
        Ok(registry)
    }

    /// Shared registry holding the built-in formats, built on first use.
    pub fn global() -> Result<&'static FormatRegistry> {
        GLOBAL.get_or_try_init(Self::with_defaults)
    }

    /// Register a table under its own key and any aliases.
    ///
    /// A table missing a rule for some node kind is rejected with
    /// [`Error::RenderIntegrity`]. Re-registering a key replaces it.
    pub fn register(&mut self, table: RuleTable, aliases: &[&str]) -> Result<()> {
        table.validate()?;

        let key = table.key().to_lowercase();
        let index = match self.by_key.get(&key) {
            Some(&existing) => {
                self.tables[existing] = table;
                existing
            }
            None => {
                self.tables.push(table);
                self.tables.len() - 1
            }
        };

        log::trace!("Registered format {:?} (aliases: {:?})", key, aliases);
        self.by_key.insert(key, index);
        for alias in aliases {
            self.by_key.insert(alias.to_lowercase(), index);
        }
        Ok(())
    }

    /// Get the table for a key or alias.
    pub fn get(&self, key: &str) -> Result<&RuleTable> {
        self.by_key
            .get(&key.to_lowercase())
            .map(|&i| &self.tables[i])
            .ok_or_else(|| Error::UnknownFormat(key.to_string()))
    }

    /// Check if a key or alias is registered.
    pub fn supports(&self, key: &str) -> bool {
        self.by_key.contains_key(&key.to_lowercase())
    }

    /// Canonical keys in registration order.
    pub fn keys(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.key()).collect()
    }

    /// Render a tree in the named format.
    pub fn render(&self, key: &str, tree: &NodeTree, manifest: &Manifest) -> Result<String> {
        generator::render(self.get(key)?, tree, manifest)
    }
}
