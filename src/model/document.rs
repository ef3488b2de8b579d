//! Document-level types.

use super::{List, Paragraph, Table};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A source document as exported by the document service.
///
/// Only the fields the converter reads are modelled; unknown fields in the
/// JSON export are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    /// Service-assigned document identifier
    pub document_id: Option<String>,

    /// Document title
    pub title: Option<String>,

    /// Document body
    pub body: Body,

    /// List style catalog, keyed by list identifier
    pub lists: HashMap<String, List>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a document from its JSON export.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and decode a document JSON export from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a paragraph to the body.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.body.content.push(StructuralElement::paragraph(paragraph));
    }

    /// Append a table to the body.
    pub fn add_table(&mut self, table: Table) {
        self.body.content.push(StructuralElement::table(table));
    }

    /// Register a list definition.
    pub fn add_list(&mut self, id: impl Into<String>, list: List) {
        self.lists.insert(id.into(), list);
    }

    /// Look up a list definition.
    pub fn list(&self, id: &str) -> Option<&List> {
        self.lists.get(id)
    }

    /// Number of top-level structural elements.
    pub fn element_count(&self) -> usize {
        self.body.content.len()
    }

    /// Check if the body has no content.
    pub fn is_empty(&self) -> bool {
        self.body.content.is_empty()
    }
}

/// The document body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Body {
    /// Top-level structural elements in document order
    pub content: Vec<StructuralElement>,
}

/// One top-level unit of a document body: a paragraph or a table.
///
/// Elements carrying neither (section breaks, tables of contents) are kept
/// so indices stay intact, and are skipped by the parser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuralElement {
    /// Start offset in the document
    pub start_index: i64,

    /// End offset in the document
    pub end_index: i64,

    /// Paragraph content
    pub paragraph: Option<Paragraph>,

    /// Table content
    pub table: Option<Table>,
}

impl StructuralElement {
    /// Wrap a paragraph.
    pub fn paragraph(paragraph: Paragraph) -> Self {
        Self {
            paragraph: Some(paragraph),
            ..Default::default()
        }
    }

    /// Wrap a table.
    pub fn table(table: Table) -> Self {
        Self {
            table: Some(table),
            ..Default::default()
        }
    }
}
