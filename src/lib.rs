//! # docmark
//!
//! Convert word-processor document trees into Markdown, HTML, and plain text.
//!
//! A source [`Document`] (the JSON export of a document service) is parsed
//! into a format-agnostic [`NodeTree`], which is then rendered by a
//! declarative rule table, one [`TagRule`] per node kind.
//!
//! ## Quick Start
//!
//! ```
//! use docmark::{convert, Document, Manifest, Paragraph, TextRun};
//!
//! fn main() -> docmark::Result<()> {
//!     let mut doc = Document::new();
//!     doc.add_paragraph(Paragraph::heading("Hello\n", 2));
//!     doc.add_paragraph(Paragraph::new().with_run(TextRun::bold("Hi").with_italic()));
//!
//!     let markdown = convert("md", &doc, &Manifest::new())?;
//!     assert_eq!(markdown, "## Hello\n**_Hi_**\n");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Multiple output formats**: Markdown, HTML, plain text
//! - **Structure preservation**: Headings, paragraphs, nested lists, tables, code blocks
//! - **Asset references**: Inline images resolved through a download manifest
//! - **Extensible**: Custom formats are just another [`RuleTable`]

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod tree;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Document, List, Manifest, ManifestFile, Paragraph, Table, TableCell, TableRow, TextRun,
};
pub use parser::{DocParser, ErrorMode, ParseOptions};
pub use render::{FormatRegistry, Generator, RuleTable, TagRule};
pub use tree::{JsonFormat, Node, NodeId, NodeKind, NodeTree};

/// Parse a document into a node tree with default options.
///
/// # Example
///
/// ```
/// use docmark::{parse, Document, NodeKind, Paragraph};
///
/// let mut doc = Document::new();
/// doc.add_paragraph(Paragraph::with_text("Hello"));
///
/// let tree = parse(&doc).unwrap();
/// let first = tree.children(tree.root())[0];
/// assert_eq!(tree.kind(first), NodeKind::Paragraph);
/// ```
pub fn parse(doc: &Document) -> Result<NodeTree> {
    DocParser::new().parse(doc)
}

/// Parse a document with custom options.
pub fn parse_with_options(doc: &Document, options: ParseOptions) -> Result<NodeTree> {
    DocParser::with_options(options).parse(doc)
}

/// Render a tree in a registered format.
///
/// Images are resolved against `manifest`; unresolved ones are dropped.
pub fn render(format: &str, tree: &NodeTree, manifest: &Manifest) -> Result<String> {
    FormatRegistry::global()?.render(format, tree, manifest)
}

/// Parse and render a document in one step.
///
/// # Example
///
/// ```
/// use docmark::{convert, Document, Manifest, Paragraph};
///
/// let mut doc = Document::new();
/// doc.add_paragraph(Paragraph::with_text("a < b"));
///
/// let html = convert("html", &doc, &Manifest::new()).unwrap();
/// assert_eq!(html, "<p>a &lt; b</p>\n");
/// ```
pub fn convert(format: &str, doc: &Document, manifest: &Manifest) -> Result<String> {
    let registry = FormatRegistry::global()?;
    // Reject the format before doing any parsing work.
    registry.get(format)?;
    let tree = parse(doc)?;
    registry.render(format, &tree, manifest)
}

/// Builder for parsing and converting documents.
///
/// # Example
///
/// ```
/// use docmark::{Docmark, Document, Manifest, Paragraph};
///
/// let mut doc = Document::new();
/// doc.add_paragraph(Paragraph::with_text("Hello"));
///
/// let text = Docmark::new()
///     .with_format("txt")
///     .lenient()
///     .convert(&doc, &Manifest::new())?;
/// assert_eq!(text, "Hello\n");
/// # Ok::<(), docmark::Error>(())
/// ```
pub struct Docmark {
    parse_options: ParseOptions,
    format: String,
}

impl Docmark {
    /// Create a new builder rendering Markdown.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            format: render::markdown::KEY.to_string(),
        }
    }

    /// Set the output format key.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Set the font family that marks code paragraphs.
    pub fn with_code_font(mut self, family: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_code_font(family);
        self
    }

    /// Replace the parse options wholesale.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Output format key.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Parse a document with the configured options.
    pub fn parse(&self, doc: &Document) -> Result<NodeTree> {
        DocParser::with_options(self.parse_options.clone()).parse(doc)
    }

    /// Render a tree in the configured format.
    pub fn render(&self, tree: &NodeTree, manifest: &Manifest) -> Result<String> {
        render(&self.format, tree, manifest)
    }

    /// Parse and render a document.
    pub fn convert(&self, doc: &Document, manifest: &Manifest) -> Result<String> {
        FormatRegistry::global()?.get(&self.format)?;
        let tree = self.parse(doc)?;
        self.render(&tree, manifest)
    }
}

impl Default for Docmark {
    fn default() -> Self {
        Self::new()
    }
}
