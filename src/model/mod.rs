//! Source document model.
//!
//! These types mirror the JSON export of the document service closely
//! enough to deserialize it directly. They are the input contract of the
//! parser; nothing in this module knows about output formats.

mod document;
mod list;
mod manifest;
mod paragraph;
mod table;

pub use document::{Body, Document, StructuralElement};
pub use list::{GlyphType, List, ListProperties, NestingLevel};
pub use manifest::{Manifest, ManifestFile};
pub use paragraph::{
    Bullet, InlineObjectElement, Link, NamedStyleType, Paragraph, ParagraphElement,
    ParagraphStyle, TextRun, TextStyle, WeightedFontFamily,
};
pub use table::{Table, TableCell, TableRow};
