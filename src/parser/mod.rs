//! Document parsing: source model to node tree.

mod doc_parser;
mod options;

pub use doc_parser::DocParser;
pub use options::{ErrorMode, ParseOptions, DEFAULT_CODE_FONT};
