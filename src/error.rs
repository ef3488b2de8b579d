//! Error types for docmark library.

use crate::tree::NodeKind;
use std::io;
use thiserror::Error;

/// Result type alias for docmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing or rendering a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Document or manifest JSON could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested output format is not registered.
    #[error("{0:?} is an invalid format (known formats: md, html, txt)")]
    UnknownFormat(String),

    /// A rule table has no rule for a node kind the parser produces.
    #[error("rule table {format:?} has no rule for node kind {kind}")]
    RenderIntegrity {
        /// Format key of the incomplete table
        format: String,
        /// Kind without a rule
        kind: NodeKind,
    },

    /// The document references list styles it does not define.
    #[error("Malformed document: {0}")]
    MalformedInput(String),

    /// Error during rendering.
    #[error("Rendering error: {0}")]
    Render(String),
}
