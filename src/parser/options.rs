//! Parsing options and configuration.

/// Font family the document service uses for code by default.
pub const DEFAULT_CODE_FONT: &str = "Consolas";

/// Options for parsing documents.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Font family that marks a paragraph as code
    pub code_font_family: String,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (degrade undefined list styles).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set the monospace font family used to detect code paragraphs.
    pub fn with_code_font(mut self, family: impl Into<String>) -> Self {
        self.code_font_family = family.into();
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            code_font_family: DEFAULT_CODE_FONT.to_string(),
        }
    }
}

/// Error handling mode during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on references to undefined list styles
    #[default]
    Strict,
    /// Render such items as unordered and continue
    Lenient,
}
