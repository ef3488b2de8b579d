//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of the source document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paragraph {
    /// Text runs and inline objects; not guaranteed to be in offset order
    pub elements: Vec<ParagraphElement>,

    /// Paragraph style
    pub paragraph_style: ParagraphStyle,

    /// Set when the paragraph is a list item
    pub bullet: Option<Bullet>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with a single unstyled run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_run(TextRun::new(text));
        p
    }

    /// Create a heading paragraph.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        let mut p = Self::with_text(text);
        p.paragraph_style.named_style_type = NamedStyleType::heading(level);
        p
    }

    /// Create a list item paragraph.
    pub fn bullet(list_id: impl Into<String>, nesting_level: u32, text: impl Into<String>) -> Self {
        let mut p = Self::with_text(text);
        p.bullet = Some(Bullet {
            list_id: list_id.into(),
            nesting_level,
        });
        p
    }

    /// Append a text run positioned after the existing elements.
    pub fn add_run(&mut self, run: TextRun) {
        let start = self.next_index();
        let end = start + run.content.chars().count() as i64;
        self.elements.push(ParagraphElement {
            start_index: start,
            end_index: end,
            text_run: Some(run),
            inline_object_element: None,
        });
    }

    /// Append an inline object reference positioned after the existing elements.
    pub fn add_inline_object(&mut self, object_id: impl Into<String>) {
        let start = self.next_index();
        self.elements.push(ParagraphElement {
            start_index: start,
            end_index: start + 1,
            text_run: None,
            inline_object_element: Some(InlineObjectElement {
                inline_object_id: object_id.into(),
            }),
        });
    }

    /// Builder variant of [`Paragraph::add_run`].
    pub fn with_run(mut self, run: TextRun) -> Self {
        self.add_run(run);
        self
    }

    /// Heading level (1-6) of the paragraph's named style, 0 when not a heading.
    pub fn heading_level(&self) -> u8 {
        self.paragraph_style.named_style_type.heading_level()
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        self.bullet.is_some()
    }

    /// Concatenated text of all runs, in element order.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .filter_map(|e| e.text_run.as_ref())
            .map(|r| r.content.as_str())
            .collect()
    }

    fn next_index(&self) -> i64 {
        self.elements.last().map(|e| e.end_index).unwrap_or(0)
    }
}

/// Paragraph-level style.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParagraphStyle {
    /// Named style classification
    pub named_style_type: NamedStyleType,
}

/// The document's named paragraph styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NamedStyleType {
    #[default]
    NormalText,
    Title,
    Subtitle,
    #[serde(rename = "HEADING_1")]
    Heading1,
    #[serde(rename = "HEADING_2")]
    Heading2,
    #[serde(rename = "HEADING_3")]
    Heading3,
    #[serde(rename = "HEADING_4")]
    Heading4,
    #[serde(rename = "HEADING_5")]
    Heading5,
    #[serde(rename = "HEADING_6")]
    Heading6,
    #[serde(other)]
    NamedStyleTypeUnspecified,
}

impl NamedStyleType {
    /// Style for a heading level; out-of-range levels map to normal text.
    pub fn heading(level: u8) -> Self {
        match level {
            1 => Self::Heading1,
            2 => Self::Heading2,
            3 => Self::Heading3,
            4 => Self::Heading4,
            5 => Self::Heading5,
            6 => Self::Heading6,
            _ => Self::NormalText,
        }
    }

    /// Heading level 1-6, or 0 for non-heading styles.
    pub fn heading_level(self) -> u8 {
        match self {
            Self::Heading1 => 1,
            Self::Heading2 => 2,
            Self::Heading3 => 3,
            Self::Heading4 => 4,
            Self::Heading5 => 5,
            Self::Heading6 => 6,
            _ => 0,
        }
    }
}

/// List membership of a paragraph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bullet {
    /// Identifier into the document's list catalog
    pub list_id: String,

    /// Zero-based nesting level
    pub nesting_level: u32,
}

/// One element of a paragraph: a text run or an inline object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParagraphElement {
    /// Start offset in the document
    pub start_index: i64,

    /// End offset in the document
    pub end_index: i64,

    /// Text content
    pub text_run: Option<TextRun>,

    /// Embedded object reference
    pub inline_object_element: Option<InlineObjectElement>,
}

/// Reference to an embedded object (image).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InlineObjectElement {
    /// Object identifier, resolved against the asset manifest when rendering
    pub inline_object_id: String,
}

/// A run of text with one style set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextRun {
    /// The text content
    pub content: String,

    /// Text styling
    pub text_style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            text_style: TextStyle::default(),
        }
    }

    /// Create a bold text run.
    pub fn bold(content: impl Into<String>) -> Self {
        Self::new(content).with_bold()
    }

    /// Create an italic text run.
    pub fn italic(content: impl Into<String>) -> Self {
        Self::new(content).with_italic()
    }

    /// Create a text run in the given font family.
    pub fn in_font(content: impl Into<String>, family: impl Into<String>) -> Self {
        let mut run = Self::new(content);
        run.text_style.weighted_font_family = Some(WeightedFontFamily {
            font_family: family.into(),
            weight: 400,
        });
        run
    }

    /// Mark the run bold.
    pub fn with_bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    /// Mark the run italic.
    pub fn with_italic(mut self) -> Self {
        self.text_style.italic = true;
        self
    }

    /// Attach a hyperlink.
    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.text_style.link = Some(Link {
            url: Some(url.into()),
        });
        self
    }

    /// Font family of the run, if set.
    pub fn font_family(&self) -> Option<&str> {
        self.text_style
            .weighted_font_family
            .as_ref()
            .map(|f| f.font_family.as_str())
    }

    /// Hyperlink target, if set.
    pub fn link_url(&self) -> Option<&str> {
        self.text_style.link.as_ref().and_then(|l| l.url.as_deref())
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Text styling properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Hyperlink
    pub link: Option<Link>,

    /// Font family and weight
    pub weighted_font_family: Option<WeightedFontFamily>,
}

/// A hyperlink target. Bookmark and heading links carry no URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Link {
    /// External URL
    pub url: Option<String>,
}

/// Font family with weight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeightedFontFamily {
    /// Family name, e.g. "Consolas"
    pub font_family: String,

    /// Font weight (100-900)
    pub weight: u32,
}
