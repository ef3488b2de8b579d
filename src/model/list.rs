//! List style catalog types.

use serde::{Deserialize, Serialize};

/// A list definition from the document's list catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct List {
    /// Per-level presentation
    pub list_properties: ListProperties,
}

impl List {
    /// Create a list whose levels all use the same glyph type.
    pub fn uniform(glyph_type: GlyphType, levels: usize) -> Self {
        Self {
            list_properties: ListProperties {
                nesting_levels: vec![NestingLevel::new(glyph_type); levels],
            },
        }
    }

    /// A bulleted list with the nine levels the document service defines.
    pub fn bulleted() -> Self {
        Self::uniform(GlyphType::GlyphTypeUnspecified, 9)
    }

    /// A decimal-numbered list with the nine levels the document service defines.
    pub fn numbered() -> Self {
        Self::uniform(GlyphType::Decimal, 9)
    }

    /// Style of a nesting level, if defined.
    pub fn nesting_level(&self, level: u32) -> Option<&NestingLevel> {
        self.list_properties.nesting_levels.get(level as usize)
    }
}

/// Properties of a list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListProperties {
    /// Style per nesting level, index 0 is the outermost level
    pub nesting_levels: Vec<NestingLevel>,
}

/// Presentation of one nesting level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NestingLevel {
    /// Numbering scheme; absent for symbol bullets
    pub glyph_type: Option<GlyphType>,
}

impl NestingLevel {
    /// Create a level with the given glyph type.
    pub fn new(glyph_type: GlyphType) -> Self {
        Self {
            glyph_type: Some(glyph_type),
        }
    }

    /// Whether items at this level are numbered.
    pub fn is_ordered(&self) -> bool {
        self.glyph_type.is_some_and(GlyphType::is_numeric)
    }
}

/// Bullet and numbering schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlyphType {
    #[default]
    GlyphTypeUnspecified,
    None,
    Decimal,
    ZeroDecimal,
    UpperAlpha,
    Alpha,
    UpperRoman,
    Roman,
    #[serde(other)]
    Other,
}

impl GlyphType {
    /// Whether the glyph counts items.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Decimal
                | Self::ZeroDecimal
                | Self::UpperAlpha
                | Self::Alpha
                | Self::UpperRoman
                | Self::Roman
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_type_deserialize() {
        let level: NestingLevel =
            serde_json::from_str(r#"{ "glyphType": "DECIMAL", "startNumber": 1 }"#).unwrap();
        assert!(level.is_ordered());

        let level: NestingLevel = serde_json::from_str(r#"{ "glyphSymbol": "●" }"#).unwrap();
        assert!(!level.is_ordered());

        let level: NestingLevel = serde_json::from_str(r#"{ "glyphType": "HIRAGANA" }"#).unwrap();
        assert_eq!(level.glyph_type, Some(GlyphType::Other));
        assert!(!level.is_ordered());
    }

    #[test]
    fn test_list_nesting_level_lookup() {
        let list = List::numbered();
        assert!(list.nesting_level(0).unwrap().is_ordered());
        assert!(list.nesting_level(8).is_some());
        assert!(list.nesting_level(9).is_none());

        let list = List::bulleted();
        assert!(!list.nesting_level(0).unwrap().is_ordered());
    }
}
