//! Pre-baked atlas description format. Consumed, never produced.

use std::collections::HashMap;
use std::io;

use log::debug;
use serde::Deserialize;

use super::error::FontError;
use super::glyph::GlyphMetrics;

/// Description of a pre-baked font atlas: font identity, atlas dimensions
/// and a glyph table keyed by single-character strings.
#[derive(Debug, Clone, Deserialize)]
pub struct FontData {
    /// Font family name
    pub name: String,
    /// Nominal font size the atlas was baked at
    pub size: f32,
    /// Atlas pixel width
    pub width: i32,
    /// Atlas pixel height
    pub height: i32,
    /// Glyph table, keyed by the character each glyph renders
    pub characters: HashMap<String, GlyphMetrics>,
}

impl FontData {
    /// Parses an atlas description from JSON text.
    pub fn from_json(json: &str) -> Result<Self, FontError> {
        let data: Self =
            serde_json::from_str(json).map_err(|e| FontError::InvalidDescription(e.to_string()))?;
        debug!(
            "parsed atlas description '{}' ({} glyphs, {}x{})",
            data.name,
            data.characters.len(),
            data.width,
            data.height
        );
        Ok(data)
    }

    /// Parses an atlas description from a reader.
    pub fn from_reader(reader: impl io::Read) -> Result<Self, FontError> {
        let data: Self = serde_json::from_reader(reader)
            .map_err(|e| FontError::InvalidDescription(e.to_string()))?;
        debug!(
            "parsed atlas description '{}' ({} glyphs, {}x{})",
            data.name,
            data.characters.len(),
            data.width,
            data.height
        );
        Ok(data)
    }
}
