//! Font resources.
//!
//! # Overview
//!
//! A font resource maps codepoints to [`GlyphMetrics`] and carries the
//! font-wide vertical metrics, backed by a single texture atlas. Two
//! constructions exist:
//!
//! - [`AtlasFont`]: wraps a pre-baked atlas description ([`FontData`]) and
//!   an externally supplied texture.
//! - [`TtfFont`]: bakes a TrueType face into its own atlas at construction
//!   time, rasterizing through `fontdue`.
//!
//! The construction algorithms are deliberately separate; only the
//! post-construction read contract ([`Font`]) is shared. Every font is
//! immutable once built and safe to share read-only.
//!
//! # Unsupported codepoints
//!
//! A codepoint absent from the glyph table is not an error: lookups return
//! `None` and the layout layer routes such characters to an extension
//! point that defaults to skipping them.

mod atlas;
mod data;
mod error;
mod glyph;
mod ttf;

pub use atlas::AtlasFont;
pub use data::FontData;
pub use error::FontError;
pub use glyph::GlyphMetrics;
pub use ttf::{TtfConfig, TtfFont};

use crate::render::Texture;

/// Read contract of a constructed font resource.
pub trait Font {
    /// The atlas texture backing every glyph of this font.
    fn texture(&self) -> &dyn Texture;

    /// Display name of the font.
    fn name(&self) -> &str;

    /// Nominal size of the font, premultiplied by its scale. Also the
    /// line height used by the layout algorithm.
    fn size(&self) -> f32;

    /// Height of the vertically biggest glyph in the set.
    fn height(&self) -> f32;

    /// Gap between consecutive lines.
    fn line_gap(&self) -> f32;

    /// Tallest extent above the baseline across the glyph set.
    fn ascent(&self) -> f32;

    /// Extent below the baseline, reported as a non-positive value.
    ///
    /// The two implementations derive this differently: [`AtlasFont`]
    /// scans its glyphs, [`TtfFont`] reports the font file's vertical
    /// metric. See the constructors.
    fn descent(&self) -> f32;

    /// Looks up the metrics of a codepoint. `None` means the font does not
    /// support the character.
    fn glyph(&self, codepoint: char) -> Option<&GlyphMetrics>;
}
