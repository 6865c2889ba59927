//! The layout algorithm shared by every renderer.
//!
//! # Overview
//!
//! [`FontRenderer`] walks a character sequence left to right exactly once,
//! consulting the font for each codepoint's metrics and accumulating a pen
//! position. The same walk backs drawing, width measurement and height
//! measurement; implementations only decide what happens when a glyph is
//! emitted ([`FontRenderer::draw_glyph`]) and may hook unsupported
//! codepoints ([`FontRenderer::draw_missing`], a no-op by default).
//!
//! # Ranges
//!
//! Every operation exists as a canonical range-taking form over `&[char]`
//! plus a whole-string convenience wrapper. Ranges are validated eagerly
//! (`0 <= start <= end <= len`) before any mutation or draw call; a
//! violation surfaces as [`LayoutError`] with nothing partially applied.

use crate::font::{Font, GlyphMetrics};

/// Range violations raised by the layout operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    StartOutOfBounds { start: usize, len: usize },
    EndOutOfBounds { end: usize, len: usize },
    StartAfterEnd { start: usize, end: usize },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use LayoutError::*;
        match self {
            StartOutOfBounds { start, len } => write!(f, "start {start} > length {len}"),
            EndOutOfBounds { end, len } => write!(f, "end {end} > length {len}"),
            StartAfterEnd { start, end } => write!(f, "start {start} > end {end}"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Pen advance policy. The two formulas both shipped in earlier revisions
/// of this code; which one a caller depends on is a per-renderer choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdvanceMode {
    /// Pen moves by the glyph advance alone (legacy behavior).
    Advance,
    /// Pen moves by the glyph box width plus the advance.
    #[default]
    GlyphBox,
}

impl AdvanceMode {
    pub fn advance_of(self, glyph: &GlyphMetrics) -> f32 {
        match self {
            Self::Advance => glyph.render_advance,
            Self::GlyphBox => glyph.render_width + glyph.render_advance,
        }
    }
}

pub(crate) fn check_range(len: usize, start: usize, end: usize) -> Result<(), LayoutError> {
    if start > len {
        return Err(LayoutError::StartOutOfBounds { start, len });
    }
    if end > len {
        return Err(LayoutError::EndOutOfBounds { end, len });
    }
    if start > end {
        return Err(LayoutError::StartAfterEnd { start, end });
    }
    Ok(())
}

/// The one canonical walk. Bounds must already be validated.
pub(crate) fn walk_range<R: FontRenderer + ?Sized>(
    renderer: &mut R,
    font: &dyn Font,
    chars: &[char],
    mut x: f32,
    mut y: f32,
    start: usize,
    end: usize,
) -> f32 {
    let line_start_x = x;
    let mut max_x = x;

    for &codepoint in &chars[start..end] {
        if codepoint == '\n' {
            max_x = max_x.max(x);
            x = line_start_x;
            y += renderer.line_height(font);
            continue;
        }

        let glyph = font.glyph(codepoint);
        match glyph {
            Some(glyph) => renderer.draw_glyph(font, glyph, x, y),
            None => renderer.draw_missing(font, codepoint, x, y),
        }
        x += renderer.char_advance(glyph);
    }

    max_x.max(x)
}

pub trait FontRenderer {
    /// Emits one glyph at the given pen position. Not meant to be called
    /// outside the layout walk.
    fn draw_glyph(&mut self, font: &dyn Font, glyph: &GlyphMetrics, x: f32, y: f32);

    /// Extension point for codepoints the font does not support. The
    /// default skips them; overriding it does not affect the pen, which
    /// never advances for missing glyphs.
    fn draw_missing(&mut self, _font: &dyn Font, _codepoint: char, _x: f32, _y: f32) {}

    fn scale_x(&self) -> f32;

    fn scale_y(&self) -> f32;

    fn set_scale_x(&mut self, scale_x: f32);

    fn set_scale_y(&mut self, scale_y: f32);

    /// Sets both scale factors. Affects subsequent calls only.
    fn set_scale(&mut self, scale_x: f32, scale_y: f32) {
        self.set_scale_x(scale_x);
        self.set_scale_y(scale_y);
    }

    fn advance_mode(&self) -> AdvanceMode {
        AdvanceMode::default()
    }

    /// Scaled pen displacement for one codepoint. Missing glyphs
    /// contribute nothing.
    fn char_advance(&self, glyph: Option<&GlyphMetrics>) -> f32 {
        match glyph {
            Some(glyph) => self.advance_mode().advance_of(glyph) * self.scale_x(),
            None => 0.0,
        }
    }

    /// Vertical pen displacement for a line break.
    fn line_height(&self, font: &dyn Font) -> f32 {
        font.size() * self.scale_y()
    }

    /// Draws `chars[start..end]` starting at `(x, y)` and returns the
    /// rightmost pen position reached across all lines.
    fn draw_range(
        &mut self,
        font: &dyn Font,
        chars: &[char],
        x: f32,
        y: f32,
        start: usize,
        end: usize,
    ) -> Result<f32, LayoutError> {
        check_range(chars.len(), start, end)?;
        Ok(walk_range(self, font, chars, x, y, start, end))
    }

    /// Draws a whole string. See [`FontRenderer::draw_range`].
    fn draw(&mut self, font: &dyn Font, text: &str, x: f32, y: f32) -> Result<f32, LayoutError> {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        self.draw_range(font, &chars, x, y, 0, len)
    }

    /// Measures the width of `chars[start..end]`. A newline resets the
    /// running width; the final segment's width is returned.
    fn width_range(
        &self,
        font: &dyn Font,
        chars: &[char],
        start: usize,
        end: usize,
    ) -> Result<f32, LayoutError> {
        check_range(chars.len(), start, end)?;

        let mut width = 0.0;
        for &codepoint in &chars[start..end] {
            if codepoint == '\n' {
                width = 0.0;
                continue;
            }
            width += self.char_advance(font.glyph(codepoint));
        }
        Ok(width)
    }

    /// Measures the width of a whole string. See
    /// [`FontRenderer::width_range`].
    fn width(&self, font: &dyn Font, text: &str) -> Result<f32, LayoutError> {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        self.width_range(font, &chars, 0, len)
    }

    /// Measures the height of `chars[start..end]`: one line height plus
    /// one more per newline in the range.
    fn height_range(
        &self,
        font: &dyn Font,
        chars: &[char],
        start: usize,
        end: usize,
    ) -> Result<f32, LayoutError> {
        check_range(chars.len(), start, end)?;

        let mut height = self.line_height(font);
        for &codepoint in &chars[start..end] {
            if codepoint == '\n' {
                height += self.line_height(font);
            }
        }
        Ok(height)
    }

    /// Measures the height of a whole string. See
    /// [`FontRenderer::height_range`].
    fn height(&self, font: &dyn Font, text: &str) -> Result<f32, LayoutError> {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        self.height_range(font, &chars, 0, len)
    }
}
