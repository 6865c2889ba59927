use crate::font::{Font, GlyphMetrics};

use super::renderer::{AdvanceMode, FontRenderer, LayoutError, check_range, walk_range};
use super::{BatchBackend, Vertex};

/// Starting room for this many glyphs; the buffer grows past it freely.
const INITIAL_GLYPH_CAPACITY: usize = 512;

/// Batched font renderer. Accumulates two triangles per visible glyph into
/// a reusable vertex buffer while walking the string, then submits the
/// whole batch through the backend in a single draw. Compared to
/// [`super::ImmediateFontRenderer`] this touches backend state once per
/// string instead of once per glyph.
///
/// The buffer is cleared at the start of every draw call; nothing
/// accumulates across calls.
pub struct BufferedFontRenderer<B> {
    backend: B,
    batch: Vec<Vertex>,
    scale_x: f32,
    scale_y: f32,
    advance_mode: AdvanceMode,
}

impl<B: BatchBackend> BufferedFontRenderer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            batch: Vec::with_capacity(INITIAL_GLYPH_CAPACITY * 6),
            scale_x: 1.0,
            scale_y: 1.0,
            advance_mode: AdvanceMode::default(),
        }
    }

    pub fn with_advance_mode(backend: B, advance_mode: AdvanceMode) -> Self {
        Self {
            advance_mode,
            ..Self::new(backend)
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl<B: BatchBackend> FontRenderer for BufferedFontRenderer<B> {
    /// Appends the glyph's two triangles to the batch. The actual draw
    /// happens once, at the end of [`FontRenderer::draw_range`].
    fn draw_glyph(&mut self, _font: &dyn Font, glyph: &GlyphMetrics, x: f32, y: f32) {
        let x1 = x + glyph.render_origin_x * self.scale_x;
        let y1 = y + glyph.render_origin_y * self.scale_y;
        let x2 = x1 + glyph.render_width * self.scale_x;
        let y2 = y1 + glyph.render_height * self.scale_y;

        let (u, v, u2, v2) = (glyph.u, glyph.v, glyph.u2, glyph.v2);

        // x1, y1                x2, y1
        // x----------|---------x
        // |                    |
        // |                    |
        // x----------|---------x
        // x1, y2                x2, y2
        self.batch.extend_from_slice(&[
            Vertex { position: [x1, y1], uv: [u, v] },
            Vertex { position: [x2, y1], uv: [u2, v] },
            Vertex { position: [x2, y2], uv: [u2, v2] },
            Vertex { position: [x2, y2], uv: [u2, v2] },
            Vertex { position: [x1, y2], uv: [u, v2] },
            Vertex { position: [x1, y1], uv: [u, v] },
        ]);
    }

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

        self.batch.clear();
        let max_x = walk_range(self, font, chars, x, y, start, end);
        self.backend.draw_batch(font.texture(), &self.batch);

        Ok(max_x)
    }

    fn scale_x(&self) -> f32 {
        self.scale_x
    }

    fn scale_y(&self) -> f32 {
        self.scale_y
    }

    fn set_scale_x(&mut self, scale_x: f32) {
        self.scale_x = scale_x;
    }

    fn set_scale_y(&mut self, scale_y: f32) {
        self.scale_y = scale_y;
    }

    fn advance_mode(&self) -> AdvanceMode {
        self.advance_mode
    }
}
